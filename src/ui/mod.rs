// SPDX-License-Identifier: MPL-2.0
//! UI components: each exposes a `Message`, a `view`, and where it keeps
//! state, a `State` whose `handle` returns an `Effect` for the app.

pub mod design_tokens;
pub mod folder_tree;
pub mod image_pane;
pub mod search_bar;
pub mod status_line;
pub mod toolbar;
