// SPDX-License-Identifier: MPL-2.0
//! `reid_lens` is an image browser for person re-identification datasets,
//! built with the Iced GUI framework.
//!
//! A folder tree selects the active folder; the image pane steps through
//! its images in file-name order with zoom, clockwise rotation and
//! fit-to-window. The navigation and view-transform state machine lives in
//! [`application::viewer`] and is independent of the GUI toolkit.

#![doc(html_root_url = "https://docs.rs/reid_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
