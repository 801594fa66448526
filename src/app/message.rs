// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::viewer::{Command, ScanOutcome};
use crate::ui::{folder_tree, image_pane, search_bar, toolbar};
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Tree(folder_tree::Message),
    Toolbar(toolbar::Message),
    Search(search_bar::Message),
    ImagePane(image_pane::Message),
    /// A keyboard shortcut mapped to a viewer command.
    Shortcut(Command),
    WindowResized(Size),
    /// Result from off-thread folder traversal.
    ScanCompleted(ScanOutcome),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional dataset folder (or image) to open on startup.
    pub root: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `REID_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
