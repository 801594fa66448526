// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the viewer core to the iced widgets: component
//! messages become viewer commands, the viewer draws into a retained
//! [`Surface`], and folder traversals run on a blocking worker.

mod message;
pub mod paths;
mod subscription;
pub mod surface;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::viewer::{Command, DisplayState, Viewer};
use crate::config::{self, Config, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::i18n::fluent::I18n;
use crate::infrastructure::image_rs::ImageRsBackend;
use crate::ui::{folder_tree, search_bar};
use iced::{window, Element, Size, Subscription, Task};
use std::fmt;
use std::path::{Path, PathBuf};
use surface::Surface;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: Viewer<ImageRsBackend>,
    surface: Surface,
    tree: folder_tree::State,
    search: search_bar::State,
    /// Folder of the traversal in flight.
    scanning: Option<PathBuf>,
    /// i18n key of a warning raised while loading settings.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_path", &self.viewer.current_path())
            .field("scanning", &self.scanning)
            .finish_non_exhaustive()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Folder shown at the top of the tree when no usable path was given.
fn fallback_root(config: &Config) -> PathBuf {
    config
        .display
        .default_root
        .clone()
        .filter(|root| root.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/"))
}

/// Tree root for a startup path: the folder itself, or a file's folder.
fn tree_root_for(path: &Path) -> Option<PathBuf> {
    if path.is_dir() {
        Some(path.to_path_buf())
    } else if path.is_file() {
        path.parent().map(Path::to_path_buf)
    } else {
        None
    }
}

impl App {
    /// Loads settings and builds the initial state; the startup folder, if
    /// any, is traversed in the background.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let backend = ImageRsBackend::new(config.display.effective_scaling_filter());
        let viewer = Viewer::new(backend).with_zoom_factors(
            config.display.effective_zoom_in_factor(),
            config.display.effective_zoom_out_factor(),
        );

        let mut app = App {
            i18n,
            viewer,
            surface: Surface::default(),
            tree: folder_tree::State::new(),
            search: search_bar::State::default(),
            scanning: None,
            notice: config_warning,
        };
        let _ = update::handle_window_resized(
            &mut app.update_context(),
            Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        );

        let startup_path = flags
            .root
            .map(PathBuf::from)
            .or_else(|| config.display.default_root.clone());

        let tree_root = startup_path
            .as_deref()
            .and_then(tree_root_for)
            .unwrap_or_else(|| fallback_root(config));
        app.tree.set_root(tree_root);

        let task = match startup_path {
            Some(path) => update::dispatch(&mut app.update_context(), Command::SetRoot(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            viewer: &mut self.viewer,
            surface: &mut self.surface,
            tree: &mut self.tree,
            search: &mut self.search,
            scanning: &mut self.scanning,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.current_path().and_then(Path::file_name) {
            Some(name) => format!("{} - {app_name}", name.to_string_lossy()),
            None => app_name,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Tree(tree_message) => update::handle_tree_message(&mut ctx, tree_message),
            Message::Toolbar(toolbar_message) => {
                update::dispatch(&mut ctx, Command::from(toolbar_message))
            }
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::ImagePane(pane_message) => {
                update::handle_image_pane_message(&mut ctx, pane_message)
            }
            Message::Shortcut(command) => update::dispatch(&mut ctx, command),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::ScanCompleted(outcome) => update::handle_scan_completed(&mut ctx, outcome),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let transform = match self.viewer.display_state() {
            DisplayState::Loaded { transform, .. } => Some(*transform),
            DisplayState::Empty | DisplayState::Unloadable(_) => None,
        };

        view::view(view::ViewContext {
            i18n: &self.i18n,
            surface: &self.surface,
            tree: &self.tree,
            search: &self.search,
            navigation: self.viewer.navigation_info(),
            transform,
            scanning: self.scanning.as_deref(),
            notice: self.notice.as_deref(),
        })
    }
}
