// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Folder traversals never run on the UI thread: selections that need one
//! come back from the viewer as a [`ScanRequest`], which is run on a
//! blocking worker and fed back as [`Message::ScanCompleted`].

use super::surface::Surface;
use super::Message;
use crate::application::viewer::{Command, ScanOutcome, ScanRequest, Selection, Viewer};
use crate::config::TREE_PANE_WIDTH;
use crate::error::Error;
use crate::infrastructure::image_rs::ImageRsBackend;
use crate::ui::design_tokens::sizing;
use crate::ui::{folder_tree, image_pane, search_bar};
use iced::{Size, Task};
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub viewer: &'a mut Viewer<ImageRsBackend>,
    pub surface: &'a mut Surface,
    pub tree: &'a mut folder_tree::State,
    pub search: &'a mut search_bar::State,
    /// Folder of the traversal in flight, for the status line.
    pub scanning: &'a mut Option<PathBuf>,
}

/// Routes a command to the viewer, moving folder traversals off-thread.
pub fn dispatch(ctx: &mut UpdateContext<'_>, command: Command) -> Task<Message> {
    let selection = match command {
        Command::Select(path) => ctx.viewer.prepare_select(&path, ctx.surface),
        Command::SelectFolder(path) => ctx.viewer.prepare_select_folder(&path, ctx.surface),
        Command::SelectFile(path) => ctx.viewer.prepare_select_file(&path, ctx.surface),
        Command::SetRoot(path) => ctx.viewer.prepare_set_root(&path, ctx.surface),
        other => {
            ctx.viewer.handle(other, ctx.surface);
            return Task::none();
        }
    };
    run_selection(ctx, selection)
}

pub fn run_selection(ctx: &mut UpdateContext<'_>, selection: Selection) -> Task<Message> {
    match selection {
        Selection::Done(_) => {
            if !ctx.viewer.is_scanning() {
                *ctx.scanning = None;
            }
            Task::none()
        }
        Selection::Scan(request) => {
            *ctx.scanning = Some(request.folder().to_path_buf());
            spawn_scan(request)
        }
    }
}

fn spawn_scan(request: ScanRequest) -> Task<Message> {
    let ticket = request.ticket();
    let folder = request.folder().to_path_buf();
    let target = request.target().map(PathBuf::from);
    tracing::debug!(folder = %folder.display(), "scan started");

    Task::perform(
        async move {
            match tokio::task::spawn_blocking(move || request.run()).await {
                Ok(outcome) => outcome,
                Err(join_error) => ScanOutcome {
                    ticket,
                    folder,
                    target,
                    result: Err(Error::Io(join_error.to_string())),
                },
            }
        },
        Message::ScanCompleted,
    )
}

pub fn handle_scan_completed(ctx: &mut UpdateContext<'_>, outcome: ScanOutcome) -> Task<Message> {
    tracing::debug!(folder = %outcome.folder.display(), "scan finished");
    ctx.viewer.finish_scan(outcome, ctx.surface);
    if !ctx.viewer.is_scanning() {
        *ctx.scanning = None;
    }
    Task::none()
}

pub fn handle_tree_message(
    ctx: &mut UpdateContext<'_>,
    message: folder_tree::Message,
) -> Task<Message> {
    match ctx.tree.handle(message) {
        folder_tree::Effect::None => Task::none(),
        folder_tree::Effect::Select(path) => dispatch(ctx, Command::Select(path)),
    }
}

pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search_bar::Message,
) -> Task<Message> {
    match ctx.search.handle(message) {
        search_bar::Effect::None => Task::none(),
        search_bar::Effect::Search(query) => dispatch(ctx, Command::Search(query)),
    }
}

pub fn handle_image_pane_message(
    ctx: &mut UpdateContext<'_>,
    message: image_pane::Message,
) -> Task<Message> {
    match message {
        image_pane::Message::ViewportChanged { width, height } => {
            ctx.surface.set_viewport(width, height);
        }
    }
    Task::none()
}

/// Estimates the image pane size from the window size until the pane
/// reports its own bounds.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.surface.set_viewport(
        size.width - TREE_PANE_WIDTH,
        size.height - sizing::CHROME_HEIGHT,
    );
    Task::none()
}
