// SPDX-License-Identifier: MPL-2.0
//! Commands accepted by the viewer and the effects they report.

use super::scan::ScanRequest;
use crate::domain::search::SearchQuery;
use std::path::PathBuf;

/// One user action, independent of how the hosting UI delivers it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A tree click: folder or file, decided by what exists on disk.
    Select(PathBuf),
    SelectFolder(PathBuf),
    SelectFile(PathBuf),
    /// Startup root from the command line.
    SetRoot(PathBuf),
    Previous,
    Next,
    /// Zoom by the configured zoom-in factor.
    ZoomIn,
    /// Zoom by the configured zoom-out factor.
    ZoomOut,
    /// Zoom by an explicit multiplier.
    Zoom(f64),
    /// Rotate 90° clockwise.
    Rotate,
    /// Fit to the display's current viewport.
    FitToWindow,
    Search(SearchQuery),
}

/// What changed as a result of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// A different image became current (or the same one was reloaded).
    ImageChanged,
    /// The current image was redrawn with a new transform.
    Redrawn,
    /// The state became empty.
    Emptied,
    /// Only the status line changed.
    StatusChanged,
}

/// Outcome of preparing a selection.
#[derive(Debug)]
pub enum Selection {
    /// The selection was handled without traversing a folder.
    Done(Effect),
    /// A folder traversal is required; run it and pass the outcome to
    /// [`Viewer::finish_scan`](super::Viewer::finish_scan).
    Scan(ScanRequest),
}
