// SPDX-License-Identifier: MPL-2.0
//! What the viewer reports back to the user.
//!
//! The viewer never formats user-facing text itself. It emits a [`Status`]
//! for the status line and a [`Placeholder`] when no bitmap can be shown;
//! the presentation layer localizes both.

use crate::domain::search::Orientation;
use std::path::PathBuf;

/// Content of the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// An entry of the sequence is current.
    Showing {
        file_name: String,
        /// One-based position in the sequence.
        position: usize,
        total: usize,
    },
    /// A selected folder or file does not exist.
    PathNotFound(PathBuf),
    /// A folder exists but contains no qualifying images.
    NoImages(PathBuf),
    /// A path exists but could not be traversed as a folder.
    Unreadable(PathBuf),
    /// Echo of the search bar criteria.
    SearchCriteria {
        person_id: String,
        orientation: Orientation,
    },
}

impl Status {
    /// Returns the i18n message key for this status.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Status::Showing { .. } => "status-showing",
            Status::PathNotFound(_) => "status-path-not-found",
            Status::NoImages(_) => "status-no-images",
            Status::Unreadable(_) => "status-unreadable",
            Status::SearchCriteria { .. } => "status-search-criteria",
        }
    }
}

/// Shown in the image pane instead of a bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// The current entry could not be decoded.
    CannotLoad(PathBuf),
    /// The current transform would produce a bitmap too large to render.
    TooLarge { width: u64, height: u64 },
}

impl Placeholder {
    /// Returns the i18n message key for this placeholder.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Placeholder::CannotLoad(_) => "placeholder-cannot-load",
            Placeholder::TooLarge { .. } => "placeholder-too-large",
        }
    }
}
