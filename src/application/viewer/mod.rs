// SPDX-License-Identifier: MPL-2.0
//! Navigation and view-transform state machine.
//!
//! [`Viewer`] tracks which image of the active sequence is current and how
//! it is displayed. It is driven by [`Command`] values and reports through
//! the [`Display`] port; decoding and transforms go through a
//! [`BitmapBackend`]. Nothing in here knows about iced.
//!
//! # States
//!
//! - no sequence, or an empty one: [`DisplayState::Empty`]
//! - current entry decoded: [`DisplayState::Loaded`], holding the original
//!   bitmap and the transform applied to it on every redraw
//! - current entry failed to decode: [`DisplayState::Unloadable`];
//!   navigation keeps working, transforms are ignored
//!
//! Loading any image (folder change, file change, previous, next) resets
//! the transform to 100% and 0°.

mod command;
mod scan;

pub use command::{Command, Effect, Selection};
pub use scan::{ScanOutcome, ScanRequest, ScanTicket};

use crate::application::port::{BitmapBackend, Display};
use crate::application::query::{NavigationInfo, NavigationState};
use crate::config::{DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR};
use crate::domain::search::SearchQuery;
use crate::domain::status::{Placeholder, Status};
use crate::domain::view::{fit_scale, ViewTransform};
use crate::error::Error;
use scan::ScanTracker;
use std::path::{Path, PathBuf};

/// What the image pane currently holds.
#[derive(Debug, Clone)]
pub enum DisplayState<Bitmap> {
    Empty,
    /// The current entry could not be decoded.
    Unloadable(PathBuf),
    Loaded {
        /// Decoded bitmap, never modified after decode.
        original: Bitmap,
        transform: ViewTransform,
    },
}

impl<Bitmap> DisplayState<Bitmap> {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, DisplayState::Loaded { .. })
    }
}

/// The viewer core, generic over how bitmaps are decoded.
pub struct Viewer<B: BitmapBackend> {
    backend: B,
    navigation: NavigationState,
    display: DisplayState<B::Bitmap>,
    scans: ScanTracker,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
}

impl<B: BitmapBackend> Viewer<B> {
    /// Creates an empty viewer with the default zoom factors.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            navigation: NavigationState::new(),
            display: DisplayState::Empty,
            scans: ScanTracker::default(),
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
        }
    }

    /// Overrides the multipliers used by [`Command::ZoomIn`] and
    /// [`Command::ZoomOut`].
    #[must_use]
    pub fn with_zoom_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.zoom_in_factor = zoom_in;
        self.zoom_out_factor = zoom_out;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigation_info(&self) -> NavigationInfo {
        self.navigation.info()
    }

    pub fn display_state(&self) -> &DisplayState<B::Bitmap> {
        &self.display
    }

    /// Transform of the current image; the default when nothing is loaded.
    pub fn view_transform(&self) -> ViewTransform {
        match &self.display {
            DisplayState::Loaded { transform, .. } => *transform,
            DisplayState::Empty | DisplayState::Unloadable(_) => ViewTransform::default(),
        }
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.navigation.current_path()
    }

    /// True when no image is current.
    pub fn is_empty(&self) -> bool {
        self.navigation.is_empty()
    }

    /// True while a folder traversal handed out by a `prepare_*` call has
    /// not been finished.
    pub fn is_scanning(&self) -> bool {
        self.scans.is_pending()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // =========================================================================
    // Command dispatch
    // =========================================================================

    /// Handles a command synchronously, running any folder traversal inline.
    pub fn handle(&mut self, command: Command, display: &mut impl Display<B::Bitmap>) -> Effect {
        match command {
            Command::Select(path) => self.select(&path, display),
            Command::SelectFolder(path) => self.select_folder(&path, display),
            Command::SelectFile(path) => self.select_file(&path, display),
            Command::SetRoot(path) => self.set_root(&path, display),
            Command::Previous => self.previous(display),
            Command::Next => self.next(display),
            Command::ZoomIn => self.zoom_in(display),
            Command::ZoomOut => self.zoom_out(display),
            Command::Zoom(multiplier) => self.zoom(multiplier, display),
            Command::Rotate => self.rotate(display),
            Command::FitToWindow => match display.viewport_size() {
                Some((width, height)) => self.fit_to_window(width, height, display),
                None => Effect::None,
            },
            Command::Search(query) => self.search(query, display),
        }
    }

    /// Selects a tree entry: a folder or a file, decided by what is on disk.
    pub fn select(&mut self, path: &Path, display: &mut impl Display<B::Bitmap>) -> Effect {
        let selection = self.prepare_select(path, display);
        self.complete(selection, display)
    }

    /// Opens the startup root, a folder or a single image in one.
    pub fn set_root(&mut self, path: &Path, display: &mut impl Display<B::Bitmap>) -> Effect {
        let selection = self.prepare_set_root(path, display);
        self.complete(selection, display)
    }

    /// Activates `path` as the folder and shows its first image.
    pub fn select_folder(&mut self, path: &Path, display: &mut impl Display<B::Bitmap>) -> Effect {
        let selection = self.prepare_select_folder(path, display);
        self.complete(selection, display)
    }

    /// Shows `path`, activating its parent folder first if needed.
    pub fn select_file(&mut self, path: &Path, display: &mut impl Display<B::Bitmap>) -> Effect {
        let selection = self.prepare_select_file(path, display);
        self.complete(selection, display)
    }

    pub fn zoom_in(&mut self, display: &mut impl Display<B::Bitmap>) -> Effect {
        self.zoom(self.zoom_in_factor, display)
    }

    pub fn zoom_out(&mut self, display: &mut impl Display<B::Bitmap>) -> Effect {
        self.zoom(self.zoom_out_factor, display)
    }

    fn complete(&mut self, selection: Selection, display: &mut impl Display<B::Bitmap>) -> Effect {
        match selection {
            Selection::Done(effect) => effect,
            Selection::Scan(request) => {
                let outcome = request.run();
                self.finish_scan(outcome, display)
            }
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Prepares a tree click: a directory selects the folder, anything else
    /// selects the file.
    pub fn prepare_select(
        &mut self,
        path: &Path,
        display: &mut impl Display<B::Bitmap>,
    ) -> Selection {
        if path.is_dir() {
            self.prepare_select_folder(path, display)
        } else {
            self.prepare_select_file(path, display)
        }
    }

    /// Prepares the startup root. A folder is activated at its first image;
    /// a file activates its folder positioned on that file. A missing root
    /// only reports the problem.
    pub fn prepare_set_root(
        &mut self,
        path: &Path,
        display: &mut impl Display<B::Bitmap>,
    ) -> Selection {
        if path.is_file() {
            self.prepare_select_file(path, display)
        } else {
            self.prepare_select_folder(path, display)
        }
    }

    /// Prepares selecting a folder. Nothing changes until the returned scan
    /// has been finished.
    pub fn prepare_select_folder(
        &mut self,
        path: &Path,
        display: &mut impl Display<B::Bitmap>,
    ) -> Selection {
        match self.begin_scan(path, None) {
            Ok(request) => {
                tracing::debug!(folder = %path.display(), "folder selected");
                Selection::Scan(request)
            }
            Err(_) => Selection::Done(self.report_missing(path, display)),
        }
    }

    /// Starts a traversal of `folder` that will make `target` current once
    /// applied, superseding any traversal in flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if `folder` does not exist; nothing
    /// is superseded in that case.
    pub fn begin_scan(
        &mut self,
        folder: &Path,
        target: Option<PathBuf>,
    ) -> crate::error::Result<ScanRequest> {
        if !folder.exists() {
            return Err(Error::PathNotFound(folder.to_path_buf()));
        }
        Ok(self.scans.issue(folder.to_path_buf(), target))
    }

    /// Prepares selecting a file. A file in the active folder only moves the
    /// position; a file elsewhere rebuilds the sequence for its folder first.
    pub fn prepare_select_file(
        &mut self,
        path: &Path,
        display: &mut impl Display<B::Bitmap>,
    ) -> Selection {
        if !path.exists() {
            return Selection::Done(self.report_missing(path, display));
        }
        // Only the folder is resolved: a symlinked file is listed under its
        // link path, not its target's.
        let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
            return Selection::Done(self.report_missing(path, display));
        };
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        let folder = parent.canonicalize().unwrap_or_else(|_| parent.to_path_buf());
        let path = folder.join(file_name);

        if self.navigation.active_folder() == Some(folder.as_path()) {
            self.scans.abandon();
            return Selection::Done(match self.navigation.select_path(&path) {
                Some(_) => self.load_current(display),
                None => {
                    tracing::debug!(file = %path.display(), "file not in active sequence");
                    Effect::None
                }
            });
        }

        Selection::Scan(self.scans.issue(folder, Some(path)))
    }

    /// Applies a finished traversal.
    ///
    /// Outcomes of superseded requests are discarded without touching any
    /// state.
    pub fn finish_scan(
        &mut self,
        outcome: ScanOutcome,
        display: &mut impl Display<B::Bitmap>,
    ) -> Effect {
        if !self.scans.accepts(outcome.ticket) {
            tracing::debug!(folder = %outcome.folder.display(), "discarding stale scan result");
            return Effect::None;
        }
        self.scans.settle(outcome.ticket);

        let sequence = match outcome.result {
            Ok(sequence) => sequence,
            Err(Error::Cancelled) => return Effect::None,
            Err(Error::PathNotFound(path)) => return self.report_missing(&path, display),
            Err(err) => {
                tracing::warn!(folder = %outcome.folder.display(), error = %err, "cannot list folder");
                display.set_status(Status::Unreadable(outcome.folder));
                return Effect::StatusChanged;
            }
        };

        if sequence.is_empty() {
            let folder = sequence.folder().to_path_buf();
            tracing::info!(folder = %folder.display(), "no images in folder");
            self.navigation.replace(sequence);
            self.display = DisplayState::Empty;
            display.clear();
            display.set_status(Status::NoImages(folder));
            return Effect::Emptied;
        }

        tracing::info!(
            folder = %sequence.folder().display(),
            count = sequence.len(),
            "folder activated"
        );
        self.navigation.replace(sequence);

        if let Some(target) = outcome.target {
            if self.navigation.select_path(&target).is_none() {
                tracing::warn!(
                    file = %target.display(),
                    "selected file missing from rebuilt sequence, showing first entry"
                );
            }
        }

        self.load_current(display)
    }

    fn report_missing(&mut self, path: &Path, display: &mut impl Display<B::Bitmap>) -> Effect {
        tracing::info!(path = %path.display(), "path does not exist");
        display.set_status(Status::PathNotFound(path.to_path_buf()));
        Effect::StatusChanged
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Moves to the previous image; no-op on the first entry or when empty.
    pub fn previous(&mut self, display: &mut impl Display<B::Bitmap>) -> Effect {
        if self.navigation.step_previous().is_none() {
            return Effect::None;
        }
        self.load_current(display)
    }

    /// Moves to the next image; no-op on the last entry or when empty.
    pub fn next(&mut self, display: &mut impl Display<B::Bitmap>) -> Effect {
        if self.navigation.step_next().is_none() {
            return Effect::None;
        }
        self.load_current(display)
    }

    /// Decodes the current entry with a fresh transform and shows it.
    fn load_current(&mut self, display: &mut impl Display<B::Bitmap>) -> Effect {
        let Some(path) = self.navigation.current_path().map(Path::to_path_buf) else {
            self.display = DisplayState::Empty;
            display.clear();
            return Effect::Emptied;
        };

        match self.backend.decode(&path) {
            Ok(original) => {
                self.display = DisplayState::Loaded {
                    original,
                    transform: ViewTransform::default(),
                };
                self.redraw(display);
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "cannot load image");
                self.display = DisplayState::Unloadable(path.clone());
                display.show_placeholder(Placeholder::CannotLoad(path.clone()));
            }
        }

        display.set_status(self.position_status(&path));
        Effect::ImageChanged
    }

    fn position_status(&self, path: &Path) -> Status {
        Status::Showing {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            position: self.navigation.current_index().map_or(0, |index| index + 1),
            total: self.navigation.len(),
        }
    }

    // =========================================================================
    // View transform
    // =========================================================================

    /// Multiplies the scale. No-op without a loaded image or for a
    /// multiplier that is not a positive finite number.
    pub fn zoom(&mut self, multiplier: f64, display: &mut impl Display<B::Bitmap>) -> Effect {
        let DisplayState::Loaded { transform, .. } = &mut self.display else {
            return Effect::None;
        };
        let Some(scale) = transform.scale.multiplied_by(multiplier) else {
            tracing::debug!(multiplier, "ignoring invalid zoom multiplier");
            return Effect::None;
        };
        transform.scale = scale;
        self.redraw(display);
        Effect::Redrawn
    }

    /// Rotates 90° clockwise. No-op without a loaded image.
    pub fn rotate(&mut self, display: &mut impl Display<B::Bitmap>) -> Effect {
        let DisplayState::Loaded { transform, .. } = &mut self.display else {
            return Effect::None;
        };
        transform.rotation = transform.rotation.rotate_clockwise();
        self.redraw(display);
        Effect::Redrawn
    }

    /// Scales the image so its rotated bounding box fits `width` × `height`.
    /// Rotation is left unchanged. No-op without a loaded image.
    pub fn fit_to_window(
        &mut self,
        width: u32,
        height: u32,
        display: &mut impl Display<B::Bitmap>,
    ) -> Effect {
        let DisplayState::Loaded {
            original,
            transform,
        } = &mut self.display
        else {
            return Effect::None;
        };
        let image_size = self.backend.size(original);
        let Some(scale) = fit_scale(image_size, (width, height), transform.rotation) else {
            return Effect::None;
        };
        transform.scale = scale;
        self.redraw(display);
        Effect::Redrawn
    }

    /// Re-derives the display bitmap from the original and current transform.
    fn redraw(&self, display: &mut impl Display<B::Bitmap>) {
        let DisplayState::Loaded {
            original,
            transform,
        } = &self.display
        else {
            return;
        };

        match self.backend.apply_transform(original, *transform) {
            Ok(bitmap) => display.show(&bitmap),
            Err(Error::RenderTooLarge { width, height }) => {
                tracing::warn!(width, height, "transformed image exceeds pixel budget");
                display.show_placeholder(Placeholder::TooLarge { width, height });
            }
            Err(err) => {
                let path = self.current_path().map(Path::to_path_buf).unwrap_or_default();
                tracing::warn!(file = %path.display(), error = %err, "cannot render image");
                display.show_placeholder(Placeholder::CannotLoad(path));
            }
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Reports the search criteria back on the status line. No filtering is
    /// performed.
    pub fn search(&mut self, query: SearchQuery, display: &mut impl Display<B::Bitmap>) -> Effect {
        tracing::info!(
            person_id = %query.person_id,
            orientation = %query.orientation,
            "search requested"
        );
        display.set_status(Status::SearchCriteria {
            person_id: query.person_id,
            orientation: query.orientation,
        });
        Effect::StatusChanged
    }
}
