// SPDX-License-Identifier: MPL-2.0
//! Image navigation state: the active sequence and the current position.
//!
//! Unlike a carousel, navigation is clamped: stepping past either end of the
//! sequence leaves the position unchanged.

use crate::directory_scanner::ImageSequence;
use std::path::Path;

/// Navigation state information for UI rendering.
///
/// A read-only snapshot the toolbar uses to enable or disable its buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether `next` would move.
    pub has_next: bool,
    /// Whether `previous` would move.
    pub has_previous: bool,
    /// Current position in the sequence (0-indexed), if any.
    pub current_index: Option<usize>,
    /// Total number of images in the sequence.
    pub total_count: usize,
}

/// The active image sequence and which entry of it is current.
///
/// Invariant: `current_index` is `Some` exactly when the sequence is
/// non-empty, and then always in bounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    sequence: ImageSequence,
    current_index: Option<usize>,
}

impl NavigationState {
    /// Creates a new empty `NavigationState`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sequence wholesale and moves to its first entry.
    ///
    /// Returns the new current path, or `None` if the sequence is empty.
    pub fn replace(&mut self, sequence: ImageSequence) -> Option<&Path> {
        self.current_index = if sequence.is_empty() { None } else { Some(0) };
        self.sequence = sequence;
        self.current_path()
    }

    /// Makes `path` current if it belongs to the sequence.
    ///
    /// Returns its index, or `None` (leaving the position unchanged) if the
    /// path is not listed.
    pub fn select_path(&mut self, path: &Path) -> Option<usize> {
        let index = self.sequence.position(path)?;
        self.current_index = Some(index);
        Some(index)
    }

    /// Moves one entry forward. Returns `None` at the last entry or when
    /// empty, leaving the position unchanged.
    pub fn step_next(&mut self) -> Option<&Path> {
        let index = self.current_index?;
        if index + 1 >= self.sequence.len() {
            return None;
        }
        self.current_index = Some(index + 1);
        self.current_path()
    }

    /// Moves one entry back. Returns `None` at the first entry or when
    /// empty, leaving the position unchanged.
    pub fn step_previous(&mut self) -> Option<&Path> {
        let index = self.current_index?;
        if index == 0 {
            return None;
        }
        self.current_index = Some(index - 1);
        self.current_path()
    }

    /// Returns the path of the current entry, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.current_index.and_then(|index| self.sequence.get(index))
    }

    /// Returns the current index in the sequence, if set.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The folder the active sequence was listed from, even if it held no
    /// images. `None` before any folder has been selected.
    #[must_use]
    pub fn active_folder(&self) -> Option<&Path> {
        let folder = self.sequence.folder();
        (!folder.as_os_str().is_empty()).then_some(folder)
    }

    #[must_use]
    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    /// Returns the total number of images in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Checks if no image is current.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current_index.is_none()
    }

    /// Checks if the current image is the first in the sequence.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_index == Some(0)
    }

    /// Checks if the current image is the last in the sequence.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        matches!(self.current_index, Some(index) if index + 1 == self.sequence.len())
    }

    /// Returns a snapshot for UI rendering.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: self.current_index.is_some() && !self.is_at_last(),
            has_previous: self.current_index.is_some() && !self.is_at_first(),
            current_index: self.current_index,
            total_count: self.sequence.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sequence_of(names: &[&str]) -> ImageSequence {
        ImageSequence::from_paths(
            PathBuf::from("/data"),
            names.iter().map(|n| PathBuf::from("/data").join(n)).collect(),
        )
    }

    #[test]
    fn new_state_is_empty() {
        let nav = NavigationState::new();
        assert!(nav.is_empty());
        assert_eq!(nav.len(), 0);
        assert_eq!(nav.current_path(), None);
        assert_eq!(nav.active_folder(), None);
    }

    #[test]
    fn replace_moves_to_first_entry() {
        let mut nav = NavigationState::new();
        let first = nav.replace(sequence_of(&["a.png", "b.png"])).map(Path::to_path_buf);

        assert_eq!(first, Some(PathBuf::from("/data/a.png")));
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.active_folder(), Some(Path::new("/data")));
    }

    #[test]
    fn replace_with_empty_sequence_clears_position() {
        let mut nav = NavigationState::new();
        nav.replace(sequence_of(&["a.png"]));
        assert!(nav.replace(sequence_of(&[])).is_none());

        assert!(nav.is_empty());
        assert_eq!(nav.active_folder(), Some(Path::new("/data")));
    }

    #[test]
    fn stepping_is_clamped_at_both_ends() {
        let mut nav = NavigationState::new();
        nav.replace(sequence_of(&["a.png", "b.png", "c.png"]));

        assert!(nav.step_previous().is_none());
        assert_eq!(nav.current_index(), Some(0));

        assert!(nav.step_next().is_some());
        assert!(nav.step_next().is_some());
        assert_eq!(nav.current_index(), Some(2));

        assert!(nav.step_next().is_none());
        assert_eq!(nav.current_index(), Some(2));
    }

    #[test]
    fn stepping_on_empty_state_does_nothing() {
        let mut nav = NavigationState::new();
        assert!(nav.step_next().is_none());
        assert!(nav.step_previous().is_none());
        assert_eq!(nav.current_index(), None);
    }

    #[test]
    fn select_path_updates_index_only_for_listed_paths() {
        let mut nav = NavigationState::new();
        nav.replace(sequence_of(&["a.png", "b.png", "c.png"]));

        assert_eq!(nav.select_path(Path::new("/data/c.png")), Some(2));
        assert_eq!(nav.select_path(Path::new("/data/zzz.png")), None);
        assert_eq!(nav.current_index(), Some(2));
    }

    #[test]
    fn info_reflects_boundaries() {
        let mut nav = NavigationState::new();
        nav.replace(sequence_of(&["a.png", "b.png"]));

        let info = nav.info();
        assert!(info.has_next);
        assert!(!info.has_previous);
        assert_eq!(info.total_count, 2);

        nav.step_next();
        let info = nav.info();
        assert!(!info.has_next);
        assert!(info.has_previous);
        assert_eq!(info.current_index, Some(1));
    }

    #[test]
    fn single_entry_is_both_first_and_last() {
        let mut nav = NavigationState::new();
        nav.replace(sequence_of(&["only.png"]));
        assert!(nav.is_at_first());
        assert!(nav.is_at_last());
        assert_eq!(nav.info(), NavigationInfo {
            has_next: false,
            has_previous: false,
            current_index: Some(0),
            total_count: 1,
        });
    }
}
