// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module walks a folder subtree for allow-listed image formats and
//! returns them as an [`ImageSequence`] sorted by full path string, so that
//! entries from different subfolders interleave by path order rather than
//! by visit order.

use crate::domain::media::is_supported_image;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use walkdir::WalkDir;

/// Sorted list of image paths below one folder.
///
/// Paths are absolute, unique, and ascending by byte-wise comparison of the
/// full path. The sequence is rebuilt wholesale when the folder changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSequence {
    folder: PathBuf,
    entries: Vec<PathBuf>,
}

impl ImageSequence {
    /// Creates an empty sequence not bound to any folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from already collected paths, sorting them and
    /// dropping duplicates.
    pub fn from_paths(folder: PathBuf, mut entries: Vec<PathBuf>) -> Self {
        sort_by_path_string(&mut entries);
        entries.dedup();
        Self { folder, entries }
    }

    /// The folder this sequence was listed from.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    /// Returns the position of `path` in the sequence.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.entries
            .binary_search_by(|probe| probe.as_os_str().cmp(path.as_os_str()))
            .ok()
    }

    /// Returns the total number of images in the sequence.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

/// Cooperative cancellation flag shared with a running traversal.
///
/// Clones observe the same flag. A traversal checks it between entries and
/// stops with [`Error::Cancelled`] once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Lists every allow-listed image below `folder`, recursively.
///
/// Returns [`Error::PathNotFound`] if `folder` does not exist and
/// [`Error::Io`] if it cannot be read. Unreadable entries below it are
/// skipped. An existing folder without images yields an empty sequence,
/// not an error.
pub fn list(folder: &Path) -> Result<ImageSequence> {
    list_cancellable(folder, &CancelToken::new())
}

/// Same as [`list`], but stops early with [`Error::Cancelled`] when
/// `cancel` is set.
pub fn list_cancellable(folder: &Path, cancel: &CancelToken) -> Result<ImageSequence> {
    if !folder.exists() {
        return Err(Error::PathNotFound(folder.to_path_buf()));
    }
    let root = folder.canonicalize()?;
    if !root.is_dir() {
        return Err(Error::Io(format!("{} is not a directory", root.display())));
    }

    tracing::debug!(folder = %root.display(), "listing images");
    let mut images = Vec::new();

    // Symlinked directories are not descended into; symlinked files count
    // when their target is a regular file.
    for entry in WalkDir::new(&root).follow_links(false) {
        if cancel.is_cancelled() {
            tracing::debug!(folder = %root.display(), "listing cancelled");
            return Err(Error::Cancelled);
        }

        let entry = match entry {
            Ok(entry) => entry,
            // The folder itself cannot be read.
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && is_supported_image(path) {
            images.push(entry.into_path());
        }
    }

    let sequence = ImageSequence::from_paths(root, images);
    tracing::debug!(
        folder = %sequence.folder().display(),
        count = sequence.len(),
        "listing finished"
    );
    Ok(sequence)
}

/// Sorts paths by their full string form rather than component-wise.
fn sort_by_path_string(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn canonical(dir: &Path) -> PathBuf {
        dir.canonicalize().expect("failed to canonicalize temp dir")
    }

    #[test]
    fn list_keeps_only_allowed_extensions_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "c.gif");
        create_test_image(temp_dir.path(), "a.png");
        create_test_image(temp_dir.path(), "d.txt");
        create_test_image(temp_dir.path(), "b.jpg");

        let sequence = list(temp_dir.path()).expect("failed to list directory");
        let root = canonical(temp_dir.path());

        let listed: Vec<_> = sequence.iter().collect();
        assert_eq!(
            listed,
            vec![
                root.join("a.png").as_path(),
                root.join("b.jpg").as_path(),
                root.join("c.gif").as_path(),
            ]
        );
    }

    #[test]
    fn list_descends_into_subfolders() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("0001").join("c1");
        fs::create_dir_all(&nested).expect("failed to create nested dirs");
        create_test_image(&nested, "0001_c1s1_000151_01.jpg");
        create_test_image(temp_dir.path(), "top.bmp");

        let sequence = list(temp_dir.path()).expect("failed to list directory");

        assert_eq!(sequence.len(), 2);
        assert!(sequence.iter().all(Path::is_absolute));
    }

    #[test]
    fn list_sorts_by_full_path_not_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir_a = temp_dir.path().join("a");
        let dir_b = temp_dir.path().join("b");
        fs::create_dir_all(&dir_a).expect("failed to create dir a");
        fs::create_dir_all(&dir_b).expect("failed to create dir b");
        create_test_image(&dir_a, "z.png");
        create_test_image(&dir_b, "a.png");

        let sequence = list(temp_dir.path()).expect("failed to list directory");
        let root = canonical(temp_dir.path());

        assert_eq!(sequence.get(0), Some(root.join("a").join("z.png").as_path()));
        assert_eq!(sequence.get(1), Some(root.join("b").join("a.png").as_path()));
    }

    #[test]
    fn list_orders_by_string_not_by_component() {
        // '-' (0x2d) sorts before '/' (0x2f) as a string, while component
        // comparison would put "a/..." before "a-b/...".
        let temp_dir = tempdir().expect("failed to create temp dir");
        let plain = temp_dir.path().join("a");
        let dashed = temp_dir.path().join("a-b");
        fs::create_dir_all(&plain).expect("failed to create dir");
        fs::create_dir_all(&dashed).expect("failed to create dir");
        create_test_image(&plain, "x.png");
        create_test_image(&dashed, "x.png");

        let sequence = list(temp_dir.path()).expect("failed to list directory");
        let root = canonical(temp_dir.path());

        assert_eq!(sequence.get(0), Some(root.join("a-b").join("x.png").as_path()));
        assert_eq!(sequence.get(1), Some(root.join("a").join("x.png").as_path()));
    }

    #[test]
    fn list_matches_extensions_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "UPPER.JPG");
        create_test_image(temp_dir.path(), "mixed.JpEg");

        let sequence = list(temp_dir.path()).expect("failed to list directory");
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn list_returns_empty_for_no_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "readme.txt");

        let sequence = list(temp_dir.path()).expect("failed to list directory");
        assert!(sequence.is_empty());
        assert_eq!(sequence.folder(), canonical(temp_dir.path()));
    }

    #[test]
    fn list_reports_missing_folder() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist");

        match list(&missing) {
            Err(Error::PathNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected PathNotFound, got {other:?}"),
        }
    }

    #[test]
    fn list_is_sorted_and_unique() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["09.png", "1.png", "10.png", "a.gif", "B.gif", "_x.bmp"] {
            create_test_image(temp_dir.path(), name);
        }

        let sequence = list(temp_dir.path()).expect("failed to list directory");
        let paths: Vec<_> = sequence.iter().collect();

        assert!(paths
            .windows(2)
            .all(|pair| pair[0].as_os_str() < pair[1].as_os_str()));
        assert_eq!(paths.len(), 6);
    }

    #[test]
    fn cancelled_token_stops_listing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.png");

        let token = CancelToken::new();
        token.cancel();

        assert!(matches!(
            list_cancellable(temp_dir.path(), &token),
            Err(Error::Cancelled)
        ));
    }

    #[test]
    fn cancel_token_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn position_finds_listed_entries() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.png");
        create_test_image(temp_dir.path(), "b.png");

        let sequence = list(temp_dir.path()).expect("failed to list directory");
        let root = canonical(temp_dir.path());

        assert_eq!(sequence.position(&root.join("b.png")), Some(1));
        assert_eq!(sequence.position(&root.join("c.png")), None);
    }

    /// Makes `dir` unreadable; returns false where permissions are not
    /// enforced (e.g. running as root).
    #[cfg(unix)]
    fn lock(dir: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).expect("chmod");
        fs::read_dir(dir).is_err()
    }

    #[cfg(unix)]
    fn unlock(dir: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).expect("chmod");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_root_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).expect("failed to create dir");
        create_test_image(&locked, "a.png");
        if !lock(&locked) {
            unlock(&locked);
            return;
        }

        let result = list(&locked);
        unlock(&locked);

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subfolder_is_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).expect("failed to create dir");
        create_test_image(&locked, "hidden.png");
        create_test_image(temp_dir.path(), "a.png");
        let enforced = lock(&locked);

        let result = list(temp_dir.path());
        unlock(&locked);

        let sequence = result.expect("failed to list directory");
        let expected = if enforced { 1 } else { 2 };
        assert_eq!(sequence.len(), expected);
    }

    #[test]
    fn from_paths_sorts_and_dedups() {
        let sequence = ImageSequence::from_paths(
            PathBuf::from("/d"),
            vec![
                PathBuf::from("/d/b.png"),
                PathBuf::from("/d/a.png"),
                PathBuf::from("/d/b.png"),
            ],
        );
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.get(0), Some(Path::new("/d/a.png")));
    }
}
