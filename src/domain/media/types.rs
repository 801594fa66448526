// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::path::Path;

/// Image formats the browser lists and tries to display.
///
/// Detection is purely extension based and case-insensitive; whether the
/// file actually decodes is only discovered when it is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
}

impl ImageFormat {
    /// Every lower-case extension that qualifies a file as an image.
    pub const EXTENSIONS: [&'static str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

    /// Maps a file extension (any case, without the dot) to a format.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Detects the format of a path from its extension.
    ///
    /// # Example
    ///
    /// ```
    /// use reid_lens::domain::media::ImageFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ImageFormat::from_path(Path::new("0002_c1s1.JPG")), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_path(Path::new("readme.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Returns true if the path carries one of the allow-listed image extensions.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    ImageFormat::from_path(path).is_some()
}
