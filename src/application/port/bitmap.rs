// SPDX-License-Identifier: MPL-2.0
//! Bitmap backend port definition.
//!
//! This module defines the [`BitmapBackend`] trait through which the viewer
//! decodes image files and derives display bitmaps. The viewer never holds
//! a decoding library type directly; infrastructure adapters provide one.

use crate::domain::view::ViewTransform;
use crate::error::Result;
use std::path::Path;

// =============================================================================
// BitmapBackend Trait
// =============================================================================

/// Decodes images and applies view transforms to them.
///
/// # Contract
///
/// - `decode` reads the file at call time; a missing or unparsable file
///   is an error, never a panic.
/// - `apply_transform` always starts from the bitmap it is given and never
///   mutates it. The viewer passes the original decoded bitmap every time,
///   so transforms never compound resampling artifacts.
/// - Scale is applied before rotation.
///
/// # Example
///
/// ```ignore
/// use reid_lens::application::port::BitmapBackend;
/// use reid_lens::domain::view::ViewTransform;
///
/// fn thumbnail<B: BitmapBackend>(backend: &B, path: &std::path::Path) -> Option<B::Bitmap> {
///     let original = backend.decode(path).ok()?;
///     backend.apply_transform(&original, ViewTransform::default()).ok()
/// }
/// ```
pub trait BitmapBackend {
    /// Decoded image representation. Cloning should be cheap.
    type Bitmap: Clone;

    /// Decodes the image file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::error::Error::Decode) when the file
    /// cannot be parsed as an image and [`Error::Io`](crate::error::Error::Io)
    /// when it cannot be read.
    fn decode(&self, path: &Path) -> Result<Self::Bitmap>;

    /// Derives a new bitmap from `bitmap` scaled then rotated by `transform`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderTooLarge`](crate::error::Error::RenderTooLarge)
    /// when the result would exceed the backend's pixel budget.
    fn apply_transform(&self, bitmap: &Self::Bitmap, transform: ViewTransform)
        -> Result<Self::Bitmap>;

    /// Returns `(width, height)` in pixels.
    fn size(&self, bitmap: &Self::Bitmap) -> (u32, u32);
}
