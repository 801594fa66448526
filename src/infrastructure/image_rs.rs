// SPDX-License-Identifier: MPL-2.0
//! Bitmap backend built on the `image` crate.
//!
//! Decoded images are kept as shared [`DynamicImage`]s so the viewer can
//! hold the original cheaply while every transform produces a new bitmap.

use crate::application::port::BitmapBackend;
use crate::config::{ScalingFilter, MAX_RENDER_PIXELS};
use crate::domain::view::ViewTransform;
use crate::error::{Error, Result};
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView};
use std::path::Path;
use std::sync::Arc;

/// A decoded or transformed image.
#[derive(Debug, Clone)]
pub struct Bitmap {
    image: Arc<DynamicImage>,
}

impl Bitmap {
    #[must_use]
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Returns the pixels as tightly packed RGBA8 rows.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        self.image.to_rgba8().into_vec()
    }
}

/// [`BitmapBackend`] implementation using `image`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRsBackend {
    filter: ScalingFilter,
}

impl ImageRsBackend {
    #[must_use]
    pub fn new(filter: ScalingFilter) -> Self {
        Self { filter }
    }

    #[must_use]
    pub fn filter(&self) -> ScalingFilter {
        self.filter
    }

    fn filter_type(&self) -> FilterType {
        match self.filter {
            ScalingFilter::Smooth => FilterType::Triangle,
            ScalingFilter::Nearest => FilterType::Nearest,
        }
    }
}

impl BitmapBackend for ImageRsBackend {
    type Bitmap = Bitmap;

    fn decode(&self, path: &Path) -> Result<Bitmap> {
        let image = image_rs::open(path)?;
        tracing::debug!(
            file = %path.display(),
            width = image.width(),
            height = image.height(),
            "decoded image"
        );
        Ok(Bitmap::new(image))
    }

    fn apply_transform(&self, bitmap: &Bitmap, transform: ViewTransform) -> Result<Bitmap> {
        let (width, height) = scaled_dimensions(bitmap.image.dimensions(), transform);
        if u64::from(width) * u64::from(height) > MAX_RENDER_PIXELS {
            return Err(Error::RenderTooLarge {
                width: u64::from(width),
                height: u64::from(height),
            });
        }

        let scaled = if (width, height) == bitmap.image.dimensions() {
            Arc::clone(&bitmap.image)
        } else {
            Arc::new(
                bitmap
                    .image
                    .resize_exact(width, height, self.filter_type()),
            )
        };

        let rotated = match transform.rotation.degrees() {
            90 => Arc::new(scaled.rotate90()),
            180 => Arc::new(scaled.rotate180()),
            270 => Arc::new(scaled.rotate270()),
            _ => scaled,
        };

        Ok(Bitmap { image: rotated })
    }

    fn size(&self, bitmap: &Bitmap) -> (u32, u32) {
        bitmap.image.dimensions()
    }
}

/// Pixel dimensions after scaling, before rotation. Never zero; saturates
/// at `u32::MAX` so oversized requests still hit the pixel budget check.
fn scaled_dimensions((width, height): (u32, u32), transform: ViewTransform) -> (u32, u32) {
    let scale = transform.scale.value();
    let scale_axis = |axis: u32| {
        let scaled = (f64::from(axis) * scale).round();
        if scaled >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            (scaled as u32).max(1)
        }
    };
    (scale_axis(width), scale_axis(height))
}
