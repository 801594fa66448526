// SPDX-License-Identifier: MPL-2.0
//! The composed view transform and the fit-to-window rule.

use super::newtypes::{RotationAngle, ScaleFactor};

/// Scale and rotation applied to the original bitmap to produce the one on
/// screen. Scale is applied first, then rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewTransform {
    pub scale: ScaleFactor,
    pub rotation: RotationAngle,
}

impl ViewTransform {
    /// Returns true for the identity transform (100%, 0°).
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == ScaleFactor::IDENTITY && !self.rotation.is_rotated()
    }

    /// Size of the bounding box of an image of `size` once this transform
    /// is applied, before rounding to whole pixels.
    #[must_use]
    pub fn transformed_size(&self, size: (u32, u32)) -> (f64, f64) {
        let (width, height) = oriented_size(size, self.rotation);
        let scale = self.scale.value();
        (f64::from(width) * scale, f64::from(height) * scale)
    }
}

/// Width and height of an image after rotation, without scaling.
#[must_use]
pub fn oriented_size(size: (u32, u32), rotation: RotationAngle) -> (u32, u32) {
    if rotation.swaps_dimensions() {
        (size.1, size.0)
    } else {
        size
    }
}

/// Computes the scale at which the rotated image exactly fits the viewport
/// while preserving its aspect ratio.
///
/// The fit is computed against the rotated bounding box: under 90° or 270°
/// the image's width competes with the viewport height and vice versa.
/// Returns `None` if either size has a zero dimension.
///
/// # Example
///
/// ```
/// use reid_lens::domain::view::{fit_scale, RotationAngle};
///
/// let rotated = RotationAngle::new(90);
/// let scale = fit_scale((200, 100), (100, 200), rotated).unwrap();
/// assert_eq!(scale.value(), 1.0);
/// ```
#[must_use]
pub fn fit_scale(
    image_size: (u32, u32),
    viewport_size: (u32, u32),
    rotation: RotationAngle,
) -> Option<ScaleFactor> {
    let (width, height) = oriented_size(image_size, rotation);
    if width == 0 || height == 0 || viewport_size.0 == 0 || viewport_size.1 == 0 {
        return None;
    }

    let scale_x = f64::from(viewport_size.0) / f64::from(width);
    let scale_y = f64::from(viewport_size.1) / f64::from(height);
    ScaleFactor::new(scale_x.min(scale_y))
}
