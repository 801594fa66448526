// SPDX-License-Identifier: MPL-2.0
//! View newtypes.
//!
//! Type-safe wrappers for the two components of the view transform,
//! ensuring they always hold a valid value.

// =============================================================================
// RotationAngle
// =============================================================================

/// Rotation angle in 90° increments.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always one of: 0°, 90°, 180°, or 270°.
///
/// # Example
///
/// ```
/// use reid_lens::domain::view::RotationAngle;
///
/// let angle = RotationAngle::default();
/// assert_eq!(angle.degrees(), 0);
///
/// let rotated = angle.rotate_clockwise();
/// assert_eq!(rotated.degrees(), 90);
///
/// // Full rotation cycle
/// let full = rotated.rotate_clockwise().rotate_clockwise().rotate_clockwise();
/// assert_eq!(full.degrees(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation angle, normalizing to valid 90° increments.
    ///
    /// Any value is rounded down to a 90° increment, then wrapped to 0-270°.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Rotates 90° clockwise.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    /// Returns true if the angle is not zero.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }

    /// Returns true if width and height trade places under this rotation.
    ///
    /// This is true for 90° and 270° rotations.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        self.0 % 180 == 90
    }
}

// =============================================================================
// ScaleFactor
// =============================================================================

/// Display scale relative to the original bitmap (1.0 = original size).
///
/// Always positive and finite. There is deliberately no minimum or maximum:
/// repeated zooming keeps multiplying.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Original size.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a scale factor, rejecting zero, negative and non-finite values.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Multiplies the current scale.
    ///
    /// Returns `None` when the multiplier is not a positive finite number or
    /// the product leaves the representable range.
    #[must_use]
    pub fn multiplied_by(self, multiplier: f64) -> Option<Self> {
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return None;
        }
        Self::new(self.0 * multiplier)
    }

    /// Returns the scale as a rounded percentage for display (1.0 → 100).
    #[must_use]
    pub fn percent(self) -> f64 {
        (self.0 * 100.0).round()
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_normalizes_to_90_increments() {
        assert_eq!(RotationAngle::new(0).degrees(), 0);
        assert_eq!(RotationAngle::new(89).degrees(), 0);
        assert_eq!(RotationAngle::new(90).degrees(), 90);
        assert_eq!(RotationAngle::new(135).degrees(), 90);
        assert_eq!(RotationAngle::new(270).degrees(), 270);
        assert_eq!(RotationAngle::new(450).degrees(), 90);
    }

    #[test]
    fn rotate_clockwise_wraps_at_360() {
        let angle = RotationAngle::new(270);
        assert_eq!(angle.rotate_clockwise(), RotationAngle::ZERO);
    }

    #[test]
    fn four_clockwise_steps_return_to_start() {
        for start in [0, 90, 180, 270] {
            let angle = RotationAngle::new(start);
            let cycled = angle
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise();
            assert_eq!(cycled, angle);
        }
    }

    #[test]
    fn swaps_dimensions_for_90_and_270() {
        assert!(!RotationAngle::new(0).swaps_dimensions());
        assert!(RotationAngle::new(90).swaps_dimensions());
        assert!(!RotationAngle::new(180).swaps_dimensions());
        assert!(RotationAngle::new(270).swaps_dimensions());
    }

    #[test]
    fn scale_factor_rejects_non_positive_values() {
        assert!(ScaleFactor::new(0.0).is_none());
        assert!(ScaleFactor::new(-1.0).is_none());
        assert!(ScaleFactor::new(f64::NAN).is_none());
        assert!(ScaleFactor::new(f64::INFINITY).is_none());
        assert!(ScaleFactor::new(0.001).is_some());
    }

    #[test]
    fn scale_factor_multiplies_without_clamping() {
        let mut scale = ScaleFactor::IDENTITY;
        for _ in 0..40 {
            scale = scale.multiplied_by(1.25).expect("finite product");
        }
        assert!(scale.value() > 7000.0);

        let mut small = ScaleFactor::IDENTITY;
        for _ in 0..40 {
            small = small.multiplied_by(0.8).expect("positive product");
        }
        assert!(small.value() < 0.001);
    }

    #[test]
    fn zoom_in_then_out_is_identity() {
        let scale = ScaleFactor::IDENTITY
            .multiplied_by(1.25)
            .and_then(|s| s.multiplied_by(0.8))
            .expect("valid multipliers");
        assert_relative_eq!(scale.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn multiplied_by_rejects_bad_multipliers() {
        assert!(ScaleFactor::IDENTITY.multiplied_by(0.0).is_none());
        assert!(ScaleFactor::IDENTITY.multiplied_by(-2.0).is_none());
        assert!(ScaleFactor::IDENTITY.multiplied_by(f64::NAN).is_none());
    }

    #[test]
    fn percent_rounds_for_display() {
        assert_eq!(ScaleFactor::IDENTITY.percent(), 100.0);
        assert_eq!(ScaleFactor::new(1.25).map(ScaleFactor::percent), Some(125.0));
        assert_eq!(ScaleFactor::new(0.3333).map(ScaleFactor::percent), Some(33.0));
    }
}
