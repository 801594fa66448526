// SPDX-License-Identifier: MPL-2.0
//! View domain types.
//!
//! Scale, rotation and their composition, independent of any
//! presentation framework or decoding library.

pub mod newtypes;
pub mod transform;

// Re-export commonly used types
pub use newtypes::{RotationAngle, ScaleFactor};
pub use transform::{fit_scale, oriented_size, ViewTransform};
