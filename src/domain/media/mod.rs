// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the image format allow-list used by the directory
//! index and the folder tree. It is independent of any decoding library.

pub mod types;

// Re-export commonly used types
pub use types::{is_supported_image, ImageFormat};
