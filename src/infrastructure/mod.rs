// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`image_rs`]: Decoding and transforms via the `image` crate (implements
//!   [`BitmapBackend`])
//!
//! [`BitmapBackend`]: crate::application::port::BitmapBackend

pub mod image_rs;

pub use image_rs::{Bitmap, ImageRsBackend};
