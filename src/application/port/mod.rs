// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure and
//! presentation adapters implement. These traits use only domain types,
//! ensuring the viewer core remains independent of any GUI toolkit or
//! decoding library and can be tested headlessly.
//!
//! # Available Ports
//!
//! - [`bitmap`]: Image decoding, transform application and size queries
//! - [`display`]: Showing bitmaps, placeholders and status text
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `image` types)
//! - Methods return `Result` with the crate error type where they can fail
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod bitmap;
pub mod display;

// Re-export main types for convenience
pub use bitmap::BitmapBackend;
pub use display::Display;
