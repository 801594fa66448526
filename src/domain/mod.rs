// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Image format allow-list ([`ImageFormat`](media::ImageFormat))
//! - [`search`]: Search bar criteria ([`SearchQuery`](search::SearchQuery),
//!   [`Orientation`](search::Orientation))
//! - [`status`]: Status line and placeholder reports ([`Status`](status::Status),
//!   [`Placeholder`](status::Placeholder))
//! - [`view`]: View transform ([`ScaleFactor`](view::ScaleFactor),
//!   [`RotationAngle`](view::RotationAngle), [`ViewTransform`](view::ViewTransform))

pub mod media;
pub mod search;
pub mod status;
pub mod view;
