// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side state).
//!
//! # Available Services
//!
//! - [`navigation`]: Image sequence position (`NavigationState`)

pub mod navigation;

// Re-export main types
pub use navigation::{NavigationInfo, NavigationState};
