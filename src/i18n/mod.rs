// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;

pub use fluent::I18n;
