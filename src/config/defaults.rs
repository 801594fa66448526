// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Zoom**: Zoom multipliers applied by the zoom buttons
//! - **Rendering**: Limits on transformed bitmaps
//! - **Window**: Initial window geometry

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Multiplier applied by "zoom in".
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 1.25;

/// Multiplier applied by "zoom out".
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 0.8;

/// Largest multiplier accepted from the config file for either zoom button.
pub const MAX_ZOOM_FACTOR: f64 = 10.0;

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Largest transformed bitmap the backend will produce (64 megapixels).
pub const MAX_RENDER_PIXELS: u64 = 64 * 1024 * 1024;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;

pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Width of the folder tree pane.
pub const TREE_PANE_WIDTH: f32 = 220.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ZOOM_IN_FACTOR > 1.0);
    assert!(DEFAULT_ZOOM_IN_FACTOR <= MAX_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_OUT_FACTOR > 0.0);
    assert!(DEFAULT_ZOOM_OUT_FACTOR < 1.0);
    assert!(MAX_RENDER_PIXELS > 0);
    assert!(TREE_PANE_WIDTH < DEFAULT_WINDOW_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_zoom_factors_cancel_out() {
        assert_relative_eq!(DEFAULT_ZOOM_IN_FACTOR * DEFAULT_ZOOM_OUT_FACTOR, 1.0);
    }
}
