// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the widgets of the viewer window.
//!
//! ```
//! use reid_lens::ui::design_tokens::{palette, spacing};
//!
//! let padding = spacing::SM;
//! let surface = palette::GRAY_900;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    /// Horizontal offset per tree depth level.
    pub const TREE_INDENT: f32 = 14.0;
    pub const SEARCH_INPUT_WIDTH: f32 = 160.0;
    pub const ORIENTATION_PICKER_WIDTH: f32 = 110.0;
    /// Height of the search bar, toolbar and status line combined.
    pub const CHROME_HEIGHT: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS == spacing::XXS * 2.0);
    assert!(spacing::MD == spacing::XS * 2.0);
    assert!(typography::CAPTION < typography::BODY);
};
