// SPDX-License-Identifier: MPL-2.0
//! Display port definition.
//!
//! The [`Display`] trait is the viewer's only way to put something on
//! screen. The iced front-end implements it with a retained surface read by
//! its view function; tests implement it with a recorder.

use crate::domain::status::{Placeholder, Status};

/// Receives what the viewer wants shown.
pub trait Display<Bitmap> {
    /// Replaces the image pane content with `bitmap`.
    fn show(&mut self, bitmap: &Bitmap);

    /// Replaces the image pane content with a placeholder message.
    fn show_placeholder(&mut self, placeholder: Placeholder);

    /// Empties the image pane.
    fn clear(&mut self);

    /// Replaces the status line.
    fn set_status(&mut self, status: Status);

    /// Current size of the image viewport in pixels, if known yet.
    fn viewport_size(&self) -> Option<(u32, u32)>;
}
