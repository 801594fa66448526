// SPDX-License-Identifier: MPL-2.0
//! Retained display surface read by the view function.
//!
//! The viewer pushes into it through the [`Display`] port; `App::view`
//! only ever reads it.

use crate::application::port::Display;
use crate::domain::status::{Placeholder, Status};
use crate::infrastructure::image_rs::Bitmap;
use crate::ui::image_pane::Content;
use iced::widget::image::Handle;

#[derive(Debug, Clone, Default)]
pub struct Surface {
    content: Content,
    status: Option<Status>,
    viewport: Option<(u32, u32)>,
}

impl Surface {
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Records the visible size of the image pane in logical pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0 {
            self.viewport = Some((width as u32, height as u32));
        }
    }
}

impl Display<Bitmap> for Surface {
    fn show(&mut self, bitmap: &Bitmap) {
        let (width, height) = (bitmap.width(), bitmap.height());
        self.content = Content::Image {
            handle: Handle::from_rgba(width, height, bitmap.to_rgba()),
            width,
            height,
        };
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.content = Content::Placeholder(placeholder);
    }

    fn clear(&mut self) {
        self.content = Content::Empty;
    }

    fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    fn viewport_size(&self) -> Option<(u32, u32)> {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{DynamicImage, RgbaImage};
    use std::path::PathBuf;

    #[test]
    fn show_converts_bitmap_to_image_content() {
        let mut surface = Surface::default();
        let bitmap = Bitmap::new(DynamicImage::ImageRgba8(RgbaImage::new(7, 3)));

        surface.show(&bitmap);

        assert!(matches!(
            surface.content(),
            Content::Image {
                width: 7,
                height: 3,
                ..
            }
        ));
    }

    #[test]
    fn clear_and_placeholder_replace_content() {
        let mut surface = Surface::default();
        surface.show_placeholder(Placeholder::CannotLoad(PathBuf::from("x.png")));
        assert!(matches!(surface.content(), Content::Placeholder(_)));

        surface.clear();
        assert!(matches!(surface.content(), Content::Empty));
    }

    #[test]
    fn viewport_ignores_degenerate_sizes() {
        let mut surface = Surface::default();
        assert_eq!(surface.viewport_size(), None);

        surface.set_viewport(0.0, 400.0);
        assert_eq!(surface.viewport_size(), None);

        surface.set_viewport(640.5, 480.0);
        assert_eq!(surface.viewport_size(), Some((640, 480)));
    }
}
