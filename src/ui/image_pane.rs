// SPDX-License-Identifier: MPL-2.0
//! Scrollable image pane.
//!
//! Renders whatever the viewer last put on the surface at its natural
//! pixel size; scrollbars appear when it exceeds the viewport.

use crate::domain::status::Placeholder;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::status_line;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{container, Container, Scrollable, Text};
use iced::{Background, Element, Length, Theme};

/// What the image pane currently holds.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    Empty,
    Image {
        handle: Handle,
        width: u32,
        height: u32,
    },
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The scrollable reported its visible bounds.
    ViewportChanged { width: f32, height: f32 },
}

/// Contextual data needed to render the pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a Content,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.content {
        Content::Image {
            handle,
            width,
            height,
        } => {
            let image = Image::new(handle.clone())
                .width(Length::Fixed(*width as f32))
                .height(Length::Fixed(*height as f32));

            let scrollable = Scrollable::new(
                Container::new(image)
                    .center_x(Length::Shrink)
                    .center_y(Length::Shrink),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Both {
                vertical: Scrollbar::default(),
                horizontal: Scrollbar::default(),
            })
            .on_scroll(|viewport: Viewport| {
                let bounds = viewport.bounds();
                Message::ViewportChanged {
                    width: bounds.width,
                    height: bounds.height,
                }
            });

            surface(scrollable.into())
        }
        Content::Placeholder(placeholder) => surface(
            Text::new(status_line::placeholder_text(ctx.i18n, placeholder))
                .size(typography::BODY)
                .color(palette::GRAY_200)
                .into(),
        ),
        Content::Empty => surface(
            Text::new(ctx.i18n.tr("placeholder-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
        ),
    }
}

fn surface(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .padding(spacing::XXS)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            ..Default::default()
        })
        .into()
}
