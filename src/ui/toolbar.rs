// SPDX-License-Identifier: MPL-2.0
//! Navigation and view-transform buttons above the image pane.

use crate::application::query::NavigationInfo;
use crate::application::viewer::Command;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: NavigationInfo,
    /// Whether a decoded image is on screen (transform buttons need one).
    pub has_image: bool,
    /// Current zoom as a percentage, shown next to the buttons.
    pub zoom_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    Rotate,
    FitToWindow,
}

impl From<Message> for Command {
    fn from(message: Message) -> Self {
        match message {
            Message::Previous => Command::Previous,
            Message::Next => Command::Next,
            Message::ZoomIn => Command::ZoomIn,
            Message::ZoomOut => Command::ZoomOut,
            Message::Rotate => Command::Rotate,
            Message::FitToWindow => Command::FitToWindow,
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let action = |key: &str, message: Message, enabled: bool| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press_maybe(enabled.then_some(message))
            .padding(spacing::XXS)
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(action(
            "toolbar-previous",
            Message::Previous,
            ctx.navigation.has_previous,
        ))
        .push(action("toolbar-next", Message::Next, ctx.navigation.has_next))
        .push(action("toolbar-zoom-in", Message::ZoomIn, ctx.has_image))
        .push(action("toolbar-zoom-out", Message::ZoomOut, ctx.has_image))
        .push(action("toolbar-rotate", Message::Rotate, ctx.has_image))
        .push(action("toolbar-fit", Message::FitToWindow, ctx.has_image));

    if let Some(percent) = ctx.zoom_percent {
        row = row.push(Text::new(format!("{percent:.0}%")).size(typography::CAPTION));
    }

    Container::new(row)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill)
        .into()
}
