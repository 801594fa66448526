// SPDX-License-Identifier: MPL-2.0
//! Person-identifier search bar.
//!
//! Holds the text typed so far and the picked orientation; submitting
//! emits a [`SearchQuery`] for the viewer.

use crate::domain::search::{Orientation, SearchQuery};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, text_input, Container, Row, Text};
use iced::{Element, Length};
use std::fmt;

/// Localized pick-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrientationOption {
    orientation: Orientation,
    label: String,
}

impl fmt::Display for OrientationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PersonIdChanged(String),
    OrientationSelected(Orientation),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Search(SearchQuery),
}

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Default)]
pub struct State {
    person_id: String,
    orientation: Orientation,
}

impl State {
    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PersonIdChanged(value) => {
                self.person_id = value;
                Effect::None
            }
            Message::OrientationSelected(orientation) => {
                self.orientation = orientation;
                Effect::None
            }
            Message::Submit => {
                Effect::Search(SearchQuery::new(&self.person_id, self.orientation))
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let options: Vec<OrientationOption> = Orientation::ALL
            .iter()
            .map(|&orientation| OrientationOption {
                orientation,
                label: ctx.i18n.tr(orientation.i18n_key()),
            })
            .collect();
        let selected = options
            .iter()
            .find(|option| option.orientation == self.orientation)
            .cloned();

        let id_input = text_input(&ctx.i18n.tr("search-id-placeholder"), &self.person_id)
            .on_input(Message::PersonIdChanged)
            .on_submit(Message::Submit)
            .size(typography::BODY)
            .padding(spacing::XXS)
            .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH));

        let picker = pick_list(options, selected, |option: OrientationOption| {
            Message::OrientationSelected(option.orientation)
        })
        .text_size(typography::BODY)
        .padding(spacing::XXS)
        .width(Length::Fixed(sizing::ORIENTATION_PICKER_WIDTH));

        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("search-id-label")).size(typography::BODY))
            .push(id_input)
            .push(Text::new(ctx.i18n.tr("search-orientation-label")).size(typography::BODY))
            .push(picker)
            .push(
                button(Text::new(ctx.i18n.tr("search-button")).size(typography::BODY))
                    .on_press(Message::Submit)
                    .padding(spacing::XXS),
            );

        Container::new(row)
            .padding([spacing::XXS, spacing::XS])
            .width(Length::Fill)
            .into()
    }
}
