// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: folder tree on the left; search bar, toolbar, image pane and
//! status line stacked on the right.

use super::surface::Surface;
use super::Message;
use crate::application::query::NavigationInfo;
use crate::config::TREE_PANE_WIDTH;
use crate::domain::view::ViewTransform;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::{folder_tree, image_pane, search_bar, status_line, toolbar};
use fluent_bundle::FluentValue;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub surface: &'a Surface,
    pub tree: &'a folder_tree::State,
    pub search: &'a search_bar::State,
    pub navigation: NavigationInfo,
    /// Transform of the decoded image on screen, if any.
    pub transform: Option<ViewTransform>,
    pub scanning: Option<&'a Path>,
    /// i18n key of a startup warning, shown until the first status arrives.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tree = Container::new(
        ctx.tree
            .view(folder_tree::ViewContext { i18n: ctx.i18n })
            .map(Message::Tree),
    )
    .width(Length::Fixed(TREE_PANE_WIDTH))
    .height(Length::Fill)
    .style(|theme: &Theme| container::Style {
        border: Border {
            width: border::WIDTH_SM,
            color: theme.extended_palette().background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    });

    let search = ctx
        .search
        .view(search_bar::ViewContext { i18n: ctx.i18n })
        .map(Message::Search);

    let toolbar = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        navigation: ctx.navigation,
        has_image: ctx.transform.is_some(),
        zoom_percent: ctx.transform.map(|transform| transform.scale.percent()),
    })
    .map(Message::Toolbar);

    let pane = image_pane::view(image_pane::ViewContext {
        i18n: ctx.i18n,
        content: ctx.surface.content(),
    })
    .map(Message::ImagePane);

    let status = Container::new(Text::new(status_text(&ctx)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill);

    let right = Column::new()
        .push(search)
        .push(toolbar)
        .push(pane)
        .push(status)
        .width(Length::Fill)
        .height(Length::Fill);

    Row::new()
        .push(tree)
        .push(right)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_text(ctx: &ViewContext<'_>) -> String {
    if let Some(folder) = ctx.scanning {
        return ctx.i18n.tr_with_args(
            "status-scanning",
            &[("path", FluentValue::from(folder.display().to_string()))],
        );
    }
    if let Some(status) = ctx.surface.status() {
        return status_line::status_text(ctx.i18n, status);
    }
    match ctx.notice {
        Some(key) => ctx.i18n.tr(key),
        None => ctx.i18n.tr("status-ready"),
    }
}
