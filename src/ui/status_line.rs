// SPDX-License-Identifier: MPL-2.0
//! Localized texts for the status line and image placeholders.

use crate::domain::status::{Placeholder, Status};
use crate::i18n::fluent::I18n;
use fluent_bundle::FluentValue;

/// Renders a viewer status in the current locale.
pub fn status_text(i18n: &I18n, status: &Status) -> String {
    let key = status.i18n_key();
    match status {
        Status::Showing {
            file_name,
            position,
            total,
        } => i18n.tr_with_args(
            key,
            &[
                ("name", FluentValue::from(file_name.as_str())),
                ("position", FluentValue::from(*position)),
                ("total", FluentValue::from(*total)),
            ],
        ),
        Status::PathNotFound(path) | Status::NoImages(path) | Status::Unreadable(path) => i18n
            .tr_with_args(
                key,
                &[("path", FluentValue::from(path.display().to_string()))],
            ),
        Status::SearchCriteria {
            person_id,
            orientation,
        } => i18n.tr_with_args(
            key,
            &[
                ("id", FluentValue::from(person_id.as_str())),
                ("orientation", FluentValue::from(i18n.tr(orientation.i18n_key()))),
            ],
        ),
    }
}

/// Renders an image-pane placeholder in the current locale.
pub fn placeholder_text(i18n: &I18n, placeholder: &Placeholder) -> String {
    let key = placeholder.i18n_key();
    match placeholder {
        Placeholder::CannotLoad(path) => i18n.tr_with_args(
            key,
            &[("path", FluentValue::from(path.display().to_string()))],
        ),
        Placeholder::TooLarge { width, height } => i18n.tr_with_args(
            key,
            &[
                ("width", FluentValue::from(width.to_string())),
                ("height", FluentValue::from(height.to_string())),
            ],
        ),
    }
}
