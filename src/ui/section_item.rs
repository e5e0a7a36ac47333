// SPDX-License-Identifier: MPL-2.0
//! Generic layout helper for a single settings field.
//!
//! Renders an optional localized title, arbitrary caller content, and an
//! optional localized description, always in that order. Blocks whose prop is
//! absent are omitted entirely.

use crate::i18n::fluent::I18n;
use crate::i18n::MessageRef;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column};
use iced::{Element, Theme};

pub fn view<'a, Message: 'a>(
    i18n: &I18n,
    title: Option<MessageRef>,
    content: Element<'a, Message>,
    description: Option<MessageRef>,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    if let Some(title) = title {
        column = column.push(text(i18n.tr_or(title)).size(typography::TITLE_SM));
    }

    column = column.push(content);

    if let Some(description) = description {
        column = column.push(
            text(i18n.tr_or(description))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );
    }

    column.into()
}
