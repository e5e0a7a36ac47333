// SPDX-License-Identifier: MPL-2.0
//! Static tab descriptors and the sidebar column of the settings modal.

use crate::i18n::fluent::I18n;
use crate::i18n::MessageRef;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment, Element, Length};

use super::Message;

/// Top-level settings categories. A closed enum, so an unknown tab id is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    General,
    Info,
}

/// Static descriptor for one sidebar tab.
pub struct Tab {
    pub id: TabId,
    pub label: MessageRef,
    pub icon: fn() -> Svg<'static>,
    /// Accessible name for the icon.
    pub icon_label: MessageRef,
}

/// The declared tab list, in display order. Never mutated.
pub fn tabs() -> [Tab; 2] {
    [
        Tab {
            id: TabId::General,
            label: MessageRef::new("tab-general", "General"),
            icon: icons::cog,
            icon_label: MessageRef::new("tab-icon-settings-label", "Settings icon"),
        },
        Tab {
            id: TabId::Info,
            label: MessageRef::new("tab-info", "Info"),
            icon: icons::info_circle,
            icon_label: MessageRef::new("tab-icon-info-label", "Info icon"),
        },
    ]
}

/// Renders the tab column; `active_tab` is `None` in the collapsed state.
pub fn view<'a>(i18n: &'a I18n, active_tab: Option<TabId>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS).padding(spacing::XS);

    for tab in tabs() {
        let selected = active_tab == Some(tab.id);
        let label = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized((tab.icon)(), sizing::ICON_SM))
            .push(text(i18n.tr_or(tab.label)).size(typography::BODY));

        column = column.push(
            button(label)
                .width(Length::Fill)
                .padding(spacing::XS)
                .on_press(Message::TabSelected(tab.id))
                .style(styles::button_tab(selected)),
        );
    }

    container(column)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::sidebar)
        .into()
}
