// SPDX-License-Identifier: MPL-2.0
//! Content router: picks the sub-form for the active tab.
//!
//! Renders nothing when no team context is available, whatever the tab, and
//! nothing in the collapsed state (`active_tab == None`).

use crate::domain::Team;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{container, text, Column};
use iced::Element;

use super::{general_tab, Message, TabId};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub team: Option<&'a Team>,
    pub active_tab: Option<TabId>,
    pub active_section: &'a str,
}

pub fn view<'a>(general: &'a general_tab::State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(team) = ctx.team else {
        // No team to edit; guard against rendering settings for nothing.
        return empty();
    };

    match ctx.active_tab {
        Some(TabId::General) => general
            .view(general_tab::ViewContext {
                i18n: ctx.i18n,
                team,
                active_section: ctx.active_section,
            })
            .map(Message::General),
        Some(TabId::Info) => container(
            text(ctx.i18n.tr("info-tab-placeholder")).size(typography::BODY),
        )
        .padding(spacing::MD)
        .into(),
        None => empty(),
    }
}

fn empty<'a>() -> Element<'a, Message> {
    Column::new().into()
}
