// SPDX-License-Identifier: MPL-2.0
//! General settings form: team name, description, and the picture section.
//!
//! Name and description follow a collapsed/expanded section flow: a section
//! opens for editing via the shell's active-section state, and saving or
//! cancelling closes it again. The picture section embeds the upload widget
//! and forwards its events upward unchanged.

use crate::domain::Team;
use crate::i18n::fluent::I18n;
use crate::i18n::MessageRef;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, picture_upload, section_item, styles};
use iced::widget::{button, text, text_input, Column, Row};
use iced::{alignment, Element, Length};

/// Editable sections of this tab, identified the way the shell tracks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Name,
    Description,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Name => "name",
            Section::Description => "description",
        }
    }
}

#[derive(Debug)]
pub struct State {
    /// Edit buffer for whichever text section is open.
    draft: String,
    pub picture: picture_upload::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenSection(Section),
    CancelSection,
    DraftChanged(String),
    SaveSection(Section),
    CollapsePressed,
    Picture(picture_upload::Message),
}

/// Events propagated to the shell.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open (non-empty) or close (empty) a section.
    SectionSelected(String),
    CollapseRequested,
    /// A text field was saved; the shell closes the section and forwards.
    TeamEdited {
        display_name: Option<String>,
        description: Option<String>,
    },
    Picture(picture_upload::Event),
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub team: &'a Team,
    pub active_section: &'a str,
}

impl State {
    pub fn new(picture_options: picture_upload::Options) -> Self {
        Self {
            draft: String::new(),
            picture: picture_upload::State::new(picture_options),
        }
    }

    pub fn update(&mut self, message: Message, team: &Team) -> Event {
        match message {
            Message::OpenSection(section) => {
                self.draft = match section {
                    Section::Name => team.display_name.clone(),
                    Section::Description => team.description.clone(),
                };
                Event::SectionSelected(section.id().to_string())
            }
            Message::CancelSection => Event::SectionSelected(String::new()),
            Message::DraftChanged(value) => {
                self.draft = value;
                Event::None
            }
            Message::SaveSection(section) => {
                let value = self.draft.trim().to_string();
                match section {
                    Section::Name => Event::TeamEdited {
                        display_name: Some(value),
                        description: None,
                    },
                    Section::Description => Event::TeamEdited {
                        display_name: None,
                        description: Some(value),
                    },
                }
            }
            Message::CollapsePressed => Event::CollapseRequested,
            Message::Picture(message) => Event::Picture(self.picture.update(message)),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let collapse_button = button(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(icons::chevron_left(), sizing::ICON_SM))
                .push(text(ctx.i18n.tr("collapse-button-label")).size(typography::BODY)),
        )
        .on_press(Message::CollapsePressed)
        .padding(spacing::XXS)
        .style(styles::button_link);

        let name_section = self.text_section(
            &ctx,
            Section::Name,
            MessageRef::new("general-tab-name-title", "Team Name"),
            MessageRef::new(
                "general-tab-name-description",
                "The name of your team, shown in menus and headings.",
            ),
            &ctx.team.display_name,
        );

        let description_section = self.text_section(
            &ctx,
            Section::Description,
            MessageRef::new("general-tab-description-title", "Team Description"),
            MessageRef::new(
                "general-tab-description-description",
                "A short sentence describing what this team is about.",
            ),
            &ctx.team.description,
        );

        let picture_widget = self
            .picture
            .view(picture_upload::ViewContext {
                i18n: ctx.i18n,
                remote_image: ctx.team.icon.as_ref(),
                display_name: &ctx.team.display_name,
            })
            .map(Message::Picture);

        let picture_section = section_item::view(
            ctx.i18n,
            Some(MessageRef::new("general-tab-picture-title", "Team Icon")),
            picture_widget,
            Some(MessageRef::new(
                "general-tab-picture-description",
                "Upload a picture in BMP, JPG or PNG format.",
            )),
        );

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .push(collapse_button)
            .push(name_section)
            .push(description_section)
            .push(picture_section)
            .into()
    }

    /// A collapsed section shows the current value plus an edit link; the
    /// open one shows an input with save/cancel.
    fn text_section<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        section: Section,
        title: MessageRef,
        description: MessageRef,
        current_value: &'a str,
    ) -> Element<'a, Message> {
        let is_open = ctx.active_section == section.id();

        let content: Element<'a, Message> = if is_open {
            Column::new()
                .spacing(spacing::XS)
                .push(
                    text_input(ctx.i18n.tr_or(title).as_str(), &self.draft)
                        .on_input(Message::DraftChanged)
                        .size(typography::BODY)
                        .padding(spacing::XS),
                )
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(
                            button(text(ctx.i18n.tr("section-save")).size(typography::BODY))
                                .on_press(Message::SaveSection(section))
                                .padding(spacing::XS)
                                .style(styles::button_primary),
                        )
                        .push(
                            button(text(ctx.i18n.tr("section-cancel")).size(typography::BODY))
                                .on_press(Message::CancelSection)
                                .padding(spacing::XS)
                                .style(styles::button_link),
                        ),
                )
                .into()
        } else {
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(text(current_value).size(typography::BODY).width(Length::Fill))
                .push(
                    button(text(ctx.i18n.tr("section-edit")).size(typography::BODY))
                        .on_press(Message::OpenSection(section))
                        .padding(spacing::XXS)
                        .style(styles::button_link),
                )
                .into()
        };

        section_item::view(ctx.i18n, Some(title), content, Some(description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemoveButton;

    fn state() -> State {
        State::new(picture_upload::Options {
            allowed_extensions: vec!["png".into()],
            remove_button: RemoveButton::Always,
        })
    }

    fn team() -> Team {
        let mut team = Team::new("acme", "Acme");
        team.description = "Rockets and anvils".to_string();
        team
    }

    #[test]
    fn opening_a_section_seeds_the_draft() {
        let mut state = state();
        let event = state.update(Message::OpenSection(Section::Name), &team());
        let Event::SectionSelected(id) = event else {
            panic!("expected SectionSelected");
        };
        assert_eq!(id, "name");
        assert_eq!(state.draft, "Acme");
    }

    #[test]
    fn saving_name_emits_trimmed_value() {
        let mut state = state();
        let team = team();
        state.update(Message::OpenSection(Section::Name), &team);
        state.update(Message::DraftChanged("  Acme Corp ".into()), &team);
        let event = state.update(Message::SaveSection(Section::Name), &team);
        let Event::TeamEdited {
            display_name,
            description,
        } = event
        else {
            panic!("expected TeamEdited");
        };
        assert_eq!(display_name.as_deref(), Some("Acme Corp"));
        assert!(description.is_none());
    }

    #[test]
    fn cancel_closes_the_section() {
        let mut state = state();
        let event = state.update(Message::CancelSection, &team());
        assert!(matches!(event, Event::SectionSelected(id) if id.is_empty()));
    }

    #[test]
    fn collapse_is_forwarded() {
        let mut state = state();
        let event = state.update(Message::CollapsePressed, &team());
        assert!(matches!(event, Event::CollapseRequested));
    }

    #[test]
    fn picture_events_are_forwarded() {
        let mut state = state();
        let event = state.update(
            Message::Picture(picture_upload::Message::EditPressed),
            &team(),
        );
        assert!(matches!(
            event,
            Event::Picture(picture_upload::Event::PickRequested)
        ));
    }
}
