// SPDX-License-Identifier: MPL-2.0
//! Team settings modal shell.
//!
//! Owns the only real view state of the modal: the dialog lifecycle, the
//! active tab, and the active section. Follows the "state down, messages up"
//! pattern; asynchronous side effects (file picker, preview reads) surface as
//! [`Event`]s for the application root to run.
//!
//! Closing is two-phase: a close request starts the dialog's exit transition
//! and the [`Event::Exited`] notification only fires once the transition
//! completes, with tab and section state already reset to their defaults, so
//! the owner knows it is safe to unmount.

mod content;
mod general_tab;
mod sidebar;

pub use general_tab::{Message as GeneralMessage, Section};
pub use sidebar::{tabs, Tab, TabId};

use crate::domain::Team;
use crate::error::ImageError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{dialog, icons, picture_upload, styles};
use iced::widget::{button, container, rule, text, Column, Row};
use iced::{alignment, Element, Length};
use std::path::PathBuf;
use std::time::Instant;

/// Local UI state for the settings modal.
#[derive(Debug)]
pub struct State {
    dialog: dialog::State,
    active_tab: Option<TabId>,
    active_section: String,
    general: general_tab::State,
}

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(TabId),
    SectionSelected(String),
    /// Close requested via the close button or the backdrop.
    CloseRequested,
    /// Drives the exit transition while the dialog is closing.
    AnimationTick(Instant),
    General(general_tab::Message),
}

/// Events propagated to the application root.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The exit transition finished; the modal is safe to unmount.
    Exited,
    /// Open the native image picker.
    PickImageRequested,
    /// The user chose a valid image; the owner's file-change callback plus
    /// the signal to start the preview read identified by `request`.
    ImageSelected { request: u64, path: PathBuf },
    /// A selection was refused before any read started.
    ImageRejected(ImageError),
    /// The preview read finished successfully.
    PreviewReady,
    /// The preview read failed; previous preview state is untouched.
    PreviewFailed(ImageError),
    /// The remove-image callback.
    RemoveImageRequested,
    /// A text field was saved.
    TeamEdited {
        display_name: Option<String>,
        description: Option<String>,
    },
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub team: Option<&'a Team>,
}

impl State {
    /// A freshly mounted modal opens on the General tab with no section.
    pub fn new(picture_options: picture_upload::Options) -> Self {
        Self {
            dialog: dialog::State::new(),
            active_tab: Some(TabId::General),
            active_section: String::new(),
            general: general_tab::State::new(picture_options),
        }
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.active_tab
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn is_compact(&self) -> bool {
        self.dialog.is_compact()
    }

    /// Whether animation ticks are currently needed.
    pub fn is_animating(&self) -> bool {
        self.dialog.is_animating()
    }

    /// Selecting a tab always discards section navigation and leaves the
    /// collapsed state.
    pub fn update_tab(&mut self, tab: TabId) {
        self.active_tab = Some(tab);
        self.active_section.clear();
        self.dialog.set_compact(false);
    }

    /// Side-channel section selection; the active tab is untouched.
    pub fn update_section(&mut self, section: String) {
        self.active_section = section;
    }

    /// Shrinks the dialog and clears tab state.
    pub fn collapse(&mut self) {
        self.active_tab = None;
        self.active_section.clear();
        self.dialog.set_compact(true);
    }

    /// Starts the exit transition; [`Event::Exited`] follows later.
    pub fn close(&mut self) {
        self.dialog.request_close();
    }

    /// Update the state and emit an [`Event`] for the owner when needed.
    pub fn update(&mut self, message: Message, team: &Team) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.update_tab(tab);
                Event::None
            }
            Message::SectionSelected(section) => {
                self.update_section(section);
                Event::None
            }
            Message::CloseRequested => {
                self.close();
                Event::None
            }
            Message::AnimationTick(now) => {
                if self.dialog.tick(now) {
                    // Fully hidden: reset transient state before notifying.
                    self.active_tab = Some(TabId::General);
                    self.active_section.clear();
                    Event::Exited
                } else {
                    Event::None
                }
            }
            Message::General(message) => match self.general.update(message, team) {
                general_tab::Event::None => Event::None,
                general_tab::Event::SectionSelected(section) => {
                    self.update_section(section);
                    Event::None
                }
                general_tab::Event::CollapseRequested => {
                    self.collapse();
                    Event::None
                }
                general_tab::Event::TeamEdited {
                    display_name,
                    description,
                } => {
                    self.active_section.clear();
                    Event::TeamEdited {
                        display_name,
                        description,
                    }
                }
                general_tab::Event::Picture(event) => match event {
                    picture_upload::Event::None => Event::None,
                    picture_upload::Event::PickRequested => Event::PickImageRequested,
                    picture_upload::Event::FileSelected { request, path } => {
                        Event::ImageSelected { request, path }
                    }
                    picture_upload::Event::Rejected(err) => Event::ImageRejected(err),
                    picture_upload::Event::PreviewReady => Event::PreviewReady,
                    picture_upload::Event::LoadFailed(err) => Event::PreviewFailed(err),
                    picture_upload::Event::RemoveRequested => Event::RemoveImageRequested,
                },
            },
        }
    }

    /// Render the modal overlay (backdrop plus card).
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .push(
                text(ctx.i18n.tr("team-settings-modal-title"))
                    .size(typography::TITLE_LG)
                    .width(Length::Fill),
            )
            .push(
                button(icons::sized(icons::cross(), sizing::ICON_MD))
                    .on_press(Message::CloseRequested)
                    .padding(spacing::XXS)
                    .style(styles::button_link),
            );

        let body = Row::new()
            .spacing(spacing::MD)
            .push(sidebar::view(ctx.i18n, self.active_tab))
            .push(
                container(content::view(
                    &self.general,
                    content::ViewContext {
                        i18n: ctx.i18n,
                        team: ctx.team,
                        active_tab: self.active_tab,
                        active_section: &self.active_section,
                    },
                ))
                .width(Length::Fill)
                .height(Length::Fill),
            );

        let mut card = Column::new().push(header).push(rule::horizontal(1));
        if !self.dialog.is_compact() {
            card = card.push(body);
        } else {
            card = card.push(sidebar::view(ctx.i18n, self.active_tab));
        }

        self.dialog.view(card.into(), Message::CloseRequested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemoveButton;
    use crate::ui::dialog::EXIT_TRANSITION;
    use std::time::Duration;

    fn state() -> State {
        State::new(picture_upload::Options {
            allowed_extensions: vec!["png".into()],
            remove_button: RemoveButton::Always,
        })
    }

    fn team() -> Team {
        Team::new("acme", "Acme")
    }

    #[test]
    fn opens_on_general_with_no_section() {
        let state = state();
        assert_eq!(state.active_tab(), Some(TabId::General));
        assert_eq!(state.active_section(), "");
        assert!(!state.is_compact());
    }

    #[test]
    fn selecting_a_tab_clears_the_active_section() {
        let mut state = state();
        state.update_section("name".to_string());
        let event = state.update(Message::TabSelected(TabId::Info), &team());
        assert!(matches!(event, Event::None));
        assert_eq!(state.active_tab(), Some(TabId::Info));
        assert_eq!(state.active_section(), "");

        // Back to General from any other state behaves the same.
        state.update_section("x".to_string());
        state.update(Message::TabSelected(TabId::General), &team());
        assert_eq!(state.active_tab(), Some(TabId::General));
        assert_eq!(state.active_section(), "");
    }

    #[test]
    fn section_selection_leaves_the_tab_alone() {
        let mut state = state();
        state.update(Message::SectionSelected("name".to_string()), &team());
        assert_eq!(state.active_tab(), Some(TabId::General));
        assert_eq!(state.active_section(), "name");
    }

    #[test]
    fn collapse_clears_tab_state_and_shrinks() {
        let mut state = state();
        state.update_section("name".to_string());
        state.collapse();
        assert_eq!(state.active_tab(), None);
        assert_eq!(state.active_section(), "");
        assert!(state.is_compact());
    }

    #[test]
    fn selecting_a_tab_restores_the_expanded_view() {
        let mut state = state();
        state.collapse();
        state.update(Message::TabSelected(TabId::General), &team());
        assert!(!state.is_compact());
        assert_eq!(state.active_tab(), Some(TabId::General));
    }

    #[test]
    fn close_does_not_exit_until_the_transition_completes() {
        let mut state = state();
        state.update_section("name".to_string());
        let event = state.update(Message::CloseRequested, &team());
        assert!(matches!(event, Event::None));
        assert!(state.is_animating());

        // A tick before the transition ends must not notify the owner.
        let event = state.update(Message::AnimationTick(Instant::now()), &team());
        assert!(matches!(event, Event::None));

        // Once the transition has elapsed, the owner is notified exactly once
        // and transient state is back at its defaults.
        let after = Instant::now() + EXIT_TRANSITION + Duration::from_millis(1);
        let event = state.update(Message::AnimationTick(after), &team());
        assert!(matches!(event, Event::Exited));
        assert_eq!(state.active_tab(), Some(TabId::General));
        assert_eq!(state.active_section(), "");

        let event = state.update(Message::AnimationTick(after), &team());
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn picture_events_bubble_to_the_owner() {
        let mut state = state();
        let event = state.update(
            Message::General(general_tab::Message::Picture(
                picture_upload::Message::EditPressed,
            )),
            &team(),
        );
        assert!(matches!(event, Event::PickImageRequested));
    }

    #[test]
    fn saving_a_section_closes_it_and_forwards_the_edit() {
        let mut state = state();
        let team = team();
        state.update(
            Message::General(general_tab::Message::OpenSection(Section::Name)),
            &team,
        );
        assert_eq!(state.active_section(), "name");
        state.update(
            Message::General(general_tab::Message::DraftChanged("Acme Corp".into())),
            &team,
        );
        let event = state.update(
            Message::General(general_tab::Message::SaveSection(Section::Name)),
            &team,
        );
        let Event::TeamEdited { display_name, .. } = event else {
            panic!("expected TeamEdited");
        };
        assert_eq!(display_name.as_deref(), Some("Acme Corp"));
        assert_eq!(state.active_section(), "");
    }
}
