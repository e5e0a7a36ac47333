// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the team settings modal.
//!
//! The `App` struct wires together localization, configuration, the domain
//! `Team`, the modal shell and toast notifications, and translates shell
//! events into side effects like the native file picker or asynchronous
//! preview reads. All `Task`s are spawned here; components below only emit
//! events.

use crate::config::{self, Config};
use crate::domain::Team;
use crate::i18n::fluent::I18n;
use crate::media::picture;
use crate::ui::notifications::{self, Notification, Toast};
use crate::ui::picture_upload;
use crate::ui::team_settings::{self, GeneralMessage};
use crate::ui::{design_tokens::spacing, styles};
use iced::widget::{button, center, container, text, Column, Stack};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Runtime options parsed by `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Language override, e.g. `--lang fr`.
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the settings modal for the current team.
    OpenTeamSettings,
    Modal(team_settings::Message),
    Notification(notifications::Message),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    team: Team,
    /// `Some` while the modal is mounted; dropped only after its exit
    /// transition finished.
    modal: Option<team_settings::State>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("team", &self.team.name)
            .field("modal_open", &self.modal.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;

/// Interval of the transition ticks while the modal animates.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Interval of the auto-dismiss ticks while toasts are visible.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from configuration and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(_) => (Config::default(), Some("error-config-load")),
        };
        let i18n = I18n::new(flags.lang, &config);

        let mut team = Team::new("acme", "Acme");
        team.description = i18n.tr("sample-team-description");

        let mut app = App {
            i18n,
            config,
            team,
            modal: None,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn picture_options(&self) -> picture_upload::Options {
        picture_upload::Options {
            allowed_extensions: self.config.accepted_image_extensions.clone(),
            remove_button: self.config.remove_button,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenTeamSettings => {
                if self.modal.is_none() {
                    self.modal = Some(team_settings::State::new(self.picture_options()));
                }
                Task::none()
            }
            Message::Modal(message) => {
                let Some(modal) = self.modal.as_mut() else {
                    return Task::none();
                };
                let event = modal.update(message, &self.team);
                self.handle_modal_event(event)
            }
            Message::Notification(message) => {
                self.notifications.update(message);
                Task::none()
            }
        }
    }

    fn handle_modal_event(&mut self, event: team_settings::Event) -> Task<Message> {
        match event {
            team_settings::Event::None => Task::none(),
            team_settings::Event::Exited => {
                // Safe to unmount: the exit transition has finished.
                self.modal = None;
                Task::none()
            }
            team_settings::Event::PickImageRequested => {
                let extensions = self.config.accepted_image_extensions.clone();
                Task::perform(
                    async move {
                        let filters: Vec<&str> =
                            extensions.iter().map(String::as_str).collect();
                        rfd::AsyncFileDialog::new()
                            .add_filter("Images", &filters)
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    |path| {
                        Message::Modal(team_settings::Message::General(GeneralMessage::Picture(
                            picture_upload::Message::FileChosen(path),
                        )))
                    },
                )
            }
            team_settings::Event::ImageSelected { request, path } => {
                Task::perform(picture::load_preview(path), move |result| {
                    Message::Modal(team_settings::Message::General(GeneralMessage::Picture(
                        picture_upload::Message::PreviewLoaded { request, result },
                    )))
                })
            }
            team_settings::Event::ImageRejected(err) => {
                self.notify_image_error(err);
                Task::none()
            }
            team_settings::Event::PreviewReady => Task::none(),
            team_settings::Event::PreviewFailed(err) => {
                self.notify_image_error(err);
                Task::none()
            }
            team_settings::Event::RemoveImageRequested => {
                self.team.icon = None;
                Task::none()
            }
            team_settings::Event::TeamEdited {
                display_name,
                description,
            } => {
                if let Some(display_name) = display_name {
                    self.team.display_name = display_name;
                }
                if let Some(description) = description {
                    self.team.description = description;
                }
                Task::none()
            }
        }
    }

    fn notify_image_error(&mut self, err: crate::error::ImageError) {
        let args = err
            .i18n_args()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        self.notifications
            .push(Notification::error(err.i18n_key()).with_args(args));
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self
            .modal
            .as_ref()
            .is_some_and(team_settings::State::is_animating)
        {
            subscriptions.push(
                time::every(ANIMATION_TICK)
                    .map(|now| Message::Modal(team_settings::Message::AnimationTick(now))),
            );
        }

        if self.notifications.has_visible() {
            subscriptions.push(
                time::every(NOTIFICATION_TICK)
                    .map(|_| Message::Notification(notifications::Message::Tick)),
            );
        }

        Subscription::batch(subscriptions)
    }

    fn view(&self) -> Element<'_, Message> {
        let page = center(
            Column::new()
                .spacing(spacing::MD)
                .align_x(iced::alignment::Horizontal::Center)
                .push(text(self.team.display_name.clone()).size(28))
                .push(
                    button(text(self.i18n.tr("open-team-settings-button")))
                        .on_press(Message::OpenTeamSettings)
                        .padding(spacing::XS)
                        .style(styles::button_primary),
                ),
        );

        let mut layers = Stack::new().push(
            container(page)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        if let Some(modal) = &self.modal {
            layers = layers.push(
                modal
                    .view(team_settings::ViewContext {
                        i18n: &self.i18n,
                        team: Some(&self.team),
                    })
                    .map(Message::Modal),
            );
        }

        if self.notifications.has_visible() {
            layers = layers.push(
                Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification),
            );
        }

        layers.into()
    }
}
