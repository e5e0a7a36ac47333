// SPDX-License-Identifier: MPL-2.0
//! Picture upload widget: current-image display, edit and remove affordances,
//! and an orientation-corrected live preview of a locally selected file.
//!
//! Follows the "state down, messages up" pattern: the widget never performs
//! I/O itself. It emits [`Event`]s asking the owner to open the native file
//! picker or to start a preview read, and receives the results back as
//! [`Message`]s. Every selection is keyed by a monotonically increasing
//! request id; a completion whose id is not the latest issued one is stale
//! and discarded, so a quick second selection can never be overwritten by a
//! slow first read.
//!
//! Rendering priority is strict and exactly one branch shows at a time:
//! pending-file preview, then remote image, then an initials fallback.

use crate::config::RemoveButton;
use crate::error::ImageError;
use crate::i18n::fluent::I18n;
use crate::media::picture::{extension_of, PicturePreview};
use crate::media::QuarterRotation;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, image, text, Column, Row};
use iced::{alignment, ContentFit, Degrees, Element, Length, Rotation};
use std::path::PathBuf;

/// Construction-time options, sourced from the application config.
#[derive(Debug, Clone)]
pub struct Options {
    /// Lowercased extensions the file input accepts.
    pub allowed_extensions: Vec<String>,
    /// Visibility policy for the remove affordance.
    pub remove_button: RemoveButton,
}

impl Options {
    fn allows(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }
}

/// Local widget state: the decoded preview and the stale-read guard.
#[derive(Debug)]
pub struct State {
    options: Options,
    preview: Option<PicturePreview>,
    /// Id of the most recently issued preview request. Completions carrying
    /// any other id are discarded.
    latest_request: u64,
    /// True between issuing a preview request and its latest completion.
    /// New selections are refused while set.
    loading: bool,
}

/// Which of the three mutually exclusive picture branches to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PictureSource {
    /// Pending local preview; wins over everything else.
    Preview,
    /// Already-uploaded image.
    Remote,
    /// Initials fallback.
    Initials,
}

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The edit overlay was clicked.
    EditPressed,
    /// The remove button was clicked.
    RemovePressed,
    /// The native picker finished; `None` means the user cancelled.
    FileChosen(Option<PathBuf>),
    /// An asynchronous preview read finished.
    PreviewLoaded {
        request: u64,
        result: Result<PicturePreview, ImageError>,
    },
}

/// Events propagated to the owner for side effects and callbacks.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the native file picker.
    PickRequested,
    /// A valid file was selected: the owner's file-change callback, and the
    /// signal to start the preview read for `request`.
    FileSelected { request: u64, path: PathBuf },
    /// The selection was refused before any read started.
    Rejected(ImageError),
    /// The preview read finished and the preview was replaced.
    PreviewReady,
    /// The preview read failed; the previous preview is left untouched.
    LoadFailed(ImageError),
    /// The remove callback.
    RemoveRequested,
}

/// Contextual data needed to render the widget.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Already-uploaded image, if any.
    pub remote_image: Option<&'a image::Handle>,
    /// Name whose first two characters form the fallback.
    pub display_name: &'a str,
}

impl State {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            preview: None,
            latest_request: 0,
            loading: false,
        }
    }

    /// Update the state and emit an [`Event`] for the owner when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EditPressed => {
                if self.loading {
                    // A read is in flight; no new selection accepted.
                    return Event::None;
                }
                Event::PickRequested
            }
            Message::RemovePressed => {
                // Dropping the handle releases the decoded preview.
                self.preview = None;
                Event::RemoveRequested
            }
            Message::FileChosen(None) => Event::None,
            Message::FileChosen(Some(path)) => match extension_of(&path) {
                Some(extension) if self.options.allows(&extension) => {
                    self.latest_request += 1;
                    self.loading = true;
                    Event::FileSelected {
                        request: self.latest_request,
                        path,
                    }
                }
                extension => Event::Rejected(ImageError::UnsupportedType(
                    extension.unwrap_or_else(|| "unknown".to_string()),
                )),
            },
            Message::PreviewLoaded { request, result } => {
                if request != self.latest_request {
                    // Stale completion from a superseded selection.
                    return Event::None;
                }
                self.loading = false;
                match result {
                    Ok(preview) => {
                        // Replacing the option drops the previous handle.
                        self.preview = Some(preview);
                        Event::PreviewReady
                    }
                    Err(err) => Event::LoadFailed(err),
                }
            }
        }
    }

    #[cfg(test)]
    fn preview(&self) -> Option<&PicturePreview> {
        self.preview.as_ref()
    }

    #[cfg(test)]
    fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Whether a preview read is in flight; the edit affordance is disabled
    /// while this holds.
    #[cfg(test)]
    fn is_loading(&self) -> bool {
        self.loading
    }

    /// The strict render priority: pending preview, then remote image, then
    /// the initials fallback.
    fn picture_source(&self, remote_image: Option<&image::Handle>) -> PictureSource {
        if self.preview.is_some() {
            PictureSource::Preview
        } else if remote_image.is_some() {
            PictureSource::Remote
        } else {
            PictureSource::Initials
        }
    }

    /// Render the widget.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let source = self.picture_source(ctx.remote_image);
        let picture: Element<'a, Message> = match (source, &self.preview, ctx.remote_image) {
            (PictureSource::Preview, Some(preview), _) => preview_image(preview),
            (PictureSource::Remote, _, Some(remote)) => image::Image::new(remote.clone())
                .width(Length::Fixed(sizing::PICTURE_PREVIEW))
                .height(Length::Fixed(sizing::PICTURE_PREVIEW))
                .content_fit(ContentFit::Contain)
                .into(),
            _ => initials_badge(ctx.display_name),
        };

        let edit_button = button(icons::sized(icons::pencil(), sizing::ICON_MD))
            .on_press_maybe((!self.loading).then_some(Message::EditPressed))
            .padding(spacing::XXS)
            .style(styles::button_link);

        let picture_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Bottom)
            .push(
                container(picture)
                    .padding(spacing::XXS)
                    .style(styles::picture_frame),
            )
            .push(edit_button);

        let mut column = Column::new().spacing(spacing::XS).push(picture_row);

        let has_image = self.preview.is_some() || ctx.remote_image.is_some();
        let show_remove = match self.options.remove_button {
            RemoveButton::Always => true,
            RemoveButton::WhenImagePresent => has_image,
        };
        if show_remove {
            let remove_button = button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::trash(), sizing::ICON_SM))
                    .push(text(ctx.i18n.tr("picture-remove-image")).size(typography::BODY)),
            )
            .on_press(Message::RemovePressed)
            .padding(spacing::XXS)
            .style(styles::button_link);
            column = column.push(remove_button);
        }

        column.into()
    }
}

/// Preview of the pending file with its rotation correction applied.
/// Mirrors were already baked into the handle at decode time.
fn preview_image(preview: &PicturePreview) -> Element<'_, Message> {
    let mut widget = image::Image::new(preview.handle.clone())
        .width(Length::Fixed(sizing::PICTURE_PREVIEW))
        .height(Length::Fixed(sizing::PICTURE_PREVIEW))
        .content_fit(ContentFit::Contain);

    if preview.transform.rotate != QuarterRotation::Deg0 {
        widget = widget.rotation(Rotation::Solid(
            Degrees(preview.transform.rotate.degrees()).into(),
        ));
    }

    widget.into()
}

/// Fallback shown when no image exists: first character of the display name
/// uppercased, followed by the second character as-is.
fn initials_badge<'a>(display_name: &str) -> Element<'a, Message> {
    container(text(initials(display_name)).size(typography::INITIALS))
        .width(Length::Fixed(sizing::PICTURE_PREVIEW))
        .height(Length::Fixed(sizing::PICTURE_PREVIEW))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::initials_badge)
        .into()
}

fn initials(display_name: &str) -> String {
    let mut chars = display_name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut result: String = first.to_uppercase().collect();
    if let Some(second) = chars.next() {
        result.push(second);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Transform;

    fn options() -> Options {
        Options {
            allowed_extensions: vec!["png".into(), "jpg".into()],
            remove_button: RemoveButton::Always,
        }
    }

    fn preview(marker: u32) -> PicturePreview {
        let pixels = vec![255u8; (marker * 4) as usize];
        PicturePreview {
            handle: image::Handle::from_rgba(marker, 1, pixels),
            width: marker,
            height: 1,
            transform: Transform::IDENTITY,
        }
    }

    #[test]
    fn edit_press_requests_picker() {
        let mut state = State::new(options());
        assert!(matches!(
            state.update(Message::EditPressed),
            Event::PickRequested
        ));
    }

    #[test]
    fn edit_press_while_loading_is_refused() {
        let mut state = State::new(options());
        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        assert!(state.is_loading());

        // No picker, and the pending request is untouched.
        assert!(matches!(state.update(Message::EditPressed), Event::None));
        assert_eq!(state.latest_request(), 1);
        assert!(state.preview().is_none());

        // Once the read completes the edit affordance works again.
        state.update(Message::PreviewLoaded {
            request: 1,
            result: Ok(preview(2)),
        });
        assert!(!state.is_loading());
        assert!(matches!(
            state.update(Message::EditPressed),
            Event::PickRequested
        ));
    }

    #[test]
    fn failed_read_also_clears_loading() {
        let mut state = State::new(options());
        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        state.update(Message::PreviewLoaded {
            request: 1,
            result: Err(ImageError::InvalidData("truncated".into())),
        });
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_completion_leaves_loading_set() {
        let mut state = State::new(options());
        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        state.update(Message::FileChosen(Some(PathBuf::from("/b.png"))));
        state.update(Message::PreviewLoaded {
            request: 1,
            result: Ok(preview(7)),
        });
        // The read for the second selection is still outstanding.
        assert!(state.is_loading());
    }

    #[test]
    fn pending_preview_wins_over_remote_image() {
        let mut state = State::new(options());
        let remote = image::Handle::from_rgba(1, 1, vec![0u8; 4]);

        assert_eq!(state.picture_source(Some(&remote)), PictureSource::Remote);
        assert_eq!(state.picture_source(None), PictureSource::Initials);

        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        state.update(Message::PreviewLoaded {
            request: 1,
            result: Ok(preview(2)),
        });
        assert_eq!(state.picture_source(Some(&remote)), PictureSource::Preview);
        assert_eq!(state.picture_source(None), PictureSource::Preview);
    }

    #[test]
    fn cancelled_picker_is_a_noop() {
        let mut state = State::new(options());
        assert!(matches!(
            state.update(Message::FileChosen(None)),
            Event::None
        ));
        assert_eq!(state.latest_request(), 0);
    }

    #[test]
    fn valid_selection_issues_increasing_request_ids() {
        let mut state = State::new(options());
        let first = state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        let second = state.update(Message::FileChosen(Some(PathBuf::from("/b.jpg"))));
        let Event::FileSelected { request: r1, .. } = first else {
            panic!("expected FileSelected");
        };
        let Event::FileSelected { request: r2, .. } = second else {
            panic!("expected FileSelected");
        };
        assert!(r2 > r1);
    }

    #[test]
    fn reselecting_the_same_file_still_fires() {
        let mut state = State::new(options());
        let path = PathBuf::from("/same.png");
        let first = state.update(Message::FileChosen(Some(path.clone())));
        let second = state.update(Message::FileChosen(Some(path)));
        assert!(matches!(first, Event::FileSelected { .. }));
        assert!(matches!(second, Event::FileSelected { .. }));
    }

    #[test]
    fn disallowed_extension_is_rejected() {
        let mut state = State::new(options());
        let event = state.update(Message::FileChosen(Some(PathBuf::from("/pic.tga"))));
        let Event::Rejected(ImageError::UnsupportedType(ext)) = event else {
            panic!("expected rejection");
        };
        assert_eq!(ext, "tga");
        assert_eq!(state.latest_request(), 0);
    }

    #[test]
    fn allow_list_matching_ignores_case() {
        let mut state = State::new(Options {
            allowed_extensions: vec!["PNG".into()],
            remove_button: RemoveButton::Always,
        });
        let event = state.update(Message::FileChosen(Some(PathBuf::from("/pic.Png"))));
        assert!(matches!(event, Event::FileSelected { .. }));
    }

    #[test]
    fn missing_extension_is_rejected() {
        let mut state = State::new(options());
        let event = state.update(Message::FileChosen(Some(PathBuf::from("/noext"))));
        assert!(matches!(
            event,
            Event::Rejected(ImageError::UnsupportedType(_))
        ));
    }

    #[test]
    fn matching_completion_replaces_preview() {
        let mut state = State::new(options());
        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        let event = state.update(Message::PreviewLoaded {
            request: 1,
            result: Ok(preview(2)),
        });
        assert!(matches!(event, Event::PreviewReady));
        assert_eq!(state.preview().unwrap().width, 2);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = State::new(options());
        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        state.update(Message::FileChosen(Some(PathBuf::from("/b.png"))));
        // The read for the first selection finishes late.
        let event = state.update(Message::PreviewLoaded {
            request: 1,
            result: Ok(preview(7)),
        });
        assert!(matches!(event, Event::None));
        assert!(state.preview().is_none());

        // The latest read still lands.
        let event = state.update(Message::PreviewLoaded {
            request: 2,
            result: Ok(preview(3)),
        });
        assert!(matches!(event, Event::PreviewReady));
        assert_eq!(state.preview().unwrap().width, 3);
    }

    #[test]
    fn failed_read_keeps_previous_preview() {
        let mut state = State::new(options());
        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        state.update(Message::PreviewLoaded {
            request: 1,
            result: Ok(preview(5)),
        });
        state.update(Message::FileChosen(Some(PathBuf::from("/b.png"))));
        let event = state.update(Message::PreviewLoaded {
            request: 2,
            result: Err(ImageError::InvalidData("truncated".into())),
        });
        assert!(matches!(event, Event::LoadFailed(_)));
        assert_eq!(state.preview().unwrap().width, 5);
    }

    #[test]
    fn remove_clears_preview_and_emits_callback() {
        let mut state = State::new(options());
        state.update(Message::FileChosen(Some(PathBuf::from("/a.png"))));
        state.update(Message::PreviewLoaded {
            request: 1,
            result: Ok(preview(4)),
        });
        let event = state.update(Message::RemovePressed);
        assert!(matches!(event, Event::RemoveRequested));
        assert!(state.preview().is_none());
    }

    #[test]
    fn initials_uppercase_first_character_only() {
        assert_eq!(initials("acme"), "Ac");
        assert_eq!(initials("Acme"), "Ac");
        assert_eq!(initials("x"), "X");
        assert_eq!(initials(""), "");
    }
}
