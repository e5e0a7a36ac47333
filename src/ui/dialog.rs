// SPDX-License-Identifier: MPL-2.0
//! Generic modal dialog primitive.
//!
//! Provides the backdrop, the centered card surface, and the two-phase close
//! lifecycle the settings modal builds on: a close request starts the exit
//! transition, and [`State::tick`] reports completion exactly once so owners
//! can reset transient state and unmount safely.
//!
//! Compact mode is an explicit capability ([`State::set_compact`]) rather
//! than a class toggle on some ancestor container, so collapsing cannot
//! silently fail.

use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::widget::{center, container, mouse_area, opaque};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Length of the exit transition.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Closing { started: Instant },
    Closed,
}

/// Dialog lifecycle and presentation state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    /// Backdrop opacity factor, animated from 1.0 to 0.0 while closing.
    fade: f32,
    compact: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// A freshly mounted dialog starts open and expanded.
    pub fn new() -> Self {
        Self {
            phase: Phase::Open,
            fade: 1.0,
            compact: false,
        }
    }

    /// Starts the exit transition. The owner is only notified once the
    /// transition completes (see [`State::tick`]); further requests while
    /// closing are ignored.
    pub fn request_close(&mut self) {
        if self.phase == Phase::Open {
            self.phase = Phase::Closing {
                started: Instant::now(),
            };
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Whether the exit transition is running and ticks are needed.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    /// Shrinks or restores the dialog card.
    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Advances the exit transition. Returns `true` exactly once, on the tick
    /// where the transition finishes; the dialog is then safe to unmount.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Phase::Closing { started } = self.phase else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= EXIT_TRANSITION {
            self.phase = Phase::Closed;
            self.fade = 0.0;
            true
        } else {
            self.fade = 1.0 - elapsed.as_secs_f32() / EXIT_TRANSITION.as_secs_f32();
            false
        }
    }

    /// Renders the backdrop plus the centered card. `on_backdrop` fires when
    /// the user clicks outside the card; it is suppressed while the exit
    /// transition runs so a close cannot be requested twice.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        card: Element<'a, Message>,
        on_backdrop: Message,
    ) -> Element<'a, Message> {
        let width = if self.compact {
            sizing::MODAL_WIDTH_COMPACT
        } else {
            sizing::MODAL_WIDTH
        };

        let card = container(card)
            .width(Length::Fixed(width))
            .height(if self.compact {
                Length::Shrink
            } else {
                Length::Fixed(sizing::MODAL_HEIGHT)
            })
            .style(styles::modal_card);

        let backdrop = container(center(opaque(card)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop(self.fade));

        let mut area = mouse_area(backdrop);
        if self.is_open() {
            area = area.on_press(on_backdrop);
        }
        opaque(area)
    }
}
