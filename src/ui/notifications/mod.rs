// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Used by the picture upload flow to surface rejected and failed selections
//! without interrupting the modal. Notifications carry an i18n message key
//! (plus optional arguments) and resolve to text at render time, so they
//! follow language switches like every other widget.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
