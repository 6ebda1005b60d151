// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. The application only ever raises warnings
//! it recovers from (unreadable settings, a failed photo scan), so there
//! is a single kind of toast: it appears temporarily, can be dismissed by
//! hand, and never blocks interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with its dismiss deadline
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::Notification;
pub use toast::Toast;
