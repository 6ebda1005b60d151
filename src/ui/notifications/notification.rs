// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This application never blocks on a user-visible condition: the two
//! things worth surfacing (an unreadable settings file, a photos directory
//! that cannot be scanned) are warnings the app recovers from by using
//! defaults. A notification is an i18n message key with optional
//! arguments and an auto-dismiss deadline.

use std::time::{Duration, Instant};

/// How long a warning toast stays up unless a custom deadline is set.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// A warning to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// The i18n key for the warning message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    /// When this notification was created.
    created_at: Instant,
    /// Deadline after which the toast dismisses itself.
    dismiss_after: Duration,
}

impl Notification {
    /// Creates a warning with the given message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            dismiss_after: DISMISS_AFTER,
        }
    }

    /// Adds an argument for message interpolation.
    ///
    /// Arguments are passed to the i18n system when resolving the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the default auto-dismiss deadline.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.dismiss_after = duration;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification's deadline has passed.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.age() >= self.dismiss_after
    }
}
