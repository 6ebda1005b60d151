// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::packages;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    Packages(packages::Message),
    Notification(notifications::NotificationMessage),
    /// The window was resized; all panel frames are recomputed.
    WindowResized(iced::Size),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional photos directory to scan instead of the configured one.
    pub photos_dir: Option<String>,
}
