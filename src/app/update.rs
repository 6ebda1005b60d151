// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers dispatched by
//! `App::update`, including the panel open and close sequences.

use super::Message;
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::home;
use crate::ui::lightbox;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::packages;
use crate::ui::panel::{Frame, Frames, Panel};
use iced::widget::scrollable;
use iced::{Size, Task};

/// Notification key shown when the photos directory cannot be scanned.
pub const SCAN_WARNING_KEY: &str = "notification-photo-scan-error";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub lightbox: &'a mut lightbox::State,
    pub packages: &'a mut packages::State,
    pub home: &'a mut home::State,
    pub active_panel: &'a mut Option<Panel>,
    pub fullscreen_mode: &'a mut bool,
    pub scroll_locked: &'a mut bool,
    pub frames: &'a mut Frames,
    pub window_size: &'a mut Size,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navbar messages by running the panel open or close sequence.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::OpenPanel(panel) => open_panel(ctx, panel),
        NavbarEvent::ShowHome => close_all_panels(ctx),
        NavbarEvent::ShowContact => {
            let close = close_all_panels(ctx);
            // The plain link keeps its own navigation after the close
            // sequence has snapped the page to the origin.
            let jump = scrollable::snap_to(home::scroll_id(), scrollable::RelativeOffset::END);
            Task::batch([close, jump])
        }
    }
}

/// Opens a panel. The full sequence runs even if the panel is already the
/// active one; the result is the same either way.
pub fn open_panel(ctx: &mut UpdateContext<'_>, panel: Panel) -> Task<Message> {
    *ctx.fullscreen_mode = true;
    // A single active-panel slot: assigning it hides every other panel and
    // shows the requested one in one step.
    *ctx.active_panel = Some(panel);
    *ctx.scroll_locked = true;

    let header_height = navbar::height(ctx.window_size.width);
    ctx.frames
        .set(panel, Frame::compute(header_height, ctx.window_size.height));

    Task::none()
}

/// Closes every panel and restores the scrolling home layout.
pub fn close_all_panels(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.fullscreen_mode = false;
    *ctx.active_panel = None;
    *ctx.scroll_locked = false;

    ctx.home.reset(ctx.window_size.height);

    scrollable::scroll_to(
        home::scroll_id(),
        scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
    )
}

/// Handles gallery events: thumbnail presses source the lightbox, scan
/// failures surface as a warning toast.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(ctx.gallery, message) {
        GalleryEvent::PhotoPressed(index) => {
            if let Some(photo) = ctx.gallery.photo(index) {
                ctx.lightbox.show(index, photo.handle.clone());
            }
        }
        GalleryEvent::ScanFailed => {
            ctx.notifications
                .push(notifications::Notification::warning(SCAN_WARNING_KEY));
        }
        GalleryEvent::None => {}
    }
    Task::none()
}

/// Handles lightbox messages.
pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    lightbox::update(ctx.lightbox, message);
    Task::none()
}

/// Handles packages panel messages.
pub fn handle_packages_message(
    ctx: &mut UpdateContext<'_>,
    message: packages::Message,
) -> Task<Message> {
    packages::update(ctx.packages, message);
    Task::none()
}

/// Handles a window resize: every panel frame is recomputed from the live
/// header height, visible or not.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;

    let header_height = navbar::height(size.width);
    ctx.frames.recompute_all(header_height, size.height);

    Task::none()
}
