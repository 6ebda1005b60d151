// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resize events feed the layout sizer; a periodic tick runs only
//! while notifications are pending so auto-dismiss timers can fire.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Only window resizes are routed; every other native event is handled by
/// the widgets themselves.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
