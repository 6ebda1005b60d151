// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop.

use crate::ui::design_tokens::{opacity, palette::BLACK, palette::WHITE};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Style for the full-window backdrop behind the lightbox image.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}
