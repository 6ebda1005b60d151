// SPDX-License-Identifier: MPL-2.0
//! Scrolling home screen: hero, gallery and contact sections.
//!
//! The landing section carries explicit layout values that are reset to a
//! fixed baseline whenever a panel closes. The baseline is derived from the
//! 80 px header constant, not from the live header height, matching the
//! original presentation.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery;
use iced::alignment::Horizontal;
use iced::widget::{scrollable, text, Column, Container, Id, Text};
use iced::{Element, Length, Padding, Theme};

/// Header height baked into the landing section's baseline layout.
pub const HEADER_BASELINE: f32 = 80.0;

/// Stable Id of the home scrollable, targeted by the close sequence.
#[must_use]
pub fn scroll_id() -> Id {
    Id::new("home-scroll")
}

/// Explicit layout of the landing section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Landing section height below the baseline header.
    pub height: f32,
    /// Lower bound on the landing section height.
    pub min_height: f32,
    /// Offset above the landing section.
    pub top_margin: f32,
    /// Inner padding reserving room for the header.
    pub top_padding: f32,
}

impl Layout {
    /// The baseline presentation restored whenever panels close.
    #[must_use]
    pub fn baseline(viewport_height: f32) -> Self {
        let below_header = (viewport_height - HEADER_BASELINE).max(0.0);
        Self {
            height: below_header,
            min_height: below_header,
            top_margin: 0.0,
            top_padding: HEADER_BASELINE,
        }
    }
}

/// Home screen state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub layout: Layout,
}

impl State {
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            layout: Layout::baseline(viewport_height),
        }
    }

    /// Resets the landing section to its baseline presentation.
    pub fn reset(&mut self, viewport_height: f32) {
        self.layout = Layout::baseline(viewport_height);
    }
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub gallery: &'a gallery::State,
}

/// Render the home screen.
///
/// The gallery grid is the only interactive child, so the screen speaks the
/// gallery's message type directly.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, gallery::Message> {
    let layout = ctx.state.layout;

    let hero = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::TITLE_LG))
            .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::BODY_LG)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout.height.max(layout.min_height)))
    .padding(Padding {
        top: layout.top_margin + layout.top_padding,
        right: spacing::XL,
        bottom: spacing::XL,
        left: spacing::XL,
    })
    .align_x(Horizontal::Center);

    let gallery_section = Column::new()
        .spacing(spacing::MD)
        .push(section_title(ctx.i18n.tr("gallery-title")))
        .push(gallery::grid(
            ctx.gallery,
            gallery::HOME_COLUMNS,
            sizing::THUMBNAIL_HEIGHT,
            ctx.i18n,
        ));

    let contact_section = Column::new()
        .spacing(spacing::XS)
        .push(section_title(ctx.i18n.tr("contact-title")))
        .push(contact_line(ctx.i18n.tr("contact-address")))
        .push(contact_line(ctx.i18n.tr("contact-phone")))
        .push(contact_line(ctx.i18n.tr("contact-email")))
        .push(contact_line(ctx.i18n.tr("contact-hours")));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXL)
        .padding(Padding {
            top: 0.0,
            right: spacing::XL,
            bottom: spacing::XXL,
            left: spacing::XL,
        })
        .push(hero)
        .push(gallery_section)
        .push(contact_section);

    scrollable(content).id(scroll_id()).into()
}

fn section_title<'a>(title: String) -> Element<'a, gallery::Message> {
    Text::new(title)
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        })
        .into()
}

fn contact_line<'a>(line: String) -> Element<'a, gallery::Message> {
    Text::new(line).size(typography::BODY).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_tied_to_the_header_constant() {
        let layout = Layout::baseline(768.0);
        assert_eq!(layout.height, 688.0);
        assert_eq!(layout.min_height, 688.0);
        assert_eq!(layout.top_margin, 0.0);
        assert_eq!(layout.top_padding, HEADER_BASELINE);
    }

    #[test]
    fn baseline_clamps_on_tiny_windows() {
        let layout = Layout::baseline(50.0);
        assert_eq!(layout.height, 0.0);
        assert_eq!(layout.min_height, 0.0);
    }

    #[test]
    fn reset_restores_the_baseline() {
        let mut state = State::new(600.0);
        state.layout.height = 123.0;
        state.layout.top_margin = 40.0;

        state.reset(600.0);

        assert_eq!(state.layout, Layout::baseline(600.0));
    }

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let state = State::new(768.0);
        let gallery_state = gallery::State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            gallery: &gallery_state,
        });
    }
}
