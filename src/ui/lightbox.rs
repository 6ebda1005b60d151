// SPDX-License-Identifier: MPL-2.0
//! Full-window image preview overlay.
//!
//! The lightbox floats above whatever screen is showing. Opening it always
//! sets the source to the pressed thumbnail's photo; closing it only clears
//! visibility, so the stored source goes stale while hidden and is replaced
//! on the next open.

use crate::ui::design_tokens::{opacity, palette::WHITE, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, Container, Image, Space, Stack, Text};
use iced::{Element, Length};

/// The photo currently sourced by the lightbox.
#[derive(Debug, Clone)]
pub struct Source {
    pub index: usize,
    pub handle: image::Handle,
}

/// Lightbox state.
#[derive(Debug, Default)]
pub struct State {
    visible: bool,
    source: Option<Source>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source to the given photo and shows the lightbox.
    pub fn show(&mut self, index: usize, handle: image::Handle) {
        self.source = Some(Source { index, handle });
        self.visible = true;
    }

    /// Hides the lightbox. The source is left unchanged.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the currently sourced photo, visible or not.
    #[must_use]
    pub fn source_index(&self) -> Option<usize> {
        self.source.as_ref().map(|source| source.index)
    }
}

/// Messages emitted by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "✕" close control was pressed.
    ClosePressed,
    /// The backdrop itself was pressed (not the image).
    BackdropPressed,
    /// The image was pressed; the press is consumed without effect.
    ImagePressed,
}

/// Process a lightbox message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ClosePressed | Message::BackdropPressed => state.hide(),
        Message::ImagePressed => {}
    }
}

/// Render the lightbox layer. Only called while the lightbox is visible.
pub fn view(state: &State) -> Element<'_, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop);

    if let Some(source) = &state.source {
        // The image consumes its own presses so only true backdrop presses
        // dismiss the preview.
        let preview = mouse_area(Image::new(source.handle.clone())).on_press(Message::ImagePressed);

        layers = layers.push(
            Container::new(preview)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XXL)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    let close_button = button(Text::new("✕").size(typography::TITLE_SM))
        .on_press(Message::ClosePressed)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    layers
        .push(
            Container::new(close_button)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::MD),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![255_u8; 4])
    }

    #[test]
    fn new_lightbox_is_hidden_without_source() {
        let state = State::new();
        assert!(!state.is_visible());
        assert!(state.source_index().is_none());
    }

    #[test]
    fn show_sets_source_and_visibility() {
        let mut state = State::new();
        state.show(2, sample_handle());

        assert!(state.is_visible());
        assert_eq!(state.source_index(), Some(2));
    }

    #[test]
    fn close_press_hides_but_keeps_source() {
        let mut state = State::new();
        state.show(1, sample_handle());

        update(&mut state, Message::ClosePressed);

        assert!(!state.is_visible());
        assert_eq!(state.source_index(), Some(1));
    }

    #[test]
    fn backdrop_press_hides_regardless_of_prior_state() {
        let mut state = State::new();
        state.show(0, sample_handle());
        update(&mut state, Message::BackdropPressed);
        assert!(!state.is_visible());

        // Already hidden: a further backdrop press is harmless
        update(&mut state, Message::BackdropPressed);
        assert!(!state.is_visible());
    }

    #[test]
    fn image_press_changes_nothing() {
        let mut state = State::new();
        state.show(3, sample_handle());

        update(&mut state, Message::ImagePressed);

        assert!(state.is_visible());
        assert_eq!(state.source_index(), Some(3));
    }

    #[test]
    fn reopening_replaces_the_stale_source() {
        let mut state = State::new();
        state.show(0, sample_handle());
        update(&mut state, Message::ClosePressed);

        state.show(4, sample_handle());

        assert!(state.is_visible());
        assert_eq!(state.source_index(), Some(4));
    }

    #[test]
    fn view_renders_with_and_without_source() {
        let mut state = State::new();
        let _ = view(&state);

        state.show(0, sample_handle());
        let _ = view(&state);
    }
}
