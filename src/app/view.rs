// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the header, the
//! current body (home layout or the active panel) and the floating layers
//! (lightbox, toasts).

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::lightbox;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::packages;
use crate::ui::panel::{Frames, Panel};
use crate::ui::portfolio;
use iced::widget::{Column, Stack};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub lightbox: &'a lightbox::State,
    pub packages: &'a packages::State,
    pub home: &'a home::State,
    pub active_panel: Option<Panel>,
    pub frames: &'a Frames,
    pub window_size: Size,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        window_width: ctx.window_size.width,
        active_panel: ctx.active_panel,
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = match ctx.active_panel {
        None => view_home(&ctx),
        Some(Panel::Portfolio) => view_portfolio(&ctx),
        Some(Panel::Packages) => view_packages(&ctx),
    };

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.lightbox.is_visible() {
        layers = layers.push(lightbox::view(ctx.lightbox).map(Message::Lightbox));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    home::view(home::ViewContext {
        i18n: ctx.i18n,
        state: ctx.home,
        gallery: ctx.gallery,
    })
    .map(Message::Gallery)
}

fn view_portfolio<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    portfolio::view(portfolio::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        frame: ctx.frames.get(Panel::Portfolio),
    })
    .map(Message::Gallery)
}

fn view_packages<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    packages::view(packages::ViewContext {
        i18n: ctx.i18n,
        state: ctx.packages,
        frame: ctx.frames.get(Panel::Packages),
    })
    .map(Message::Packages)
}
