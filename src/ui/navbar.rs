// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The header shows the studio wordmark and four navigation links. Two of
//! the links (Portfolio, Packages) open full-window panels; the other two
//! are plain links that close any open panel. On narrow windows the links
//! wrap onto a second row, which raises the rendered header height.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::panel::Panel;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Rendered header height with the links on one row.
pub const HEIGHT: f32 = 80.0;

/// Rendered header height once the links wrap onto a second row.
pub const WRAPPED_HEIGHT: f32 = 124.0;

/// Window width below which the links wrap.
pub const WRAP_BREAKPOINT: f32 = 720.0;

/// Returns the rendered header height for the given window width.
///
/// This is a live measurement: panel frames are always derived from it
/// rather than from a cached value.
#[must_use]
pub fn height(window_width: f32) -> f32 {
    if window_width < WRAP_BREAKPOINT {
        WRAPPED_HEIGHT
    } else {
        HEIGHT
    }
}

/// Links shown in the navigation bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Home,
    Portfolio,
    Packages,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [
        NavLink::Home,
        NavLink::Portfolio,
        NavLink::Packages,
        NavLink::Contact,
    ];

    /// The panel this link opens, or `None` for plain links.
    #[must_use]
    pub fn target_panel(self) -> Option<Panel> {
        match self {
            NavLink::Portfolio => Some(Panel::Portfolio),
            NavLink::Packages => Some(Panel::Packages),
            NavLink::Home | NavLink::Contact => None,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            NavLink::Home => "nav-home",
            NavLink::Portfolio => "nav-portfolio",
            NavLink::Packages => "nav-packages",
            NavLink::Contact => "nav-contact",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window_width: f32,
    /// Panel currently shown, used to highlight its link.
    pub active_panel: Option<Panel>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    LinkPressed(NavLink),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// A panel trigger was pressed.
    OpenPanel(Panel),
    /// The home link was pressed: close panels and stay at the origin.
    ShowHome,
    /// The contact link was pressed: close panels, then jump to the contact
    /// section.
    ShowContact,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LinkPressed(link) => match link.target_panel() {
            Some(panel) => Event::OpenPanel(panel),
            None => match link {
                NavLink::Contact => Event::ShowContact,
                _ => Event::ShowHome,
            },
        },
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let wordmark = Column::new()
        .push(Text::new(ctx.i18n.tr("studio-name")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("studio-tagline")).size(typography::CAPTION));

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for link in NavLink::ALL {
        links = links.push(build_link(&ctx, link));
    }

    let wrapped = ctx.window_width < WRAP_BREAKPOINT;
    let content: Element<'_, Message> = if wrapped {
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Left)
            .push(wordmark)
            .push(links)
            .into()
    } else {
        Row::new()
            .align_y(Vertical::Center)
            .push(wordmark)
            .push(Space::new().width(Length::Fill))
            .push(links)
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height(ctx.window_width)))
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::header)
        .into()
}

fn build_link<'a>(ctx: &ViewContext<'a>, link: NavLink) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(link.label_key())).size(typography::BODY);
    let is_active = link.target_panel().is_some() && link.target_panel() == ctx.active_panel;

    let styled = if is_active {
        button(label).style(styles::button::nav_link_active)
    } else {
        button(label).style(styles::button::nav_link)
    };

    styled
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::LinkPressed(link))
        .into()
}
