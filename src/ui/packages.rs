// SPDX-License-Identifier: MPL-2.0
//! Packages panel: the studio's session packages with collapsible details.
//!
//! Each card carries a disclosure button governing its details block. A
//! card that has never been toggled is collapsed implicitly; the first
//! press always expands it, and later presses alternate between expanded
//! and explicitly collapsed. The implicit and explicit collapsed states are
//! kept distinct on purpose.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::panel::Frame;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, Column, Container, Text};
use iced::{Element, Length};

/// The studio's session packages, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageId {
    Essential,
    Ideal,
    Premium,
}

impl PackageId {
    pub const ALL: [PackageId; 3] = [PackageId::Essential, PackageId::Ideal, PackageId::Premium];

    fn index(self) -> usize {
        match self {
            PackageId::Essential => 0,
            PackageId::Ideal => 1,
            PackageId::Premium => 2,
        }
    }

    /// Number of edited photographs included in the package.
    #[must_use]
    pub fn photo_limit(self) -> u32 {
        match self {
            PackageId::Essential => 10,
            PackageId::Ideal => 20,
            PackageId::Premium => 35,
        }
    }

    fn key(self, suffix: &str) -> String {
        let name = match self {
            PackageId::Essential => "essential",
            PackageId::Ideal => "ideal",
            PackageId::Premium => "premium",
        };
        format!("package-{name}-{suffix}")
    }
}

/// Details visibility for one package card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    /// Never toggled; renders collapsed.
    #[default]
    CollapsedImplicit,
    Expanded,
    /// Collapsed again after having been expanded.
    CollapsedExplicit,
}

impl Disclosure {
    /// The state after one press. Both collapsed states expand, so the
    /// first press on an untouched card always expands it.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::CollapsedImplicit | Disclosure::CollapsedExplicit => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::CollapsedExplicit,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, Disclosure::Expanded)
    }
}

/// State for the packages panel (one disclosure per card).
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    disclosures: [Disclosure; PackageId::ALL.len()],
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the disclosure state for one package.
    #[must_use]
    pub fn disclosure(&self, id: PackageId) -> Disclosure {
        self.disclosures[id.index()]
    }

    fn toggle(&mut self, id: PackageId) {
        let current = self.disclosures[id.index()];
        self.disclosures[id.index()] = current.toggled();
    }
}

/// Messages emitted by the packages panel.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDetails(PackageId),
}

/// Process a packages panel message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ToggleDetails(id) => state.toggle(id),
    }
}

/// Contextual data needed to render the packages panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub frame: Frame,
}

/// Render the packages panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut cards = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    for id in PackageId::ALL {
        cards = cards.push(build_card(&ctx, id));
    }

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("packages-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("packages-intro")).size(typography::BODY))
        .push(cards);

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fixed(ctx.frame.height))
        .style(styles::container::panel)
        .into()
}

/// Build a single package card with its disclosure button.
fn build_card<'a>(ctx: &ViewContext<'a>, id: PackageId) -> Element<'a, Message> {
    let disclosure = ctx.state.disclosure(id);

    let toggle_key = if disclosure.is_expanded() {
        "packages-hide-details"
    } else {
        "packages-show-details"
    };
    let toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::ToggleDetails(id));

    let mut card = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr(&id.key("name"))).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr(&id.key("price"))).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr(&id.key("blurb"))).size(typography::BODY))
        .push(toggle);

    if disclosure.is_expanded() {
        let count = id.photo_limit().to_string();
        card = card
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("package-included-photos", &[("count", count.as_str())]),
                )
                .size(typography::BODY),
            )
            .push(Text::new(ctx.i18n.tr(&id.key("details"))).size(typography::BODY));
    }

    Container::new(card)
        .width(Length::Fixed(sizing::PACKAGE_CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
