// SPDX-License-Identifier: MPL-2.0
//! Portfolio panel: the full photo collection as an internally scrolling
//! grid, framed below the header by the layout sizer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::panel::Frame;
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render the portfolio panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub frame: Frame,
}

/// Render the portfolio panel.
///
/// Thumbnail presses open the lightbox exactly as from the home gallery, so
/// the panel speaks the gallery's message type.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, gallery::Message> {
    let intro_key = if ctx.gallery.is_empty() {
        "portfolio-empty"
    } else {
        "portfolio-intro"
    };

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .push(Text::new(ctx.i18n.tr("portfolio-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr(intro_key)).size(typography::BODY))
        .push(gallery::grid(
            ctx.gallery,
            gallery::PORTFOLIO_COLUMNS,
            sizing::PORTFOLIO_TILE_HEIGHT,
            ctx.i18n,
        ));

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fixed(ctx.frame.height))
        .style(styles::container::panel)
        .into()
}
