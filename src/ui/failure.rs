// SPDX-License-Identifier: MPL-2.0
//! Blocking failure dialog.
//!
//! Shown when a search fetch fails. Unlike toasts it covers the whole
//! window and offers exactly one way out: the Reload action, which rebuilds
//! the session from scratch. The backdrop deliberately has no close
//! handler; the layer is rendered opaque by the caller so nothing beneath
//! stays interactive.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    ReloadPressed,
}

/// Renders the full-window failure overlay.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::sized(
        icons::tinted(icons::warning(), palette::ERROR_500),
        sizing::ICON_XL,
    );

    let title = Text::new(i18n.tr("failure-title")).size(typography::TITLE_LG);

    let message = Text::new(i18n.tr("failure-message"))
        .size(typography::BODY)
        .align_x(alignment::Horizontal::Center);

    let reload = button(Text::new(i18n.tr("failure-reload")).size(typography::BODY))
        .on_press(Message::ReloadPressed)
        .padding([spacing::XS, spacing::XL])
        .style(styles::button::primary);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(icon)
            .push(title)
            .push(message)
            .push(reload),
    )
    .padding(spacing::XL)
    .max_width(sizing::DIALOG_MAX_WIDTH)
    .style(|theme: &Theme| styles::container::card(theme));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::backdrop)
        .into()
}
