// SPDX-License-Identifier: MPL-2.0
//! Container styles shared across views.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card surface used by the preview and the failure dialog.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Placeholder tile shown while a thumbnail's bytes are in flight.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(Background::Color(weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
