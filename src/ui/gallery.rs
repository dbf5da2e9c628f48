// SPDX-License-Identifier: MPL-2.0
//! Thumbnail gallery.
//!
//! Renders accumulated hits as a fixed-column grid. A tile shows its
//! fetched thumbnail once the bytes arrive and a neutral placeholder until
//! then. Below the grid: the spinner while a fetch is outstanding, or the
//! load-more button when the API holds more hits.

use crate::i18n::fluent::I18n;
use crate::search::ImageHit;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

/// Thumbnails per grid row.
const COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    ImageClicked(u64),
    LoadMorePressed,
}

/// Everything the gallery needs from the controller to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hits: &'a [ImageHit],
    pub loading: bool,
    pub has_more: bool,
    pub spinner_rotation: f32,
}

/// Holds fetched thumbnail handles, keyed by hit id.
#[derive(Debug, Default)]
pub struct State {
    thumbnails: HashMap<u64, Handle>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_thumbnail(&mut self, id: u64, handle: Handle) {
        self.thumbnails.insert(id, handle);
    }

    #[must_use]
    pub fn thumbnail(&self, id: u64) -> Option<&Handle> {
        self.thumbnails.get(&id)
    }

    #[must_use]
    pub fn thumbnail_count(&self) -> usize {
        self.thumbnails.len()
    }

    /// Drops all fetched thumbnails (new query or reload).
    pub fn clear(&mut self) {
        self.thumbnails.clear();
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if ctx.hits.is_empty() && !ctx.loading {
            return empty_state(ctx.i18n);
        }

        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .padding(spacing::MD);

        for chunk in ctx.hits.chunks(COLUMNS) {
            let mut row = Row::new().spacing(spacing::MD);
            for hit in chunk {
                row = row.push(self.tile(hit));
            }
            column = column.push(row);
        }

        if ctx.loading {
            let spinner = AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
                .size(sizing::ICON_LG)
                .into_element();
            let loading_row = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(spinner)
                .push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY));
            column = column.push(Container::new(loading_row).padding(spacing::MD));
        } else if ctx.has_more {
            let load_more = button(Text::new(ctx.i18n.tr("load-more")).size(typography::BODY))
                .on_press(Message::LoadMorePressed)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary);
            column = column.push(Container::new(load_more).padding(spacing::MD));
        }

        column.into()
    }

    fn tile<'a>(&'a self, hit: &'a ImageHit) -> Element<'a, Message> {
        match self.thumbnails.get(&hit.id) {
            Some(handle) => {
                let thumbnail = Image::new(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT));

                button(thumbnail)
                    .on_press(Message::ImageClicked(hit.id))
                    .padding(0.0)
                    .style(styles::button::bare)
                    .into()
            }
            None => Container::new(icons::sized(
                icons::tinted(icons::image(), palette::GRAY_400),
                sizing::ICON_LG,
            ))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::thumbnail_placeholder)
            .into(),
        }
    }
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::sized(
        icons::tinted(icons::image(), palette::GRAY_400),
        sizing::ICON_XL * 2.0,
    );

    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}
