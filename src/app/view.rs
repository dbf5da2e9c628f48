// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: search bar + gallery scrollable, the floating
//! scroll arrows, the toast overlay, the preview overlay, and the failure
//! dialog. The two overlays are pushed `opaque`, so while either is up
//! nothing beneath receives events - the preview backdrop doubles as the
//! scroll lock.

use super::{App, Message};
use crate::ui::notifications::Toast;
use crate::ui::{failure, gallery, scrollers};
use iced::widget::scrollable::Viewport;
use iced::widget::{opaque, Column, Container, Scrollable, Stack};
use iced::widget::Id;
use iced::{Element, Length};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let searchbar = self.searchbar.view(&self.i18n).map(Message::Searchbar);

        let gallery = self
            .gallery
            .view(gallery::ViewContext {
                i18n: &self.i18n,
                hits: self.session.images(),
                loading: self.loading,
                has_more: self.session.has_more(),
                spinner_rotation: self.spinner_rotation,
            })
            .map(Message::Gallery);

        let scrollable = Scrollable::new(gallery)
            .id(Id::new(scrollers::SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| {
                Message::GalleryScrolled(scrollers::Metrics {
                    offset_y: viewport.absolute_offset().y,
                    viewport_height: viewport.bounds().height,
                    content_height: viewport.content_bounds().height,
                })
            });

        let base = Column::new()
            .push(searchbar)
            .push(scrollable)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut stack = Stack::new().push(base);

        if let Some(arrows) = self.scrollers.view() {
            stack = stack.push(arrows.map(Message::Scrollers));
        }

        stack = stack.push(
            Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification),
        );

        if let Some(preview) = self.preview.view(&self.i18n, self.spinner_rotation) {
            stack = stack.push(opaque(preview.map(Message::Preview)));
        }

        if self.failed {
            stack = stack.push(opaque(failure::view(&self.i18n).map(Message::Failure)));
        }

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
