// SPDX-License-Identifier: MPL-2.0
//! Full-size preview overlay.
//!
//! Renders nothing while closed. Open, it stacks a dimmed backdrop under a
//! centered card: a spinner until the fetched full-resolution image
//! arrives, then the image, with the hit's tags as a caption in either
//! case. A press on the backdrop closes it; a press anywhere on the card is
//! swallowed so the image never closes the overlay. Escape handling lives
//! in the app's keyboard subscription, which exists exactly while the
//! preview is open.

use crate::error::SearchError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::{Handle, Image};
use iced::widget::{mouse_area, Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    /// Full-resolution bytes arrived (or failed to).
    Loaded(Result<Handle, SearchError>),
    /// Press on the dimmed backdrop.
    BackdropPressed,
    /// Press anywhere on the card; swallowed so it cannot close the overlay.
    CardPressed,
}

/// What the parent must act on after a preview message.
#[derive(Debug)]
pub enum Effect {
    None,
    /// The preview closed; background interaction may resume.
    Closed,
    /// The full-size fetch failed; the preview closed itself.
    LoadFailed(SearchError),
}

#[derive(Debug)]
struct Preview {
    alt: String,
    image: Option<Handle>,
}

#[derive(Debug, Default)]
pub struct State {
    open: Option<Preview>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the preview for a hit; the fetched image arrives later via
    /// [`Message::Loaded`].
    pub fn open(&mut self, alt: String) {
        self.open = Some(Preview { alt, image: None });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open and still waiting for the full-size image.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.open.as_ref().is_some_and(|p| p.image.is_none())
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Loaded(Ok(handle)) => {
                if let Some(preview) = &mut self.open {
                    preview.image = Some(handle);
                }
                Effect::None
            }
            Message::Loaded(Err(err)) => {
                self.close();
                Effect::LoadFailed(err)
            }
            Message::BackdropPressed => {
                self.close();
                Effect::Closed
            }
            Message::CardPressed => Effect::None,
        }
    }

    /// Renders the overlay; `None` while closed.
    pub fn view<'a>(
        &'a self,
        i18n: &'a I18n,
        spinner_rotation: f32,
    ) -> Option<Element<'a, Message>> {
        let preview = self.open.as_ref()?;

        let body: Element<'a, Message> = match &preview.image {
            Some(handle) => Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .into(),
            None => {
                let spinner = AnimatedSpinner::new(
                    crate::ui::design_tokens::palette::WHITE,
                    spinner_rotation,
                )
                .into_element();

                let loading = Column::new()
                    .spacing(spacing::SM)
                    .align_x(alignment::Horizontal::Center)
                    .push(spinner)
                    .push(Text::new(i18n.tr("preview-loading")).size(typography::BODY));

                Container::new(loading)
                    .padding(spacing::XL)
                    .style(styles::overlay::panel(radius::MD))
                    .into()
            }
        };

        let caption = Text::new(preview.alt.clone()).size(typography::CAPTION);

        let card = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(body)
                .push(caption),
        )
        .padding(spacing::MD)
        .max_width(sizing::PREVIEW_MAX_WIDTH)
        .style(|theme: &Theme| styles::container::card(theme));

        let backdrop = mouse_area(
            Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::BackdropPressed);

        let centered_card = Container::new(mouse_area(card).on_press(Message::CardPressed))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG);

        Some(Stack::new().push(backdrop).push(centered_card).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_state_renders_nothing() {
        let state = State::new();
        assert!(!state.is_open());
        assert!(!state.is_waiting());
    }

    #[test]
    fn open_waits_for_the_image() {
        let mut state = State::new();
        state.open("blossom, bloom".to_string());
        assert!(state.is_open());
        assert!(state.is_waiting());
    }

    #[test]
    fn loaded_image_stops_the_wait() {
        let mut state = State::new();
        state.open("blossom".to_string());
        let effect = state.handle_message(Message::Loaded(Ok(Handle::from_bytes(vec![0u8]))));
        assert!(matches!(effect, Effect::None));
        assert!(state.is_open());
        assert!(!state.is_waiting());
    }

    #[test]
    fn backdrop_press_closes() {
        let mut state = State::new();
        state.open("blossom".to_string());
        let effect = state.handle_message(Message::BackdropPressed);
        assert!(matches!(effect, Effect::Closed));
        assert!(!state.is_open());
    }

    #[test]
    fn card_press_is_swallowed() {
        let mut state = State::new();
        state.open("blossom".to_string());
        let effect = state.handle_message(Message::CardPressed);
        assert!(matches!(effect, Effect::None));
        assert!(state.is_open());
    }

    #[test]
    fn failed_load_closes_and_reports() {
        let mut state = State::new();
        state.open("blossom".to_string());
        let effect = state.handle_message(Message::Loaded(Err(SearchError::Timeout)));
        assert!(matches!(effect, Effect::LoadFailed(SearchError::Timeout)));
        assert!(!state.is_open());
    }

    #[test]
    fn stale_load_after_close_is_ignored() {
        let mut state = State::new();
        state.open("blossom".to_string());
        state.close();
        let effect = state.handle_message(Message::Loaded(Ok(Handle::from_bytes(vec![0u8]))));
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_open());
    }
}
