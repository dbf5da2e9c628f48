// SPDX-License-Identifier: MPL-2.0
//! Search bar component.
//!
//! Owns the editable text value. Submission validates a non-empty trimmed
//! query and hands it to the parent through an [`Effect`]; whitespace-only
//! input produces [`Effect::EmptyQuery`] and never reaches the parent's
//! fetch path. The parent can force-clear and unfocus the field through
//! [`State::reset`] (used after a failed fetch) instead of reaching into
//! the widget.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row};
use iced::widget::{operation, Id};
use iced::{alignment, Element, Length, Task};

/// Identifier of the text input, used for focus operations.
pub const INPUT_ID: &str = "searchbar-input";

#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
    Cleared,
}

/// What the parent must act on after a searchbar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A non-empty, trimmed query was submitted.
    Submit(String),
    /// Submission attempted with an empty or whitespace-only value.
    EmptyQuery,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw input value.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                (Effect::None, Task::none())
            }
            Message::Submitted => {
                let trimmed = self.input.trim();
                if trimmed.is_empty() {
                    (Effect::EmptyQuery, Task::none())
                } else {
                    (Effect::Submit(trimmed.to_string()), Task::none())
                }
            }
            Message::Cleared => {
                self.input.clear();
                // Clearing returns focus to the field for the next query.
                (Effect::None, operation::focus(Id::new(INPUT_ID)))
            }
        }
    }

    /// External reset: empties the field and removes its focus.
    ///
    /// The fetch-failure path calls this before showing the failure dialog.
    pub fn reset<T>(&mut self) -> Task<T>
    where
        T: Send + 'static,
    {
        self.input.clear();
        operation::unfocus()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let submit_button = button(icons::sized(icons::search(), sizing::ICON_SM))
            .on_press(Message::Submitted)
            .padding(spacing::XS)
            .style(styles::button::primary);

        let input = text_input(&i18n.tr("searchbar-placeholder"), &self.input)
            .id(Id::new(INPUT_ID))
            .on_input(Message::InputChanged)
            .on_submit(Message::Submitted)
            .size(typography::BODY)
            .padding(spacing::XS)
            .width(Length::Fill);

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(submit_button)
            .push(input);

        // Clear affordance only while there is something to clear.
        if !self.input.is_empty() {
            row = row.push(
                button(icons::sized(icons::cross(), sizing::ICON_SM))
                    .on_press(Message::Cleared)
                    .padding(spacing::XXS)
                    .style(styles::button::bare),
            );
        }

        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::SM, spacing::MD])
            .into()
    }
}
