// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard listener is acquired exactly while the preview overlay is
//! open and released with it; the periodic tick only runs while something
//! animates or expires (spinners, toasts, auto-scroll).

use super::{App, Message};
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Interval driving spinner rotation, toast expiry, and auto-scroll frames.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) fn create(app: &App) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if app.preview.is_open() {
        subscriptions.push(event::listen_with(|event, status, _window| {
            match status {
                event::Status::Ignored => match event {
                    event::Event::Keyboard(keyboard::Event::KeyPressed {
                        key: keyboard::Key::Named(keyboard::key::Named::Escape),
                        ..
                    }) => Some(Message::EscapePressed),
                    _ => None,
                },
                event::Status::Captured => None,
            }
        }));
    }

    if needs_ticks(app) {
        subscriptions.push(time::every(TICK_INTERVAL).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn needs_ticks(app: &App) -> bool {
    app.loading
        || app.preview.is_waiting()
        || app.notifications.has_notifications()
        || app.scrollers.is_animating()
}
