// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search session and
//! the UI components.
//!
//! The `App` struct wires together the search session, the HTTP client,
//! and the component states, and translates messages into side effects
//! like fetch tasks and scroll operations. Policy decisions (stale-request
//! handling, failure-dialog behavior, reload semantics) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::search::{Request, SearchClient, Session};
use crate::ui::notifications::Manager as Notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, preview, scrollers, searchbar};
use iced::{window, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state bridging the search session, localization,
/// and UI components.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    client: SearchClient,
    session: Session,
    /// True only while a search fetch is outstanding.
    loading: bool,
    /// Tag of the most recently issued search; completions carrying any
    /// other tag are stale and dropped.
    in_flight: Option<Request>,
    searchbar: searchbar::State,
    gallery: gallery::State,
    preview: preview::State,
    scrollers: scrollers::State,
    notifications: Notifications,
    /// A fetch failed; the blocking failure dialog is up.
    failed: bool,
    /// Shared rotation angle driving every visible spinner.
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.session.query())
            .field("images", &self.session.images().len())
            .field("loading", &self.loading)
            .field("failed", &self.failed)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl App {
    /// Initializes application state and optionally submits an initial
    /// query passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let config = config::load().unwrap_or_else(|err| {
            log::warn!("falling back to default config: {err}");
            config::Config::default()
        });

        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            client: SearchClient::from_config(&config.search),
            session: Session::new(),
            loading: false,
            in_flight: None,
            searchbar: searchbar::State::new(),
            gallery: gallery::State::new(),
            preview: preview::State::new(),
            scrollers: scrollers::State::new(),
            notifications: Notifications::new(),
            failed: false,
            spinner_rotation: 0.0,
        };

        let task = match flags
            .initial_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
        {
            Some(query) => app.submit_query(query.to_string()),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }

    /// Test constructor with a default config and no startup task.
    #[cfg(test)]
    pub(crate) fn test_instance() -> Self {
        let config = config::Config::default();
        App {
            i18n: I18n::default(),
            theme_mode: config.general.theme_mode,
            client: SearchClient::from_config(&config.search),
            session: Session::new(),
            loading: false,
            in_flight: None,
            searchbar: searchbar::State::new(),
            gallery: gallery::State::new(),
            preview: preview::State::new(),
            scrollers: scrollers::State::new(),
            notifications: Notifications::new(),
            failed: false,
            spinner_rotation: 0.0,
        }
    }
}
