// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Search tasks are issued from exactly two paths - the new-query reset to
//! page 1 and the load-more page increment - and every issued request is
//! tagged so completions that no longer match the session are dropped.

use super::{App, Message};
use crate::config;
use crate::error::SearchError;
use crate::search::{PageOutcome, Request, SearchClient, SearchPage, Session, SubmitOutcome};
use crate::ui::notifications::Notification;
use crate::ui::{failure, gallery, preview, scrollers, searchbar};
use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::f32::consts::TAU;
use std::time::Instant;

/// Spinner rotation advance per tick, in radians.
const SPINNER_SPEED: f32 = 0.15;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Searchbar(m) => self.handle_searchbar_message(m),
            Message::Gallery(gallery::Message::ImageClicked(id)) => self.handle_image_click(id),
            Message::Gallery(gallery::Message::LoadMorePressed) => self.handle_load_more(),
            Message::Preview(m) => self.handle_preview_message(m),
            Message::Scrollers(scrollers::Message::ScrollTo(direction)) => {
                self.scrollers.start(direction, Instant::now());
                Task::none()
            }
            Message::Notification(m) => {
                self.notifications.handle_message(&m);
                Task::none()
            }
            Message::Failure(failure::Message::ReloadPressed) => self.reload(),
            Message::SearchCompleted { request, result } => {
                self.handle_search_completed(request, result)
            }
            Message::ThumbnailFetched { id, result } => self.handle_thumbnail_fetched(id, result),
            Message::GalleryScrolled(metrics) => {
                self.scrollers.report(metrics, Instant::now());
                Task::none()
            }
            Message::EscapePressed => {
                self.preview.close();
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    fn handle_searchbar_message(&mut self, message: searchbar::Message) -> Task<Message> {
        let (effect, task) = self.searchbar.handle_message(message);
        let searchbar_task = task.map(Message::Searchbar);

        let side_effect = match effect {
            searchbar::Effect::None => Task::none(),
            searchbar::Effect::EmptyQuery => {
                self.notifications
                    .push(Notification::warning("searchbar-empty-warning"));
                Task::none()
            }
            searchbar::Effect::Submit(query) => self.submit_query(query),
        };

        Task::batch([searchbar_task, side_effect])
    }

    /// Handles a validated (trimmed, non-empty) query submission.
    ///
    /// A new query resets the session and fetches page 1. Re-submitting the
    /// identical query fetches nothing: it only reports how the API's total
    /// moved since the last completed fetch.
    pub(crate) fn submit_query(&mut self, query: String) -> Task<Message> {
        match self.session.submit(&query) {
            SubmitOutcome::NewSearch(request) => {
                self.gallery.clear();
                self.fetch(request)
            }
            SubmitOutcome::NoNewImages => {
                self.notifications.push(
                    Notification::info("notification-no-new-images").with_arg("query", query),
                );
                Task::none()
            }
            SubmitOutcome::ExtraImages(count) => {
                self.notifications.push(
                    Notification::success("notification-extra-images")
                        .with_arg("count", count.to_string())
                        .with_arg("query", query),
                );
                Task::none()
            }
        }
    }

    /// Issues the tagged search task for a request.
    fn fetch(&mut self, request: Request) -> Task<Message> {
        self.loading = true;
        self.in_flight = Some(request.clone());

        let client = self.client.clone();
        let query = request.query.clone();
        let page = request.page;

        Task::perform(
            async move {
                let result = client.search(query, page).await;
                (request, result)
            },
            |(request, result)| Message::SearchCompleted { request, result },
        )
    }

    fn handle_search_completed(
        &mut self,
        request: Request,
        result: Result<SearchPage, SearchError>,
    ) -> Task<Message> {
        if self.in_flight.as_ref() != Some(&request) {
            log::debug!("discarding stale completion for {:?}", request);
            return Task::none();
        }
        self.in_flight = None;

        let task = match result {
            Ok(page) => match self.session.apply_page(page) {
                PageOutcome::NothingFound => {
                    self.notifications
                        .push(Notification::warning("notification-nothing-found"));
                    Task::none()
                }
                PageOutcome::Appended { complete, .. } => {
                    if complete {
                        self.notifications
                            .push(Notification::success("notification-all-loaded"));
                    }
                    self.fetch_missing_thumbnails()
                }
            },
            Err(err) => {
                log::error!("search for {:?} failed: {err}", request.query);
                let reset_task = self.searchbar.reset();
                self.failed = true;
                reset_task
            }
        };

        // Cleared last, in every settle path.
        self.loading = false;
        task
    }

    /// Spawns byte fetches for every hit without a thumbnail yet.
    fn fetch_missing_thumbnails(&self) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .session
            .images()
            .iter()
            .filter(|hit| self.gallery.thumbnail(hit.id).is_none())
            .map(|hit| {
                let client = self.client.clone();
                let id = hit.id;
                let url = hit.thumbnail_url().to_string();
                Task::perform(
                    async move { client.fetch_image(url).await },
                    move |result| Message::ThumbnailFetched { id, result },
                )
            })
            .collect();

        Task::batch(tasks)
    }

    fn handle_thumbnail_fetched(
        &mut self,
        id: u64,
        result: Result<Handle, SearchError>,
    ) -> Task<Message> {
        match result {
            // Drop handles whose hit is gone (query changed mid-flight).
            Ok(handle) => {
                if self.session.image(id).is_some() {
                    self.gallery.insert_thumbnail(id, handle);
                }
            }
            Err(err) => {
                log::warn!("thumbnail fetch for hit {id} failed: {err}");
            }
        }
        Task::none()
    }

    fn handle_load_more(&mut self) -> Task<Message> {
        let request = self.session.advance_page();
        let fetch = self.fetch(request);
        self.scrollers
            .start(scrollers::Direction::Bottom, Instant::now());
        fetch
    }

    fn handle_image_click(&mut self, id: u64) -> Task<Message> {
        let Some(hit) = self.session.image(id) else {
            return Task::none();
        };

        let url = hit.large_image_url.clone();
        self.preview.open(hit.alt().to_string());

        let client = self.client.clone();
        Task::perform(async move { client.fetch_image(url).await }, |result| {
            Message::Preview(preview::Message::Loaded(result))
        })
    }

    fn handle_preview_message(&mut self, message: preview::Message) -> Task<Message> {
        match self.preview.handle_message(message) {
            preview::Effect::None | preview::Effect::Closed => Task::none(),
            preview::Effect::LoadFailed(err) => {
                log::warn!("preview fetch failed: {err}");
                self.notifications
                    .push(Notification::warning("notification-preview-failed"));
                Task::none()
            }
        }
    }

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        if self.loading || self.preview.is_waiting() {
            self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;
        }

        self.notifications.tick();

        if let Some(offset_y) = self.scrollers.tick(now) {
            return operation::scroll_to(
                Id::new(scrollers::SCROLLABLE_ID),
                AbsoluteOffset {
                    x: 0.0,
                    y: offset_y,
                },
            );
        }

        Task::none()
    }

    /// The desktop analog of a full page reload: every piece of session
    /// state is rebuilt from a fresh config read. Only the locale survives.
    fn reload(&mut self) -> Task<Message> {
        let config = config::load().unwrap_or_default();

        self.theme_mode = config.general.theme_mode;
        self.client = SearchClient::from_config(&config.search);
        self.session = Session::new();
        self.searchbar = searchbar::State::new();
        self.gallery.clear();
        self.preview.close();
        self.scrollers = scrollers::State::new();
        self.notifications.clear();
        self.loading = false;
        self.in_flight = None;
        self.failed = false;
        self.spinner_rotation = 0.0;

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ImageHit;

    fn hit(id: u64) -> ImageHit {
        ImageHit {
            id,
            webformat_url: format!("https://example.com/{id}/web.jpg"),
            large_image_url: format!("https://example.com/{id}/large.jpg"),
            tags: format!("tag-{id}"),
        }
    }

    fn page(count: u64, total_hits: u32) -> SearchPage {
        SearchPage {
            hits: (0..count).map(hit).collect(),
            total_hits,
        }
    }

    fn submitted(app: &mut App, query: &str) {
        let _ = app.update(Message::Searchbar(searchbar::Message::InputChanged(
            query.to_string(),
        )));
        let _ = app.update(Message::Searchbar(searchbar::Message::Submitted));
    }

    fn completed(app: &mut App, result: Result<SearchPage, SearchError>) {
        let request = app.in_flight.clone().expect("a fetch must be in flight");
        let _ = app.update(Message::SearchCompleted { request, result });
    }

    #[test]
    fn empty_submit_warns_without_fetching() {
        let mut app = App::test_instance();
        submitted(&mut app, "   ");

        assert!(!app.loading);
        assert!(app.in_flight.is_none());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn new_query_sets_loading_and_tags_the_request() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");

        assert!(app.loading);
        let request = app.in_flight.clone().expect("request issued");
        assert_eq!(request.query, "cats");
        assert_eq!(request.page, 1);
        assert!(app.session.images().is_empty());
    }

    #[test]
    fn successful_page_appends_and_clears_loading() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(12, 40)));

        assert!(!app.loading);
        assert_eq!(app.session.images().len(), 12);
        assert_eq!(app.session.total_images(), 40);
        assert!(app.session.has_more());
        assert!(!app.failed);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        let stale = Request {
            query: "dogs".to_string(),
            page: 1,
        };

        let _ = app.update(Message::SearchCompleted {
            request: stale,
            result: Ok(page(5, 5)),
        });

        // Still waiting on the real request; nothing was applied.
        assert!(app.loading);
        assert!(app.session.images().is_empty());
    }

    #[test]
    fn zero_hits_warn_and_reset_query_only() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(12, 40)));

        submitted(&mut app, "zzzznotfound");
        completed(&mut app, Ok(page(0, 0)));

        assert!(!app.loading);
        assert_eq!(app.session.query(), "");
        assert!(!app.failed);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn completing_all_results_notifies_once() {
        let mut app = App::test_instance();
        submitted(&mut app, "rare");
        completed(&mut app, Ok(page(5, 5)));

        assert!(!app.session.has_more());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn load_more_advances_page_and_starts_auto_scroll() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(12, 40)));

        let _ = app.update(Message::Gallery(gallery::Message::LoadMorePressed));

        assert!(app.loading);
        assert_eq!(app.in_flight.as_ref().map(|r| r.page), Some(2));
        assert!(app.scrollers.is_animating());
    }

    #[test]
    fn resubmitting_identical_query_does_not_refetch() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(12, 40)));

        submitted(&mut app, "cats");

        assert!(!app.loading);
        assert!(app.in_flight.is_none());
        assert_eq!(app.session.images().len(), 12);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn fetch_failure_clears_searchbar_and_blocks() {
        let mut app = App::test_instance();
        let _ = app.update(Message::Searchbar(searchbar::Message::InputChanged(
            "cats".to_string(),
        )));
        let _ = app.update(Message::Searchbar(searchbar::Message::Submitted));
        completed(&mut app, Err(SearchError::Timeout));

        assert!(app.failed);
        assert!(!app.loading);
        assert_eq!(app.searchbar.input(), "");
    }

    #[test]
    fn reload_restores_a_fresh_session() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Err(SearchError::Status(500)));
        assert!(app.failed);

        let _ = app.update(Message::Failure(failure::Message::ReloadPressed));

        assert!(!app.failed);
        assert!(!app.loading);
        assert!(app.in_flight.is_none());
        assert_eq!(app.session.query(), "");
        assert!(app.session.images().is_empty());
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn image_click_opens_preview_for_known_hit() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(3, 3)));

        let _ = app.update(Message::Gallery(gallery::Message::ImageClicked(1)));
        assert!(app.preview.is_open());
        assert!(app.preview.is_waiting());
    }

    #[test]
    fn image_click_for_unknown_hit_is_ignored() {
        let mut app = App::test_instance();
        let _ = app.update(Message::Gallery(gallery::Message::ImageClicked(99)));
        assert!(!app.preview.is_open());
    }

    #[test]
    fn escape_closes_the_preview() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(3, 3)));
        let _ = app.update(Message::Gallery(gallery::Message::ImageClicked(0)));

        let _ = app.update(Message::EscapePressed);
        assert!(!app.preview.is_open());
    }

    #[test]
    fn thumbnail_for_dropped_hit_is_ignored() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(3, 3)));

        // Query changes; old hit ids are gone before the bytes arrive.
        submitted(&mut app, "dogs");

        let _ = app.update(Message::ThumbnailFetched {
            id: 1,
            result: Ok(Handle::from_bytes(vec![0u8])),
        });
        assert_eq!(app.gallery.thumbnail_count(), 0);
    }

    #[test]
    fn preview_fetch_failure_warns_and_closes() {
        let mut app = App::test_instance();
        submitted(&mut app, "cats");
        completed(&mut app, Ok(page(3, 3)));
        let _ = app.update(Message::Gallery(gallery::Message::ImageClicked(0)));

        let _ = app.update(Message::Preview(preview::Message::Loaded(Err(
            SearchError::Status(404),
        ))));

        assert!(!app.preview.is_open());
        assert_eq!(app.notifications.visible_count(), 1);
        assert!(!app.failed);
    }
}
