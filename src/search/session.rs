// SPDX-License-Identifier: MPL-2.0
//! Search session state machine.
//!
//! Pure state: no I/O happens here. The controller feeds in submitted
//! queries and completed pages, and reads back which request (if any) to
//! issue next. Hits accumulate append-only within a query; submitting a
//! genuinely new query resets the session.

use super::types::{ImageHit, SearchPage};

/// Identifies one fetch cycle: the query and 1-based page it was issued
/// for. Completions whose request no longer matches the session's current
/// request are stale and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub query: String,
    pub page: u32,
}

/// What a submitted query means for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A genuinely new query: state was reset, fetch this request.
    NewSearch(Request),
    /// Same query, and the API's total has not moved since the last fetch.
    NoNewImages,
    /// Same query, but the API now reports more hits than at the last
    /// fetch. The count is reported, not fetched.
    ExtraImages(u32),
}

/// Result of folding a completed page into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Zero hits: the query was reset, images and totals untouched.
    NothingFound,
    /// Hits were appended. `complete` is true when every reachable hit for
    /// the query is now loaded.
    Appended { appended: usize, complete: bool },
}

#[derive(Debug, Clone)]
pub struct Session {
    query: String,
    page: u32,
    images: Vec<ImageHit>,
    total_images: u32,
    prev_total_images: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            images: Vec::new(),
            total_images: 0,
            prev_total_images: 0,
        }
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn images(&self) -> &[ImageHit] {
        &self.images
    }

    #[must_use]
    pub fn image(&self, id: u64) -> Option<&ImageHit> {
        self.images.iter().find(|hit| hit.id == id)
    }

    #[must_use]
    pub fn total_images(&self) -> u32 {
        self.total_images
    }

    /// The request a fetch issued right now would be tagged with.
    #[must_use]
    pub fn request(&self) -> Request {
        Request {
            query: self.query.clone(),
            page: self.page,
        }
    }

    /// Whether the API holds more hits than are loaded.
    #[must_use]
    pub fn has_more(&self) -> bool {
        (self.images.len() as u32) < self.total_images
    }

    /// Handles a submitted (already trimmed, non-empty) query.
    ///
    /// A different query resets page and images and asks the caller to
    /// fetch page 1. Re-submitting the identical query never fetches: it
    /// only compares the current total against the snapshot taken when the
    /// last fetch completed.
    pub fn submit(&mut self, query: &str) -> SubmitOutcome {
        if query != self.query {
            self.query = query.to_string();
            self.page = 1;
            self.images.clear();
            SubmitOutcome::NewSearch(self.request())
        } else if self.total_images == self.prev_total_images {
            SubmitOutcome::NoNewImages
        } else {
            SubmitOutcome::ExtraImages(self.total_images.saturating_sub(self.prev_total_images))
        }
    }

    /// Moves to the next page and returns the request to fetch for it.
    pub fn advance_page(&mut self) -> Request {
        self.page += 1;
        self.request()
    }

    /// Folds a successfully fetched page into the session.
    ///
    /// Hits append in arrival order (duplicates permitted when the API
    /// returns overlapping pages). The previous-total snapshot is taken
    /// after the total commits, mirroring one completed fetch cycle.
    pub fn apply_page(&mut self, page: SearchPage) -> PageOutcome {
        if page.hits.is_empty() {
            self.query.clear();
            return PageOutcome::NothingFound;
        }

        let appended = page.hits.len();
        self.images.extend(page.hits);
        self.total_images = page.total_hits;
        self.prev_total_images = page.total_hits;

        PageOutcome::Appended {
            appended,
            complete: self.images.len() == page.total_hits as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64) -> ImageHit {
        ImageHit {
            id,
            webformat_url: format!("https://example.com/{id}/web.jpg"),
            large_image_url: format!("https://example.com/{id}/large.jpg"),
            tags: format!("tag-{id}"),
        }
    }

    fn page(ids: std::ops::Range<u64>, total_hits: u32) -> SearchPage {
        SearchPage {
            hits: ids.map(hit).collect(),
            total_hits,
        }
    }

    #[test]
    fn new_session_is_empty_on_page_one() {
        let session = Session::new();
        assert_eq!(session.page(), 1);
        assert_eq!(session.query(), "");
        assert!(session.images().is_empty());
        assert!(!session.has_more());
    }

    #[test]
    fn new_query_resets_and_requests_page_one() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 40));
        session.advance_page();

        let outcome = session.submit("dogs");
        assert_eq!(
            outcome,
            SubmitOutcome::NewSearch(Request {
                query: "dogs".to_string(),
                page: 1,
            })
        );
        assert!(session.images().is_empty());
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn first_page_populates_images_exactly() {
        let mut session = Session::new();
        session.submit("cats");
        let outcome = session.apply_page(page(0..12, 40));

        assert_eq!(
            outcome,
            PageOutcome::Appended {
                appended: 12,
                complete: false,
            }
        );
        assert_eq!(session.images().len(), 12);
        assert_eq!(session.total_images(), 40);
        assert!(session.has_more());
    }

    #[test]
    fn load_more_appends_in_arrival_order() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 40));

        let request = session.advance_page();
        assert_eq!(request.page, 2);
        assert_eq!(request.query, "cats");

        session.apply_page(page(12..24, 40));
        assert_eq!(session.images().len(), 24);
        let ids: Vec<u64> = session.images().iter().map(|h| h.id).collect();
        assert_eq!(ids, (0..24).collect::<Vec<u64>>());
    }

    #[test]
    fn images_never_exceed_total_in_normal_paging() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 15));
        assert!(session.images().len() <= session.total_images() as usize);

        session.advance_page();
        session.apply_page(page(12..15, 15));
        assert!(session.images().len() <= session.total_images() as usize);
    }

    #[test]
    fn completing_a_query_reports_complete_once() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 15));

        session.advance_page();
        let outcome = session.apply_page(page(12..15, 15));
        assert_eq!(
            outcome,
            PageOutcome::Appended {
                appended: 3,
                complete: true,
            }
        );
        assert!(!session.has_more());
    }

    #[test]
    fn single_page_query_completes_immediately() {
        let mut session = Session::new();
        session.submit("rare");
        let outcome = session.apply_page(page(0..5, 5));
        assert!(matches!(
            outcome,
            PageOutcome::Appended { complete: true, .. }
        ));
        assert!(!session.has_more());
    }

    #[test]
    fn nothing_found_resets_query_but_keeps_images() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 40));

        // The user submits a dud query next; images from the old query are
        // still on screen and must survive.
        session.submit("zzzznotfound");
        // Simulating the new-query reset wiping images first:
        assert!(session.images().is_empty());

        let outcome = session.apply_page(SearchPage {
            hits: vec![],
            total_hits: 0,
        });
        assert_eq!(outcome, PageOutcome::NothingFound);
        assert_eq!(session.query(), "");
        // Totals untouched by an empty page.
        assert_eq!(session.total_images(), 40);
    }

    #[test]
    fn resubmitting_identical_query_never_clears_images() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 40));

        let outcome = session.submit("cats");
        assert_eq!(outcome, SubmitOutcome::NoNewImages);
        assert_eq!(session.images().len(), 12);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn resubmit_reports_total_drift_without_fetching() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 40));

        // The API's total drifted upward since the snapshot.
        session.total_images = 45;

        let outcome = session.submit("cats");
        assert_eq!(outcome, SubmitOutcome::ExtraImages(5));
        // Nothing was fetched: images unchanged.
        assert_eq!(session.images().len(), 12);
    }

    #[test]
    fn duplicates_from_overlapping_pages_are_kept() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..12, 40));
        session.advance_page();
        session.apply_page(page(6..18, 40));

        assert_eq!(session.images().len(), 24);
    }

    #[test]
    fn request_tag_tracks_query_and_page() {
        let mut session = Session::new();
        session.submit("cats");
        let first = session.request();
        session.advance_page();
        let second = session.request();

        assert_ne!(first, second);
        assert_eq!(second.page, 2);

        // A stale completion for ("cats", 1) no longer matches.
        assert_ne!(first, session.request());
    }

    #[test]
    fn image_lookup_by_id() {
        let mut session = Session::new();
        session.submit("cats");
        session.apply_page(page(0..3, 3));

        assert!(session.image(2).is_some());
        assert!(session.image(99).is_none());
    }
}
