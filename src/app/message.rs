// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::SearchError;
use crate::search::{Request, SearchPage};
use crate::ui::{failure, gallery, notifications, preview, scrollers, searchbar};
use iced::widget::image::Handle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Searchbar(searchbar::Message),
    Gallery(gallery::Message),
    Preview(preview::Message),
    Scrollers(scrollers::Message),
    Notification(notifications::Message),
    Failure(failure::Message),
    /// A search fetch settled. `request` tags the query/page it was issued
    /// for so stale completions can be discarded.
    SearchCompleted {
        request: Request,
        result: Result<SearchPage, SearchError>,
    },
    /// Thumbnail bytes for one hit settled.
    ThumbnailFetched {
        id: u64,
        result: Result<Handle, SearchError>,
    },
    /// The gallery scrollable reported its viewport.
    GalleryScrolled(scrollers::Metrics),
    /// Escape pressed while the preview is open.
    EscapePressed,
    Tick(Instant), // Periodic tick for spinners, toasts, and auto-scroll
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Optional query submitted on startup.
    pub initial_query: Option<String>,
}
