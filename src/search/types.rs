// SPDX-License-Identifier: MPL-2.0
//! Deserialized shapes of the Pixabay-style search API.

use serde::Deserialize;

/// One image record returned by the search API.
///
/// Only the fields the gallery consumes are kept; the API sends more.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageHit {
    pub id: u64,

    /// Medium-resolution variant used for gallery thumbnails.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,

    /// Full-resolution variant shown in the preview overlay.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,

    /// Comma-separated descriptive tags, used as alt text / caption.
    #[serde(default)]
    pub tags: String,
}

impl ImageHit {
    /// URL of the thumbnail variant.
    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.webformat_url
    }

    /// Descriptive text for captions.
    #[must_use]
    pub fn alt(&self) -> &str {
        &self.tags
    }
}

/// One fixed-size slice of results for a given query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<ImageHit>,

    /// Number of hits reachable through the API for this query,
    /// consistent across pages of the same query.
    #[serde(rename = "totalHits")]
    pub total_hits: u32,
}
