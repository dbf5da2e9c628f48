// SPDX-License-Identifier: MPL-2.0
//! Search domain: API types, the HTTP client, and the session state machine.
//!
//! The [`Session`] owns everything the controller needs to reason about a
//! query's lifecycle (page, accumulated hits, totals); the [`SearchClient`]
//! is the only network boundary.

pub mod client;
pub mod session;
pub mod types;

pub use client::SearchClient;
pub use session::{PageOutcome, Request, Session, SubmitOutcome};
pub use types::{ImageHit, SearchPage};
