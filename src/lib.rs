// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image-search gallery built with the Iced GUI framework.
//!
//! A search box submits free-text queries to a Pixabay-style image API,
//! results render in a paginated thumbnail grid, and clicking a thumbnail
//! opens a full-size preview overlay.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod search;
pub mod ui;
