// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language detection, translation file
//! loading, and string formatting.

pub mod fluent;
