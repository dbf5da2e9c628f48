// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about search outcomes
//! (nothing found, everything loaded, etc.) without blocking interaction.
//! Fatal fetch errors do not go through here; they use the blocking
//! failure dialog instead.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Severity};
pub use toast::Toast;
