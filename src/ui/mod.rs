// SPDX-License-Identifier: MPL-2.0
//! UI components, styles, and design tokens.

pub mod design_tokens;
pub mod failure;
pub mod gallery;
pub mod icons;
pub mod notifications;
pub mod preview;
pub mod scrollers;
pub mod searchbar;
pub mod styles;
pub mod theming;
pub mod widgets;
