// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. SVG sources recolor cleanly through
//! `svg::Style`, so a single monochrome set serves both themes.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `clear_search`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(search, "search.svg", "Magnifier: circle with a handle.");
define_icon!(cross, "cross.svg", "Cross: two crossed diagonal lines.");
define_icon!(
    arrow_up_circle,
    "arrow-up-circle.svg",
    "Upward arrow inside a circle."
);
define_icon!(
    arrow_down_circle,
    "arrow-down-circle.svg",
    "Downward arrow inside a circle."
);
define_icon!(checkmark, "checkmark.svg", "Checkmark: single tick stroke.");
define_icon!(info, "info.svg", "Lowercase i inside a circle.");
define_icon!(warning, "warning.svg", "Exclamation mark inside a triangle.");
define_icon!(image, "image.svg", "Framed landscape with a sun.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}

/// Tints an icon with a fixed color, regardless of theme.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_defined() {
        // Verify handle creation does not panic for any icon.
        let _ = search();
        let _ = cross();
        let _ = arrow_up_circle();
        let _ = arrow_down_circle();
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = image();
    }
}
