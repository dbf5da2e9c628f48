// SPDX-License-Identifier: MPL-2.0
//! Scroll affordances: the floating scroll-to-top / scroll-to-bottom arrows
//! and the eased auto-scroll animation behind them.
//!
//! Arrow visibility is derived from every viewport report, never persisted:
//! near the top both arrows hide, near the bottom (or during an auto-scroll)
//! only scroll-to-top shows, anywhere else both show. The auto-scroll flag
//! is held shorter than the animation so arrows settle before it ends
//! without flickering mid-flight.

use crate::ui::design_tokens::{palette::WHITE, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container};
use iced::{alignment, Element, Length};
use std::time::{Duration, Instant};

/// Identifier of the gallery scrollable, shared with scroll tasks.
pub const SCROLLABLE_ID: &str = "gallery-scrollable";

/// Distance from an edge below which that edge is considered reached.
const EDGE_THRESHOLD: f32 = 50.0;

/// Total duration of the auto-scroll animation.
const SCROLL_DURATION: Duration = Duration::from_millis(1200);

/// How long the auto-scroll flag suppresses arrow recomputation.
const SUPPRESS_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    Bottom,
}

/// Geometry of the gallery scrollable, captured from `on_scroll`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl Metrics {
    fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn distance_from_top(&self) -> f32 {
        self.offset_y
    }

    fn distance_from_bottom(&self) -> f32 {
        self.max_offset() - self.offset_y
    }
}

#[derive(Debug, Clone, Copy)]
struct AutoScroll {
    from: f32,
    to: f32,
    started_at: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    ScrollTo(Direction),
}

#[derive(Debug, Default)]
pub struct State {
    show_scroll_to_top: bool,
    show_scroll_to_bottom: bool,
    metrics: Metrics,
    auto_scroll: Option<AutoScroll>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn show_scroll_to_top(&self) -> bool {
        self.show_scroll_to_top
    }

    #[must_use]
    pub fn show_scroll_to_bottom(&self) -> bool {
        self.show_scroll_to_bottom
    }

    /// Whether the suppression flag is still held.
    #[must_use]
    pub fn is_auto_scrolling(&self, now: Instant) -> bool {
        self.auto_scroll
            .is_some_and(|a| now.duration_since(a.started_at) < SUPPRESS_DURATION)
    }

    /// Whether the animation still needs tick frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.auto_scroll.is_some()
    }

    /// Folds in a viewport report and rederives arrow visibility.
    pub fn report(&mut self, metrics: Metrics, now: Instant) {
        self.metrics = metrics;
        self.recompute(now);
    }

    /// Starts an auto-scroll toward the given edge.
    pub fn start(&mut self, direction: Direction, now: Instant) {
        let to = match direction {
            Direction::Top => 0.0,
            Direction::Bottom => self.metrics.max_offset(),
        };
        self.auto_scroll = Some(AutoScroll {
            from: self.metrics.offset_y,
            to,
            started_at: now,
        });
        self.recompute(now);
    }

    /// Advances the animation, returning the offset to scroll to for this
    /// frame, or `None` when no animation is running. The final frame snaps
    /// to the target and clears the animation.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let anim = self.auto_scroll?;
        let elapsed = now.duration_since(anim.started_at);

        if elapsed >= SCROLL_DURATION {
            self.auto_scroll = None;
            self.recompute(now);
            return Some(anim.to);
        }

        let t = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        Some(anim.from + (anim.to - anim.from) * ease_in_out(t))
    }

    fn recompute(&mut self, now: Instant) {
        let at_top = self.metrics.distance_from_top() < EDGE_THRESHOLD;
        let at_bottom = self.metrics.distance_from_bottom() < EDGE_THRESHOLD;

        if at_top {
            self.show_scroll_to_top = false;
            self.show_scroll_to_bottom = false;
        } else if at_bottom || self.is_auto_scrolling(now) {
            self.show_scroll_to_top = true;
            self.show_scroll_to_bottom = false;
        } else {
            self.show_scroll_to_top = true;
            self.show_scroll_to_bottom = true;
        }
    }

    /// Renders the floating arrows, or nothing when both are hidden.
    pub fn view(&self) -> Option<Element<'_, Message>> {
        if !self.show_scroll_to_top && !self.show_scroll_to_bottom {
            return None;
        }

        let arrow = |icon, direction| {
            button(icons::sized(icons::tinted(icon, WHITE), sizing::ICON_LG))
                .on_press(Message::ScrollTo(direction))
                .padding(spacing::XXS)
                .style(styles::button::overlay(WHITE, 0.0, 0.5))
        };

        let mut column = Column::new().spacing(spacing::XS);
        if self.show_scroll_to_top {
            column = column.push(arrow(icons::arrow_up_circle(), Direction::Top));
        }
        if self.show_scroll_to_bottom {
            column = column.push(arrow(icons::arrow_down_circle(), Direction::Bottom));
        }

        Some(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG)
                .into(),
        )
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
