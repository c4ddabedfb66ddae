// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch gestures: vertical drag-to-dismiss and horizontal card swipes.
//!
//! ## Vertical drag
//!
//! [`TouchDrag`] follows a single touch on a dialog. Moving down (the closing
//! direction) translates the dialog one-to-one. Moving up is compressed by
//! [`clamp_overscroll`] so the dialog resists being dragged the wrong way.
//! Releasing after more than [`DragConfig::commit_threshold`] pixels of net
//! downward travel asks the owner to close.
//!
//! ```
//! use konj_dialog::drag::{DragConfig, TouchDrag};
//!
//! let mut drag = TouchDrag::new(DragConfig::default());
//! drag.start(500.0, true);
//! let frame = drag.move_to(440.0, true, 800.0).unwrap();
//! assert_eq!(frame.translate_y, -7.5);
//! let frame = drag.move_to(650.0, true, 800.0).unwrap();
//! assert_eq!(frame.translate_y, 150.0);
//! assert!(drag.end().close);
//! ```
//!
//! ## Horizontal swipe
//!
//! [`CardSwipe`] tracks a horizontal swipe as a percentage of the track width,
//! clamped to a band, and decides on release whether to advance.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compress a wrong-direction drag.
///
/// Returns `(delta / extent / 2) * max_scroll`. Resistance grows with the
/// viewport extent, and a full-viewport drag moves at most `max_scroll / 2`.
/// A non-positive `extent` yields zero.
pub fn clamp_overscroll(delta: f64, extent: f64, max_scroll: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    delta / extent / 2.0 * max_scroll
}

/// Configuration for [`TouchDrag`].
///
/// `max_scroll` and `commit_threshold` are independent: one scales the
/// resistance, the other is an absolute pixel distance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragConfig {
    /// Scale of the wrong-direction resistance.
    pub max_scroll: f64,
    /// Net downward travel in pixels needed to close on release.
    pub commit_threshold: f64,
    /// Downward travel in pixels over which opacity fades to zero.
    pub opacity_falloff: f64,
    /// Fade the dialog while dragging down.
    pub animate_opacity: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            max_scroll: 200.0,
            commit_threshold: 100.0,
            opacity_falloff: 100.0,
            animate_opacity: false,
        }
    }
}

/// Live styles for one move event.
///
/// Transitions must be disabled while a frame is applied so the dialog tracks
/// the finger without easing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragFrame {
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Opacity override, when opacity animation is enabled and the drag points down.
    pub opacity: Option<f64>,
}

/// Outcome of releasing a drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragRelease {
    /// Clear the transform and transition overrides (always true).
    pub clear_styles: bool,
    /// Clear the opacity override.
    pub clear_opacity: bool,
    /// The owner should close the dialog.
    pub close: bool,
}

/// Vertical drag-to-dismiss tracker.
#[derive(Clone, Debug, Default)]
pub struct TouchDrag {
    config: DragConfig,
    start_y: Option<f64>,
    last_y: Option<f64>,
}

impl TouchDrag {
    /// Create an idle tracker.
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            start_y: None,
            last_y: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Touch coordinate recorded at the start of the drag.
    pub fn start_y(&self) -> Option<f64> {
        self.start_y
    }

    /// Last tracked touch coordinate.
    pub fn last_y(&self) -> Option<f64> {
        self.last_y
    }

    /// Begin a drag at `y`. Ignored unless the touch began on a draggable element.
    ///
    /// Returns whether the start was recorded.
    pub fn start(&mut self, y: f64, draggable: bool) -> bool {
        if !draggable {
            return false;
        }
        self.start_y = Some(y);
        self.last_y = None;
        true
    }

    /// Track a move to `y` within a viewport `viewport_height` pixels tall.
    ///
    /// The first accepted move of a drag that was never started records the
    /// start and yields no frame.
    pub fn move_to(&mut self, y: f64, draggable: bool, viewport_height: f64) -> Option<DragFrame> {
        if !draggable {
            return None;
        }
        let Some(start) = self.start_y else {
            self.start_y = Some(y);
            return None;
        };
        let delta = y - start;
        let translate_y = if delta < 0.0 {
            clamp_overscroll(delta, viewport_height, self.config.max_scroll)
        } else {
            delta
        };
        let opacity = (self.config.animate_opacity && delta > 0.0 && self.config.opacity_falloff > 0.0)
            .then(|| (1.0 - delta / self.config.opacity_falloff).max(0.0));
        self.last_y = Some(y);
        Some(DragFrame {
            translate_y,
            opacity,
        })
    }

    /// Release the drag and reset the tracker.
    pub fn end(&mut self) -> DragRelease {
        let close = match (self.start_y, self.last_y) {
            (Some(start), Some(last)) => last - start > self.config.commit_threshold,
            _ => false,
        };
        if close {
            tracing::debug!(
                travel = self.last_y.unwrap_or_default() - self.start_y.unwrap_or_default(),
                "drag committed"
            );
        }
        self.start_y = None;
        self.last_y = None;
        DragRelease {
            clear_styles: true,
            clear_opacity: self.config.animate_opacity,
            close,
        }
    }
}

/// Direction to advance after a committed swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Swiped toward the start (leftward): show the next card.
    Next,
    /// Swiped toward the end (rightward): show the previous card.
    Previous,
}

impl Swipe {
    /// Apply the swipe to `index` in a deck of `len` cards, wrapping around.
    pub fn apply(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = index % len;
        match self {
            Self::Next => (index + 1) % len,
            Self::Previous => (index + len - 1) % len,
        }
    }
}

/// Configuration for [`CardSwipe`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Maximum displacement either way, in percent of the track width.
    pub band_percent: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { band_percent: 20.0 }
    }
}

/// Horizontal swipe tracker for card decks.
#[derive(Clone, Debug, Default)]
pub struct CardSwipe {
    config: SwipeConfig,
    start_x: Option<f64>,
    delta_percent: f64,
}

impl CardSwipe {
    /// Create an idle tracker.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start_x: None,
            delta_percent: 0.0,
        }
    }

    /// Current clamped displacement in percent.
    pub fn delta_percent(&self) -> f64 {
        self.delta_percent
    }

    /// Begin a swipe at `x`.
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.delta_percent = 0.0;
    }

    /// Track a move to `x` on a track `track_width` pixels wide.
    ///
    /// Returns the clamped displacement in percent, or `None` when no swipe is active.
    pub fn move_to(&mut self, x: f64, track_width: f64) -> Option<f64> {
        let start = self.start_x?;
        if track_width <= 0.0 {
            return None;
        }
        let band = magnitude(self.config.band_percent);
        self.delta_percent = ((x - start) / track_width * 100.0).clamp(-band, band);
        Some(self.delta_percent)
    }

    /// Release the swipe; commits when the displacement exceeds half the band.
    pub fn end(&mut self) -> Option<Swipe> {
        let delta = self.delta_percent;
        let active = self.start_x.take().is_some();
        self.delta_percent = 0.0;
        if !active || magnitude(delta) <= magnitude(self.config.band_percent) / 2.0 {
            return None;
        }
        Some(if delta < 0.0 { Swipe::Next } else { Swipe::Previous })
    }
}

// `f64::abs` lives in `std`; keep this usable without it.
fn magnitude(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_direction_is_compressed() {
        assert_eq!(clamp_overscroll(-60.0, 800.0, 200.0), -7.5);
        assert_eq!(clamp_overscroll(-60.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn right_direction_passes_through() {
        let mut d = TouchDrag::new(DragConfig::default());
        assert!(d.start(500.0, true));
        let f = d.move_to(650.0, true, 800.0).unwrap();
        assert_eq!(f.translate_y, 150.0);
        assert_eq!(f.opacity, None);
    }

    #[test]
    fn non_draggable_touch_is_ignored() {
        let mut d = TouchDrag::new(DragConfig::default());
        assert!(!d.start(500.0, false));
        assert_eq!(d.move_to(600.0, false, 800.0), None);
        assert_eq!(d.start_y(), None);
    }

    #[test]
    fn first_move_records_start() {
        let mut d = TouchDrag::new(DragConfig::default());
        assert_eq!(d.move_to(300.0, true, 800.0), None);
        assert_eq!(d.start_y(), Some(300.0));
        assert_eq!(d.move_to(350.0, true, 800.0).unwrap().translate_y, 50.0);
    }

    #[test]
    fn opacity_fades_only_downward() {
        let mut d = TouchDrag::new(DragConfig {
            animate_opacity: true,
            ..DragConfig::default()
        });
        d.start(100.0, true);
        assert_eq!(d.move_to(125.0, true, 800.0).unwrap().opacity, Some(0.75));
        assert_eq!(d.move_to(80.0, true, 800.0).unwrap().opacity, None);
        assert_eq!(d.move_to(400.0, true, 800.0).unwrap().opacity, Some(0.0));
        assert!(d.end().clear_opacity);
    }

    #[test]
    fn release_past_threshold_closes_once() {
        let mut d = TouchDrag::new(DragConfig::default());
        d.start(100.0, true);
        let _ = d.move_to(250.0, true, 800.0);
        let r = d.end();
        assert!(r.close);
        assert!(r.clear_styles);
        assert_eq!((d.start_y(), d.last_y()), (None, None));
        // A second release without a new drag does not close again.
        assert!(!d.end().close);
    }

    #[test]
    fn release_short_of_threshold_resets() {
        let mut d = TouchDrag::new(DragConfig::default());
        d.start(100.0, true);
        let _ = d.move_to(200.0, true, 800.0);
        // Exactly the threshold is not enough.
        assert!(!d.end().close);
        assert_eq!((d.start_y(), d.last_y()), (None, None));

        d.start(100.0, true);
        let _ = d.move_to(20.0, true, 800.0);
        assert!(!d.end().close);
    }

    #[test]
    fn swipe_is_clamped_to_band() {
        let mut s = CardSwipe::new(SwipeConfig::default());
        s.start(500.0);
        assert_eq!(s.move_to(0.0, 1000.0), Some(-20.0));
        assert_eq!(s.move_to(800.0, 1000.0), Some(20.0));
        assert_eq!(s.move_to(550.0, 1000.0), Some(5.0));
    }

    #[test]
    fn swipe_commits_past_half_band() {
        let mut s = CardSwipe::new(SwipeConfig::default());
        s.start(500.0);
        let _ = s.move_to(350.0, 1000.0);
        assert_eq!(s.end(), Some(Swipe::Next));

        s.start(500.0);
        let _ = s.move_to(580.0, 1000.0);
        assert_eq!(s.end(), None);

        s.start(500.0);
        let _ = s.move_to(650.0, 1000.0);
        assert_eq!(s.end(), Some(Swipe::Previous));
        assert_eq!(s.delta_percent(), 0.0);
    }

    #[test]
    fn swipe_without_start_is_noop() {
        let mut s = CardSwipe::new(SwipeConfig::default());
        assert_eq!(s.move_to(100.0, 1000.0), None);
        assert_eq!(s.end(), None);
    }

    #[test]
    fn swipe_apply_wraps() {
        assert_eq!(Swipe::Next.apply(2, 3), 0);
        assert_eq!(Swipe::Previous.apply(0, 3), 2);
        assert_eq!(Swipe::Next.apply(0, 0), 0);
    }
}
