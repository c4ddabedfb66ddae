// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segmented control: active-item matching and the hover highlight.
//!
//! The highlight is a single shape behind the items, clipped by four insets
//! given in percent of the control's box. Hovering an item moves the clip onto
//! that item. The first hover after the pointer entered the control starts from
//! a thin sliver at the item's centre, with no transition, so the highlight
//! grows out of the item instead of sliding in from the previous position.

use kurbo::Rect;

/// How an item id is compared with the selected value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MatchType {
    /// The id equals the selected value.
    #[default]
    Complete,
    /// The selected value is contained in the id.
    PartOfId,
    /// The id is contained in the selected value (for example a route prefix).
    PartOfSelected,
}

/// Whether the item `id` is active for `selected`.
///
/// No selection (or an empty one) activates nothing.
///
/// ```
/// use konj_display::segmented::{is_active, MatchType};
///
/// assert!(is_active("components", Some("/components/button"), MatchType::PartOfSelected));
/// assert!(!is_active("hooks", Some("/components/button"), MatchType::PartOfSelected));
/// assert!(!is_active("hooks", None, MatchType::PartOfId));
/// ```
pub fn is_active(id: &str, selected: Option<&str>, match_type: MatchType) -> bool {
    let Some(selected) = selected.filter(|s| !s.is_empty()) else {
        return false;
    };
    match match_type {
        MatchType::Complete => id == selected,
        MatchType::PartOfSelected => selected.contains(id),
        MatchType::PartOfId => id.contains(selected),
    }
}

/// Clip insets of the highlight, in percent of the control's box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Insets {
    /// Inset from the left edge.
    pub start_x: f64,
    /// Inset from the right edge.
    pub end_x: f64,
    /// Inset from the top edge.
    pub start_y: f64,
    /// Inset from the bottom edge.
    pub end_y: f64,
}

impl Insets {
    /// Insets that clip the control's box `wrapper` down to `item`.
    ///
    /// Returns `None` for a degenerate wrapper.
    pub fn of_item(item: Rect, wrapper: Rect) -> Option<Self> {
        let (w, h) = (wrapper.width(), wrapper.height());
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(Self {
            start_x: (item.x0 - wrapper.x0) / w * 100.0,
            end_x: magnitude(item.x1 - wrapper.x1) / w * 100.0,
            start_y: (item.y0 - wrapper.y0) / h * 100.0,
            end_y: magnitude(wrapper.y1 - item.y1) / h * 100.0,
        })
    }
}

/// Highlight update produced by a hover.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HighlightMove {
    /// Starting clip to apply with a zero duration before `target`, on the first hover only.
    pub seed: Option<Insets>,
    /// Clip to transition to; the highlight becomes fully opaque.
    pub target: Insets,
}

/// Tracks whether the next hover is the first since the pointer entered.
#[derive(Clone, Debug)]
pub struct HighlightTracker {
    initial: bool,
}

impl Default for HighlightTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightTracker {
    /// Width of the starting sliver, in percent.
    pub const SEED_WIDTH: f64 = 4.0;

    /// A tracker waiting for its first hover.
    pub fn new() -> Self {
        Self { initial: true }
    }

    /// Whether the next hover will seed the highlight.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Move the highlight onto `item` inside `wrapper`.
    pub fn hover(&mut self, item: Rect, wrapper: Rect) -> Option<HighlightMove> {
        let target = Insets::of_item(item, wrapper)?;
        let seed = if self.initial {
            self.initial = false;
            let center_x = (item.center().x - wrapper.x0) / wrapper.width() * 100.0;
            let half = Self::SEED_WIDTH / 2.0;
            Some(Insets {
                start_x: center_x - half,
                end_x: 100.0 - half - center_x,
                ..target
            })
        } else {
            None
        };
        Some(HighlightMove { seed, target })
    }

    /// Pointer left or was cancelled: fade the highlight out and reseed next time.
    pub fn leave(&mut self) {
        self.initial = true;
    }
}

fn magnitude(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}
