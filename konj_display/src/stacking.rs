// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking cards: a deck where the selected card moves to the front.
//!
//! ## Positions
//!
//! Each card `i` has a position `mapped[i]`, where `0` is the front of the
//! stack. Selecting a card moves it to `0`. Cards that were in front of it
//! shift back by one. Cards behind it keep their place, so the order of the
//! rest of the deck is preserved.
//!
//! ```
//! use konj_display::stacking::StackOrder;
//!
//! let mut deck = StackOrder::new(4);
//! assert!(deck.select(2));
//! assert_eq!(deck.positions(), &[1, 2, 0, 3]);
//! ```

use alloc::vec::Vec;

/// Whether the deck is stacked or fanned out.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StackMode {
    /// Cards overlap, front card fully visible.
    #[default]
    Stacked,
    /// Cards laid out one after another.
    Expanded,
}

impl StackMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::Expanded,
            Self::Expanded => Self::Stacked,
        }
    }
}

/// Per-card values a renderer needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardStyle {
    /// Position in the stack; `0` is the front.
    pub index: usize,
    /// Stacking order; the front card has the highest value.
    pub reverse_index: usize,
    /// Scale and opacity reduction applied while stacked.
    pub reduction: f64,
    /// Whether this is the front card.
    pub front: bool,
    /// Current deck mode.
    pub mode: StackMode,
}

/// Position bookkeeping for a deck of stacking cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackOrder {
    mapped: Vec<usize>,
    selected: usize,
    mode: StackMode,
}

impl StackOrder {
    /// Reduction per step back in the stack.
    pub const REDUCTION_STEP: f64 = 0.05;

    /// A deck of `len` cards in their natural order, first card in front.
    pub fn new(len: usize) -> Self {
        Self {
            mapped: (0..len).collect(),
            selected: 0,
            mode: StackMode::Stacked,
        }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.mapped.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.mapped.is_empty()
    }

    /// Position of every card, indexed by card.
    pub fn positions(&self) -> &[usize] {
        &self.mapped
    }

    /// Most recently selected card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Current mode.
    pub fn mode(&self) -> StackMode {
        self.mode
    }

    /// Flip between stacked and expanded.
    pub fn toggle_mode(&mut self) -> StackMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Move `card` to the front.
    ///
    /// Returns `false` (and changes nothing) when `card` is already the
    /// selected card or out of range.
    pub fn select(&mut self, card: usize) -> bool {
        if card == self.selected || card >= self.mapped.len() {
            return false;
        }
        let old = self.mapped[card];
        for (i, pos) in self.mapped.iter_mut().enumerate() {
            if i == card {
                *pos = 0;
            } else if *pos <= old {
                *pos += 1;
            }
        }
        self.selected = card;
        tracing::trace!(card, from = old, "stacking card selected");
        true
    }

    /// Position of `card`.
    pub fn position(&self, card: usize) -> Option<usize> {
        self.mapped.get(card).copied()
    }

    /// Stacking order of `card`; the front card is highest.
    pub fn reverse_index(&self, card: usize) -> Option<usize> {
        let pos = self.position(card)?;
        Some(self.mapped.len() - 1 - pos)
    }

    /// Reduction of `card`, growing by [`Self::REDUCTION_STEP`] per position.
    pub fn reduction(&self, card: usize) -> Option<f64> {
        let pos = self.position(card)?;
        Some(pos as f64 * Self::REDUCTION_STEP)
    }

    /// Whether `card` is at the front.
    pub fn is_front(&self, card: usize) -> bool {
        self.position(card) == Some(0)
    }

    /// Renderer values for `card`.
    pub fn style(&self, card: usize) -> Option<CardStyle> {
        Some(CardStyle {
            index: self.position(card)?,
            reverse_index: self.reverse_index(card)?,
            reduction: self.reduction(card)?,
            front: self.is_front(card),
            mode: self.mode,
        })
    }
}

/// Size relationships of a deck.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackLayout {
    /// Card height ratio term.
    pub height_ratio: f64,
    /// Card width ratio term.
    pub width_ratio: f64,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            height_ratio: 3.0,
            width_ratio: 5.0,
        }
    }
}

impl StackLayout {
    fn aspect(&self) -> f64 {
        if self.width_ratio == 0.0 {
            return 0.0;
        }
        self.height_ratio / self.width_ratio
    }

    /// Vertical peek between stacked cards, in rem.
    pub fn spacer_rem(&self) -> f64 {
        2.0 * self.aspect()
    }

    /// Space reserved above the front card for `len` stacked cards, in rem.
    pub fn padding_top_rem(&self, len: usize) -> f64 {
        let spacer = self.spacer_rem();
        let total: f64 = (0..len)
            .map(|i| spacer - i as f64 * StackOrder::REDUCTION_STEP)
            .sum();
        total - spacer * (StackOrder::REDUCTION_STEP * len as f64)
    }

    /// Card height for a deck `width` pixels wide.
    pub fn item_height(&self, width: f64) -> f64 {
        width * self.aspect()
    }
}
