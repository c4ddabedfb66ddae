// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the dialog lifecycle: identifiers, document metrics, and effects.
//!
//! ## Overview
//!
//! The lifecycle never touches a document directly. Each operation on a
//! [`Dialog`](crate::dialog::Dialog) returns a list of [`Effect`] values that a
//! rendering layer applies in order.

use alloc::string::String;
use core::time::Duration;

/// Identifier for a dialog instance.
///
/// Allocated by [`ScrollLock::register`](crate::lock::ScrollLock::register) so that
/// every dialog sharing a lock has a distinct id.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DialogId(pub(crate) u32);

impl DialogId {
    /// Raw numeric value, useful for logging and keyed storage.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Inline style values on the document root that a scroll lock overrides.
///
/// `None` means the property had no inline value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootStyle {
    /// Inline `padding-right` before the lock engaged.
    pub padding_right: Option<String>,
    /// Inline `overflow` before the lock engaged.
    pub overflow: Option<String>,
}

/// Document measurements sampled when a dialog opens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentMetrics {
    /// Width of the vertical scrollbar, used as right padding compensation.
    pub scrollbar_width: f64,
    /// Current inline style of the document root.
    pub root_style: RootStyle,
}

impl DocumentMetrics {
    /// Build metrics from the window's inner width and the body's laid-out width.
    pub fn from_widths(window_width: f64, body_width: f64) -> Self {
        Self {
            scrollbar_width: scrollbar_width(window_width, body_width),
            root_style: RootStyle::default(),
        }
    }

    /// Replace the sampled root style.
    pub fn with_root_style(mut self, root_style: RootStyle) -> Self {
        self.root_style = root_style;
        self
    }
}

/// Width of the scrollbar given the window's inner width and the body width.
///
/// Never negative; overlay scrollbars report zero.
pub fn scrollbar_width(window_width: f64, body_width: f64) -> f64 {
    (window_width - body_width).max(0.0)
}

/// A side effect requested by the dialog lifecycle.
///
/// Produced by [`Dialog`](crate::dialog::Dialog) operations and the
/// [`ScrollLock`](crate::lock::ScrollLock). Apply them in the order given.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Publish the transition duration (for example as a CSS custom property).
    SetTransitionDuration(Duration),
    /// Promote the element to a true modal: trap focus and make the rest of the page inert.
    ShowModal,
    /// Hide document overflow and pad the root by `padding_right` pixels.
    LockScroll {
        /// Scrollbar compensation in pixels.
        padding_right: f64,
    },
    /// Move focus into the dialog's first child.
    FocusFirstChild,
    /// Show (`true`) or remove (`false`) the element from layout.
    SetDisplayed(bool),
    /// Call back into [`Dialog::frame`](crate::dialog::Dialog::frame) on the next animation frame.
    RequestFrame,
    /// Toggle the presented attribute that drives the CSS transition.
    Present(bool),
    /// Remove the element from the modal layer.
    CloseModal,
    /// Restore the root style saved when the lock engaged.
    RestoreScroll(RootStyle),
    /// The close animation finished; notify the owner (`onExit`).
    Exited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrollbar_width_from_widths() {
        assert_eq!(scrollbar_width(1024.0, 1009.0), 15.0);
        let m = DocumentMetrics::from_widths(800.0, 800.0);
        assert_eq!(m.scrollbar_width, 0.0);
    }

    #[test]
    fn scrollbar_width_never_negative() {
        // Sub-pixel layout can make the body wider than the window.
        assert_eq!(scrollbar_width(800.0, 800.5), 0.0);
    }
}
