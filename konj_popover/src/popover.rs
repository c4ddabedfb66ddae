// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover controller over an injected measuring capability.
//!
//! ## Usage
//!
//! 1) Implement [`Measure`] for your toolkit: map an element handle to its
//!    bounding rectangle and report the viewport size.
//! 2) Call [`Popover::open`] from the invoker's activation handler. Apply the
//!    returned [`Placement`], then open the panel's dialog on the next frame so
//!    the entrance transition starts from the placed position.
//! 3) Call [`Popover::close`] once the panel has closed.
//!
//! Nothing is cached between opens: each open measures again, so a moved
//! invoker or resized viewport is picked up on the next open.

use kurbo::{Rect, Size};

use crate::placement::{AppendTo, Placement, place};

/// Measure element bounds and the viewport.
pub trait Measure<H> {
    /// Bounding rectangle of `handle` in viewport coordinates, or `None` if it is not mounted.
    fn bounds(&self, handle: &H) -> Option<Rect>;
    /// Current viewport size.
    fn viewport(&self) -> Size;
}

/// Popover anchored to an invoker element.
#[derive(Clone, Debug)]
pub struct Popover<H> {
    invoker: H,
    append_to: AppendTo,
    placement: Option<Placement>,
}

impl<H> Popover<H> {
    /// Create a closed popover for `invoker`.
    pub fn new(invoker: H, append_to: AppendTo) -> Self {
        Self {
            invoker,
            append_to,
            placement: None,
        }
    }

    /// Invoker handle.
    pub fn invoker(&self) -> &H {
        &self.invoker
    }

    /// Attachment mode.
    pub fn append_to(&self) -> AppendTo {
        self.append_to
    }

    /// Current placement, if open.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Whether a placement is applied.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Measure the invoker and compute a fresh placement.
    ///
    /// Returns `None` without changing state when the invoker is not mounted.
    pub fn open(&mut self, measure: &impl Measure<H>) -> Option<Placement> {
        let Some(bounds) = measure.bounds(&self.invoker) else {
            tracing::debug!("popover invoker not measurable; open ignored");
            return None;
        };
        let placement = place(bounds, measure.viewport(), self.append_to);
        tracing::trace!(
            side = placement.append_marker(),
            align = ?placement.align,
            "popover placed"
        );
        self.placement = Some(placement);
        Some(placement)
    }

    /// Clear the placement. Returns the cleared value; repeated calls return `None`.
    pub fn close(&mut self) -> Option<Placement> {
        self.placement.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{Align, Side};

    struct Page {
        button: Option<Rect>,
        viewport: Size,
    }

    impl Measure<&'static str> for Page {
        fn bounds(&self, handle: &&'static str) -> Option<Rect> {
            match *handle {
                "button" => self.button,
                _ => None,
            }
        }

        fn viewport(&self) -> Size {
            self.viewport
        }
    }

    #[test]
    fn open_measures_and_places() {
        let page = Page {
            button: Some(Rect::new(10.0, 10.0, 110.0, 40.0)),
            viewport: Size::new(1000.0, 800.0),
        };
        let mut pop = Popover::new("button", AppendTo::Center);
        let p = pop.open(&page).unwrap();
        assert_eq!((p.side, p.align), (Side::Bottom, Align::Left));
        assert!(pop.is_placed());
    }

    #[test]
    fn open_recomputes_after_move() {
        let mut page = Page {
            button: Some(Rect::new(10.0, 10.0, 110.0, 40.0)),
            viewport: Size::new(1000.0, 800.0),
        };
        let mut pop = Popover::new("button", AppendTo::Center);
        let _ = pop.open(&page);
        let _ = pop.close();
        page.button = Some(Rect::new(10.0, 600.0, 110.0, 640.0));
        let p = pop.open(&page).unwrap();
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.offsets.bottom, Some(200.0));
    }

    #[test]
    fn unmounted_invoker_is_noop() {
        let page = Page {
            button: None,
            viewport: Size::new(1000.0, 800.0),
        };
        let mut pop = Popover::new("button", AppendTo::Side);
        assert!(pop.open(&page).is_none());
        assert!(!pop.is_placed());
    }

    #[test]
    fn close_is_idempotent() {
        let page = Page {
            button: Some(Rect::new(10.0, 10.0, 110.0, 40.0)),
            viewport: Size::new(1000.0, 800.0),
        };
        let mut pop = Popover::new("button", AppendTo::Center);
        let _ = pop.open(&page);
        assert!(pop.close().is_some());
        assert!(pop.close().is_none());
        assert!(pop.placement().is_none());
    }
}
