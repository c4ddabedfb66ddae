// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure placement math: where to anchor a panel relative to its invoker.
//!
//! ## Rules
//!
//! - The panel opens below the invoker when the invoker's top edge is in the
//!   upper half of the viewport, else above.
//! - The panel grows rightward when the invoker's horizontal centre is in the
//!   left half of the viewport, else leftward.
//! - [`AppendTo::Center`] lines the panel's near edge up with the invoker's
//!   same edge. [`AppendTo::Side`] puts the panel just past the invoker's
//!   opposite edge, which suits cascading menus.
//!
//! At most one horizontal and one vertical offset is set, so the panel's free
//! edges follow its intrinsic size.

use kurbo::{Rect, Size};

/// How the panel attaches to its invoker.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AppendTo {
    /// Align with the invoker's near edges (dropdowns, selects).
    #[default]
    Center,
    /// Place beyond the invoker's far edges (nested menus).
    Side,
}

/// Vertical side of the invoker the panel is appended to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the invoker.
    Top,
    /// Below the invoker.
    Bottom,
}

impl Side {
    /// Marker consumed by styles to pick the entrance direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Horizontal direction the panel grows in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Align {
    /// Anchored by its left edge, grows rightward.
    Left,
    /// Anchored by its right edge, grows leftward.
    Right,
}

/// Offsets from the viewport edges, in pixels.
///
/// `left`/`right` are mutually exclusive, as are `top`/`bottom`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offsets {
    /// Distance from the viewport's left edge to the panel's left edge.
    pub left: Option<f64>,
    /// Distance from the viewport's right edge to the panel's right edge.
    pub right: Option<f64>,
    /// Distance from the viewport's top edge to the panel's top edge.
    pub top: Option<f64>,
    /// Distance from the viewport's bottom edge to the panel's bottom edge.
    pub bottom: Option<f64>,
}

/// A computed placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Vertical side.
    pub side: Side,
    /// Horizontal alignment.
    pub align: Align,
    /// Offsets to apply.
    pub offsets: Offsets,
}

impl Placement {
    /// Value of the "appended to" marker.
    pub fn append_marker(&self) -> &'static str {
        self.side.as_str()
    }

    /// Set offsets as custom-property name and pixel value pairs.
    pub fn css_vars(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let o = self.offsets;
        [
            ("--left", o.left),
            ("--right", o.right),
            ("--top", o.top),
            ("--bottom", o.bottom),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, v)))
    }
}

/// Compute a placement for a panel invoked from `invoker` inside `viewport`.
///
/// ```
/// use kurbo::{Rect, Size};
/// use konj_popover::placement::{place, AppendTo, Side, Align};
///
/// let p = place(Rect::new(10.0, 10.0, 110.0, 40.0), Size::new(1000.0, 800.0), AppendTo::Center);
/// assert_eq!((p.side, p.align), (Side::Bottom, Align::Left));
/// assert_eq!(p.offsets.left, Some(10.0));
/// assert_eq!(p.offsets.top, Some(40.0));
/// ```
pub fn place(invoker: Rect, viewport: Size, append_to: AppendTo) -> Placement {
    let on_bottom = invoker.y0 < viewport.height * 0.5;
    let on_right = invoker.center().x < viewport.width * 0.5;

    let mut offsets = Offsets::default();
    match append_to {
        AppendTo::Center => {
            if on_right {
                offsets.left = Some(invoker.x0);
            } else {
                offsets.right = Some(viewport.width - invoker.x1);
            }
            if on_bottom {
                offsets.top = Some(invoker.y1);
            } else {
                offsets.bottom = Some(viewport.height - invoker.y0);
            }
        }
        AppendTo::Side => {
            if on_right {
                offsets.left = Some(invoker.x1);
            } else {
                offsets.right = Some(viewport.width - invoker.x0);
            }
            if on_bottom {
                offsets.top = Some(invoker.y0);
            } else {
                offsets.bottom = Some(viewport.height - invoker.y1);
            }
        }
    }

    Placement {
        side: if on_bottom { Side::Bottom } else { Side::Top },
        align: if on_right { Align::Left } else { Align::Right },
        offsets,
    }
}
