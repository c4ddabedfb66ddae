// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Konj Popover: viewport-aware anchoring for floating panels.
//!
//! ## Overview
//!
//! Dropdown menus and selects open a panel next to the element that invoked
//! them. This crate decides which side and corner to anchor to so the panel
//! stays inside the viewport:
//!
//! - [`placement`]: the pure function [`place`](crate::placement::place) from an
//!   invoker rectangle and viewport size to a [`Placement`](crate::placement::Placement).
//! - [`popover`]: a small controller that measures through an injected
//!   [`Measure`](crate::popover::Measure) capability and clears its placement on close.
//!
//! It does not open the panel itself. Pair it with `konj_dialog` (or any modal
//! layer) and open the panel once the placement is applied.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use konj_popover::placement::{place, AppendTo};
//!
//! let p = place(Rect::new(820.0, 700.0, 900.0, 730.0), Size::new(1000.0, 800.0), AppendTo::Center);
//! let vars: Vec<_> = p.css_vars().collect();
//! assert_eq!(vars, vec![("--right", 100.0), ("--bottom", 100.0)]);
//! assert_eq!(p.append_marker(), "top");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod placement;
pub mod popover;
