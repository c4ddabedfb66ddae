// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Konj Dialog: a headless, `no_std` lifecycle for modal surfaces.
//!
//! ## Overview
//!
//! Every modal-like component (alert, anchored dialog, action sheet, floating
//! sheet, dropdown, select) sits on the same primitive. This crate models it as
//! data: a [`Dialog`](crate::dialog::Dialog) state machine that turns open and
//! close requests into an ordered list of [`Effect`](crate::types::Effect)s, and a
//! [`ScrollLock`](crate::lock::ScrollLock) shared by every dialog on the page.
//!
//! It does not render anything. A binding layer applies the effects (show the
//! modal, lock scrolling, flip the presented attribute) and feeds host time back
//! in via [`Dialog::tick`](crate::dialog::Dialog::tick).
//!
//! ## Modules
//!
//! - [`lock`]: reference-counted scroll lock, passed by `&mut` into dialog operations.
//! - [`dialog`]: `Closed → Opening → Open → Closing → Closed` state machine with
//!   outside-click and cancel handling.
//! - [`drag`]: vertical drag-to-dismiss and horizontal card swipe trackers.
//! - [`types`]: identifiers, document metrics, and effects.
//!
//! ## Time
//!
//! There are no timers. Operations take `now` as a [`Duration`](core::time::Duration)
//! since any fixed host epoch; only differences matter.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use konj_dialog::dialog::{Dialog, DialogConfig};
//! use konj_dialog::lock::ScrollLock;
//! use konj_dialog::types::{DocumentMetrics, Effect};
//!
//! let mut lock = ScrollLock::new();
//! let mut alert = Dialog::new(&mut lock, DialogConfig::default());
//! let mut sheet = Dialog::new(&mut lock, DialogConfig::default());
//! let metrics = DocumentMetrics::from_widths(1280.0, 1265.0);
//!
//! let _ = alert.open(Duration::ZERO, &mut lock, &metrics);
//! let fx = sheet.open(Duration::ZERO, &mut lock, &metrics);
//! // Only the first dialog to open locks scrolling.
//! assert!(!fx.iter().any(|e| matches!(e, Effect::LockScroll { .. })));
//!
//! let _ = alert.close(Duration::ZERO);
//! let _ = alert.tick(Duration::from_millis(300), &mut lock);
//! assert!(lock.is_engaged());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dialog;
pub mod drag;
pub mod lock;
pub mod types;
