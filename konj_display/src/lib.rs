// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Konj Display: state for the library's display components.
//!
//! - [`stacking`]: card positions for stacking cards, where the selected card
//!   moves to the front, plus the deck's size relationships.
//! - [`segmented`]: active-item matching for segmented controls and tabs, and
//!   the hover highlight's clip geometry.
//! - [`select`]: chosen option, placeholder fallback and open state of a select.
//! - [`file_input`]: batch validation, single or multiple file lists, preview
//!   selection and drag-over state of a file input.
//!
//! Like the other Konj crates, this computes values and leaves rendering to
//! the binding layer.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod file_input;
pub mod segmented;
pub mod select;
pub mod stacking;
