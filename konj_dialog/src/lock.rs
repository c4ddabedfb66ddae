// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll lock shared by every dialog that can be open at the same time.
//!
//! ## Semantics
//!
//! - The lock is engaged iff at least one dialog holds it.
//! - The acquisition that engages the lock saves the root style and yields
//!   [`Effect::LockScroll`]. Later holders only join.
//! - The release that drops the last holder yields [`Effect::RestoreScroll`]
//!   with the saved style.
//! - Acquire and release are idempotent per [`DialogId`], so each dialog
//!   contributes at most one hold.
//!
//! The lock is a plain value passed by `&mut` into dialog operations; there is
//! no process-wide state.

use alloc::vec::Vec;

use crate::types::{DialogId, DocumentMetrics, Effect, RootStyle};

/// Reference-counted scroll lock for the document root.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    next_id: u32,
    // Acquisition order; the first entry is the current owner.
    holders: Vec<DialogId>,
    saved: Option<RootStyle>,
}

impl ScrollLock {
    /// Create an idle lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for a new dialog instance.
    pub fn register(&mut self) -> DialogId {
        let id = DialogId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Whether any dialog currently holds the lock.
    pub fn is_engaged(&self) -> bool {
        !self.holders.is_empty()
    }

    /// Whether `id` currently holds the lock.
    pub fn holds(&self, id: DialogId) -> bool {
        self.holders.contains(&id)
    }

    /// Number of dialogs holding the lock.
    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    /// The earliest remaining holder.
    ///
    /// This is the dialog that engaged the lock, or whichever holder inherited
    /// it after the engaging dialog closed.
    pub fn owner(&self) -> Option<DialogId> {
        self.holders.first().copied()
    }

    /// Root style saved by the engaging acquisition, if engaged.
    pub fn saved_style(&self) -> Option<&RootStyle> {
        self.saved.as_ref()
    }

    /// Add `id` as a holder.
    ///
    /// Returns [`Effect::LockScroll`] when this call engaged the lock.
    pub fn acquire(&mut self, id: DialogId, metrics: &DocumentMetrics) -> Option<Effect> {
        if self.holds(id) {
            return None;
        }
        self.holders.push(id);
        if self.holders.len() > 1 {
            tracing::trace!(dialog = id.get(), holders = self.holders.len(), "scroll lock joined");
            return None;
        }
        self.saved = Some(metrics.root_style.clone());
        tracing::debug!(
            dialog = id.get(),
            padding_right = metrics.scrollbar_width,
            "scroll lock engaged"
        );
        Some(Effect::LockScroll {
            padding_right: metrics.scrollbar_width,
        })
    }

    /// Remove `id` as a holder.
    ///
    /// Returns [`Effect::RestoreScroll`] when this call dropped the last holder.
    /// Releasing a dialog that does not hold the lock is a no-op.
    pub fn release(&mut self, id: DialogId) -> Option<Effect> {
        let pos = self.holders.iter().position(|h| *h == id)?;
        self.holders.remove(pos);
        if !self.holders.is_empty() {
            tracing::trace!(dialog = id.get(), holders = self.holders.len(), "scroll lock left");
            return None;
        }
        tracing::debug!(dialog = id.get(), "scroll lock released");
        Some(Effect::RestoreScroll(self.saved.take().unwrap_or_default()))
    }
}
