// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog lifecycle state machine.
//!
//! ## Phases
//!
//! ```text
//! Closed --open--> Opening --frame--> Open --close--> Closing --tick(deadline)--> Closed
//!                     ^                                  |
//!                     +--------------open----------------+
//! ```
//!
//! - `Opening` exists so the element is laid out before the presented attribute
//!   flips on the next frame, which lets the open transition run.
//! - `Closing` carries the teardown deadline. A reopen moves back to `Opening`,
//!   so a later [`Dialog::tick`] finds nothing to tear down.
//!
//! Every operation returns the [`Effect`]s to apply, in order.

use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect};

use crate::lock::ScrollLock;
use crate::types::{DialogId, DocumentMetrics, Effect};

bitflags::bitflags! {
    /// Properties animated by the open/close transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Animate: u8 {
        /// Fade the dialog in and out.
        const OPACITY   = 0b0000_0001;
        /// Move or scale the dialog in and out.
        const TRANSFORM = 0b0000_0010;
    }
}

impl Default for Animate {
    fn default() -> Self {
        Self::OPACITY | Self::TRANSFORM
    }
}

/// Transition variant a rendering layer should apply.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transitions {
    /// Transition every property; the dialog starts transparent.
    All,
    /// Transition opacity only.
    OpacityOnly,
    /// Transition transform only; the dialog stays opaque.
    TransformOnly,
}

impl Animate {
    /// Pick the transition variant. No flags falls back to [`Transitions::All`].
    pub fn transitions(self) -> Transitions {
        if self.contains(Self::OPACITY | Self::TRANSFORM) {
            Transitions::All
        } else if self.contains(Self::OPACITY) {
            Transitions::OpacityOnly
        } else if self.contains(Self::TRANSFORM) {
            Transitions::TransformOnly
        } else {
            Transitions::All
        }
    }
}

/// Configuration for a [`Dialog`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialogConfig {
    /// Length of the open/close transition; teardown waits this long after a close.
    pub transition_duration: Duration,
    /// Whether outside clicks and host cancel requests may dismiss the dialog.
    pub closable: bool,
    /// Animated properties.
    pub animate: Animate,
}

impl DialogConfig {
    /// Default transition length.
    pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            transition_duration: Self::DEFAULT_TRANSITION,
            closable: true,
            animate: Animate::default(),
        }
    }
}

/// Lifecycle phase of a [`Dialog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not displayed.
    Closed,
    /// Displayed, waiting for the next frame to present.
    Opening,
    /// Displayed and presented.
    Open,
    /// Close transition running; teardown is due at `deadline`.
    Closing {
        /// Host time at which teardown may run.
        deadline: Duration,
    },
}

/// Snapshot of a dialog's observable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogState {
    /// Externally requested state.
    pub open: bool,
    /// Whether the element is in layout (stays true through the close transition).
    pub displayed: bool,
    /// Whether user dismissal is allowed.
    pub closable: bool,
    /// Configured transition length.
    pub transition_duration: Duration,
}

/// Result of a host-level cancel or close request (for example Escape).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CancelOutcome {
    /// Always true: the host's own dismissal is suppressed so the owner's state stays authoritative.
    pub prevent_default: bool,
    /// Whether the owner should set its state to closed.
    pub dismiss: bool,
}

/// A modal dialog instance.
///
/// ## Usage
///
/// - Register with a shared [`ScrollLock`] via [`Dialog::new`].
/// - Drive it with [`Dialog::set_open`] (or [`Dialog::open`] / [`Dialog::close`]).
/// - Call [`Dialog::frame`] when an [`Effect::RequestFrame`] comes due and
///   [`Dialog::tick`] from the host's timer or frame loop while closing.
/// - Call [`Dialog::dispose`] when the dialog is unmounted.
///
/// ```
/// use core::time::Duration;
/// use konj_dialog::dialog::{Dialog, DialogConfig, Phase};
/// use konj_dialog::lock::ScrollLock;
/// use konj_dialog::types::{DocumentMetrics, Effect};
///
/// let mut lock = ScrollLock::new();
/// let mut dialog = Dialog::new(&mut lock, DialogConfig::default());
/// let metrics = DocumentMetrics::from_widths(1024.0, 1009.0);
///
/// let fx = dialog.open(Duration::ZERO, &mut lock, &metrics);
/// assert!(fx.contains(&Effect::LockScroll { padding_right: 15.0 }));
/// dialog.frame();
/// assert_eq!(dialog.phase(), Phase::Open);
///
/// dialog.close(Duration::from_millis(1000));
/// assert!(dialog.tick(Duration::from_millis(1100), &mut lock).is_empty());
/// let fx = dialog.tick(Duration::from_millis(1300), &mut lock);
/// assert_eq!(fx.last(), Some(&Effect::Exited));
/// assert!(!lock.is_engaged());
/// ```
#[derive(Clone, Debug)]
pub struct Dialog {
    id: DialogId,
    config: DialogConfig,
    phase: Phase,
}

impl Dialog {
    /// Create a closed dialog registered with `lock`.
    pub fn new(lock: &mut ScrollLock, config: DialogConfig) -> Self {
        Self {
            id: lock.register(),
            config,
            phase: Phase::Closed,
        }
    }

    /// Identifier used with the scroll lock.
    pub fn id(&self) -> DialogId {
        self.id
    }

    /// Current configuration.
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Change the transition length; applies from the next operation.
    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.config.transition_duration = duration;
    }

    /// Change whether the dialog can be dismissed by the user.
    pub fn set_closable(&mut self, closable: bool) {
        self.config.closable = closable;
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the dialog is requested open.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Open)
    }

    /// Whether the element is in layout.
    pub fn is_displayed(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    /// Whether the presented attribute is set.
    pub fn is_presented(&self) -> bool {
        matches!(self.phase, Phase::Open)
    }

    /// Teardown deadline while closing.
    pub fn deadline(&self) -> Option<Duration> {
        match self.phase {
            Phase::Closing { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Snapshot of observable state.
    pub fn state(&self) -> DialogState {
        DialogState {
            open: self.is_open(),
            displayed: self.is_displayed(),
            closable: self.config.closable,
            transition_duration: self.config.transition_duration,
        }
    }

    /// Apply the externally requested state.
    pub fn set_open(
        &mut self,
        open: bool,
        now: Duration,
        lock: &mut ScrollLock,
        metrics: &DocumentMetrics,
    ) -> Vec<Effect> {
        if open {
            self.open(now, lock, metrics)
        } else {
            self.close(now)
        }
    }

    /// Open the dialog.
    ///
    /// From `Closed` this shows the modal, takes a hold on the scroll lock, and
    /// requests a frame. From `Closing` it supersedes the pending teardown.
    /// While already open it only republishes the transition duration.
    pub fn open(
        &mut self,
        now: Duration,
        lock: &mut ScrollLock,
        metrics: &DocumentMetrics,
    ) -> Vec<Effect> {
        let mut out = vec![Effect::SetTransitionDuration(self.config.transition_duration)];
        match self.phase {
            Phase::Opening | Phase::Open => {}
            Phase::Closing { .. } => {
                tracing::trace!(dialog = self.id.get(), ?now, "reopened during close");
                self.phase = Phase::Opening;
                out.push(Effect::RequestFrame);
            }
            Phase::Closed => {
                tracing::trace!(dialog = self.id.get(), ?now, "opening");
                out.push(Effect::ShowModal);
                if let Some(fx) = lock.acquire(self.id, metrics) {
                    out.push(fx);
                }
                out.push(Effect::FocusFirstChild);
                out.push(Effect::SetDisplayed(true));
                out.push(Effect::RequestFrame);
                self.phase = Phase::Opening;
            }
        }
        out
    }

    /// Advance after an animation frame: `Opening` becomes `Open`.
    pub fn frame(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Opening {
            return Vec::new();
        }
        self.phase = Phase::Open;
        vec![Effect::Present(true)]
    }

    /// Start closing. Teardown is due `transition_duration` after `now`.
    ///
    /// No-op when closed or already closing.
    pub fn close(&mut self, now: Duration) -> Vec<Effect> {
        match self.phase {
            Phase::Closed | Phase::Closing { .. } => Vec::new(),
            Phase::Opening | Phase::Open => {
                let deadline = now.saturating_add(self.config.transition_duration);
                tracing::trace!(dialog = self.id.get(), ?deadline, "closing");
                self.phase = Phase::Closing { deadline };
                vec![
                    Effect::SetTransitionDuration(self.config.transition_duration),
                    Effect::Present(false),
                ]
            }
        }
    }

    /// Run the deferred teardown once its deadline has passed.
    pub fn tick(&mut self, now: Duration, lock: &mut ScrollLock) -> Vec<Effect> {
        let Phase::Closing { deadline } = self.phase else {
            return Vec::new();
        };
        if now < deadline {
            return Vec::new();
        }
        tracing::trace!(dialog = self.id.get(), "closed");
        self.phase = Phase::Closed;
        let mut out = vec![Effect::CloseModal, Effect::SetDisplayed(false)];
        if let Some(fx) = lock.release(self.id) {
            out.push(fx);
        }
        out.push(Effect::Exited);
        out
    }

    /// Unmount the dialog, releasing its hold on the scroll lock.
    ///
    /// A dialog dropped without this keeps its hold. When still displayed, the
    /// teardown runs immediately without [`Effect::Exited`]; a closed dialog
    /// yields no effects.
    pub fn dispose(self, lock: &mut ScrollLock) -> Vec<Effect> {
        let released = lock.release(self.id);
        if !self.is_displayed() {
            return Vec::new();
        }
        tracing::trace!(dialog = self.id.get(), phase = ?self.phase, "disposed while displayed");
        let mut out = vec![Effect::CloseModal, Effect::SetDisplayed(false)];
        out.extend(released);
        out
    }

    /// Whether a click at `point` should dismiss the dialog whose box is `bounds`.
    ///
    /// Points on the border count as inside.
    pub fn pointer_outside(&self, point: Point, bounds: Rect) -> bool {
        if !self.config.closable {
            return false;
        }
        point.x < bounds.x0 || point.x > bounds.x1 || point.y < bounds.y0 || point.y > bounds.y1
    }

    /// Decide how to handle a host cancel/close request.
    ///
    /// `target_is_dialog` is false for events bubbling from nested dialogs.
    /// `has_setter` is false when the owner cannot change the open state.
    pub fn cancel(&self, target_is_dialog: bool, has_setter: bool) -> CancelOutcome {
        let dismiss = target_is_dialog && self.config.closable && has_setter;
        if !dismiss {
            tracing::debug!(dialog = self.id.get(), "cancel request suppressed");
        }
        CancelOutcome {
            prevent_default: true,
            dismiss,
        }
    }
}
