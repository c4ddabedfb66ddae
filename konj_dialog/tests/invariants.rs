// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the scroll lock and drag tracker.

use core::time::Duration;

use konj_dialog::dialog::{Dialog, DialogConfig, Phase};
use konj_dialog::drag::{DragConfig, TouchDrag, clamp_overscroll};
use konj_dialog::lock::ScrollLock;
use konj_dialog::types::{DocumentMetrics, Effect};
use proptest::prelude::*;

#[derive(Copy, Clone, Debug)]
enum Op {
    Open(usize),
    Close(usize),
    Frame(usize),
    Dispose(usize),
    Advance(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3).prop_map(Op::Open),
        (0usize..3).prop_map(Op::Close),
        (0usize..3).prop_map(Op::Frame),
        (0usize..3).prop_map(Op::Dispose),
        (0u64..400).prop_map(Op::Advance),
    ]
}

proptest! {
    #[test]
    fn lock_engaged_iff_any_dialog_displayed(ops in prop::collection::vec(op(), 0..64)) {
        let mut lock = ScrollLock::new();
        let metrics = DocumentMetrics::from_widths(1000.0, 985.0);
        let mut dialogs: Vec<Dialog> = (0..3)
            .map(|_| Dialog::new(&mut lock, DialogConfig::default()))
            .collect();
        let mut now = Duration::ZERO;
        let mut engaged_by_effects = false;

        for op in ops {
            let mut fx = Vec::new();
            match op {
                Op::Open(i) => fx.extend(dialogs[i].open(now, &mut lock, &metrics)),
                Op::Close(i) => fx.extend(dialogs[i].close(now)),
                Op::Frame(i) => fx.extend(dialogs[i].frame()),
                Op::Dispose(i) => {
                    // Unmount and mount a fresh instance in the same slot.
                    let fresh = Dialog::new(&mut lock, DialogConfig::default());
                    let old = core::mem::replace(&mut dialogs[i], fresh);
                    fx.extend(old.dispose(&mut lock));
                }
                Op::Advance(ms) => {
                    now += Duration::from_millis(ms);
                    for d in &mut dialogs {
                        fx.extend(d.tick(now, &mut lock));
                    }
                }
            }
            for e in &fx {
                match e {
                    Effect::LockScroll { .. } => {
                        prop_assert!(!engaged_by_effects, "lock engaged twice");
                        engaged_by_effects = true;
                    }
                    Effect::RestoreScroll(_) => {
                        prop_assert!(engaged_by_effects, "restore without lock");
                        engaged_by_effects = false;
                    }
                    _ => {}
                }
            }

            let any_displayed = dialogs.iter().any(Dialog::is_displayed);
            prop_assert_eq!(lock.is_engaged(), any_displayed);
            prop_assert_eq!(engaged_by_effects, any_displayed);
            for d in &dialogs {
                prop_assert_eq!(lock.holds(d.id()), d.is_displayed());
            }
        }
    }

    #[test]
    fn teardown_never_precedes_deadline(close_at in 0u64..10_000, wait in 0u64..600) {
        let mut lock = ScrollLock::new();
        let metrics = DocumentMetrics::default();
        let mut d = Dialog::new(&mut lock, DialogConfig::default());
        let _ = d.open(Duration::ZERO, &mut lock, &metrics);
        let _ = d.close(Duration::from_millis(close_at));
        let fx = d.tick(Duration::from_millis(close_at + wait), &mut lock);
        if wait < 300 {
            prop_assert!(fx.is_empty());
            prop_assert!(d.is_displayed());
        } else {
            prop_assert_eq!(fx.last(), Some(&Effect::Exited));
            prop_assert_eq!(d.phase(), Phase::Closed);
        }
    }

    #[test]
    fn drag_translation_follows_direction(
        start in 0.0f64..2000.0,
        y in 0.0f64..2000.0,
        height in 150.0f64..2000.0,
    ) {
        let mut drag = TouchDrag::new(DragConfig::default());
        drag.start(start, true);
        let frame = drag.move_to(y, true, height).unwrap();
        let delta = y - start;
        if delta >= 0.0 {
            prop_assert_eq!(frame.translate_y, delta);
        } else {
            prop_assert_eq!(frame.translate_y, clamp_overscroll(delta, height, 200.0));
            prop_assert!(frame.translate_y <= 0.0);
            prop_assert!(frame.translate_y >= delta);
        }
        let release = drag.end();
        prop_assert_eq!(release.close, delta > 100.0);
        prop_assert_eq!(drag.start_y(), None);
        prop_assert_eq!(drag.last_y(), None);
    }
}
