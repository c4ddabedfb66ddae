// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use konj_dialog::dialog::{Dialog, DialogConfig};
use konj_dialog::lock::ScrollLock;
use konj_dialog::types::DocumentMetrics;
use konj_popover::placement::{AppendTo, place};
use kurbo::{Rect, Size};

fn bench_dialog_cycle(c: &mut Criterion) {
    let metrics = DocumentMetrics::from_widths(1280.0, 1265.0);
    c.bench_function("dialog/open_close_cycle", |b| {
        b.iter_batched(
            || {
                let mut lock = ScrollLock::new();
                let dialog = Dialog::new(&mut lock, DialogConfig::default());
                (lock, dialog)
            },
            |(mut lock, mut dialog)| {
                let mut effects = 0_usize;
                effects += dialog.open(Duration::ZERO, &mut lock, &metrics).len();
                effects += dialog.frame().len();
                effects += dialog.close(Duration::from_millis(10)).len();
                effects += dialog.tick(Duration::from_millis(400), &mut lock).len();
                black_box(effects)
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("dialog/nested_lock_64", |b| {
        b.iter_batched(
            || {
                let mut lock = ScrollLock::new();
                let dialogs: Vec<_> = (0..64)
                    .map(|_| Dialog::new(&mut lock, DialogConfig::default()))
                    .collect();
                (lock, dialogs)
            },
            |(mut lock, mut dialogs)| {
                for d in &mut dialogs {
                    black_box(d.open(Duration::ZERO, &mut lock, &metrics));
                }
                for d in dialogs.iter_mut().rev() {
                    black_box(d.close(Duration::ZERO));
                    black_box(d.tick(Duration::from_secs(1), &mut lock));
                }
                black_box(lock.is_engaged())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_placement(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let invokers: Vec<Rect> = (0..256)
        .map(|i| {
            let x = f64::from(i % 16) * 80.0;
            let y = f64::from(i / 16) * 50.0;
            Rect::new(x, y, x + 64.0, y + 32.0)
        })
        .collect();
    c.bench_function("popover/place_grid_256", |b| {
        b.iter(|| {
            for r in &invokers {
                black_box(place(black_box(*r), viewport, AppendTo::Center));
                black_box(place(black_box(*r), viewport, AppendTo::Side));
            }
        });
    });
}

criterion_group!(benches, bench_dialog_cycle, bench_placement);
criterion_main!(benches);
