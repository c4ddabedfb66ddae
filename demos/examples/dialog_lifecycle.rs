// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog lifecycle and the shared scroll lock.
//!
//! Opens an anchored dialog, opens an alert on top of it, then closes both,
//! printing each effect a binding layer would apply. Also drags the sheet
//! down far enough to dismiss it.
//!
//! Run:
//! - `cargo run -p konj_demos --example dialog_lifecycle`
//! - `RUST_LOG=konj_dialog=trace cargo run -p konj_demos --example dialog_lifecycle`

use core::time::Duration;

use konj_dialog::dialog::{Dialog, DialogConfig};
use konj_dialog::drag::{DragConfig, TouchDrag};
use konj_dialog::lock::ScrollLock;
use konj_dialog::types::{DocumentMetrics, Effect, RootStyle};
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;

fn show(label: &str, effects: &[Effect]) {
    println!("{label}:");
    for e in effects {
        println!("  {e:?}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut lock = ScrollLock::new();
    let metrics = DocumentMetrics::from_widths(1280.0, 1265.0).with_root_style(RootStyle {
        padding_right: Some("4px".into()),
        overflow: None,
    });

    let mut sheet = Dialog::new(&mut lock, DialogConfig::default());
    let mut alert = Dialog::new(
        &mut lock,
        DialogConfig {
            transition_duration: Duration::from_millis(150),
            closable: false,
            ..DialogConfig::default()
        },
    );

    let t0 = Duration::ZERO;
    show("sheet.open", &sheet.open(t0, &mut lock, &metrics));
    show("sheet.frame", &sheet.frame());
    show("alert.open", &alert.open(t0, &mut lock, &metrics));
    show("alert.frame", &alert.frame());
    assert_eq!(lock.holder_count(), 2);

    // The alert is not closable: clicks outside it are ignored.
    let bounds = Rect::new(400.0, 200.0, 880.0, 500.0);
    assert!(!alert.pointer_outside(Point::new(10.0, 10.0), bounds));
    let outcome = alert.cancel(true, true);
    println!("alert.cancel: {outcome:?}");

    let t1 = Duration::from_millis(1000);
    show("alert.close", &alert.close(t1));
    show("alert.tick (early)", &alert.tick(t1 + Duration::from_millis(50), &mut lock));
    show("alert.tick", &alert.tick(t1 + Duration::from_millis(150), &mut lock));
    assert!(lock.is_engaged());

    // Drag the sheet down past the commit threshold.
    let mut drag = TouchDrag::new(DragConfig::default());
    let _ = drag.start(300.0, true);
    for y in [320.0, 360.0, 420.0] {
        if let Some(frame) = drag.move_to(y, true, 800.0) {
            println!("drag frame: translate {:.1}px", frame.translate_y);
        }
    }
    let release = drag.end();
    println!("drag release: {release:?}");
    assert!(release.close);

    let t2 = Duration::from_millis(2000);
    show("sheet.close", &sheet.close(t2));
    show("sheet.tick", &sheet.tick(t2 + Duration::from_millis(300), &mut lock));
    assert!(!lock.is_engaged());
}
