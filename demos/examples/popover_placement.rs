// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover placement near each corner of the viewport.
//!
//! A fake page implements `Measure` with fixed button positions. Opening a
//! popover on each button prints the side, alignment, and CSS variables.
//!
//! Run:
//! - `cargo run -p konj_demos --example popover_placement`

use konj_popover::placement::AppendTo;
use konj_popover::popover::{Measure, Popover};
use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Button {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Detached,
}

struct Page {
    viewport: Size,
}

impl Measure<Button> for Page {
    fn bounds(&self, handle: &Button) -> Option<Rect> {
        let (w, h) = (self.viewport.width, self.viewport.height);
        match handle {
            Button::TopLeft => Some(Rect::new(10.0, 10.0, 110.0, 40.0)),
            Button::TopRight => Some(Rect::new(w - 110.0, 10.0, w - 10.0, 40.0)),
            Button::BottomLeft => Some(Rect::new(10.0, h - 40.0, 110.0, h - 10.0)),
            Button::BottomRight => Some(Rect::new(w - 110.0, h - 40.0, w - 10.0, h - 10.0)),
            Button::Detached => None,
        }
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let page = Page {
        viewport: Size::new(1000.0, 800.0),
    };

    for append_to in [AppendTo::Center, AppendTo::Side] {
        println!("== {append_to:?} ==");
        for button in [
            Button::TopLeft,
            Button::TopRight,
            Button::BottomLeft,
            Button::BottomRight,
        ] {
            let mut popover = Popover::new(button, append_to);
            let Some(p) = popover.open(&page) else {
                continue;
            };
            let vars: Vec<String> = p
                .css_vars()
                .map(|(name, px)| format!("{name}: {px}px"))
                .collect();
            println!(
                "{button:?}: append {} align {:?} [{}]",
                p.append_marker(),
                p.align,
                vars.join("; ")
            );
            assert_eq!(popover.close(), Some(p));
        }
    }

    let mut detached = Popover::new(Button::Detached, AppendTo::Center);
    assert!(detached.open(&page).is_none());
    println!("Detached: not placed");
}
