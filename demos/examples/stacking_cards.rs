// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking cards driven by selection and swipes, plus a segmented control.
//!
//! Run:
//! - `cargo run -p konj_demos --example stacking_cards`

use konj_dialog::drag::{CardSwipe, SwipeConfig};
use konj_display::segmented::{HighlightTracker, MatchType, is_active};
use konj_display::stacking::{StackLayout, StackOrder};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

fn print_deck(deck: &StackOrder) {
    let styles: Vec<String> = (0..deck.len())
        .filter_map(|i| deck.style(i))
        .map(|s| format!("{}(z{} -{:.2})", s.index, s.reverse_index, s.reduction))
        .collect();
    println!("  positions {:?} -> {}", deck.positions(), styles.join(" "));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let layout = StackLayout::default();
    let mut deck = StackOrder::new(4);
    println!(
        "deck of {}: spacer {:.2}rem, padding-top {:.2}rem, card height {:.0}px",
        deck.len(),
        layout.spacer_rem(),
        layout.padding_top_rem(deck.len()),
        layout.item_height(400.0)
    );
    print_deck(&deck);

    println!("select card 2");
    assert!(deck.select(2));
    print_deck(&deck);

    // Swipe left by 15% of a 400px track: commits to the next card.
    let mut swipe = CardSwipe::new(SwipeConfig::default());
    swipe.start(300.0);
    let _ = swipe.move_to(240.0, 400.0);
    if let Some(dir) = swipe.end() {
        let next = dir.apply(deck.selected(), deck.len());
        println!("swipe {dir:?} -> card {next}");
        let _ = deck.select(next);
        print_deck(&deck);
    }
    println!("mode: {:?}", deck.toggle_mode());

    // Segmented control with three items in a 300px wrapper.
    let wrapper = Rect::new(0.0, 0.0, 300.0, 40.0);
    let items = [
        ("components", Rect::new(0.0, 0.0, 100.0, 40.0)),
        ("hooks", Rect::new(100.0, 0.0, 200.0, 40.0)),
        ("about", Rect::new(200.0, 0.0, 300.0, 40.0)),
    ];
    let route = Some("/components/dialog");
    for (id, _) in &items {
        println!(
            "{id}: active {}",
            is_active(id, route, MatchType::PartOfSelected)
        );
    }
    let mut highlight = HighlightTracker::new();
    for (id, rect) in &items[..2] {
        if let Some(m) = highlight.hover(*rect, wrapper) {
            println!("hover {id}: seed {:?} -> {:?}", m.seed, m.target);
        }
    }
    highlight.leave();
}
