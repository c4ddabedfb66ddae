// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library picker and an image upload field.
//!
//! Run:
//! - `cargo run -p konj_demos --example form_controls`
//! - `RUST_LOG=debug cargo run -p konj_demos --example form_controls`

use konj_catalog::Library;
use konj_display::file_input::{FileInput, FileMeta, FileRules};
use konj_display::select::{Select, SelectOption};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = Library::ALL
        .iter()
        .map(|lib| SelectOption::new(lib.to_string(), lib.to_string()))
        .collect();
    let mut picker = Select::new(options).with_placeholder("Library");
    println!("picker shows {:?}", picker.label());

    // Unknown stored setting: warns and keeps the placeholder.
    let _ = picker.set_value(Some("svelte"));
    assert_eq!(picker.label(), "Library");

    assert!(picker.open(false));
    if let Some(key) = picker.choose("preact").map(str::to_owned) {
        println!("chose {key}, picker shows {:?}", picker.label());
    }
    assert!(!picker.is_open());

    let rules = FileRules::new(["image/png", "image/jpeg"])
        .with_max_size(2_000_000)
        .with_multiple(true);
    println!("accept=\"{}\"", rules.accept_attr());
    let mut upload = FileInput::new(rules);

    upload.drag_over();
    match upload.drop_files(vec![
        FileMeta::new("cover.png", "image/png", 120_000),
        FileMeta::new("clip.mp4", "video/mp4", 900_000),
    ]) {
        Ok(added) => println!("dropped {} files", added.len()),
        Err(err) => println!("drop refused: {err:?}"),
    }
    assert!(upload.files().is_empty());

    if let Ok(added) = upload.add(vec![
        FileMeta::new("cover.png", "image/png", 120_000),
        FileMeta::new("photo.jpeg", "image/jpeg", 800_000),
    ]) {
        println!("picked {} files", added.len());
    }
    let _ = upload.select(1);
    if let Some(file) = upload.selected() {
        println!("previewing {} as {:?}", file.name, file.preview());
    }
}
