// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading and searching catalogs through the public API.

use konj_catalog::{Catalog, CatalogError, Library, SearchIndex};

const SMALL: &str = r#"{
  "components": {
    "tab": {
      "key": "tab", "title": "Tab", "description": "Fully animated tab system.",
      "filename": "tab.tsx", "supports": ["preact", "react"],
      "category": "display", "model": "styled"
    },
    "button": {
      "key": "button", "title": "Button", "description": "Simple button.",
      "filename": "button.tsx", "supports": ["react"],
      "category": "button", "model": "styled", "reactType": "server"
    }
  },
  "hooks": {
    "use-popover": {
      "key": "use-popover", "title": "use Popover",
      "description": "Show and hide floating items.",
      "filename": "use-popover.ts", "supports": ["preact"]
    }
  }
}"#;

#[test]
fn json_catalog_round_trip_through_search() {
    let catalog = Catalog::from_json(SMALL).unwrap();
    assert_eq!(catalog.components().len(), 2);
    // Records load in source order.
    assert_eq!(catalog.components()[0].key, "tab");

    let index = SearchIndex::new(&catalog);
    let hits = index.search("animated");
    assert_eq!(hits.components.len(), 1);
    assert_eq!(hits.components[0].key, "tab");
    assert!(hits.hooks.is_empty());

    let hits = index.search("popovr");
    assert_eq!(hits.hooks.len(), 1);
}

#[test]
fn ties_keep_catalog_order() {
    let catalog = Catalog::from_json(SMALL).unwrap();
    let index = SearchIndex::new(&catalog);
    let hits = index.search("styled");
    let keys: Vec<_> = hits.components.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["tab", "button"]);
}

#[test]
fn preferred_library_setting() {
    let catalog = Catalog::from_json(SMALL).unwrap();
    let lib: Library = "preact".parse().unwrap();
    let (components, hooks) = catalog.supporting(lib);
    assert_eq!(components.len(), 1);
    assert_eq!(hooks.len(), 1);

    let err = "svelte".parse::<Library>().unwrap_err();
    assert_eq!(err.to_string(), "unknown library `svelte`");
}

#[test]
fn lookups_miss_without_failing() {
    let catalog = Catalog::from_json(SMALL).unwrap();
    assert!(catalog.component("select").is_none());
    assert!(catalog.hook("use-touch-dialog-drag").is_none());
}

#[test]
fn bad_records_are_errors() {
    let err = Catalog::from_json(r#"{ "components": { "x": { "key": "x" } } }"#).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}
