// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search the bundled catalog from the command line.
//!
//! Run:
//! - `cargo run -p konj_demos --example catalog_search -- dilog`
//! - `cargo run -p konj_demos --example catalog_search -- --library react modal`

use konj_catalog::{Catalog, CatalogError, Library, SearchIndex};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CatalogError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let library = match args.iter().position(|a| a == "--library") {
        Some(i) if i + 1 < args.len() => {
            let lib: Library = args[i + 1].parse()?;
            args.remove(i + 1);
            args.remove(i);
            Some(lib)
        }
        _ => None,
    };
    let query = if args.is_empty() {
        "butt".to_owned()
    } else {
        args.join(" ")
    };

    let catalog = Catalog::bundled()?;
    let index = SearchIndex::new(&catalog);
    let results = index.search(&query);
    let keep_component = |key: &str| {
        library.is_none_or(|lib| catalog.component(key).is_some_and(|c| c.supports(lib)))
    };
    let keep_hook =
        |key: &str| library.is_none_or(|lib| catalog.hook(key).is_some_and(|h| h.supports(lib)));

    println!("query: {query:?}");
    println!("components:");
    for c in results.components.iter().filter(|c| keep_component(&c.key)) {
        println!("  {:<20} {}", c.key, c.description);
    }
    println!("hooks:");
    for h in results.hooks.iter().filter(|h| keep_hook(&h.key)) {
        println!("  {:<20} {}", h.key, h.description);
    }
    if results.is_empty() {
        println!("(no matches)");
    }
    Ok(())
}
