// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Konj Catalog: the documentation site's list of components and hooks.
//!
//! - [`Catalog`]: records loaded from JSON, with key lookups and filtering by
//!   [`Library`].
//! - [`SearchIndex`]: typo-tolerant search over titles, descriptions and
//!   classification, ranked by match quality.
//!
//! ## Example
//!
//! ```
//! use konj_catalog::{Catalog, Library, SearchIndex};
//!
//! let catalog = Catalog::bundled()?;
//! let preferred: Library = "preact".parse()?;
//! let (components, _hooks) = catalog.supporting(preferred);
//! assert!(components.iter().any(|c| c.key == "segmented-control"));
//!
//! let index = SearchIndex::new(&catalog);
//! let hits = index.search("stack");
//! assert_eq!(hits.components[0].key, "stacking-cards");
//! # Ok::<(), konj_catalog::CatalogError>(())
//! ```
//!
//! Lookups that miss log a warning through `tracing`; the site shows a
//! placeholder for them.

mod catalog;
mod error;
mod record;
pub mod search;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use record::{
    Category, ComponentRecord, HookRecord, InternalDependencies, Library, Model, ReactType,
};
pub use search::{SearchIndex, SearchResults};
