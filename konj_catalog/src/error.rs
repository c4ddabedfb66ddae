// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog errors.

use thiserror::Error;

/// Errors raised while loading a catalog or parsing catalog values.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog text is not valid JSON or does not match the record shape.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record's `key` differs from the key it is stored under.
    #[error("catalog entry `{map_key}` declares key `{record_key}`")]
    KeyMismatch {
        /// Key in the enclosing object.
        map_key: String,
        /// Key inside the record.
        record_key: String,
    },

    /// Two records share a key.
    #[error("duplicate catalog key `{0}`")]
    DuplicateKey(String),

    /// A library name that is not one of the supported libraries.
    #[error("unknown library `{0}`")]
    UnknownLibrary(String),
}
