// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The catalog of components and hooks.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::record::{ComponentRecord, HookRecord, Library};

/// Catalog JSON as stored: records keyed by their `key`.
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    components: Keyed<ComponentRecord>,
    #[serde(default)]
    hooks: Keyed<HookRecord>,
}

/// Entries of one JSON object in source order, repeated keys included.
struct Keyed<T>(Vec<(String, T)>);

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedVisitor<T> {
            type Value = Keyed<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of catalog records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(Keyed(entries))
            }
        }

        deserializer.deserialize_map(KeyedVisitor(PhantomData))
    }
}

/// Immutable list of components and hooks.
///
/// Records keep their load order (source order for JSON); search ties and
/// listings follow it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    components: Vec<ComponentRecord>,
    hooks: Vec<HookRecord>,
}

impl Catalog {
    /// Build a catalog from records.
    ///
    /// Keys must be unique within components and within hooks.
    pub fn new(
        components: Vec<ComponentRecord>,
        hooks: Vec<HookRecord>,
    ) -> Result<Self, CatalogError> {
        check_unique(components.iter().map(|c| c.key.as_str()))?;
        check_unique(hooks.iter().map(|h| h.key.as_str()))?;
        Ok(Self { components, hooks })
    }

    /// Parse catalog JSON of the shape
    /// `{ "components": { key: record }, "hooks": { key: record } }`.
    ///
    /// Every record's `key` must equal the key it is stored under, and a key
    /// may appear only once per section.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let components = take_keyed(raw.components, |c| &c.key)?;
        let hooks = take_keyed(raw.hooks, |h| &h.key)?;
        tracing::debug!(
            components = components.len(),
            hooks = hooks.len(),
            "catalog loaded"
        );
        Ok(Self { components, hooks })
    }

    /// The catalog shipped with this crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../data/catalog.json"))
    }

    /// All components.
    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    /// All hooks.
    pub fn hooks(&self) -> &[HookRecord] {
        &self.hooks
    }

    /// Component stored under `key`.
    pub fn component(&self, key: &str) -> Option<&ComponentRecord> {
        let found = self.components.iter().find(|c| c.key == key);
        if found.is_none() {
            tracing::warn!(key, "component not in catalog");
        }
        found
    }

    /// Hook stored under `key`.
    pub fn hook(&self, key: &str) -> Option<&HookRecord> {
        let found = self.hooks.iter().find(|h| h.key == key);
        if found.is_none() {
            tracing::warn!(key, "hook not in catalog");
        }
        found
    }

    /// Components and hooks with an implementation for `library`.
    pub fn supporting(
        &self,
        library: Library,
    ) -> (Vec<&ComponentRecord>, Vec<&HookRecord>) {
        (
            self.components
                .iter()
                .filter(|c| c.supports(library))
                .collect(),
            self.hooks.iter().filter(|h| h.supports(library)).collect(),
        )
    }
}

fn take_keyed<T>(
    entries: Keyed<T>,
    key_of: impl Fn(&T) -> &String,
) -> Result<Vec<T>, CatalogError> {
    check_unique(entries.0.iter().map(|(k, _)| k.as_str()))?;
    entries
        .0
        .into_iter()
        .map(|(map_key, record)| {
            if *key_of(&record) == map_key {
                Ok(record)
            } else {
                Err(CatalogError::KeyMismatch {
                    record_key: key_of(&record).clone(),
                    map_key,
                })
            }
        })
        .collect()
}

fn check_unique<'a>(keys: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey(key.to_owned()));
        }
    }
    Ok(())
}
