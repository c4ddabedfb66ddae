// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog record types.
//!
//! Field names follow the site's data files (`camelCase` in JSON).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// UI framework a record has an implementation for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// React.
    React,
    /// Preact.
    Preact,
    /// Solid.
    Solid,
}

impl Library {
    /// Every library, in preference order.
    pub const ALL: [Self; 3] = [Self::Preact, Self::React, Self::Solid];

    /// Lowercase name as used in data files and settings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Preact => "preact",
            Self::Solid => "solid",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Library {
    type Err = CatalogError;

    /// Parse a stored preference. Unknown values are rejected so a stale
    /// setting never selects a library the site cannot show.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lib| lib.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownLibrary(s.to_owned()))
    }
}

/// Component category.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Buttons.
    Button,
    /// Modal surfaces.
    Modal,
    /// Everything else.
    Miscellaneous,
    /// Display components.
    Display,
    /// Inputs.
    Input,
}

impl Category {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Modal => "modal",
            Self::Miscellaneous => "miscellaneous",
            Self::Display => "display",
            Self::Input => "input",
        }
    }
}

/// How much of a component ships as styling versus behavior.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Unstyled building block.
    Primitive,
    /// Ready-to-use styled component.
    Styled,
    /// Site-specific component.
    Custom,
}

impl Model {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Styled => "styled",
            Self::Custom => "custom",
        }
    }
}

/// Where a React component may render.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactType {
    /// Needs the client runtime.
    Client,
    /// Renders on the server.
    Server,
}

/// Other catalog entries a record depends on, per library.
pub type InternalDependencies = BTreeMap<Library, Vec<String>>;

/// A component in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    /// Unique key, also the URL slug.
    pub key: String,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Source file name.
    pub filename: String,
    /// Dependencies on other entries.
    #[serde(default)]
    pub internal_dependencies: InternalDependencies,
    /// Category.
    pub category: Category,
    /// Model.
    pub model: Model,
    /// React rendering target, when it matters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub react_type: Option<ReactType>,
    /// Libraries with an implementation.
    pub supports: Vec<Library>,
}

/// A hook in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRecord {
    /// Unique key, also the URL slug.
    pub key: String,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Source file name.
    pub filename: String,
    /// Dependencies on other entries.
    #[serde(default)]
    pub internal_dependencies: InternalDependencies,
    /// Libraries with an implementation.
    pub supports: Vec<Library>,
}

impl ComponentRecord {
    /// Whether `library` has an implementation.
    pub fn supports(&self, library: Library) -> bool {
        self.supports.contains(&library)
    }
}

impl HookRecord {
    /// Whether `library` has an implementation.
    pub fn supports(&self, library: Library) -> bool {
        self.supports.contains(&library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_parses_known_values_only() {
        assert_eq!("preact".parse::<Library>().unwrap(), Library::Preact);
        assert_eq!("solid".parse::<Library>().unwrap(), Library::Solid);
        assert!(matches!(
            "vue".parse::<Library>(),
            Err(CatalogError::UnknownLibrary(v)) if v == "vue"
        ));
        assert!("React".parse::<Library>().is_err());
    }

    #[test]
    fn component_json_shape() {
        let json = r#"{
            "key": "tab",
            "title": "Tab",
            "description": "Fully animated tab system.",
            "filename": "tab.tsx",
            "internalDependencies": { "react": ["segmented-control"] },
            "supports": ["preact", "react"],
            "category": "display",
            "model": "styled"
        }"#;
        let rec: ComponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.category, Category::Display);
        assert_eq!(rec.react_type, None);
        assert_eq!(
            rec.internal_dependencies.get(&Library::React),
            Some(&vec!["segmented-control".to_owned()])
        );
        assert!(rec.supports(Library::Preact));
        assert!(!rec.supports(Library::Solid));
    }
}
