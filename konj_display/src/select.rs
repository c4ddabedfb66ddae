// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select: a button showing the chosen option, with the options in a popover.
//!
//! The value is identified by option key. A key that names no option is
//! logged and the select shows its placeholder instead of failing.
//!
//! ```
//! use konj_display::select::{Select, SelectOption};
//!
//! let mut select = Select::new(vec![
//!     SelectOption::new("react", "React"),
//!     SelectOption::new("preact", "Preact"),
//! ]);
//! assert_eq!(select.label(), "Select");
//!
//! assert!(select.open(false));
//! assert_eq!(select.choose("preact"), Some("preact"));
//! assert_eq!(select.label(), "Preact");
//! assert!(!select.is_open());
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// One choice of a [`Select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported when chosen.
    pub key: String,
    /// Text shown for the option.
    pub label: String,
}

impl SelectOption {
    /// Create an option.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// State of a select control.
#[derive(Clone, Debug)]
pub struct Select {
    options: Vec<SelectOption>,
    placeholder: String,
    selected: Option<usize>,
    open: bool,
}

impl Select {
    /// Text shown while nothing is selected, unless replaced.
    pub const DEFAULT_PLACEHOLDER: &'static str = "Select";

    /// A closed select with nothing selected.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            placeholder: String::from(Self::DEFAULT_PLACEHOLDER),
            selected: None,
            open: false,
        }
    }

    /// Replace the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Preselect the option with `key`; an unknown key leaves the placeholder.
    pub fn with_default(mut self, key: &str) -> Self {
        self.set_value(Some(key));
        self
    }

    /// Options in display order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Selected option, if any.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Key of the selected option.
    pub fn selected_key(&self) -> Option<&str> {
        self.selected().map(|o| o.key.as_str())
    }

    /// Whether the option with `key` is the selected one.
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_key() == Some(key)
    }

    /// Text for the button: the selected label or the placeholder.
    pub fn label(&self) -> &str {
        self.selected()
            .map_or(self.placeholder.as_str(), |o| o.label.as_str())
    }

    /// Whether the option list is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the option list. A disabled select stays closed.
    ///
    /// Returns whether the list is now open.
    pub fn open(&mut self, disabled: bool) -> bool {
        if !disabled {
            self.open = true;
        }
        self.open
    }

    /// Hide the option list.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply a value set by the owner. `None` clears the selection.
    ///
    /// Returns whether an option matched.
    pub fn set_value(&mut self, key: Option<&str>) -> bool {
        let Some(key) = key else {
            self.selected = None;
            return false;
        };
        self.selected = self.position(key);
        if self.selected.is_none() {
            tracing::warn!(key, "select value not among the options");
        }
        self.selected.is_some()
    }

    /// Replace the options, keeping the selection when its key still exists.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        let key = self.selected().map(|o| o.key.clone());
        self.options = options;
        let _ = self.set_value(key.as_deref());
    }

    /// The user picked the option with `key`: select it and close the list.
    ///
    /// Returns the key to report to the owner, or `None` (and no change) when
    /// `key` names no option.
    pub fn choose(&mut self, key: &str) -> Option<&str> {
        let index = self.position(key)?;
        self.selected = Some(index);
        self.open = false;
        Some(self.options[index].key.as_str())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.options.iter().position(|o| o.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn libs() -> Vec<SelectOption> {
        vec![
            SelectOption::new("react", "React"),
            SelectOption::new("preact", "Preact"),
            SelectOption::new("solid", "Solid"),
        ]
    }

    #[test]
    fn default_value_is_shown() {
        let s = Select::new(libs()).with_default("solid");
        assert_eq!(s.label(), "Solid");
        assert!(s.is_selected("solid"));
    }

    #[test]
    fn unknown_default_falls_back_to_placeholder() {
        let s = Select::new(libs())
            .with_placeholder("Pick a library")
            .with_default("vue");
        assert_eq!(s.selected(), None);
        assert_eq!(s.label(), "Pick a library");
    }

    #[test]
    fn choosing_closes_and_reports() {
        let mut s = Select::new(libs());
        assert!(s.open(false));
        assert_eq!(s.choose("react"), Some("react"));
        assert!(!s.is_open());
        assert_eq!(s.label(), "React");

        assert!(s.open(false));
        assert_eq!(s.choose("vue"), None);
        assert!(s.is_open());
        assert_eq!(s.selected_key(), Some("react"));
    }

    #[test]
    fn disabled_select_does_not_open() {
        let mut s = Select::new(libs());
        assert!(!s.open(true));
        assert!(!s.is_open());
    }

    #[test]
    fn controlled_value_and_option_changes() {
        let mut s = Select::new(libs());
        assert!(s.set_value(Some("preact")));
        assert!(!s.set_value(Some("vue")));
        assert_eq!(s.label(), "Select");

        assert!(s.set_value(Some("solid")));
        s.set_options(vec![SelectOption::new("solid", "SolidJS")]);
        assert_eq!(s.label(), "SolidJS");
        s.set_options(vec![SelectOption::new("react", "React")]);
        assert_eq!(s.selected(), None);

        let _ = s.set_value(Some("react"));
        assert!(!s.set_value(None));
        assert_eq!(s.selected(), None);
    }
}
