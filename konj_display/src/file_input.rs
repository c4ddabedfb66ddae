// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! File input: validation, the file list, preview selection and drop state.
//!
//! Files arrive in batches from the picker or a drop. A batch is all or
//! nothing: if any file is too large or of an unaccepted type, none of the
//! batch is taken. A single-file input replaces its file; a multi-file input
//! appends.
//!
//! ```
//! use konj_display::file_input::{FileInput, FileMeta, FileRules};
//!
//! let rules = FileRules::new(["image/png", "image/jpeg"]).with_max_size(1_000_000);
//! assert_eq!(rules.accept_attr(), ".png,.jpeg");
//!
//! let mut input = FileInput::new(rules);
//! let added = input.add(vec![FileMeta::new("cat.png", "image/png", 2048)]).unwrap();
//! assert_eq!(added.len(), 1);
//! assert!(input.add(vec![FileMeta::new("notes.txt", "text/plain", 10)]).is_err());
//! assert_eq!(input.files().len(), 1);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// Build the `accept` attribute from MIME types: the part after `/` with a
/// leading dot, comma-separated.
///
/// A type without `/` is used whole.
pub fn format_accepted_types<S: AsRef<str>>(types: &[S]) -> String {
    let mut out = String::new();
    for (i, ty) in types.iter().enumerate() {
        let ty = ty.as_ref();
        let ext = ty.find('/').map_or(ty, |slash| &ty[slash + 1..]);
        if i > 0 {
            out.push(',');
        }
        out.push('.');
        out.push_str(ext);
    }
    out
}

/// What the host knows about a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    /// File name.
    pub name: String,
    /// MIME type reported by the host.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileMeta {
    /// Describe a file.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// How the file can be previewed.
    pub fn preview(&self) -> Preview {
        if self.mime.contains("video") {
            Preview::Video
        } else if self.mime.contains("image") {
            Preview::Image
        } else {
            Preview::None
        }
    }
}

/// Preview kind for a file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preview {
    /// Playable video.
    Video,
    /// Image thumbnail.
    Image,
    /// Name only, with a "no preview" note.
    None,
}

/// Validation and cardinality rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FileRules {
    /// Accepted MIME types, compared exactly.
    pub accepted_types: Vec<String>,
    /// Largest accepted size in bytes.
    pub max_size: Option<u64>,
    /// Whether several files may be held.
    pub multiple: bool,
}

impl FileRules {
    /// Rules accepting `types`, with no size limit, for a single file.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted_types: types.into_iter().map(Into::into).collect(),
            max_size: None,
            multiple: false,
        }
    }

    /// Limit file size.
    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    /// Allow several files.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Value for the input's `accept` attribute.
    pub fn accept_attr(&self) -> String {
        format_accepted_types(&self.accepted_types)
    }

    /// Check one file.
    pub fn check(&self, file: &FileMeta) -> Result<(), FileRejection> {
        if let Some(max) = self.max_size.filter(|max| file.size > *max) {
            return Err(FileRejection::TooLarge {
                name: file.name.clone(),
                size: file.size,
                max,
            });
        }
        if !self.accepted_types.iter().any(|t| *t == file.mime) {
            return Err(FileRejection::UnsupportedType {
                name: file.name.clone(),
                mime: file.mime.clone(),
            });
        }
        Ok(())
    }
}

/// Why a batch was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileRejection {
    /// A file exceeds [`FileRules::max_size`].
    TooLarge {
        /// Offending file.
        name: String,
        /// Its size.
        size: u64,
        /// The limit.
        max: u64,
    },
    /// A file's type is not in [`FileRules::accepted_types`].
    UnsupportedType {
        /// Offending file.
        name: String,
        /// Its MIME type.
        mime: String,
    },
}

/// State of a file input.
#[derive(Clone, Debug, Default)]
pub struct FileInput {
    rules: FileRules,
    files: Vec<FileMeta>,
    selected: usize,
    dragging: bool,
}

impl FileInput {
    /// An empty input.
    pub fn new(rules: FileRules) -> Self {
        Self {
            rules,
            files: Vec::new(),
            selected: 0,
            dragging: false,
        }
    }

    /// Current rules.
    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Held files.
    pub fn files(&self) -> &[FileMeta] {
        &self.files
    }

    /// Index of the previewed file.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The previewed file.
    pub fn selected(&self) -> Option<&FileMeta> {
        self.files.get(self.selected)
    }

    /// Preview another held file. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.files.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Take a batch of files.
    ///
    /// Returns the files added by this batch (to report to the owner). An
    /// empty batch changes nothing.
    pub fn add(&mut self, batch: Vec<FileMeta>) -> Result<&[FileMeta], FileRejection> {
        if let Some(err) = batch.iter().find_map(|f| self.rules.check(f).err()) {
            tracing::debug!(?err, "file batch rejected");
            return Err(err);
        }
        if batch.is_empty() {
            return Ok(&[]);
        }
        let start = if self.rules.multiple {
            self.files.len()
        } else {
            self.files.clear();
            self.selected = 0;
            0
        };
        self.files.extend(batch);
        Ok(&self.files[start..])
    }

    /// Remove every file. Returns whether anything was held.
    pub fn clear(&mut self) -> bool {
        let had = !self.files.is_empty();
        self.files.clear();
        self.selected = 0;
        had
    }

    /// Whether files are being dragged over the page.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Something is dragged over the page.
    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    /// The drag ended without a drop.
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// The drag left an element at client position (`x`, `y`).
    ///
    /// Only leaving the window, reported as `(0, 0)`, ends the drag state.
    pub fn drag_leave(&mut self, x: f64, y: f64) {
        if x == 0.0 && y == 0.0 {
            self.dragging = false;
        }
    }

    /// Files were dropped on the input.
    pub fn drop_files(&mut self, batch: Vec<FileMeta>) -> Result<&[FileMeta], FileRejection> {
        self.dragging = false;
        self.add(batch)
    }
}
