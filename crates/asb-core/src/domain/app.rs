//! Application descriptor types.
//!
//! `App` is the reference descriptor record used by the CLI and the test
//! suites. Pipelines that carry their own record type only need to implement
//! [`AppRecord`](crate::ports::AppRecord); nothing in the absorb service
//! depends on this struct.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ports::AppRecord;

/// Reserved metadata key naming the record an addon merges into.
pub const MERGE_WITH_PARENT_KEY: &str = "X-Merge-With-Parent";

// ─────────────────────────────────────────────────────────────────────────────
// Kind / Mode Types
// ─────────────────────────────────────────────────────────────────────────────

/// The kind of component a descriptor describes.
///
/// Only `Desktop` and `Addon` take part in dependency linking. Every other
/// kind passes through the linker untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    #[default]
    Unknown,
    /// A desktop application; may own addons through its dependencies.
    Desktop,
    /// An addon that extends some other component.
    Addon,
    Font,
    Codec,
    InputMethod,
    WebApp,
    Source,
    Runtime,
    Firmware,
    Localization,
}

/// How much of a donor record `subsume` copies into the receiver.
///
/// The absorb pass always merges with `Partial`. `Full` is part of the
/// record contract for pipelines that fold whole duplicate records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsumeMode {
    /// Copy the list-like and localized data only; identity fields stay put.
    Partial,
    /// Copy everything, including identity fields the receiver lacks.
    Full,
}

// ─────────────────────────────────────────────────────────────────────────────
// App
// ─────────────────────────────────────────────────────────────────────────────

/// A single application descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    /// Full component id (e.g. "org.gnome.Gimp.desktop").
    pub id: String,
    pub kind: IdKind,
    /// Package names shipping this component. The first one is the default.
    pub pkgnames: Vec<String>,
    /// Package names the default package depends on.
    pub dependencies: Vec<String>,
    /// Localized names, keyed by locale ("C" for untranslated).
    pub name: BTreeMap<String, String>,
    /// Localized one-line summaries, keyed by locale.
    pub comment: BTreeMap<String, String>,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub mimetypes: Vec<String>,
    /// Ids of components this one extends.
    pub extends: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// URLs keyed by kind ("homepage", "bugtracker", ...).
    pub urls: BTreeMap<String, String>,
    /// Free-form key/value metadata.
    pub metadata: BTreeMap<String, String>,
}

impl App {
    /// Create a record with the given id and kind and nothing else set.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: IdKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    /// Builder-style helper adding a package name.
    #[must_use]
    pub fn with_pkgname(mut self, pkgname: impl Into<String>) -> Self {
        push_unique(&mut self.pkgnames, pkgname.into());
        self
    }

    /// Builder-style helper adding a dependency.
    #[must_use]
    pub fn with_dependency(mut self, pkgname: impl Into<String>) -> Self {
        self.dependencies.push(pkgname.into());
        self
    }

    /// The package this record is primarily associated with.
    pub fn pkgname_default(&self) -> Option<&str> {
        self.pkgnames.first().map(String::as_str)
    }

    /// Add a metadata entry only when the key is not already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn add_metadata(&mut self, key: &str, value: &str) -> bool {
        if self.metadata.contains_key(key) {
            return false;
        }
        self.metadata.insert(key.to_owned(), value.to_owned());
        true
    }

    /// Merge `donor` into this record.
    ///
    /// List-like fields are unioned, keeping this record's entries first.
    /// Localized strings, URLs and metadata are only copied for keys this
    /// record does not have yet. The merge tag is never copied, so a parent
    /// cannot become tagged by absorbing its addons.
    pub fn subsume_full(&mut self, donor: &Self, mode: SubsumeMode) {
        for pkgname in &donor.pkgnames {
            push_unique(&mut self.pkgnames, pkgname.clone());
        }
        for category in &donor.categories {
            push_unique(&mut self.categories, category.clone());
        }
        for keyword in &donor.keywords {
            push_unique(&mut self.keywords, keyword.clone());
        }
        for mimetype in &donor.mimetypes {
            push_unique(&mut self.mimetypes, mimetype.clone());
        }
        for extends in &donor.extends {
            if *extends != self.id {
                push_unique(&mut self.extends, extends.clone());
            }
        }
        fill_missing(&mut self.name, &donor.name);
        fill_missing(&mut self.comment, &donor.comment);
        fill_missing(&mut self.urls, &donor.urls);
        for (key, value) in &donor.metadata {
            if key == MERGE_WITH_PARENT_KEY {
                continue;
            }
            self.add_metadata(key, value);
        }

        if mode == SubsumeMode::Partial {
            return;
        }

        if self.kind == IdKind::Unknown {
            self.kind = donor.kind;
        }
        if self.project_group.is_none() {
            self.project_group.clone_from(&donor.project_group);
        }
        if self.icon.is_none() {
            self.icon.clone_from(&donor.icon);
        }
    }
}

impl AppRecord for App {
    fn kind(&self) -> IdKind {
        self.kind
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn default_package(&self) -> Option<&str> {
        self.pkgname_default()
    }

    fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    fn metadata_item(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    fn set_metadata_item(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_owned(), value.to_owned());
    }

    fn subsume(&mut self, donor: &Self, mode: SubsumeMode) {
        self.subsume_full(donor, mode);
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn fill_missing(into: &mut BTreeMap<String, String>, from: &BTreeMap<String, String>) {
    for (key, value) in from {
        into.entry(key.clone()).or_insert_with(|| value.clone());
    }
}
