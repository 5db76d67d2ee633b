//! Localization text database
//!
//! An in-memory store of [`TextGroup`]s keyed by primary key, with importer
//! helpers for classic game text. Callers own the database and pass it to
//! whatever needs it; there is no global instance.
//!
//! ## Usage
//!
//! ```
//! use classictext::database::TextDatabase;
//! use classictext::formats::{LegacySource, TextGroup, Token};
//!
//! let mut db = TextDatabase::new();
//! db.insert(TextGroup::from_tokens(
//!     LegacySource::TextRsc,
//!     "text.1",
//!     &[Token::text("Hello, traveler")],
//! ));
//!
//! assert_eq!(db.search("TRAVELER").len(), 1);
//! ```

mod editor;
pub mod import;

pub use editor::MergeResult;
pub use import::{
    ImportPhase, ImportProgress, ImportProgressCallback, ImportReport, import_archive,
    import_archive_with_progress, import_text_rsc_file,
};

use indexmap::IndexMap;

use crate::error::Result;
use crate::formats::{TextGroup, Token};

/// Keyed collection of localization text groups.
#[derive(Debug, Clone, Default)]
pub struct TextDatabase {
    groups: IndexMap<String, TextGroup>,
    overwrites: usize,
}

impl TextDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group under its primary key, replacing any existing group.
    ///
    /// # Returns
    /// `true` if an existing group was overwritten
    pub fn insert(&mut self, group: TextGroup) -> bool {
        let key = group.primary_key.clone();
        let replaced = self.groups.insert(key, group).is_some();
        if replaced {
            self.overwrites += 1;
        }
        replaced
    }

    /// Get a group by exact key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TextGroup> {
        self.groups.get(key)
    }

    /// Search for groups with any element containing `query`.
    ///
    /// Matching ignores case. An empty query returns every group. Result order
    /// is not part of the contract.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&TextGroup> {
        if query.is_empty() {
            return self.groups.values().collect();
        }

        let query_lower = query.to_lowercase();
        self.groups
            .values()
            .filter(|group| group.contains_lowercase(&query_lower))
            .collect()
    }

    /// Get all groups. Same as `search("")`.
    #[must_use]
    pub fn search_all(&self) -> Vec<&TextGroup> {
        self.search("")
    }

    /// Search with an optional query; `None` matches everything.
    #[must_use]
    pub fn search_opt(&self, query: Option<&str>) -> Vec<&TextGroup> {
        self.search(query.unwrap_or_default())
    }

    /// Decode the group stored under `key` back into RSC tokens.
    ///
    /// # Errors
    /// Returns [`Error::Markup`](crate::Error::Markup) if the group's markup
    /// does not decode.
    pub fn export_tokens(&self, key: &str) -> Result<Option<Vec<Token>>> {
        self.get(key).map(TextGroup::to_tokens).transpose()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.groups.contains_key(key)
    }

    /// Keys in the database
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextGroup> {
        self.groups.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of inserts that replaced an existing group over the lifetime of
    /// this database.
    #[must_use]
    pub fn overwrite_count(&self) -> usize {
        self.overwrites
    }
}
