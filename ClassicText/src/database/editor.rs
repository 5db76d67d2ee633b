//! Text database editing operations
//!
//! - Remove entries
//! - Merge another database

use super::TextDatabase;
use crate::formats::TextGroup;

/// Result of a merge operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// Groups whose key was not present before
    pub added: usize,
    /// Groups that replaced an existing entry
    pub replaced: usize,
    /// Groups left alone because the key existed and overwrite was off
    pub skipped: usize,
}

impl TextDatabase {
    /// Remove a group by key
    ///
    /// # Returns
    /// The removed group if found, `None` otherwise
    pub fn remove(&mut self, key: &str) -> Option<TextGroup> {
        self.groups.shift_remove(key)
    }

    /// Remove all groups. The overwrite counter is kept.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Merge groups from another database
    ///
    /// # Arguments
    /// * `other` - Database to merge from
    /// * `overwrite` - If true, existing groups are replaced (and counted as
    ///   overwrites)
    pub fn merge(&mut self, other: &TextDatabase, overwrite: bool) -> MergeResult {
        let mut result = MergeResult::default();

        for group in other.iter() {
            if !self.contains_key(&group.primary_key) {
                self.insert(group.clone());
                result.added += 1;
            } else if overwrite {
                self.insert(group.clone());
                result.replaced += 1;
            } else {
                result.skipped += 1;
            }
        }

        tracing::debug!(
            "Merged text database: {} added, {} replaced, {} skipped",
            result.added,
            result.replaced,
            result.skipped
        );
        result
    }
}
