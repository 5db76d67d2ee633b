//! Importer helpers for classic game text
//!
//! An import either lands every record of the archive or none of them: all
//! records are converted first and only then inserted into the database.

use std::path::Path;

use serde::Serialize;

use super::TextDatabase;
use crate::archive::{LegacyArchive, TokenDump};
use crate::converter::markup::encode_legacy;
use crate::error::{Error, Result};
use crate::formats::{LegacySource, TextGroup};

/// Progress callback type for import operations.
pub type ImportProgressCallback<'a> = &'a dyn Fn(&ImportProgress);

/// Progress information during an import
#[derive(Debug, Clone)]
pub struct ImportProgress {
    /// Current phase
    pub phase: ImportPhase,
    /// Current record number (1-indexed)
    pub current: usize,
    /// Total number of records
    pub total: usize,
    /// Key of the record being processed (if applicable)
    pub current_key: Option<String>,
}

impl ImportProgress {
    #[must_use]
    pub fn new(phase: ImportPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_key: None,
        }
    }
}

/// Phase of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    /// Reading and converting records
    Converting,
    /// Inserting converted records into the database
    Inserting,
    /// Import complete
    Complete,
}

/// Summary of a completed import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub source: LegacySource,
    /// Records read from the archive
    pub records: usize,
    /// Records that replaced an existing key
    pub overwrites: usize,
}

/// Import every record of a legacy archive. Duplicates are overwritten.
///
/// # Errors
/// Returns [`Error::SourceUnavailable`] if the archive is not loaded, or the
/// first error raised while reading or converting a record. On error the
/// database is left untouched.
pub fn import_archive<A: LegacyArchive + ?Sized>(
    archive: &A,
    db: &mut TextDatabase,
) -> Result<ImportReport> {
    import_archive_with_progress(archive, db, &|_| {})
}

/// Import every record of a legacy archive with progress callback.
///
/// # Errors
/// See [`import_archive`].
pub fn import_archive_with_progress<A: LegacyArchive + ?Sized>(
    archive: &A,
    db: &mut TextDatabase,
    progress: ImportProgressCallback,
) -> Result<ImportReport> {
    if !archive.is_loaded() {
        return Err(Error::SourceUnavailable {
            archive: archive.name(),
            reason: "archive is not loaded".to_string(),
        });
    }

    let source = archive.source();
    let total = archive.record_count();
    tracing::info!("Importing {} records from {}", total, archive.name());

    let mut staged = Vec::with_capacity(total);
    for index in 0..total {
        let key = source.make_key(archive.index_to_id(index)?);
        progress(&ImportProgress {
            current_key: Some(key.clone()),
            ..ImportProgress::new(ImportPhase::Converting, index + 1, total)
        });

        let bytes = archive.record_bytes(index)?;
        let tokens = archive.read_tokens(&bytes)?;
        let elements = encode_legacy(&tokens).inspect_err(|e| {
            tracing::error!("Failed to convert {}: {}", key, e);
        })?;

        tracing::debug!("{}: {} tokens, {} elements", key, tokens.len(), elements.len());
        staged.push(TextGroup::new(source, key, elements));
    }

    progress(&ImportProgress::new(ImportPhase::Inserting, total, total));
    let mut overwrites = 0;
    for group in staged {
        let key = group.primary_key.clone();
        if db.insert(group) {
            tracing::debug!("Overwrote {}", key);
            overwrites += 1;
        }
    }

    progress(&ImportProgress::new(ImportPhase::Complete, total, total));
    tracing::info!(
        "Added {} {} entries to database with {} overwrites",
        total,
        source,
        overwrites
    );

    Ok(ImportReport {
        source,
        records: total,
        overwrites,
    })
}

/// Import a `TEXT.RSC` token dump from disk.
///
/// # Errors
/// Returns [`Error::SourceUnavailable`] if the dump cannot be opened or parsed,
/// otherwise see [`import_archive`].
pub fn import_text_rsc_file<P: AsRef<Path>>(
    path: P,
    db: &mut TextDatabase,
    progress: ImportProgressCallback,
) -> Result<ImportReport> {
    let path = path.as_ref();
    let dump = TokenDump::open(path).map_err(|e| Error::SourceUnavailable {
        archive: path.display().to_string(),
        reason: e.to_string(),
    })?;
    import_archive_with_progress(&dump, db, progress)
}
