//! Legacy archive access
//!
//! The classic container formats are read elsewhere; this module only defines
//! what the importer needs from such a reader, plus [`TokenDump`], a JSON
//! snapshot of an archive's decoded records.

mod dump;

pub use dump::{DumpRecord, TokenDump};

use std::borrow::Cow;

use crate::error::Result;
use crate::formats::{LegacySource, LegacyToken};

/// A loaded classic text archive such as `TEXT.RSC`.
pub trait LegacyArchive {
    /// Which classic source this archive is.
    fn source(&self) -> LegacySource;

    /// Display name used in logs and errors.
    fn name(&self) -> String {
        self.source().filename().to_string()
    }

    /// Whether the archive was opened successfully.
    fn is_loaded(&self) -> bool;

    /// Number of records in the archive.
    fn record_count(&self) -> usize;

    /// Stable numeric id of the record at `index`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`](crate::Error::InvalidIndex) if `index`
    /// is out of range.
    fn index_to_id(&self, index: usize) -> Result<u32>;

    /// Raw bytes of the record at `index`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`](crate::Error::InvalidIndex) if `index`
    /// is out of range.
    fn record_bytes(&self, index: usize) -> Result<Cow<'_, [u8]>>;

    /// Decode one record's raw bytes into tokens, up to the end of the record.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a valid record.
    fn read_tokens(&self, bytes: &[u8]) -> Result<Vec<LegacyToken>>;
}
