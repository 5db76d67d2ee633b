//! JSON token dumps
//!
//! ```json
//! {
//!   "source": "TextRsc",
//!   "records": [
//!     { "id": 1000, "tokens": [ { "formatting": "Text", "text": "Hello" } ] }
//!   ]
//! }
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LegacyArchive;
use crate::error::{Error, Result};
use crate::formats::{LegacySource, LegacyToken};

/// One record of a token dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpRecord {
    pub id: u32,
    pub tokens: Vec<LegacyToken>,
}

/// Decoded records of a classic archive, stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenDump {
    #[serde(default)]
    pub source: LegacySource,
    pub records: Vec<DumpRecord>,
}

impl TokenDump {
    #[must_use]
    pub fn new(source: LegacySource) -> Self {
        Self {
            source,
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn push(&mut self, id: u32, tokens: Vec<LegacyToken>) {
        self.records.push(DumpRecord { id, tokens });
    }

    /// Read a dump from disk.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read or [`Error::JsonError`]
    /// if it is not a valid dump.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a dump from a JSON string.
    ///
    /// # Errors
    /// Returns [`Error::JsonError`] if the JSON is not a valid dump.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write the dump to disk as pretty JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn record(&self, index: usize) -> Result<&DumpRecord> {
        self.records.get(index).ok_or(Error::InvalidIndex(index))
    }
}

impl LegacyArchive for TokenDump {
    fn source(&self) -> LegacySource {
        self.source
    }

    fn is_loaded(&self) -> bool {
        true
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn index_to_id(&self, index: usize) -> Result<u32> {
        Ok(self.record(index)?.id)
    }

    fn record_bytes(&self, index: usize) -> Result<Cow<'_, [u8]>> {
        let bytes = serde_json::to_vec(&self.record(index)?.tokens)?;
        Ok(Cow::Owned(bytes))
    }

    fn read_tokens(&self, bytes: &[u8]) -> Result<Vec<LegacyToken>> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::Formatting;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> TokenDump {
        let mut dump = TokenDump::new(LegacySource::TextRsc);
        dump.push(
            1000,
            vec![
                LegacyToken::new(Formatting::JustifyCenter),
                LegacyToken::text("Hello"),
            ],
        );
        dump.push(1001, Vec::new());
        dump
    }

    #[test]
    fn test_record_access() {
        let dump = sample();
        assert_eq!(dump.record_count(), 2);
        assert_eq!(dump.index_to_id(1).unwrap(), 1001);
        assert!(matches!(dump.index_to_id(2), Err(Error::InvalidIndex(2))));

        let bytes = dump.record_bytes(0).unwrap();
        let tokens = dump.read_tokens(&bytes).unwrap();
        assert_eq!(tokens, dump.records[0].tokens);
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("text_rsc.json");

        sample().save(&path).unwrap();
        let loaded = TokenDump::open(&path).unwrap();

        assert_eq!(loaded.source, LegacySource::TextRsc);
        assert_eq!(loaded.records, sample().records);
    }

    #[test]
    fn test_source_defaults_to_text_rsc() {
        let dump = TokenDump::from_json(r#"{ "records": [] }"#).unwrap();
        assert_eq!(dump.source, LegacySource::TextRsc);
        assert_eq!(dump.name(), "TEXT.RSC");
    }
}
