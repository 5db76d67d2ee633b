//! Localization text records

use std::fmt;

use serde::{Deserialize, Serialize};

use super::token::Token;
use crate::converter::markup;
use crate::error::{Error, Result};

/// Classic game data a record was imported from.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LegacySource {
    /// `TEXT.RSC` from the classic `ARENA2` folder.
    #[default]
    TextRsc,
}

impl LegacySource {
    /// Prefix used for store keys of this source.
    #[must_use]
    pub fn key_prefix(self) -> &'static str {
        match self {
            LegacySource::TextRsc => "text",
        }
    }

    /// Original filename of the source.
    #[must_use]
    pub fn filename(self) -> &'static str {
        match self {
            LegacySource::TextRsc => "TEXT.RSC",
        }
    }

    /// Store key for a numeric record id, e.g. `text.1000`.
    #[must_use]
    pub fn make_key(self, id: u32) -> String {
        format!("{}.{id}", self.key_prefix())
    }
}

impl fmt::Display for LegacySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename())
    }
}

/// Create a `TEXT.RSC` key in the format `text.nnnn`.
#[must_use]
pub fn make_text_rsc_key(id: u32) -> String {
    LegacySource::TextRsc.make_key(id)
}

/// A single text element: markup text for one subrecord.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextElement {
    /// Text with markup for this entry
    pub text: String,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for TextElement {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextElement {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// One localizable record: a key plus one or more text elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextGroup {
    pub legacy_source: LegacySource,
    pub primary_key: String,
    elements: Vec<TextElement>,
}

impl TextGroup {
    /// Create a group. An empty element list is padded with one empty element.
    pub fn new(
        legacy_source: LegacySource,
        primary_key: impl Into<String>,
        mut elements: Vec<TextElement>,
    ) -> Self {
        if elements.is_empty() {
            elements.push(TextElement::default());
        }
        Self {
            legacy_source,
            primary_key: primary_key.into(),
            elements,
        }
    }

    /// Build a group by encoding a token stream.
    pub fn from_tokens(
        legacy_source: LegacySource,
        primary_key: impl Into<String>,
        tokens: &[Token],
    ) -> Self {
        Self::new(legacy_source, primary_key, markup::encode(tokens))
    }

    /// Text elements, never empty.
    #[must_use]
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    /// Primary (first) element.
    #[must_use]
    pub fn primary(&self) -> &TextElement {
        &self.elements[0]
    }

    /// Whether any element contains an already lowercased needle.
    pub(crate) fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.elements
            .iter()
            .any(|e| e.text.to_lowercase().contains(needle_lower))
    }

    /// Decode the group back into RSC tokens.
    ///
    /// # Errors
    /// Returns [`Error::Markup`] naming this group's key if any element fails
    /// to decode.
    pub fn to_tokens(&self) -> Result<Vec<Token>> {
        markup::decode(&self.elements).map_err(|source| Error::Markup {
            key: self.primary_key.clone(),
            source,
        })
    }
}
