//! Legacy RSC text tokens
//!
//! Classic text records are a stream of formatting instructions: literal text
//! runs, justification, line breaks, cursor placement and subrecord separators.
//! [`Token`] is the closed set the markup codec understands. [`LegacyToken`] is
//! the looser shape handed over by an archive reader, which may carry
//! formatting kinds the codec has no mapping for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single RSC text instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Literal run of characters.
    Text(String),
    /// Left-justify following text.
    JustifyLeft,
    /// Center following text.
    JustifyCenter,
    /// Explicit line break.
    NewLine,
    /// Absolute placement of following text.
    PositionCursor { x: i16, y: i16 },
    /// Point where the game overlays an input caret.
    InputCursorMarker,
    /// Ends the current subrecord and starts the next one.
    SubrecordSeparator,
}

impl Token {
    /// Shorthand for a [`Token::Text`] run.
    pub fn text(s: impl Into<String>) -> Self {
        Token::Text(s.into())
    }

    /// Shorthand for a [`Token::PositionCursor`].
    #[must_use]
    pub fn position(x: i16, y: i16) -> Self {
        Token::PositionCursor { x, y }
    }

    /// The legacy formatting kind this token corresponds to.
    #[must_use]
    pub fn formatting(&self) -> Formatting {
        match self {
            Token::Text(_) => Formatting::Text,
            Token::JustifyLeft => Formatting::JustifyLeft,
            Token::JustifyCenter => Formatting::JustifyCenter,
            Token::NewLine => Formatting::NewLine,
            Token::PositionCursor { .. } => Formatting::PositionPrefix,
            Token::InputCursorMarker => Formatting::InputCursorPositioner,
            Token::SubrecordSeparator => Formatting::SubrecordSeparator,
        }
    }
}

/// Formatting kind as reported by a legacy archive reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formatting {
    Text,
    JustifyLeft,
    JustifyCenter,
    NewLine,
    PositionPrefix,
    InputCursorPositioner,
    SubrecordSeparator,
    /// Any raw formatting code without a markup mapping (fonts, colors, ...).
    Other(u16),
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatting::Other(code) => write!(f, "Other(0x{code:02X})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// A token exactly as the archive reader produced it.
///
/// Only `text` is meaningful for [`Formatting::Text`] and only `x`/`y` for
/// [`Formatting::PositionPrefix`]; the other fields are left at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyToken {
    pub formatting: Formatting,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: i16,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: i16,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &i16) -> bool {
    *v == 0
}

impl LegacyToken {
    /// A token with no payload.
    #[must_use]
    pub fn new(formatting: Formatting) -> Self {
        Self {
            formatting,
            text: String::new(),
            x: 0,
            y: 0,
        }
    }

    /// A literal text token.
    pub fn text(s: impl Into<String>) -> Self {
        Self {
            text: s.into(),
            ..Self::new(Formatting::Text)
        }
    }

    /// A position prefix token.
    #[must_use]
    pub fn position(x: i16, y: i16) -> Self {
        Self {
            x,
            y,
            ..Self::new(Formatting::PositionPrefix)
        }
    }
}

impl TryFrom<&LegacyToken> for Token {
    type Error = Error;

    fn try_from(token: &LegacyToken) -> Result<Self> {
        Ok(match token.formatting {
            Formatting::Text => Token::Text(token.text.clone()),
            Formatting::JustifyLeft => Token::JustifyLeft,
            Formatting::JustifyCenter => Token::JustifyCenter,
            Formatting::NewLine => Token::NewLine,
            Formatting::PositionPrefix => Token::PositionCursor {
                x: token.x,
                y: token.y,
            },
            Formatting::InputCursorPositioner => Token::InputCursorMarker,
            Formatting::SubrecordSeparator => Token::SubrecordSeparator,
            other @ Formatting::Other(_) => {
                return Err(Error::UnsupportedTokenKind {
                    kind: other.to_string(),
                });
            }
        })
    }
}

impl TryFrom<LegacyToken> for Token {
    type Error = Error;

    fn try_from(token: LegacyToken) -> Result<Self> {
        match token.formatting {
            Formatting::Text => Ok(Token::Text(token.text)),
            _ => Token::try_from(&token),
        }
    }
}

impl From<&Token> for LegacyToken {
    fn from(token: &Token) -> Self {
        match token {
            Token::Text(s) => LegacyToken::text(s.clone()),
            Token::PositionCursor { x, y } => LegacyToken::position(*x, *y),
            other => LegacyToken::new(other.formatting()),
        }
    }
}

/// Map a legacy token stream onto [`Token`]s.
///
/// # Errors
/// Returns [`Error::UnsupportedTokenKind`] for the first token with no mapping.
pub fn from_legacy(tokens: &[LegacyToken]) -> Result<Vec<Token>> {
    tokens.iter().map(Token::try_from).collect()
}

/// Map tokens back onto the legacy representation, e.g. for re-export.
#[must_use]
pub fn to_legacy(tokens: &[Token]) -> Vec<LegacyToken> {
    tokens.iter().map(LegacyToken::from).collect()
}

/// Merge adjacent text runs and drop empty ones.
///
/// Markup cannot tell `Text("ab")` from `Text("a"), Text("b")`, so this is the
/// canonical form that survives an encode/decode round trip unchanged.
pub fn normalize_tokens(tokens: impl IntoIterator<Item = Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::new();
    for token in tokens {
        match token {
            Token::Text(s) if s.is_empty() => {}
            Token::Text(s) => {
                if let Some(Token::Text(prev)) = out.last_mut() {
                    prev.push_str(&s);
                } else {
                    out.push(Token::Text(s));
                }
            }
            other => out.push(other),
        }
    }
    out
}
