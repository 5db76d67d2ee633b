//! RSC tokens to markup text

use std::fmt::Write as _;

use super::{
    DIRECTIVE_OPEN, ESCAPE, MARKUP_INPUT_CURSOR, MARKUP_JUSTIFY_CENTER, MARKUP_JUSTIFY_LEFT,
    MARKUP_NEW_LINE,
};
use crate::error::Result;
use crate::formats::{LegacyToken, TextElement, Token, from_legacy, normalize_tokens};

/// Convert RSC tokens into markup text elements.
///
/// All tokens of a subrecord are joined into a single markup string. Every
/// [`Token::SubrecordSeparator`] closes the current element, and the trailing
/// element is always emitted, so `k` separators yield `k + 1` elements.
/// Tokens are normalized first; see [`normalize_tokens`].
#[must_use]
pub fn encode(tokens: &[Token]) -> Vec<TextElement> {
    let mut elements = Vec::new();
    let mut text = String::new();

    for token in &normalize_tokens(tokens.iter().cloned()) {
        match token {
            Token::Text(s) => push_escaped(&mut text, s),
            Token::JustifyLeft => text.push_str(MARKUP_JUSTIFY_LEFT),
            Token::JustifyCenter => text.push_str(MARKUP_JUSTIFY_CENTER),
            Token::NewLine => text.push_str(MARKUP_NEW_LINE),
            Token::PositionCursor { x, y } => {
                let _ = write!(text, "{DIRECTIVE_OPEN}pos:x={x},y={y}]");
            }
            Token::InputCursorMarker => text.push_str(MARKUP_INPUT_CURSOR),
            Token::SubrecordSeparator => {
                elements.push(TextElement::from(std::mem::take(&mut text)));
            }
        }
    }

    // Add pending text
    elements.push(TextElement::from(text));
    elements
}

/// Convert tokens straight from an archive reader into markup text elements.
///
/// # Errors
/// Returns [`Error::UnsupportedTokenKind`] if any token has a formatting kind
/// without a markup mapping.
///
/// [`Error::UnsupportedTokenKind`]: crate::Error::UnsupportedTokenKind
pub fn encode_legacy(tokens: &[LegacyToken]) -> Result<Vec<TextElement>> {
    Ok(encode(&from_legacy(tokens)?))
}

/// Append literal text, escaping anything the decoder would read as markup.
///
/// A `[` is escaped when followed by `/` or when it ends the run. Runs are
/// normalized, so a run only ends before markup or at the end of the element.
fn push_escaped(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                out.push(ESCAPE);
                out.push(ESCAPE);
            }
            '[' if matches!(chars.peek(), Some('/') | None) => {
                out.push(ESCAPE);
                out.push('[');
            }
            _ => out.push(c),
        }
    }
}
