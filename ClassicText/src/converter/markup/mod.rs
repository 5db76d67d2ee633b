//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! RSC tokens <-> markup text
//!
//! Markup is designed with the following requirements:
//! 1. Simple to understand and edit as plain text
//! 2. Covers all classic RSC text formatting
//! 3. Converts losslessly between RSC tokens and markup
//! 4. Does not conflict with regular text in any language
//!
//! ## Grammar (version 1)
//!
//! | Markup                 | Token                       |
//! |------------------------|-----------------------------|
//! | `[/left]`              | [`Token::JustifyLeft`]       |
//! | `[/center]`            | [`Token::JustifyCenter`]     |
//! | `[/pos:x=10,y=25]`     | [`Token::PositionCursor`]    |
//! | `[/input]`             | [`Token::InputCursorMarker`] |
//! | `\n` (two characters)  | [`Token::NewLine`]           |
//!
//! Subrecord separators are not written inline; each subrecord becomes its own
//! [`TextElement`]. In literal text a backslash is written `\\`. A `[` is
//! written `\[` when it is followed by `/`, by a directive, by `\n` or by the
//! end of the element; everywhere else it is written bare.
//!
//! Decoding accepts exactly the markup encoding produces: directive arguments
//! in canonical form and `[` escaped only where required.
//!
//! [`Token::JustifyLeft`]: crate::formats::Token::JustifyLeft
//! [`Token::JustifyCenter`]: crate::formats::Token::JustifyCenter
//! [`Token::PositionCursor`]: crate::formats::Token::PositionCursor
//! [`Token::InputCursorMarker`]: crate::formats::Token::InputCursorMarker
//! [`Token::NewLine`]: crate::formats::Token::NewLine
//! [`TextElement`]: crate::formats::TextElement

mod decode;
mod encode;

pub use decode::{decode, decode_str};
pub use encode::{encode, encode_legacy};

use thiserror::Error;

/// Version of the markup grammar written by [`encode`].
///
/// Stored text databases and exported markup carry this marker; bump it on
/// any grammar change that alters existing markup.
pub const MARKUP_VERSION: u32 = 1;

pub(crate) const DIRECTIVE_OPEN: &str = "[/";
pub(crate) const DIRECTIVE_CLOSE: char = ']';
pub(crate) const ESCAPE: char = '\\';

pub(crate) const MARKUP_JUSTIFY_LEFT: &str = "[/left]";
pub(crate) const MARKUP_JUSTIFY_CENTER: &str = "[/center]";
pub(crate) const MARKUP_NEW_LINE: &str = "\\n";
pub(crate) const MARKUP_INPUT_CURSOR: &str = "[/input]";

/// Whether a literal `[` followed by the markup `after` must be written `\[`.
pub(crate) fn bracket_needs_escape(after: &str) -> bool {
    after.is_empty()
        || after.starts_with('/')
        || after.starts_with(DIRECTIVE_OPEN)
        || after.starts_with(MARKUP_NEW_LINE)
}

/// Markup text that could not be decoded.
///
/// `element` is the index of the text element within its group and `offset`
/// the byte offset of the problem within that element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A `[/name]` directive with a name outside the grammar.
    #[error("unknown directive '{directive}' in element {element} at byte {offset}")]
    UnknownDirective {
        name: String,
        directive: String,
        element: usize,
        offset: usize,
    },

    /// A known directive with bad arguments, or one missing its `]`.
    #[error("malformed directive '{directive}' in element {element} at byte {offset}: {reason}")]
    MalformedDirective {
        directive: String,
        reason: String,
        element: usize,
        offset: usize,
    },

    /// A backslash not followed by `n`, `\` or `[`, or a `\[` where a bare
    /// `[` is expected.
    #[error("invalid escape '{sequence}' in element {element} at byte {offset}")]
    InvalidEscape {
        sequence: String,
        element: usize,
        offset: usize,
    },

    /// A bare `[` where `\[` is required.
    #[error("'[' must be written '\\[' in element {element} at byte {offset}")]
    UnescapedBracket { element: usize, offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{TextElement, Token, normalize_tokens};
    use pretty_assertions::assert_eq;

    fn texts(elements: &[TextElement]) -> Vec<&str> {
        elements.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_welcome_center_newline() {
        let tokens = vec![
            Token::text("Welcome"),
            Token::JustifyCenter,
            Token::NewLine,
            Token::text("Friend"),
        ];

        let elements = encode(&tokens);
        assert_eq!(texts(&elements), vec!["Welcome[/center]\\nFriend"]);
        assert_eq!(decode(&elements).unwrap(), tokens);
    }

    #[test]
    fn test_subrecords_become_elements() {
        let tokens = vec![Token::text("A"), Token::SubrecordSeparator, Token::text("B")];

        let elements = encode(&tokens);
        assert_eq!(texts(&elements), vec!["A", "B"]);
        assert_eq!(decode(&elements).unwrap(), tokens);
    }

    #[test]
    fn test_position_literal() {
        let elements = encode(&[Token::position(10, 25)]);
        assert_eq!(texts(&elements), vec!["[/pos:x=10,y=25]"]);

        assert_eq!(
            decode_str("Hi[/pos:x=1,y=2]").unwrap(),
            vec![Token::text("Hi"), Token::position(1, 2)]
        );
    }

    #[test]
    fn test_round_trip_all_kinds() {
        let tokens = vec![
            Token::JustifyLeft,
            Token::text("Name: "),
            Token::InputCursorMarker,
            Token::NewLine,
            Token::NewLine,
            Token::position(-12, 300),
            Token::text("Gold"),
            Token::SubrecordSeparator,
            Token::SubrecordSeparator,
            Token::JustifyCenter,
            Token::text("Ends"),
            Token::SubrecordSeparator,
        ];

        let elements = encode(&tokens);
        assert_eq!(elements.len(), 4);
        assert_eq!(decode(&elements).unwrap(), tokens);
    }

    #[test]
    fn test_markup_stability() {
        let samples = [
            "",
            "plain text",
            "[/left]Left\\n[/center]Center",
            "Pay [/pos:x=0,y=-1]gold?[/input]",
            "path C:\\\\ARENA2 and \\[/left] literal",
            "trailing \\[",
            "before a directive \\[[/left] and a newline \\[\\n",
            "brackets [like this] stay",
        ];

        for markup in samples {
            let tokens = decode_str(markup).unwrap();
            let elements = encode(&tokens);
            assert_eq!(texts(&elements), vec![markup], "markup: {markup}");
        }
    }

    #[test]
    fn test_escaped_text_round_trip() {
        let tokens = vec![
            Token::text("a\\b [/left] c\\n ["),
            Token::NewLine,
            Token::text("\\"),
        ];

        let elements = encode(&tokens);
        assert_eq!(
            texts(&elements),
            vec!["a\\\\b \\[/left] c\\\\n \\[\\n\\\\"]
        );
        assert_eq!(decode(&elements).unwrap(), tokens);
    }

    #[test]
    fn test_unnormalized_input_round_trips_to_normalized() {
        let tokens = vec![
            Token::text("["),
            Token::text("/"),
            Token::text(""),
            Token::JustifyLeft,
        ];

        let elements = encode(&tokens);
        assert_eq!(decode(&elements).unwrap(), normalize_tokens(tokens));
    }

    #[test]
    fn test_empty_input_yields_one_element() {
        let elements = encode(&[]);
        assert_eq!(texts(&elements), vec![""]);
        assert!(decode(&elements).unwrap().is_empty());
    }

    #[test]
    fn test_separator_count() {
        for k in 0..5 {
            let tokens = vec![Token::SubrecordSeparator; k];
            assert_eq!(encode(&tokens).len(), k + 1);
        }
    }

    #[test]
    fn test_unknown_directive() {
        let err = decode_str("[/bogus]").unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnknownDirective {
                name: "bogus".to_string(),
                directive: "[/bogus]".to_string(),
                element: 0,
                offset: 0,
            }
        );

        // Directive names are lowercase
        assert!(matches!(
            decode_str("[/LEFT]"),
            Err(MarkupError::UnknownDirective { .. })
        ));
    }

    #[test]
    fn test_malformed_position() {
        let err = decode_str("[/pos:x=a,y=2]").unwrap_err();
        assert!(matches!(err, MarkupError::MalformedDirective { ref directive, .. } if directive == "[/pos:x=a,y=2]"));

        for bad in [
            "[/pos]",
            "[/pos:x=1]",
            "[/pos:y=2]",
            "[/pos:x=1,x=2]",
            "[/pos:x=1,y=2,z=3]",
            "[/pos:x=1;y=2]",
            "[/pos:x=40000,y=0]",
            "[/pos:x=+1,y=0]",
            "[/pos:x=,y=0]",
        ] {
            assert!(
                matches!(decode_str(bad), Err(MarkupError::MalformedDirective { .. })),
                "expected malformed: {bad}"
            );
        }
    }

    #[test]
    fn test_position_must_be_canonical() {
        for bad in [
            "[/pos:y=2,x=1]",
            "[/pos:x=007,y=2]",
            "[/pos:x=1,y=-0]",
            "[/pos:x=00,y=0]",
            "[/pos:x= 1,y=2]",
        ] {
            assert!(
                matches!(decode_str(bad), Err(MarkupError::MalformedDirective { .. })),
                "expected malformed: {bad}"
            );
        }
    }

    #[test]
    fn test_bracket_escape_must_be_canonical() {
        assert_eq!(
            decode_str("\\[a").unwrap_err(),
            MarkupError::InvalidEscape {
                sequence: "\\[".to_string(),
                element: 0,
                offset: 0,
            }
        );
        assert!(matches!(
            decode_str("a\\[b"),
            Err(MarkupError::InvalidEscape { offset: 1, .. })
        ));

        for bad in ["a[", "[[/left]", "[\\n"] {
            assert!(
                matches!(decode_str(bad), Err(MarkupError::UnescapedBracket { .. })),
                "expected unescaped bracket: {bad}"
            );
        }
        assert_eq!(
            decode_str("x[").unwrap_err(),
            MarkupError::UnescapedBracket {
                element: 0,
                offset: 1,
            }
        );
    }

    /// Every sequence of up to `len` items drawn from `alphabet`.
    fn sequences<T: Clone>(alphabet: &[T], len: usize) -> Vec<Vec<T>> {
        let mut all = vec![Vec::new()];
        let mut frontier = vec![Vec::new()];
        for _ in 0..len {
            let mut next = Vec::new();
            for seq in &frontier {
                for item in alphabet {
                    let mut longer: Vec<T> = seq.clone();
                    longer.push(item.clone());
                    next.push(longer);
                }
            }
            all.extend(next.iter().cloned());
            frontier = next;
        }
        all
    }

    #[test]
    fn test_generated_token_round_trip() {
        let alphabet = [
            Token::text("["),
            Token::text("/"),
            Token::text("\\"),
            Token::text("n"),
            Token::text("[/"),
            Token::JustifyLeft,
            Token::position(-1, 20),
            Token::NewLine,
            Token::SubrecordSeparator,
        ];

        for seq in sequences(&alphabet, 4) {
            let tokens = normalize_tokens(seq);
            let elements = encode(&tokens);
            assert_eq!(decode(&elements).unwrap(), tokens, "elements: {elements:?}");
            assert_eq!(encode(&decode(&elements).unwrap()), elements);
        }
    }

    #[test]
    fn test_generated_markup_round_trip() {
        let fragments = [
            "[", "/", "\\", "n", "]", "\\[", "\\\\", "\\n", "[/left]", "[/pos:x=1,y=-2]",
        ];

        let mut accepted = 0;
        for seq in sequences(&fragments, 4) {
            let markup = seq.concat();
            if let Ok(tokens) = decode_str(&markup) {
                accepted += 1;
                assert_eq!(texts(&encode(&tokens)), vec![markup.as_str()]);
            }
        }
        assert!(accepted > 0);
    }

    #[test]
    fn test_fixed_directive_rejects_arguments() {
        assert!(matches!(
            decode_str("[/left:x=1]"),
            Err(MarkupError::MalformedDirective { .. })
        ));
    }

    #[test]
    fn test_unterminated_directive() {
        let err = decode_str("Hello [/center").unwrap_err();
        assert_eq!(
            err,
            MarkupError::MalformedDirective {
                directive: "[/center".to_string(),
                reason: "missing closing ']'".to_string(),
                element: 0,
                offset: 6,
            }
        );
    }

    #[test]
    fn test_invalid_escape() {
        let err = decode_str("tab\\t").unwrap_err();
        assert_eq!(
            err,
            MarkupError::InvalidEscape {
                sequence: "\\t".to_string(),
                element: 0,
                offset: 3,
            }
        );
        assert!(matches!(
            decode_str("dangling\\"),
            Err(MarkupError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_error_names_element() {
        let elements = vec![TextElement::new("ok"), TextElement::new("x[/pos:x=1]")];
        match decode(&elements).unwrap_err() {
            MarkupError::MalformedDirective { element, offset, .. } => {
                assert_eq!(element, 1);
                assert_eq!(offset, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
