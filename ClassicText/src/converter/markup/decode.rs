//! Markup text to RSC tokens

use super::{DIRECTIVE_CLOSE, DIRECTIVE_OPEN, ESCAPE, MarkupError, bracket_needs_escape};
use crate::formats::{TextElement, Token};

/// Convert markup text elements back into RSC tokens.
///
/// A [`Token::SubrecordSeparator`] is emitted between consecutive elements.
///
/// # Errors
/// Returns a [`MarkupError`] for the first unknown directive, malformed
/// directive or invalid escape found. Only markup that [`encode`] would write
/// is accepted, so `encode(decode(m)) == m` for every accepted `m`.
///
/// [`encode`]: super::encode
pub fn decode(elements: &[TextElement]) -> Result<Vec<Token>, MarkupError> {
    let mut tokens = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            tokens.push(Token::SubrecordSeparator);
        }
        ElementDecoder::new(index, &mut tokens).run(&element.text)?;
    }
    Ok(tokens)
}

/// Convert a single markup string back into RSC tokens.
///
/// # Errors
/// See [`decode`].
pub fn decode_str(text: &str) -> Result<Vec<Token>, MarkupError> {
    let mut tokens = Vec::new();
    ElementDecoder::new(0, &mut tokens).run(text)?;
    Ok(tokens)
}

struct ElementDecoder<'a> {
    element: usize,
    literal: String,
    tokens: &'a mut Vec<Token>,
}

impl<'a> ElementDecoder<'a> {
    fn new(element: usize, tokens: &'a mut Vec<Token>) -> Self {
        Self {
            element,
            literal: String::new(),
            tokens,
        }
    }

    fn run(mut self, text: &str) -> Result<(), MarkupError> {
        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];

            // Copy plain text up to the next character of interest
            let special = rest.find([ESCAPE, '[']).unwrap_or(rest.len());
            if special > 0 {
                self.literal.push_str(&rest[..special]);
                pos += special;
                continue;
            }

            if rest.starts_with(DIRECTIVE_OPEN) {
                self.flush();
                let (token, len) = self.directive(rest, pos)?;
                self.tokens.push(token);
                pos += len;
            } else if rest.starts_with(ESCAPE) {
                pos += self.escape(rest, pos)?;
            } else {
                if bracket_needs_escape(&rest[1..]) {
                    return Err(MarkupError::UnescapedBracket {
                        element: self.element,
                        offset: pos,
                    });
                }
                self.literal.push('[');
                pos += 1;
            }
        }

        self.flush();
        Ok(())
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.literal)));
        }
    }

    /// Handle a backslash sequence, returning the number of bytes consumed.
    fn escape(&mut self, rest: &str, offset: usize) -> Result<usize, MarkupError> {
        let next = rest[ESCAPE.len_utf8()..].chars().next();
        match next {
            Some('n') => {
                self.flush();
                self.tokens.push(Token::NewLine);
            }
            Some(ESCAPE) => self.literal.push(ESCAPE),
            Some('[') if bracket_needs_escape(&rest[2..]) => self.literal.push('['),
            _ => {
                let len = ESCAPE.len_utf8() + next.map_or(0, char::len_utf8);
                return Err(MarkupError::InvalidEscape {
                    sequence: rest[..len].to_string(),
                    element: self.element,
                    offset,
                });
            }
        }
        Ok(2)
    }

    /// Parse a `[/...]` directive, returning the token and its length in bytes.
    fn directive(&self, rest: &str, offset: usize) -> Result<(Token, usize), MarkupError> {
        let Some(close) = rest.find(DIRECTIVE_CLOSE) else {
            return Err(self.malformed(rest, offset, "missing closing ']'"));
        };
        let directive = &rest[..=close];
        let body = &rest[DIRECTIVE_OPEN.len()..close];

        let (name, args) = match body.split_once(':') {
            Some((name, args)) => (name, Some(args)),
            None => (body, None),
        };

        let fixed = |token: Token| match args {
            None => Ok(token),
            Some(_) => Err(self.malformed(directive, offset, "directive takes no arguments")),
        };

        let token = match name {
            "left" => fixed(Token::JustifyLeft)?,
            "center" => fixed(Token::JustifyCenter)?,
            "input" => fixed(Token::InputCursorMarker)?,
            "pos" => {
                let (x, y) = parse_position(args)
                    .map_err(|reason| self.malformed(directive, offset, &reason))?;
                Token::PositionCursor { x, y }
            }
            _ => {
                return Err(MarkupError::UnknownDirective {
                    name: name.to_string(),
                    directive: directive.to_string(),
                    element: self.element,
                    offset,
                });
            }
        };

        Ok((token, directive.len()))
    }

    fn malformed(&self, directive: &str, offset: usize, reason: &str) -> MarkupError {
        MarkupError::MalformedDirective {
            directive: directive.to_string(),
            reason: reason.to_string(),
            element: self.element,
            offset,
        }
    }
}

/// Parse `x=<int>,y=<int>`.
fn parse_position(args: Option<&str>) -> Result<(i16, i16), String> {
    let args = args.ok_or_else(|| "missing arguments".to_string())?;
    let (x, y) = args
        .split_once(',')
        .ok_or_else(|| format!("expected 'x=<int>,y=<int>', found '{args}'"))?;
    Ok((parse_coordinate("x", x)?, parse_coordinate("y", y)?))
}

fn parse_coordinate(key: &str, pair: &str) -> Result<i16, String> {
    let value = pair
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| format!("expected '{key}=<int>', found '{pair}'"))?;
    let parsed = value
        .parse::<i16>()
        .map_err(|e| format!("invalid value '{value}' for '{key}': {e}"))?;

    // Reject spellings encode never writes, e.g. `+1`, `007` or `-0`
    if parsed.to_string() != value {
        return Err(format!("non-canonical value '{value}' for '{key}'"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(Some("x=10,y=25")), Ok((10, 25)));
        assert_eq!(parse_position(Some("x=-32768,y=32767")), Ok((i16::MIN, i16::MAX)));
        assert!(parse_position(Some("x=1,y=2,")).is_err());
        assert!(parse_position(Some("y=2,x=1")).is_err());
        assert!(parse_position(Some("x=007,y=0")).is_err());
        assert!(parse_position(Some("x=0,y=-0")).is_err());
        assert!(parse_position(None).is_err());
    }

    #[test]
    fn test_plain_brackets_are_text() {
        assert_eq!(
            decode_str("[a] [b/] [[\\[").unwrap(),
            vec![Token::text("[a] [b/] [[[")]
        );
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            decode_str("Grüße[/left]日本語\\n").unwrap(),
            vec![
                Token::text("Grüße"),
                Token::JustifyLeft,
                Token::text("日本語"),
                Token::NewLine,
            ]
        );
    }

    #[test]
    fn test_empty_element_between_separators() {
        let elements = vec![TextElement::new(""), TextElement::new("")];
        assert_eq!(decode(&elements).unwrap(), vec![Token::SubrecordSeparator]);
    }
}
