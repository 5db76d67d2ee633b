//! Legacy text formats
//!
//! - [`token`] - RSC formatting tokens as produced by a classic archive reader
//! - [`text`] - Localization records holding converted markup text

pub mod text;
pub mod token;

pub use text::{LegacySource, TextElement, TextGroup, make_text_rsc_key};
pub use token::{Formatting, LegacyToken, Token, from_legacy, normalize_tokens, to_legacy};
