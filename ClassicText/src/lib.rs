//! # ClassicText
//!
//! A pure-Rust library for the classic game's localization text.
//!
//! ## Components
//!
//! - **Tokens** - RSC text formatting instructions ([`formats::token`])
//! - **Markup** - Lossless, human-editable text form of a token stream ([`converter::markup`])
//! - **Text database** - Keyed, searchable store of converted records ([`database`])
//! - **Importer** - Fills a database from a classic archive ([`database::import`])
//!
//! ## Quick Start
//!
//! ### Converting Tokens
//!
//! ```
//! use classictext::converter::{decode, encode};
//! use classictext::formats::Token;
//!
//! let tokens = vec![
//!     Token::text("Welcome"),
//!     Token::JustifyCenter,
//!     Token::NewLine,
//!     Token::text("Friend"),
//! ];
//!
//! let elements = encode(&tokens);
//! assert_eq!(elements[0].text, "Welcome[/center]\\nFriend");
//! assert_eq!(decode(&elements)?, tokens);
//! # Ok::<(), classictext::converter::MarkupError>(())
//! ```
//!
//! ### Importing a Token Dump
//!
//! ```no_run
//! use classictext::prelude::*;
//!
//! let mut db = TextDatabase::new();
//! let report = import_text_rsc_file("text_rsc.json", &mut db, &|_| {})?;
//! println!("{} records, {} overwrites", report.records, report.overwrites);
//!
//! for group in db.search("traveler") {
//!     println!("{}", group.primary_key);
//! }
//! # Ok::<(), classictext::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `classictext` command-line binary

pub mod archive;
pub mod config;
pub mod converter;
pub mod database;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{
        Formatting, LegacySource, LegacyToken, TextElement, TextGroup, Token,
        make_text_rsc_key, normalize_tokens,
    };

    pub use crate::converter::markup::{MarkupError, decode, decode_str, encode, encode_legacy};

    pub use crate::archive::{LegacyArchive, TokenDump};
    pub use crate::database::{
        ImportReport, MergeResult, TextDatabase, import_archive, import_text_rsc_file,
    };

    pub use crate::config::Config;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
