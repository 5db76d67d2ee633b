//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Format conversion utilities
//!
//! This module handles conversions between classic text formats:
//! - RSC tokens <-> markup text - see [`markup`]

pub mod markup;

// Markup conversion exports
pub use markup::{MarkupError, decode, decode_str, encode, encode_legacy};
