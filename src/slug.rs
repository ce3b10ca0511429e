// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Identifier normalization for titles and path segments.
//!
//! Every identifier in the system passes through [`normalize_identifier`]:
//! post slugs derived from titles, category path identifiers, and legacy slug
//! segments. The output alphabet is deliberately small:
//!
//! - ASCII word characters (`[a-z0-9_]`, letters folded to lowercase)
//! - `-`
//! - Hiragana, Katakana and CJK Unified Ideographs
//!
//! # Algorithm
//!
//! 1. Trim surrounding whitespace
//! 2. Collapse each internal whitespace run to one `-`
//! 3. Drop characters outside the alphabet above
//! 4. Collapse `-` runs
//! 5. Truncate to [`MAX_IDENTIFIER_LEN`] characters
//! 6. Substitute [`FALLBACK_IDENTIFIER`] if nothing is left
//!
//! The function is total and idempotent: feeding its output back in returns
//! the same string.

/// Maximum identifier length, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 80;

/// Identifier used when normalization leaves nothing behind.
pub const FALLBACK_IDENTIFIER: &str = "post";

/// Normalize a human-authored string into a URL-safe identifier.
///
/// ```
/// use siteledger::normalize_identifier;
///
/// assert_eq!(normalize_identifier("  Hello,   World! "), "hello-world");
/// assert_eq!(normalize_identifier("東京 旅行記"), "東京-旅行記");
/// assert_eq!(normalize_identifier("???"), "post");
/// ```
pub fn normalize_identifier(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut len = 0usize;

    for word in value.split_whitespace() {
        if len > 0 {
            push_char(&mut out, &mut len, '-');
        }
        for c in word.chars() {
            if is_identifier_char(c) {
                push_char(&mut out, &mut len, c.to_ascii_lowercase());
            }
        }
    }

    if len > MAX_IDENTIFIER_LEN {
        out = out.chars().take(MAX_IDENTIFIER_LEN).collect();
    }

    if out.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else {
        out
    }
}

/// Append `c`, folding a `-` that follows another `-`.
fn push_char(out: &mut String, len: &mut usize, c: char) {
    if c == '-' && out.ends_with('-') {
        return;
    }
    out.push(c);
    *len += 1;
}

/// Is `c` allowed in an identifier?
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || is_japanese_char(c)
}

/// Hiragana, Katakana, or CJK Unified Ideographs.
pub fn is_japanese_char(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' |  // Hiragana
        '\u{30A0}'..='\u{30FF}' |  // Katakana
        '\u{4E00}'..='\u{9FFF}'    // CJK Unified Ideographs
    )
}
