// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Script normalization: folding glyph variants before comparing slugs.
//!
//! Japanese authors type the same slug many ways. `ｒｕｓｔ２０１３` and
//! `rust2013` are one slug, so are `第①回` and `第1回`, and `東京〜大阪`,
//! `東京～大阪` and `東京-大阪`. This module produces a comparison key, never
//! an identifier.
//!
//! # Algorithm (with unicode-normalization feature)
//!
//! 1. NFKC (full-width ASCII → ASCII, circled digits → digits, and so on)
//! 2. Wave dashes, tildes and commas → `-`
//! 3. Lowercase ASCII, collapse `-` runs
//!
//! # Algorithm (without unicode-normalization)
//!
//! Step 1 is replaced by an explicit table: full-width ASCII (U+FF01–U+FF5E),
//! the ideographic space, and circled digits ①–⑤.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold glyph variants into one comparison key.
///
/// ASCII letters are folded to lowercase as well: old engines often kept the
/// author's capitalization in URLs (`2013/06/Sample-Post`), while identifiers
/// are always lowercase. With the `unicode-normalization` feature the width
/// folding is full NFKC; without it only the table below applies, so rarer
/// compatibility forms (e.g. ⑥ or half-width katakana) stay distinct.
///
/// ```
/// use siteledger::legacy::script_normalize;
///
/// assert_eq!(script_normalize("ｒｕｓｔ２０１３"), "rust2013");
/// assert_eq!(script_normalize("東京〜大阪"), "東京-大阪");
/// assert_eq!(script_normalize("第①回"), "第1回");
/// ```
pub fn script_normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in fold_width(value) {
        let c = if is_dash_variant(c) { '-' } else { c.to_ascii_lowercase() };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(feature = "unicode-normalization")]
fn fold_width(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfkc()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold_width(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().map(fold_width_char)
}

/// Table-driven width folding for builds without unicode-normalization.
#[cfg(not(feature = "unicode-normalization"))]
fn fold_width_char(c: char) -> char {
    match c {
        // Full-width ASCII block maps 1:1 onto ! .. ~
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{3000}' => ' ',
        // ① .. ⑤
        '\u{2460}'..='\u{2464}' => char::from_u32('1' as u32 + (c as u32 - 0x2460)).unwrap_or(c),
        _ => c,
    }
}

/// Wave dash, tildes and commas, in their ASCII, full-width and CJK forms.
///
/// Full-width `～` and `，` are listed too so the table is complete without NFKC.
fn is_dash_variant(c: char) -> bool {
    matches!(
        c,
        '~' | '\u{301C}'   // 〜 wave dash
            | '\u{3030}'   // 〰 wavy dash
            | '\u{FF5E}'   // ～ full-width tilde
            | '\u{223C}'   // ∼ tilde operator
            | ','
            | '\u{FF0C}'   // ， full-width comma
            | '\u{3001}'   // 、 ideographic comma
            | '-'
    )
}

/// Remove ASCII digits.
pub fn strip_digits(value: &str) -> String {
    value.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Remove every `?` and `!`, single or repeated.
///
/// A lone `!` is no more meaningful in a slug than a run of them, and
/// stripping both keeps `wow!great` and `wow!!great` on the same key.
pub fn strip_exclamations(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '?' | '!')).collect()
}
