// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matching strategies, strictest first.
//!
//! Each strategy is a pure predicate over two precomputed [`MatchForms`]: the
//! historical candidate and one canonical identifier. The resolver walks
//! [`Strategy::CASCADE`] in order and stops at the first strategy that
//! matches any identifier, so a looser strategy only ever sees candidates
//! every stricter one rejected.
//!
//! | # | Strategy                 | Compares                          | Guard                 |
//! |---|--------------------------|-----------------------------------|-----------------------|
//! | 1 | `Exact`                  | decoded slug == identifier        |                       |
//! | 2 | `ScriptNormalized`       | script forms equal                |                       |
//! | 3 | `Prefix`                 | script forms, prefix either way   | prefix ≥ 8 chars      |
//! | 4 | `Substring`              | raw, then script, contains either | candidate ≥ 8 chars   |
//! | 5 | `DigitInsensitive`       | digit-stripped, equal or prefix   | non-empty             |
//! | 6 | `PunctuationInsensitive` | also `?`/`!` stripped             | non-empty             |
//!
//! Prefix and substring tests on short strings match almost anything, hence
//! the length guard. For substrings only the candidate is guarded: a long
//! historical slug may wrap a short identifier (`my-rust-notes` → `rust`). Digit and punctuation stripping throw away the most
//! information and run last.

use std::fmt;

use serde::Serialize;

use super::script::{script_normalize, strip_digits, strip_exclamations};

/// Minimum length, in characters, for prefix and substring matching.
pub const MIN_FUZZY_LEN: usize = 8;

/// One step of the resolution cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Exact,
    ScriptNormalized,
    Prefix,
    Substring,
    DigitInsensitive,
    PunctuationInsensitive,
}

impl Strategy {
    /// All strategies, in the order they are tried.
    pub const CASCADE: [Strategy; 6] = [
        Strategy::Exact,
        Strategy::ScriptNormalized,
        Strategy::Prefix,
        Strategy::Substring,
        Strategy::DigitInsensitive,
        Strategy::PunctuationInsensitive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::ScriptNormalized => "script-normalized",
            Strategy::Prefix => "prefix",
            Strategy::Substring => "substring",
            Strategy::DigitInsensitive => "digit-insensitive",
            Strategy::PunctuationInsensitive => "punctuation-insensitive",
        }
    }

    /// Does `candidate` match `canonical` under this strategy alone?
    pub fn matches(&self, candidate: &MatchForms, canonical: &MatchForms) -> bool {
        match self {
            Strategy::Exact => candidate.raw == canonical.raw,
            Strategy::ScriptNormalized => candidate.script == canonical.script,
            Strategy::Prefix => guarded_prefix(&candidate.script, &canonical.script),
            Strategy::Substring => {
                char_len(&candidate.raw) >= MIN_FUZZY_LEN
                    && (contains_either(&candidate.raw, &canonical.raw)
                        || contains_either(&candidate.script, &canonical.script))
            }
            Strategy::DigitInsensitive => {
                loose_prefix(&candidate.without_digits, &canonical.without_digits)
            }
            Strategy::PunctuationInsensitive => {
                loose_prefix(&candidate.without_punctuation, &canonical.without_punctuation)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every form of one string the strategies compare.
///
/// Computed once per canonical identifier and once per candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchForms {
    pub raw: String,
    pub script: String,
    pub without_digits: String,
    pub without_punctuation: String,
}

impl MatchForms {
    pub fn new(raw: &str) -> Self {
        let script = script_normalize(raw);
        let without_digits = tidy_hyphens(&strip_digits(&script));
        let without_punctuation = tidy_hyphens(&strip_exclamations(&without_digits));
        Self {
            raw: raw.to_string(),
            script,
            without_digits,
            without_punctuation,
        }
    }
}

/// Collapse `-` runs and trim `-` from both ends. Stripping digits out of
/// `2013-review` should leave `review`, not `-review`.
fn tidy_hyphens(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// One is a prefix of the other, and the prefix is long enough to mean something.
fn guarded_prefix(a: &str, b: &str) -> bool {
    let (short, long) = if char_len(a) <= char_len(b) { (a, b) } else { (b, a) };
    char_len(short) >= MIN_FUZZY_LEN && long.starts_with(short)
}

/// One contains the other. Empty strings never match.
fn contains_either(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Equal, or one is a prefix of the other. Empty strings never match.
fn loose_prefix(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.starts_with(b) || b.starts_with(a))
}
