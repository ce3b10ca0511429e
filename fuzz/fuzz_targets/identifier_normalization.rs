// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for identifier normalization.
//!
//! Every title must produce a non-empty, bounded identifier made only of
//! allowed characters, and normalizing twice must change nothing. Identifiers
//! end up in URLs; a stray character here is a broken link.

#![no_main]

use libfuzzer_sys::fuzz_target;
use siteledger::slug::is_identifier_char;
use siteledger::{normalize_identifier, MAX_IDENTIFIER_LEN};

fuzz_target!(|data: &[u8]| {
    let title = String::from_utf8_lossy(data);
    let id = normalize_identifier(&title);

    // INVARIANT: total, never empty
    assert!(!id.is_empty());

    // INVARIANT: bounded length
    assert!(id.chars().count() <= MAX_IDENTIFIER_LEN);

    // INVARIANT: output alphabet
    assert!(id.chars().all(is_identifier_char), "bad char in {:?}", id);
    assert!(!id.contains("--"), "hyphen run in {:?}", id);
    assert!(!id.chars().any(|c| c.is_ascii_uppercase()));

    // INVARIANT: idempotent
    assert_eq!(normalize_identifier(&id), id);
});
