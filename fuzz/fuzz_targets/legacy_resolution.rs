// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for legacy path resolution.
//!
//! Arbitrary historical paths against an arbitrary identifier set. A match
//! must always name an identifier from the set, and every identifier given
//! as a slug must resolve to itself exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siteledger::{HistoricalPath, LegacyResolver, Resolution, Strategy};

#[derive(Debug, Arbitrary)]
struct ResolveInput {
    identifiers: Vec<String>,
    paths: Vec<String>,
}

fuzz_target!(|input: ResolveInput| {
    // Cap sizes to avoid timeouts
    let identifiers: Vec<String> = input
        .identifiers
        .iter()
        .take(64)
        .map(|s| s.chars().take(80).collect())
        .collect();
    let resolver = LegacyResolver::new(&identifiers);

    let paths: Vec<HistoricalPath> = input
        .paths
        .iter()
        .take(64)
        .map(|p| HistoricalPath::parse(&p.chars().take(200).collect::<String>()))
        .collect();

    for path in &paths {
        if let Resolution::Matched { identifier, .. } = resolver.resolve(path) {
            // INVARIANT: matches come from the canonical set
            assert!(identifiers.contains(&identifier));
        }
    }

    // INVARIANT: one mapping per input path, redirects only for matches
    let report = resolver.resolve_all(&paths);
    assert_eq!(report.mappings.len(), paths.len());
    let matched = report
        .mappings
        .iter()
        .filter(|m| m.resolved_identifier.is_some())
        .count();
    assert_eq!(report.redirects.len(), matched);

    // INVARIANT: a canonical identifier always finds itself exactly
    for id in &identifiers {
        let resolved = resolver.resolve_slug(id);
        assert_eq!(resolved.map(|(_, s)| s), Some(Strategy::Exact));
    }
});
