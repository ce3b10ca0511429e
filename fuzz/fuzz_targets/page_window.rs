// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pagination and the page-number window.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siteledger::{window, PageMarker, Paginator};

#[derive(Debug, Arbitrary)]
struct PageInput {
    items: u16,
    page_size: u8,
    current: u16,
}

fuzz_target!(|input: PageInput| {
    let items: Vec<u16> = (0..input.items).collect();
    let paginator = Paginator::new(input.page_size as usize);
    let total = paginator.total_pages(items.len());

    // INVARIANT: pages partition the items in order
    let mut seen = 0usize;
    for page in paginator.pages(&items) {
        assert_eq!(page.total_pages, total);
        assert!(page.items.len() <= paginator.page_size());
        assert!(page.items.first().map_or(true, |&i| i as usize == seen));
        seen += page.items.len();
    }
    assert_eq!(seen, items.len());

    // INVARIANT: window is strictly increasing, bookended by 1 and total
    let markers = window(input.current as usize, total);
    let pages: Vec<usize> = markers.iter().filter_map(PageMarker::page).collect();
    assert_eq!(pages.first(), Some(&1));
    assert_eq!(pages.last(), Some(&total));
    assert!(pages.windows(2).all(|w| w[0] < w[1]));

    // INVARIANT: no leading, trailing or doubled ellipsis
    assert_ne!(markers.first(), Some(&PageMarker::Ellipsis));
    assert_ne!(markers.last(), Some(&PageMarker::Ellipsis));
    assert!(!markers
        .windows(2)
        .any(|w| w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis));
});
