// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page slicing and the windowed page-number control.
//!
//! One [`Paginator`] is built per run from the manifest's page size and used
//! for every listing, global and per-category alike. [`window`] depends only
//! on the current page and the page count, so the control looks the same on
//! every listing.

use serde::{Serialize, Serializer};

use crate::contracts::check_window_well_formed;

/// Page size used when the manifest does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pages on each side of the current page that are always shown.
pub const WINDOW_RADIUS: usize = 2;

/// Text rendered for an elided run of page numbers.
pub const ELLIPSIS: &str = "…";

/// Slices ordered items into fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

/// One page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based.
    pub page_number: usize,
    pub items: &'a [T],
    pub total_pages: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`, but never less than one: an empty listing
    /// still renders a single (empty) page.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Page `number` of `items`, or `None` outside `1..=total_pages`.
    pub fn page<'a, T>(&self, items: &'a [T], number: usize) -> Option<Page<'a, T>> {
        let total_pages = self.total_pages(items.len());
        if number == 0 || number > total_pages {
            return None;
        }
        let start = ((number - 1) * self.page_size).min(items.len());
        let end = (number * self.page_size).min(items.len());
        Some(Page {
            page_number: number,
            items: &items[start..end],
            total_pages,
        })
    }

    /// Every page of `items`, in order.
    pub fn pages<'a, T>(&self, items: &'a [T]) -> impl Iterator<Item = Page<'a, T>> + 'a {
        let paginator = *self;
        (1..=self.total_pages(items.len())).filter_map(move |n| paginator.page(items, n))
    }
}

/// An entry in the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl PageMarker {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }
}

// Renderers get `1` or `"…"`, not a tagged enum.
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_u64(*n as u64),
            PageMarker::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// The page-number control for page `current` of `total`.
///
/// Always shows page 1 and page `total`, plus every page within
/// [`WINDOW_RADIUS`] of `current`. A single ellipsis stands in for each gap.
/// `current` is clamped into `1..=total`.
///
/// ```
/// use siteledger::{window, PageMarker::{Ellipsis, Page}};
///
/// assert_eq!(
///     window(5, 10),
///     vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
/// );
/// ```
pub fn window(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= 1 {
        return vec![PageMarker::Page(1)];
    }
    let current = current.clamp(1, total);
    let low = current.saturating_sub(WINDOW_RADIUS).max(1);
    let high = (current + WINDOW_RADIUS).min(total);

    let mut shown = Vec::with_capacity(high - low + 3);
    shown.push(1);
    shown.extend((low..=high).filter(|&n| n != 1 && n != total));
    shown.push(total);

    let mut markers = Vec::with_capacity(shown.len() + 2);
    let mut previous = 0;
    for n in shown {
        if previous != 0 && n - previous > 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(n));
        previous = n;
    }

    check_window_well_formed(&markers, total);
    markers
}
