//! Pagination and window properties.

use proptest::prelude::*;
use siteledger::paginate::WINDOW_RADIUS;
use siteledger::{window, PageMarker, Paginator};

proptest! {
    #[test]
    fn prop_total_pages(len in 0usize..500, size in 1usize..50) {
        let paginator = Paginator::new(size);
        let expected = if len == 0 { 1 } else { len.div_ceil(size) };
        prop_assert_eq!(paginator.total_pages(len), expected);
    }

    #[test]
    fn prop_pages_partition_items(len in 0usize..200, size in 1usize..30) {
        let items: Vec<usize> = (0..len).collect();
        let paginator = Paginator::new(size);
        let total = paginator.total_pages(len);

        let mut rebuilt = Vec::new();
        for n in 1..=total {
            let page = paginator.page(&items, n).expect("page in range");
            prop_assert_eq!(page.total_pages, total);
            prop_assert!(page.items.len() <= size);
            if n < total {
                prop_assert_eq!(page.items.len(), size);
            }
            rebuilt.extend_from_slice(page.items);
        }
        prop_assert_eq!(rebuilt, items.clone());
        prop_assert!(paginator.page(&items, 0).is_none());
        prop_assert!(paginator.page(&items, total + 1).is_none());
    }

    #[test]
    fn prop_window_shape(total in 1usize..200, current in 0usize..220) {
        let markers = window(current, total);
        let pages: Vec<usize> = markers.iter().filter_map(PageMarker::page).collect();
        let clamped = current.clamp(1, total);

        prop_assert_eq!(pages.first(), Some(&1));
        prop_assert_eq!(pages.last(), Some(&total));
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(pages.contains(&clamped));

        // Every page near the current one is shown, nothing else but the ends
        for n in 1..=total {
            let near = n.abs_diff(clamped) <= WINDOW_RADIUS;
            let shown = pages.contains(&n);
            prop_assert_eq!(shown, near || n == 1 || n == total, "page {}", n);
        }

        // An ellipsis sits exactly where consecutive shown pages jump
        for (i, marker) in markers.iter().enumerate() {
            if *marker == PageMarker::Ellipsis {
                prop_assert!(i > 0 && i + 1 < markers.len());
                let before = markers[i - 1].page().unwrap();
                let after = markers[i + 1].page().unwrap();
                prop_assert!(after - before > 1);
            }
        }
        let gaps = pages.windows(2).filter(|w| w[1] - w[0] > 1).count();
        let ellipses = markers.iter().filter(|m| **m == PageMarker::Ellipsis).count();
        prop_assert_eq!(gaps, ellipses);
    }
}

#[test]
fn test_window_examples() {
    use PageMarker::{Ellipsis, Page};
    assert_eq!(
        window(5, 10),
        vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
    );
    assert_eq!(window(1, 1), vec![Page(1)]);
    assert_eq!(window(1, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(window(1, 6), vec![Page(1), Page(2), Page(3), Ellipsis, Page(6)]);
}
