//! Reconciliation properties: precedence, drafts, ordering, uniqueness.

use std::collections::HashSet;

use proptest::prelude::*;
use siteledger::{reconcile, Post, SourceDocument};

use crate::common::{make_doc, make_post};

const IDS: &[&str] = &["alpha", "beta", "gamma", "delta", "記事名", "記事名-2"];

fn day(n: u8) -> String {
    format!("2020-01-{:02}", n % 28 + 1)
}

fn persisted_strategy() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec((prop::sample::select(IDS), 0u8..28), 0..8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, d)| make_post(id, &day(d), &[]))
            .collect()
    })
}

fn fresh_strategy() -> impl Strategy<Value = Vec<SourceDocument>> {
    prop::collection::vec(
        (prop::sample::select(IDS), 0u8..28, any::<bool>(), any::<bool>()),
        0..10,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, d, draft, dated)| {
                let mut doc = make_doc(Some(id), &format!("fresh {id}"), &day(d));
                doc.draft = draft;
                if !dated {
                    doc.published_at = None;
                }
                doc
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_identifiers_unique(persisted in persisted_strategy(), fresh in fresh_strategy()) {
        let out = reconcile(persisted, fresh);
        let mut seen = HashSet::new();
        for post in &out.posts {
            prop_assert!(seen.insert(post.identifier.clone()), "duplicate {}", post.identifier);
        }
    }

    #[test]
    fn prop_sorted_newest_first(persisted in persisted_strategy(), fresh in fresh_strategy()) {
        let out = reconcile(persisted, fresh);
        prop_assert!(out.posts.windows(2).all(|w| w[0].published_at >= w[1].published_at));
    }

    #[test]
    fn prop_last_fresh_document_decides(persisted in persisted_strategy(), fresh in fresh_strategy()) {
        let out = reconcile(persisted.clone(), fresh.clone());

        for id in IDS {
            let last_fresh = fresh
                .iter()
                .rev()
                .find(|d| d.identifier.as_deref() == Some(*id) && (d.draft || d.published_at.is_some()));
            let in_output = out.posts.iter().find(|p| p.identifier == *id);

            match last_fresh {
                // A draft after everything else removes the post
                Some(doc) if doc.draft => prop_assert!(in_output.is_none(), "{id} should be gone"),
                Some(doc) => {
                    let post = in_output.expect("document must be in output");
                    prop_assert_eq!(&post.title, doc.title.as_ref().unwrap());
                    prop_assert_eq!(Some(post.published_at), doc.published_at);
                }
                // Untouched by fresh input: the persisted entry survives if there was one
                None => prop_assert_eq!(
                    in_output.is_some(),
                    persisted.iter().any(|p| p.identifier == *id)
                ),
            }
        }
    }

    #[test]
    fn prop_skipped_documents_counted(fresh in fresh_strategy()) {
        let undated = fresh.iter().filter(|d| !d.draft && d.published_at.is_none()).count();
        let out = reconcile(vec![], fresh);
        prop_assert_eq!(out.stats.skipped, undated);
        prop_assert_eq!(out.warnings.len(), undated);
    }
}
