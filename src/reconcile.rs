// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merging the persisted catalog with freshly read documents.
//!
//! The catalog is the starting point; every fresh document then either
//! replaces the entry with its identifier, adds a new one, or (if it is a
//! draft) removes it. Replacement is whole-record: nothing from the stale
//! entry survives, including catalog-only fields.
//!
//! **Invariant**: the output is unique by identifier and sorted by
//! `published_at` descending. Ties keep insertion order: catalog order first,
//! then documents in the order given, and a replaced entry keeps the slot of
//! the entry it replaced.
//!
//! Callers pass fresh documents in precedence order, lowest first. The build
//! passes legacy export entries before Markdown documents so documents win.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::contracts::{check_canonical_order, check_unique_identifiers};
use crate::error::BuildWarning;
use crate::slug::normalize_identifier;
use crate::types::{Post, SourceDocument};

/// Result of a reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct Reconciled {
    /// The canonical list.
    pub posts: Vec<Post>,
    pub warnings: Vec<BuildWarning>,
    pub stats: ReconcileStats,
}

/// What happened to the fresh documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub inserted: usize,
    pub replaced: usize,
    pub drafts_removed: usize,
    pub skipped: usize,
}

/// Insertion-ordered map keyed by identifier. Removal leaves a tombstone so
/// the remaining entries keep their relative order.
#[derive(Default)]
struct Keyed {
    slots: Vec<Option<Post>>,
    index: HashMap<String, usize>,
}

impl Keyed {
    fn upsert(&mut self, post: Post) -> bool {
        match self.index.get(&post.identifier) {
            Some(&slot) => {
                let replaced = self.slots[slot].is_some();
                self.slots[slot] = Some(post);
                replaced
            }
            None => {
                self.index.insert(post.identifier.clone(), self.slots.len());
                self.slots.push(Some(post));
                false
            }
        }
    }

    fn remove(&mut self, identifier: &str) -> bool {
        self.index
            .get(identifier)
            .and_then(|&slot| self.slots[slot].take())
            .is_some()
    }

    fn into_values(self) -> Vec<Post> {
        self.slots.into_iter().flatten().collect()
    }
}

/// The identifier a document will be filed under, if it has one.
///
/// Explicit metadata wins; otherwise the title is normalized. `None` when the
/// document has neither.
pub fn derive_identifier(doc: &SourceDocument) -> Option<String> {
    let explicit = doc
        .identifier
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    if let Some(id) = explicit {
        return Some(id.to_string());
    }
    doc.title
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(normalize_identifier)
}

/// Merge `fresh` over `persisted` and produce the canonical list.
pub fn reconcile(persisted: Vec<Post>, fresh: Vec<SourceDocument>) -> Reconciled {
    let mut keyed = Keyed::default();
    for post in persisted {
        // A catalog with repeated identifiers: the later entry wins, like any overwrite
        keyed.upsert(post);
    }

    let mut warnings = Vec::new();
    let mut stats = ReconcileStats::default();

    for doc in fresh {
        let Some(identifier) = derive_identifier(&doc) else {
            warnings.push(BuildWarning::MissingIdentifier { origin: doc.origin });
            stats.skipped += 1;
            continue;
        };

        if doc.draft {
            if keyed.remove(&identifier) {
                debug!(identifier = %identifier, "draft removed existing entry");
            }
            stats.drafts_removed += 1;
            continue;
        }

        let Some(published_at) = doc.published_at else {
            warnings.push(BuildWarning::InvalidDate {
                origin: doc.origin,
                value: doc.raw_date,
            });
            stats.skipped += 1;
            continue;
        };

        let title = doc
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| identifier.clone());

        let post = Post {
            identifier,
            title,
            published_at,
            categories: doc.categories,
            summary: doc.summary,
            extra: BTreeMap::new(),
        };
        if keyed.upsert(post) {
            stats.replaced += 1;
        } else {
            stats.inserted += 1;
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }

    let mut posts = keyed.into_values();
    // Stable: equal dates keep insertion order
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    check_canonical_order(&posts);
    check_unique_identifiers(&posts);

    Reconciled {
        posts,
        warnings,
        stats,
    }
}
