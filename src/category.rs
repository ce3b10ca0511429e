// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category forest built from a flat parent-pointer list.
//!
//! The source taxonomy is a list of `(id, name, parent)` triples. We turn it
//! into an arena of nodes indexed by position, with three derived facts per
//! node:
//!
//! - **path identifier**: normalized names from the root down, hyphen-joined
//!   (`Travel` → `Brazil` gives `travel-brazil`). Two branches may share a leaf
//!   name; their paths differ because their ancestors do. When they still
//!   collide (same names all the way up, or truncation), a `-2`, `-3`, …
//!   suffix is appended in input order.
//! - **children**, in input order.
//! - **descendant names**: the node's own display name plus every transitive
//!   descendant's. A post belongs to a node when any of its category names is
//!   in that set, which is how a parent listing aggregates its children.
//!
//! Dangling parents are promoted to roots. Cycles are not expected, but the
//! descendant walk keeps a visited set and treats a revisited node as already
//! expanded, and nodes that no root reaches simply get no path identifier.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use tracing::warn;

use crate::contracts::check_unique_path_identifiers;
use crate::error::BuildWarning;
use crate::slug::{normalize_identifier, MAX_IDENTIFIER_LEN};
use crate::types::{CategoryNode, Post};

/// Display name of the profile/about category by default.
pub const DEFAULT_EXCLUDED_CATEGORY: &str = "Profile";

/// A node of the built tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCategory {
    pub node: CategoryNode,
    /// `None` when no root reaches this node (only possible with cycles).
    pub path_identifier: Option<String>,
    pub child_source_ids: Vec<String>,
    pub descendant_names: BTreeSet<String>,
}

impl BuiltCategory {
    pub fn source_id(&self) -> &str {
        &self.node.source_id
    }

    pub fn display_name(&self) -> &str {
        &self.node.display_name
    }

    /// Is `post` listed under this category (directly or via a descendant)?
    pub fn contains_post(&self, post: &Post) -> bool {
        post.categories
            .iter()
            .any(|name| self.descendant_names.contains(name))
    }
}

/// The category forest for one run. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    nodes: Vec<BuiltCategory>,
    by_source_id: HashMap<String, usize>,
    by_path: HashMap<String, usize>,
    roots: Vec<usize>,
    excluded_name: String,
    warnings: Vec<BuildWarning>,
}

impl CategoryTree {
    /// Build the forest, excluding [`DEFAULT_EXCLUDED_CATEGORY`] from navigation.
    pub fn build(nodes: Vec<CategoryNode>) -> Self {
        Self::build_with_excluded(nodes, DEFAULT_EXCLUDED_CATEGORY)
    }

    /// Build the forest, excluding `excluded_name` from navigation.
    pub fn build_with_excluded(nodes: Vec<CategoryNode>, excluded_name: &str) -> Self {
        let mut warnings = Vec::new();

        // Arena, first declaration of each id wins
        let mut arena: Vec<BuiltCategory> = Vec::with_capacity(nodes.len());
        let mut by_source_id: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if by_source_id.contains_key(&node.source_id) {
                warnings.push(BuildWarning::DuplicateCategory {
                    source_id: node.source_id.clone(),
                });
                continue;
            }
            by_source_id.insert(node.source_id.clone(), arena.len());
            arena.push(BuiltCategory {
                node,
                path_identifier: None,
                child_source_ids: Vec::new(),
                descendant_names: BTreeSet::new(),
            });
        }

        // Roots and child lists
        let mut roots = Vec::new();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); arena.len()];
        for (idx, built) in arena.iter().enumerate() {
            match built.node.parent_source_id.as_deref() {
                None => roots.push(idx),
                Some(parent) => match by_source_id.get(parent) {
                    Some(&parent_idx) => children[parent_idx].push(idx),
                    None => {
                        warnings.push(BuildWarning::DanglingParent {
                            source_id: built.node.source_id.clone(),
                            parent_id: parent.to_string(),
                        });
                        roots.push(idx);
                    }
                },
            }
        }
        for (idx, kids) in children.iter().enumerate() {
            arena[idx].child_source_ids = kids
                .iter()
                .map(|&k| arena[k].node.source_id.clone())
                .collect();
        }

        let by_path = assign_path_identifiers(&mut arena, &roots, &children);

        for idx in 0..arena.len() {
            let names = collect_descendant_names(&arena, &children, idx);
            arena[idx].descendant_names = names;
        }

        for built in &arena {
            if built.path_identifier.is_none() {
                warnings.push(BuildWarning::UnreachableCategory {
                    source_id: built.node.source_id.clone(),
                });
            }
        }
        for warning in &warnings {
            warn!("{}", warning);
        }

        check_unique_path_identifiers(arena.iter().filter_map(|b| b.path_identifier.as_deref()));

        Self {
            nodes: arena,
            by_source_id,
            by_path,
            roots,
            excluded_name: excluded_name.to_string(),
            warnings,
        }
    }

    /// All nodes, in input order.
    pub fn nodes(&self) -> &[BuiltCategory] {
        &self.nodes
    }

    /// Every root, including the excluded one.
    pub fn roots(&self) -> impl Iterator<Item = &BuiltCategory> {
        self.roots.iter().map(|&i| &self.nodes[i])
    }

    /// Roots shown in navigation: [`roots`](Self::roots) minus the excluded name.
    pub fn navigation_roots(&self) -> impl Iterator<Item = &BuiltCategory> {
        self.roots().filter(|c| !self.is_excluded(c))
    }

    /// Nodes that get a content listing: reachable, and not the excluded one.
    pub fn listed(&self) -> impl Iterator<Item = &BuiltCategory> {
        self.nodes
            .iter()
            .filter(|c| c.path_identifier.is_some() && !self.is_excluded(c))
    }

    pub fn is_excluded(&self, category: &BuiltCategory) -> bool {
        category.node.display_name == self.excluded_name
    }

    pub fn get(&self, source_id: &str) -> Option<&BuiltCategory> {
        self.by_source_id.get(source_id).map(|&i| &self.nodes[i])
    }

    pub fn by_path(&self, path_identifier: &str) -> Option<&BuiltCategory> {
        self.by_path.get(path_identifier).map(|&i| &self.nodes[i])
    }

    /// First node with this display name, in input order.
    pub fn by_name(&self, display_name: &str) -> Option<&BuiltCategory> {
        self.nodes.iter().find(|c| c.node.display_name == display_name)
    }

    pub fn children<'a>(&'a self, category: &'a BuiltCategory) -> impl Iterator<Item = &'a BuiltCategory> + 'a {
        category
            .child_source_ids
            .iter()
            .filter_map(move |id| self.get(id))
    }

    /// Posts of `category` (including descendants), keeping the input order.
    pub fn posts_in<'p>(&self, category: &BuiltCategory, posts: &'p [Post]) -> Vec<&'p Post> {
        posts.iter().filter(|p| category.contains_post(p)).collect()
    }

    /// Recoverable problems found while building.
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Breadth-first from every root, so shallower nodes claim a path first.
fn assign_path_identifiers(
    arena: &mut [BuiltCategory],
    roots: &[usize],
    children: &[Vec<usize>],
) -> HashMap<String, usize> {
    let mut by_path: HashMap<String, usize> = HashMap::with_capacity(arena.len());
    let mut visited = vec![false; arena.len()];
    let mut queue: VecDeque<(usize, Option<String>)> =
        roots.iter().map(|&r| (r, None)).collect();

    while let Some((idx, parent_path)) = queue.pop_front() {
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        let own = normalize_identifier(&arena[idx].node.display_name);
        let joined = match parent_path {
            Some(parent) => normalize_identifier(&format!("{parent}-{own}")),
            None => own,
        };
        let path = unique_path(&joined, &by_path);
        by_path.insert(path.clone(), idx);
        arena[idx].path_identifier = Some(path.clone());

        for &child in &children[idx] {
            if !visited[child] {
                queue.push_back((child, Some(path.clone())));
            }
        }
    }

    by_path
}

/// `base`, or `base-N` for the smallest free `N >= 2`.
fn unique_path(base: &str, taken: &HashMap<String, usize>) -> String {
    if !taken.contains_key(base) {
        return base.to_string();
    }
    (2usize..)
        .map(|n| {
            let suffix = format!("-{n}");
            let room = MAX_IDENTIFIER_LEN - suffix.len();
            let stem: String = base.chars().take(room).collect();
            format!("{}{}", stem.trim_end_matches('-'), suffix)
        })
        .find(|candidate| !taken.contains_key(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Names of `start` and everything below it. Each node is expanded once.
fn collect_descendant_names(
    arena: &[BuiltCategory],
    children: &[Vec<usize>],
    start: usize,
) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut visited = HashSet::new();
    let mut stack = vec![start];
    while let Some(idx) = stack.pop() {
        if !visited.insert(idx) {
            continue;
        }
        names.insert(arena[idx].node.display_name.clone());
        stack.extend(children[idx].iter().copied());
    }
    names
}
