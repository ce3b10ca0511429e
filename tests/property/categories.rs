//! Category tree properties: path uniqueness and transitive membership.

use std::collections::HashSet;

use proptest::prelude::*;
use siteledger::{CategoryNode, CategoryTree};

use crate::common::make_post;

/// A random forest (parents always point at an earlier node, or nowhere),
/// with display names drawn from a small pool so collisions are common.
fn forest_strategy() -> impl Strategy<Value = Vec<CategoryNode>> {
    prop::collection::vec(
        (
            prop::sample::select(&["Travel", "travel", "Brazil", "日記", "Rust", "Misc", "!!"][..]),
            any::<prop::sample::Index>(),
            any::<bool>(),
        ),
        1..20,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, parent, is_root))| {
                let parent = (i > 0 && !is_root).then(|| parent.index(i).to_string());
                CategoryNode::new(&i.to_string(), name, parent.as_deref())
            })
            .collect()
    })
}

/// Like [`forest_strategy`] but any node may point at any id, cycles included.
fn tangled_strategy() -> impl Strategy<Value = Vec<CategoryNode>> {
    prop::collection::vec((0usize..12, prop::option::of(0usize..14)), 1..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, parent))| {
                let parent = parent.map(|p| p.to_string());
                CategoryNode::new(&i.to_string(), &format!("c{name}"), parent.as_deref())
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_path_identifiers_unique_and_complete(nodes in forest_strategy()) {
        let tree = CategoryTree::build(nodes.clone());
        let mut seen = HashSet::new();
        for category in tree.nodes() {
            // A forest has no unreachable nodes
            let path = category.path_identifier.clone().expect("reachable");
            prop_assert!(seen.insert(path.clone()), "duplicate path {}", path);
        }
        prop_assert_eq!(tree.len(), nodes.len());
    }

    #[test]
    fn prop_parent_names_include_children(nodes in forest_strategy()) {
        let tree = CategoryTree::build(nodes);
        for category in tree.nodes() {
            prop_assert!(category.descendant_names.contains(category.display_name()));
            for child in tree.children(category) {
                prop_assert!(child.descendant_names.is_subset(&category.descendant_names));
            }
        }
    }

    #[test]
    fn prop_post_in_child_is_in_every_ancestor(nodes in forest_strategy(), pick in any::<prop::sample::Index>()) {
        let tree = CategoryTree::build(nodes.clone());
        let target = &nodes[pick.index(nodes.len())];
        let post = make_post("p", "2020-01-01", &[target.display_name.as_str()]);

        let mut current = tree.get(&target.source_id);
        while let Some(category) = current {
            prop_assert!(category.contains_post(&post));
            current = category.node.parent_source_id.as_deref().and_then(|p| tree.get(p));
        }
    }

    #[test]
    fn prop_cycles_terminate_and_stay_unique(nodes in tangled_strategy()) {
        let tree = CategoryTree::build(nodes);
        let paths: Vec<&str> = tree
            .nodes()
            .iter()
            .filter_map(|c| c.path_identifier.as_deref())
            .collect();
        let unique: HashSet<&str> = paths.iter().copied().collect();
        prop_assert_eq!(unique.len(), paths.len());
    }
}
