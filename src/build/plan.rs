// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The listing plan handed to the renderer, and redirect rules.
//!
//! A listing is a sequence of pages holding post identifiers plus the page
//! number window to draw under each. The global listing and every category
//! listing come out of the same [`plan_listing`], so the two can never
//! disagree about page boundaries.

use std::fmt::Write as _;

use serde::Serialize;

use crate::category::{BuiltCategory, CategoryTree};
use crate::legacy::Redirect;
use crate::paginate::{window, PageMarker, Paginator};
use crate::types::Post;

/// Status code written on every redirect rule.
pub const REDIRECT_STATUS: u16 = 301;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagePlan {
    pub page_number: usize,
    pub total_pages: usize,
    /// Post identifiers on this page, in canonical order.
    pub items: Vec<String>,
    pub window: Vec<PageMarker>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub total_posts: usize,
    pub pages: Vec<PagePlan>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub source_id: String,
    pub name: String,
    pub path_identifier: String,
    pub listing: Listing,
}

/// Navigation tree entry. The excluded root is never one of these.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub name: String,
    pub path_identifier: String,
    pub post_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
}

/// Everything `listings.json` holds.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingPlan {
    pub page_size: usize,
    pub global: Listing,
    pub categories: Vec<CategoryListing>,
    pub navigation: Vec<NavEntry>,
}

impl ListingPlan {
    pub fn category(&self, path_identifier: &str) -> Option<&CategoryListing> {
        self.categories
            .iter()
            .find(|c| c.path_identifier == path_identifier)
    }
}

/// Paginate `posts` (already in canonical order).
pub fn plan_listing(posts: &[&Post], paginator: Paginator) -> Listing {
    let pages = paginator
        .pages(posts)
        .map(|page| PagePlan {
            page_number: page.page_number,
            total_pages: page.total_pages,
            items: page.items.iter().map(|p| p.identifier.clone()).collect(),
            window: window(page.page_number, page.total_pages),
        })
        .collect();
    Listing {
        total_posts: posts.len(),
        pages,
    }
}

/// Global listing, one listing per listed category, and the navigation tree.
pub fn plan_listings(posts: &[Post], tree: &CategoryTree, paginator: Paginator) -> ListingPlan {
    let all: Vec<&Post> = posts.iter().collect();
    let global = plan_listing(&all, paginator);

    let categories = tree
        .listed()
        .filter_map(|category| {
            let path_identifier = category.path_identifier.clone()?;
            let members = tree.posts_in(category, posts);
            Some(CategoryListing {
                source_id: category.source_id().to_string(),
                name: category.display_name().to_string(),
                path_identifier,
                listing: plan_listing(&members, paginator),
            })
        })
        .collect();

    let navigation = tree
        .navigation_roots()
        .filter_map(|root| nav_entry(tree, root, posts))
        .collect();

    ListingPlan {
        page_size: paginator.page_size(),
        global,
        categories,
        navigation,
    }
}

fn nav_entry(tree: &CategoryTree, category: &BuiltCategory, posts: &[Post]) -> Option<NavEntry> {
    let path_identifier = category.path_identifier.clone()?;
    Some(NavEntry {
        name: category.display_name().to_string(),
        path_identifier,
        post_count: posts.iter().filter(|p| category.contains_post(p)).count(),
        children: tree
            .children(category)
            .filter_map(|child| nav_entry(tree, child, posts))
            .collect(),
    })
}

/// `_redirects` body: one `/<old path>  <prefix><identifier>/  301` per line.
pub fn render_redirects(redirects: &[Redirect], post_url_prefix: &str) -> String {
    let mut out = String::new();
    for redirect in redirects {
        let _ = writeln!(
            out,
            "/{}  {}{}/  {}",
            redirect.historical_path, post_url_prefix, redirect.identifier, REDIRECT_STATUS
        );
    }
    out
}
