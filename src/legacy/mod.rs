// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Legacy permalink resolution.
//!
//! Given every canonical identifier and one historical path, find the
//! identifier the path most likely meant. The slug is pulled out of the
//! date-prefixed path ([`path`]), then run through the strategy cascade
//! ([`strategy`]) against every identifier. The first strategy that matches
//! anything wins; within a strategy, identifiers are tried in canonical order
//! (newest post first).
//!
//! Three outcomes, and only one of them is a problem:
//!
//! - `Matched`: emit a redirect.
//! - `Unmatched`: the post was deleted. Normal, frequent, logged at debug.
//! - `Malformed`: the path is not date-prefixed. Reported as a warning.

pub mod path;
pub mod script;
pub mod strategy;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::BuildWarning;
use crate::types::{HistoricalPath, LegacyMapping};

pub use path::{extract_slug, percent_decode, ExtractError};
pub use script::script_normalize;
pub use strategy::{MatchForms, Strategy, MIN_FUZZY_LEN};

/// Outcome of resolving one historical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched { identifier: String, strategy: Strategy },
    Unmatched { slug: String },
    Malformed(ExtractError),
}

impl Resolution {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Resolution::Matched { identifier, .. } => Some(identifier),
            _ => None,
        }
    }

    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Resolution::Matched { strategy, .. } => Some(*strategy),
            _ => None,
        }
    }
}

/// A matched legacy path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirect {
    pub historical_path: String,
    pub identifier: String,
    pub strategy: Strategy,
}

/// Everything learned from resolving a batch of paths.
#[derive(Debug, Clone, Default)]
pub struct LegacyReport {
    /// One entry per input path, unresolved ones included.
    pub mappings: Vec<LegacyMapping>,
    /// Matched paths only, in input order.
    pub redirects: Vec<Redirect>,
    pub unmatched: usize,
    pub warnings: Vec<BuildWarning>,
    /// How many paths each strategy resolved.
    pub by_strategy: HashMap<Strategy, usize>,
}

/// Resolves historical paths against a fixed identifier set.
#[derive(Debug, Clone)]
pub struct LegacyResolver {
    canonical: Vec<MatchForms>,
    exact: HashMap<String, usize>,
}

impl LegacyResolver {
    /// Identifiers are tried in the order given.
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical: Vec<MatchForms> = identifiers
            .into_iter()
            .map(|id| MatchForms::new(id.as_ref()))
            .collect();
        let mut exact = HashMap::with_capacity(canonical.len());
        for (i, forms) in canonical.iter().enumerate() {
            exact.entry(forms.raw.clone()).or_insert(i);
        }
        Self { canonical, exact }
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Resolve one historical path.
    pub fn resolve(&self, path: &HistoricalPath) -> Resolution {
        match extract_slug(path) {
            Err(e) => Resolution::Malformed(e),
            Ok(slug) => match self.resolve_slug(&slug) {
                Some((identifier, strategy)) => Resolution::Matched {
                    identifier: identifier.to_string(),
                    strategy,
                },
                None => Resolution::Unmatched { slug },
            },
        }
    }

    /// Run the cascade on an already extracted, decoded slug.
    pub fn resolve_slug(&self, slug: &str) -> Option<(&str, Strategy)> {
        if let Some(&i) = self.exact.get(slug) {
            return Some((&self.canonical[i].raw, Strategy::Exact));
        }
        let candidate = MatchForms::new(slug);
        Strategy::CASCADE[1..].iter().find_map(|&strategy| {
            self.canonical
                .iter()
                .find(|canonical| strategy.matches(&candidate, canonical))
                .map(|canonical| (canonical.raw.as_str(), strategy))
        })
    }

    /// Resolve a batch, collecting redirects, counts and warnings.
    pub fn resolve_all(&self, paths: &[HistoricalPath]) -> LegacyReport {
        let mut report = LegacyReport::default();
        for path in paths {
            let shown = path.to_string();
            let resolution = self.resolve(path);
            match &resolution {
                Resolution::Matched {
                    identifier,
                    strategy,
                } => {
                    debug!(path = %shown, identifier = %identifier, strategy = %strategy, "legacy path resolved");
                    *report.by_strategy.entry(*strategy).or_default() += 1;
                    report.redirects.push(Redirect {
                        historical_path: shown.clone(),
                        identifier: identifier.clone(),
                        strategy: *strategy,
                    });
                }
                Resolution::Unmatched { slug } => {
                    debug!(path = %shown, slug = %slug, "legacy path unmatched");
                    report.unmatched += 1;
                }
                Resolution::Malformed(e) => {
                    let warning = BuildWarning::MalformedLegacyPath {
                        path: shown.clone(),
                        reason: e.to_string(),
                    };
                    warn!("{}", warning);
                    report.warnings.push(warning);
                }
            }
            report.mappings.push(LegacyMapping {
                historical_path: shown,
                resolved_identifier: resolution.identifier().map(str::to_string),
            });
        }
        info!(
            resolved = report.redirects.len(),
            unmatched = report.unmatched,
            malformed = report.warnings.len(),
            "legacy paths processed"
        );
        report
    }
}
