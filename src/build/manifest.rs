// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The site manifest (`site.json`) and the category source it points at.
//!
//! Every path in the manifest is relative to the input directory. Only
//! `version` is required:
//!
//! ```json
//! {
//!   "version": 1,
//!   "catalog": "catalog.json",
//!   "posts": "posts",
//!   "legacyExport": "export.txt",
//!   "categories": "categories.json",
//!   "legacyOutput": "old-site",
//!   "pageSize": 10,
//!   "excludedCategory": "Profile",
//!   "postUrlPrefix": "/entry/"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::category::DEFAULT_EXCLUDED_CATEGORY;
use crate::error::{BuildError, Result};
use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::types::CategoryNode;

/// File name of the manifest inside the input directory.
pub const MANIFEST_FILE: &str = "site.json";

/// Manifest versions this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteManifest {
    pub version: u32,
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_posts")]
    pub posts: String,
    #[serde(default)]
    pub legacy_export: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    /// Directory holding the previous site's rendered output.
    #[serde(default)]
    pub legacy_output: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_excluded_category")]
    pub excluded_category: String,
    #[serde(default = "default_post_url_prefix")]
    pub post_url_prefix: String,
}

fn default_catalog() -> String {
    "catalog.json".to_string()
}

fn default_posts() -> String {
    "posts".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_excluded_category() -> String {
    DEFAULT_EXCLUDED_CATEGORY.to_string()
}

fn default_post_url_prefix() -> String {
    "/entry/".to_string()
}

impl SiteManifest {
    /// Parse and validate manifest JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: SiteManifest = serde_json::from_str(json)
            .map_err(|e| BuildError::Manifest(format!("invalid JSON: {e}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read `site.json` from `input_dir`.
    pub fn load(input_dir: &Path) -> Result<Self> {
        let path = input_dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path)
            .map_err(|e| BuildError::Manifest(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.version != SUPPORTED_VERSION {
            return Err(BuildError::Manifest(format!(
                "unsupported version {} (expected {})",
                self.version, SUPPORTED_VERSION
            )));
        }
        if self.page_size == 0 {
            return Err(BuildError::Manifest("pageSize must be at least 1".to_string()));
        }
        if !self.post_url_prefix.starts_with('/') {
            return Err(BuildError::Manifest(format!(
                "postUrlPrefix {:?} must start with '/'",
                self.post_url_prefix
            )));
        }
        Ok(())
    }

    pub fn catalog_path(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(&self.catalog)
    }

    pub fn posts_path(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(&self.posts)
    }

    pub fn legacy_export_path(&self, input_dir: &Path) -> Option<PathBuf> {
        self.legacy_export.as_ref().map(|p| input_dir.join(p))
    }

    pub fn categories_path(&self, input_dir: &Path) -> Option<PathBuf> {
        self.categories.as_ref().map(|p| input_dir.join(p))
    }

    pub fn legacy_output_path(&self, input_dir: &Path) -> Option<PathBuf> {
        self.legacy_output.as_ref().map(|p| input_dir.join(p))
    }
}

/// Read the flat category list: a JSON array of `{"id", "name", "parent"}`.
pub fn load_categories(path: &Path) -> Result<Vec<CategoryNode>> {
    let content = fs::read_to_string(path)
        .map_err(|e| BuildError::Manifest(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| BuildError::Manifest(format!("invalid categories in {}: {e}", path.display())))
}
