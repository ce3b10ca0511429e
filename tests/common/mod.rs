//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

// Re-export canonical test utilities from siteledger::testing
pub use siteledger::testing::{date, make_doc, make_post};

/// A throwaway site input directory plus an output directory next to it.
pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    /// A site with a minimal `site.json` (`{"version": 1}` plus `extra` fields).
    pub fn new(extra_manifest: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let fixture = Self { dir };
        let manifest = if extra_manifest.trim().is_empty() {
            r#"{"version": 1}"#.to_string()
        } else {
            format!(r#"{{"version": 1, {extra_manifest}}}"#)
        };
        fixture.write("site.json", &manifest);
        fixture
    }

    pub fn input(&self) -> PathBuf {
        self.dir.path().join("site")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write `content` to `relative` under the input directory.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.input().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        fs::write(path, content).expect("write fixture");
        self
    }

    /// A Markdown post under `posts/`.
    pub fn post(&self, file: &str, front_matter: &str, body: &str) -> &Self {
        self.write(
            &format!("posts/{file}"),
            &format!("---\n{}\n---\n{}", front_matter.trim(), body),
        )
    }

    /// An empty rendered page in the legacy output directory `old/`.
    pub fn legacy_page(&self, relative: &str) -> &Self {
        self.write(&format!("old/{relative}"), "<html></html>")
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output().join(name)).expect("output file")
    }

    pub fn read_input(&self, name: &str) -> String {
        fs::read_to_string(self.input().join(name)).expect("input file")
    }

    pub fn exists_in_output(&self, name: &str) -> bool {
        Path::new(&self.output().join(name)).exists()
    }
}
