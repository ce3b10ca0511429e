//! Tests for manifest parsing.

use std::path::Path;

use siteledger::build::{SiteManifest, MANIFEST_FILE};
use siteledger::BuildError;

use crate::common::SiteFixture;

#[test]
fn test_load_manifest_from_directory() {
    let site = SiteFixture::new(r#""pageSize": 3, "legacyExport": "export.txt""#);
    let manifest = SiteManifest::load(&site.input()).unwrap();
    assert_eq!(manifest.page_size, 3);
    assert_eq!(
        manifest.legacy_export_path(&site.input()),
        Some(site.input().join("export.txt"))
    );
    assert_eq!(manifest.categories_path(&site.input()), None);
}

#[test]
fn test_missing_manifest_is_manifest_error() {
    let err = SiteManifest::load(Path::new("/definitely/not/here")).unwrap_err();
    match err {
        BuildError::Manifest(msg) => assert!(msg.contains(MANIFEST_FILE), "{msg}"),
        other => panic!("expected manifest error, got {other:?}"),
    }
}

#[test]
fn test_invalid_json_is_manifest_error() {
    let err = SiteManifest::from_json("{version: 1").unwrap_err();
    assert!(matches!(err, BuildError::Manifest(_)));
}

#[test]
fn test_post_url_prefix_must_be_absolute() {
    let err = SiteManifest::from_json(r#"{"version": 1, "postUrlPrefix": "entry/"}"#).unwrap_err();
    assert!(err.to_string().contains("postUrlPrefix"));
}

#[test]
fn test_defaults_match_documented_values() {
    let manifest = SiteManifest::from_json(r#"{"version": 1}"#).unwrap();
    assert_eq!(manifest.page_size, siteledger::DEFAULT_PAGE_SIZE);
    assert_eq!(manifest.excluded_category, siteledger::DEFAULT_EXCLUDED_CATEGORY);
    assert_eq!(manifest.post_url_prefix, "/entry/");
    assert_eq!(manifest.legacy_output, None);
}
