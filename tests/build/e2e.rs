//! End-to-end tests for the build workflow.

use siteledger::build::{
    plan_build, run_build, BuildOptions, CATALOG_OUTPUT, LEGACY_MAP_OUTPUT, LISTINGS_OUTPUT,
    REDIRECTS_OUTPUT,
};
use siteledger::{BuildError, BuildWarning, Post};

use crate::common::SiteFixture;

const CATEGORIES: &str = r#"[
    {"id": "1", "name": "Travel"},
    {"id": "2", "name": "Brazil", "parent": "1"},
    {"id": "3", "name": "Profile"}
]"#;

const CATALOG: &str = r#"[
    {"identifier": "sample-post", "title": "Sample", "publishedAt": "2013-06-01T00:00:00",
     "categories": ["Travel"], "relativeDate": "long ago"},
    {"identifier": "about-me", "title": "About", "publishedAt": "2010-01-01T00:00:00",
     "categories": ["Profile"]}
]"#;

const EXPORT: &str = "\
TITLE: Trip to Rio
BASENAME: 2014/03/02/trip-to-rio-2
STATUS: Publish
CATEGORY: Brazil
DATE: 03/02/2014 10:00:00 AM
-----
BODY:
old body
-----
--------
";

fn site() -> SiteFixture {
    let site = SiteFixture::new(
        r#""pageSize": 2, "categories": "categories.json", "legacyExport": "export.txt", "legacyOutput": "old""#,
    );
    site.write("categories.json", CATEGORIES)
        .write("catalog.json", CATALOG)
        .write("export.txt", EXPORT)
        .post(
            "rio.md",
            "title: Trip to Rio\ndate: 2014-03-02 10:00\ncategories: [Brazil]\nsummary: From the docs",
            "new body",
        )
        .post("draft.md", "slug: sample-post\ntitle: Sample\ndraft: true", "")
        .post("undated.md", "title: No Date", "")
        .post("newest.md", "title: Newest Post\ndate: 2020-12-31", "")
        .legacy_page("2013/06/sample-post/index.html")
        .legacy_page("2014/03/trip-to-rio.html")
        .legacy_page("2011/02/deleted-post.html")
        .legacy_page("tags/rust.html");
    site
}

fn identifiers(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.identifier.as_str()).collect()
}

#[test]
fn test_run_build_e2e() {
    let site = site();
    let report = run_build(&site.input(), &site.output(), BuildOptions::default()).unwrap();

    // Draft removed sample-post, document replaced the export entry
    assert_eq!(
        identifiers(&report.posts),
        vec!["newest-post", "trip-to-rio", "about-me"]
    );
    let rio = &report.posts[1];
    assert_eq!(rio.summary.as_deref(), Some("From the docs"));
    assert_eq!(report.stats.drafts_removed, 1);
    assert_eq!(report.stats.replaced, 1);

    // The undated document and the non-date legacy page are warnings
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, BuildWarning::InvalidDate { origin, .. } if origin == "undated.md")));
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, BuildWarning::MalformedLegacyPath { path, .. } if path == "tags/rust")));

    for name in [CATALOG_OUTPUT, LISTINGS_OUTPUT, REDIRECTS_OUTPUT, LEGACY_MAP_OUTPUT] {
        assert!(site.exists_in_output(name), "{name} should be written");
    }

    // The catalog is written back to where the next run reads it
    let persisted: Vec<Post> = serde_json::from_str(&site.read_input("catalog.json")).unwrap();
    assert_eq!(identifiers(&persisted), identifiers(&report.posts));
    assert_eq!(persisted[2].extra.len(), 0);
}

#[test]
fn test_listings_and_redirects_content() {
    let site = site();
    run_build(&site.input(), &site.output(), BuildOptions::default()).unwrap();

    let listings: serde_json::Value = serde_json::from_str(&site.read_output(LISTINGS_OUTPUT)).unwrap();
    assert_eq!(listings["pageSize"], 2);
    assert_eq!(listings["global"]["totalPosts"], 3);
    assert_eq!(listings["global"]["pages"][1]["items"][0], "about-me");
    assert_eq!(listings["global"]["pages"][0]["window"], serde_json::json!([1, 2]));

    let categories = listings["categories"].as_array().unwrap();
    let paths: Vec<&str> = categories
        .iter()
        .map(|c| c["pathIdentifier"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["travel", "travel-brazil"]);
    assert_eq!(categories[0]["listing"]["pages"][0]["items"][0], "trip-to-rio");

    let navigation = listings["navigation"].as_array().unwrap();
    assert_eq!(navigation.len(), 1);
    assert_eq!(navigation[0]["name"], "Travel");

    let redirects = site.read_output(REDIRECTS_OUTPUT);
    assert!(redirects.contains("/2014/03/trip-to-rio  /entry/trip-to-rio/  301"));
    assert!(redirects.contains("/2014/03/02/trip-to-rio-2  /entry/trip-to-rio/  301"));
    // sample-post was removed by the draft, deleted-post never existed
    assert!(!redirects.contains("sample-post"));
    assert!(!redirects.contains("deleted-post"));

    let legacy: serde_json::Value = serde_json::from_str(&site.read_output(LEGACY_MAP_OUTPUT)).unwrap();
    assert!(legacy
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["identifier"].is_string() && r["strategy"].is_string()));
}

#[test]
fn test_rebuild_is_stable() {
    let site = site();
    run_build(&site.input(), &site.output(), BuildOptions::default()).unwrap();
    let first = site.read_output(LISTINGS_OUTPUT);
    run_build(&site.input(), &site.output(), BuildOptions::default()).unwrap();
    assert_eq!(site.read_output(LISTINGS_OUTPUT), first);
}

#[test]
fn test_dry_run_writes_nothing() {
    let site = site();
    let options = BuildOptions {
        dry_run: true,
        ..BuildOptions::default()
    };
    let report = run_build(&site.input(), &site.output(), options).unwrap();
    assert!(report.written.is_empty());
    assert!(!site.output().exists());
    assert_eq!(site.read_input("catalog.json"), CATALOG);
}

#[test]
fn test_malformed_catalog_aborts_before_any_write() {
    let site = site();
    site.write("catalog.json", "[{\"identifier\": ");
    let err = run_build(&site.input(), &site.output(), BuildOptions::default()).unwrap_err();
    assert!(matches!(err, BuildError::Catalog { .. }));
    assert!(!site.output().exists());
}

#[test]
fn test_first_build_without_catalog() {
    let site = SiteFixture::new("");
    site.post("hello.md", "title: Hello World\ndate: 2021-01-01\ncategories: Notes", "");
    let report = plan_build(&site.input(), BuildOptions::default()).unwrap();
    assert_eq!(identifiers(&report.posts), vec!["hello-world"]);
    // Without a taxonomy file each category name is a root
    assert_eq!(report.plan.categories[0].path_identifier, "notes");
}

#[test]
fn test_missing_manifest() {
    let site = SiteFixture::new("");
    let err = run_build(&site.output(), &site.output(), BuildOptions::default()).unwrap_err();
    assert!(matches!(err, BuildError::Manifest(_)));
}
