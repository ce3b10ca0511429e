//! Tests for catalog persistence.

use siteledger::build::{load_catalog, write_catalog};
use siteledger::BuildError;

use crate::common::{make_post, SiteFixture};

#[test]
fn test_catalog_round_trips_through_disk() {
    let site = SiteFixture::new("");
    let path = site.input().join("catalog.json");
    let mut post = make_post("記事名-2", "2012-06-17", &["日記"]);
    post.summary = Some("summary".to_string());

    write_catalog(&path, &[post.clone()]).unwrap();
    assert_eq!(load_catalog(&path).unwrap(), vec![post]);
}

#[test]
fn test_catalog_with_wrong_shape_is_fatal() {
    let site = SiteFixture::new("");
    site.write("catalog.json", r#"{"posts": []}"#);
    let err = load_catalog(&site.input().join("catalog.json")).unwrap_err();
    match err {
        BuildError::Catalog { path, .. } => assert!(path.ends_with("catalog.json")),
        other => panic!("expected catalog error, got {other:?}"),
    }
}

#[test]
fn test_catalog_entry_without_date_is_fatal() {
    let site = SiteFixture::new("");
    site.write("catalog.json", r#"[{"identifier": "a", "title": "A"}]"#);
    assert!(load_catalog(&site.input().join("catalog.json")).is_err());
}
