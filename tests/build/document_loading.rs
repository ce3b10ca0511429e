//! Tests for Markdown document loading.

use siteledger::build::{document_paths, load_documents};
use siteledger::BuildWarning;

use crate::common::{date, SiteFixture};

#[test]
fn test_load_documents_from_posts_dir() {
    let site = SiteFixture::new("");
    site.post(
        "2014/rio.md",
        "title: Trip to Rio\ndate: 2014-03-02\ncategories: [Travel, Brazil]",
        "Body",
    )
    .post("tokyo.md", "slug: 東京\ntitle: 東京 旅行記\ndate: 2015-05-05", "")
    .write("posts/README.txt", "not a post");

    let posts_dir = site.input().join("posts");
    let paths = document_paths(&posts_dir).unwrap();
    assert_eq!(paths.len(), 2);

    let loaded = load_documents(&posts_dir, &paths);
    assert!(loaded.warnings.is_empty());
    assert_eq!(loaded.docs[0].origin, "2014/rio.md");
    assert_eq!(loaded.docs[0].published_at, Some(date("2014-03-02")));
    assert_eq!(loaded.docs[1].identifier.as_deref(), Some("東京"));
}

#[test]
fn test_unreadable_front_matter_is_a_warning() {
    let site = SiteFixture::new("");
    site.post("ok.md", "title: Fine\ndate: 2020-01-01", "")
        .post("bad.md", "title: [oops", "");

    let posts_dir = site.input().join("posts");
    let loaded = load_documents(&posts_dir, &document_paths(&posts_dir).unwrap());
    assert_eq!(loaded.docs.len(), 1);
    assert!(matches!(
        &loaded.warnings[0],
        BuildWarning::UnreadableDocument { origin, .. } if origin == "bad.md"
    ));
}

#[test]
fn test_missing_posts_dir_loads_nothing() {
    let site = SiteFixture::new("");
    let paths = document_paths(&site.input().join("posts")).unwrap();
    assert!(paths.is_empty());
}
