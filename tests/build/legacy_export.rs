//! Tests for the Movable Type export reader.

use siteledger::build::load_export;
use siteledger::HistoricalPath;

use crate::common::{date, SiteFixture};

const EXPORT: &str = "\
TITLE: 記事名
BASENAME: 2012/06/17/記事名
STATUS: Publish
CATEGORY: 日記
DATE: 06/17/2012 12:00:00 AM
-----
BODY:
本文
-----
--------
TITLE: Sample Post
BASENAME: sample_post
STATUS: Publish
DATE: 06/01/2013 08:15:00 PM
-----
BODY:
hello
-----
--------
";

#[test]
fn test_load_export_file() {
    let site = SiteFixture::new("");
    site.write("export.txt", EXPORT);

    let entries = load_export(&site.input().join("export.txt")).unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].doc.origin, "export.txt#1");
    assert_eq!(entries[0].doc.categories, vec!["日記"]);
    assert_eq!(entries[0].doc.published_at, Some(date("2012-06-17")));
    assert_eq!(
        entries[0].historical_path(),
        Some(HistoricalPath::parse("2012/06/17/記事名"))
    );

    // A bare basename is not a permalink
    assert_eq!(entries[1].historical_path(), None);
    let evening = entries[1].doc.published_at.unwrap();
    assert_eq!(evening.format("%H:%M").to_string(), "20:15");
}

#[test]
fn test_missing_export_file_is_an_error() {
    let site = SiteFixture::new("");
    assert!(load_export(&site.input().join("export.txt")).is_err());
}
