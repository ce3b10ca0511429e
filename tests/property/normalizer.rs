//! Identifier normalizer properties.

use proptest::prelude::*;
use siteledger::slug::{is_identifier_char, FALLBACK_IDENTIFIER};
use siteledger::{normalize_identifier, MAX_IDENTIFIER_LEN};

/// Titles mixing ASCII, Japanese, punctuation and whitespace.
fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Za-z0-9_]{1,6}",
            "[ぁ-ゖ]{1,4}",
            "[ァ-ヺ]{1,4}",
            "[一-龥]{1,3}",
            "[ \t\n]{1,3}",
            "[-!?.,:/()]{1,2}",
            "[ａ-ｚé☃]{1,2}",
        ],
        0..30,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_idempotent(title in title_strategy()) {
        let once = normalize_identifier(&title);
        prop_assert_eq!(normalize_identifier(&once), once);
    }

    #[test]
    fn prop_output_charset_and_length(title in title_strategy()) {
        let id = normalize_identifier(&title);
        prop_assert!(!id.is_empty());
        prop_assert!(id.chars().count() <= MAX_IDENTIFIER_LEN);
        prop_assert!(id.chars().all(is_identifier_char), "bad char in {:?}", id);
        prop_assert!(!id.contains("--"), "hyphen run in {:?}", id);
        prop_assert!(!id.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_total_on_arbitrary_input(s in any::<String>()) {
        let id = normalize_identifier(&s);
        prop_assert!(!id.is_empty());
    }

    #[test]
    fn prop_nothing_allowed_falls_back(s in "[!?.,:;()\\[\\]é☃]{0,12}") {
        prop_assert_eq!(normalize_identifier(&s), FALLBACK_IDENTIFIER);
    }
}
