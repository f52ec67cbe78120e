//! Fixed-shape key/value scanner
//!
//! The status endpoint answers with a small JSON object, but the device does
//! not carry a JSON parser. Values are pulled out with a literal scan that
//! only understands the exact shape `"key":"value"`:
//!
//! - the first occurrence of `"key":"` wins, left to right
//! - the value runs up to the next `"`; escapes are not interpreted
//! - no whitespace is allowed around the colon
//! - numbers, booleans, nulls and nested objects are not supported
//!
//! Anything that does not match yields an empty value. An empty value
//! (`"key":""`) is indistinguishable from an absent key.

/// Extract the string value stored under `key`
///
/// Returns a slice of `text`, or `""` when the key is absent, the value is
/// not a double-quoted string, or the closing quote is missing.
pub fn extract<'a>(text: &'a str, key: &str) -> &'a str {
    for (quote, _) in text.match_indices('"') {
        let after_quote = &text[quote + 1..];

        let Some(after_key) = after_quote.strip_prefix(key) else {
            continue;
        };
        let Some(value_and_rest) = after_key.strip_prefix("\":\"") else {
            continue;
        };

        // First match decides, even if its value is unterminated
        return match value_and_rest.find('"') {
            Some(end) => &value_and_rest[..end],
            None => "",
        };
    }

    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PAYLOAD: &str = r#"{"status":"MOVING","nextStop":"Library"}"#;

    #[test]
    fn test_extracts_both_fields() {
        assert_eq!(extract(PAYLOAD, "status"), "MOVING");
        assert_eq!(extract(PAYLOAD, "nextStop"), "Library");
    }

    #[test]
    fn test_order_independent() {
        let text = r#"{"nextStop":"Main St","status":"STOPPED"}"#;
        assert_eq!(extract(text, "status"), "STOPPED");
        assert_eq!(extract(text, "nextStop"), "Main St");
    }

    #[test]
    fn test_garbage_yields_empty() {
        assert_eq!(extract("garbage", "status"), "");
        assert_eq!(extract("", "status"), "");
    }

    #[test]
    fn test_absent_key() {
        assert_eq!(extract(PAYLOAD, "route"), "");
    }

    #[test]
    fn test_empty_value_matches_absent() {
        assert_eq!(extract(r#"{"status":""}"#, "status"), "");
    }

    #[test]
    fn test_unterminated_value() {
        assert_eq!(extract(r#"{"status":"MOVI"#, "status"), "");
        assert_eq!(extract(r#"{"status":""#, "status"), "");
    }

    #[test]
    fn test_non_string_value_not_supported() {
        assert_eq!(extract(r#"{"speed":42,"status":"MOVING"}"#, "speed"), "");
        assert_eq!(extract(r#"{"status": "MOVING"}"#, "status"), "");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = r#"{"status":"MOVING","status":"STOPPED"}"#;
        assert_eq!(extract(text, "status"), "MOVING");
    }

    #[test]
    fn test_key_must_be_whole() {
        // "busStatus" must not satisfy a scan for "status"
        let text = r#"{"busStatus":"MOVING","status":"STOPPED"}"#;
        assert_eq!(extract(text, "status"), "STOPPED");
    }

    #[test]
    fn test_value_looking_like_key() {
        // A value of `status` followed by `":"` is still scanned in order
        let text = r#"{"nextStop":"status","status":"MOVING"}"#;
        assert_eq!(extract(text, "status"), "MOVING");
    }

    #[test]
    fn test_escapes_are_not_interpreted() {
        let text = r#"{"nextStop":"Say \"hi\""}"#;
        assert_eq!(extract(text, "nextStop"), r"Say \");
    }

    #[test]
    fn test_multibyte_text() {
        let text = r#"{"nextStop":"Gare de l'Est – Quai 3","status":"MOVING"}"#;
        assert_eq!(extract(text, "nextStop"), "Gare de l'Est – Quai 3");
        assert_eq!(extract(text, "status"), "MOVING");
    }

    proptest! {
        #[test]
        fn never_panics(text in ".*", key in "[a-zA-Z]{0,12}") {
            let value = extract(&text, &key);
            prop_assert!(!value.contains('"'));
        }

        #[test]
        fn finds_well_formed_value(
            key in "[a-zA-Z]{1,12}",
            value in "[^\"]{0,40}",
            prefix in "[ {,a-z0-9]{0,10}",
        ) {
            let text = format!("{}\"{}\":\"{}\"}}", prefix, key, value);
            prop_assert_eq!(extract(&text, &key), value.as_str());
        }
    }
}
