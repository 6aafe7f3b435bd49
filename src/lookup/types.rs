// Lookup API response parsing.
// Extracts the current-version rating count from the first result.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{RaterError, Result};

/// Field in each result carrying the rating count for the current version.
pub const RATING_COUNT_FIELD: &str = "userRatingCountForCurrentVersion";

/// Top level of a lookup response. Other fields such as `resultCount` are ignored.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<Value>,
}

/// Parse a lookup response body into a rating count.
///
/// A first result without the count field means nobody has rated the
/// current version yet, so it yields 0. Any other shape is rejected.
pub fn parse_rating_count(body: &str) -> Result<u64> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| RaterError::Parse(format!("malformed JSON: {e}")))?;

    if !root.is_object() {
        return Err(RaterError::Parse("root is not an object".to_string()));
    }

    let response: LookupResponse = serde_json::from_value(root)
        .map_err(|e| RaterError::Parse(format!("unexpected response shape: {e}")))?;
    let results = response.results;

    let first = results
        .first()
        .ok_or_else(|| RaterError::Parse("`results` is empty".to_string()))?
        .as_object()
        .ok_or_else(|| RaterError::Parse("first result is not an object".to_string()))?;

    match first.get(RATING_COUNT_FIELD) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value.as_u64().ok_or_else(|| {
            RaterError::Parse(format!("`{RATING_COUNT_FIELD}` is not a count: {value}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse_error(body: &str) -> bool {
        matches!(parse_rating_count(body), Err(e) if e.kind() == ErrorKind::Parse)
    }

    #[test]
    fn test_parse_count() {
        let body = r#"{"resultCount":1,"results":[{"userRatingCountForCurrentVersion":42}]}"#;
        assert_eq!(parse_rating_count(body).unwrap(), 42);
    }

    #[test]
    fn test_missing_field_defaults_to_zero() {
        assert_eq!(parse_rating_count(r#"{"results":[{}]}"#).unwrap(), 0);
        assert_eq!(
            parse_rating_count(r#"{"results":[{"userRatingCountForCurrentVersion":null}]}"#)
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_only_first_result_counts() {
        let body = r#"{"results":[{"trackName":"x"},{"userRatingCountForCurrentVersion":9}]}"#;
        assert_eq!(parse_rating_count(body).unwrap(), 0);
    }

    #[test]
    fn test_empty_results_is_parse_error() {
        assert!(parse_error(r#"{"results":[]}"#));
    }

    #[test]
    fn test_structural_mismatches() {
        assert!(parse_error("not json"));
        assert!(parse_error("[1, 2, 3]"));
        assert!(parse_error(r#"{"resultCount":0}"#));
        assert!(parse_error(r#"{"results":{"userRatingCountForCurrentVersion":1}}"#));
        assert!(parse_error(r#"{"results":[7]}"#));
    }

    #[test]
    fn test_non_numeric_count_is_parse_error() {
        assert!(parse_error(
            r#"{"results":[{"userRatingCountForCurrentVersion":"42"}]}"#
        ));
        assert!(parse_error(
            r#"{"results":[{"userRatingCountForCurrentVersion":-3}]}"#
        ));
        assert!(parse_error(
            r#"{"results":[{"userRatingCountForCurrentVersion":4.5}]}"#
        ));
    }
}
