use serde_json::Value;

use crate::types::UserSearchResult;

/// Custom error type for entity JSON operations
#[derive(Debug, thiserror::Error)]
pub enum EntityJsonError {
    #[error("JSON parsing failed: {0}")]
    ParseError(String),

    #[error("JSON deserialization failed: {0}")]
    DeserializationError(String),

    #[error("JSON serialization failed: {0}")]
    SerializationError(String),
}

/// Parses a user search result from a JSON string
///
/// Rejects input that is not valid JSON, is missing any of the required
/// `id`, `name`, `profile`, or `profile.imageUrl` fields, or carries a
/// non-string non-null `imageUrl` value.
///
/// # Arguments
/// * `json` - The JSON text to parse
///
/// # Returns
/// * `Result<UserSearchResult, EntityJsonError>` - The parsed result or an error
pub fn user_search_result_from_json(json: &str) -> Result<UserSearchResult, EntityJsonError> {
    serde_json::from_str(json).map_err(|e| EntityJsonError::ParseError(e.to_string()))
}

/// Converts an already-parsed JSON value into a user search result
pub fn user_search_result_from_value(value: Value) -> Result<UserSearchResult, EntityJsonError> {
    serde_json::from_value(value).map_err(|e| EntityJsonError::DeserializationError(e.to_string()))
}

/// Serializes a user search result to its wire JSON representation
///
/// An unset profile image is emitted as an explicit `"imageUrl": null`,
/// never as a missing key.
pub fn user_search_result_to_json(result: &UserSearchResult) -> Result<String, EntityJsonError> {
    serde_json::to_string(result).map_err(|e| EntityJsonError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserProfile;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_conforming() {
        let result = user_search_result_from_json(
            r#"{"id":"u1","name":"Alice","profile":{"imageUrl":"https://example.com/a.png"}}"#,
        )
        .unwrap();

        assert_eq!(
            result,
            UserSearchResult::new(
                "u1".to_string(),
                "Alice".to_string(),
                UserProfile::new(Some("https://example.com/a.png".to_string())),
            )
        );
    }

    #[test]
    fn test_from_json_invalid_text() {
        let err = user_search_result_from_json("not json").unwrap_err();
        assert!(matches!(err, EntityJsonError::ParseError(_)));
    }

    #[test]
    fn test_from_value_missing_field() {
        let err = user_search_result_from_value(json!({ "id": "u1" })).unwrap_err();
        assert!(matches!(err, EntityJsonError::DeserializationError(_)));
    }

    #[test]
    fn test_to_json_round_trip_null_image() {
        let original =
            UserSearchResult::new("u2".to_string(), "Bob".to_string(), UserProfile::without_image());

        let encoded = user_search_result_to_json(&original).unwrap();
        assert!(encoded.contains(r#""imageUrl":null"#));

        let decoded = user_search_result_from_json(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
