//! JSON decoding with path-aware error messages.

use crate::error::{ArmError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response body, reporting the JSON path that failed.
///
/// An empty body decodes as `null`, which is what ARM sends for most
/// `202`/`204` responses.
pub fn decode_body<T: DeserializeOwned>(body: &str, context: &str) -> Result<T> {
    let body = if body.trim().is_empty() { "null" } else { body };
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("BODY START:\n\n{}\n\nBODY END\n", body);
        ArmError::Decoding {
            context: context.to_string(),
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })
}

/// Decode an already parsed document into a typed model.
pub fn decode_value<T: DeserializeOwned>(value: Value, context: &str) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| ArmError::Decoding {
        context: context.to_string(),
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_empty_body_is_null() {
        let value: Value = decode_body("", "delete").expect("empty body");
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_body::<Value>("<html>", "listing").expect_err("not json");
        assert!(matches!(err, ArmError::Decoding { ref context, .. } if context == "listing"));
    }

    #[test]
    fn test_decode_value_reports_path() {
        let err = decode_value::<Vec<String>>(json!(["sub1", 7]), "subscription ids")
            .expect_err("wrong type");
        match err {
            ArmError::Decoding { path, .. } => assert_eq!(path, "[1]"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
