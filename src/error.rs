//! Error types for ARM client operations.

use thiserror::Error;

/// Errors surfaced by the client. Nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum ArmError {
    /// A mandatory setting is missing or a default cannot be resolved.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The token request failed or returned no usable token.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// A REST call returned a non-2xx status.
    #[error("http {status} from {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    /// A response body was not valid JSON or lacked an expected field.
    #[error("error decoding {context}: path={path} error={message}")]
    Decoding {
        context: String,
        path: String,
        message: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ArmError {
    pub(crate) fn missing_field(context: &str, field: &str) -> Self {
        ArmError::Decoding {
            context: context.to_string(),
            path: field.to_string(),
            message: format!("missing field `{field}`"),
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ArmError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_on_http() {
        let err = ArmError::Http {
            status: 404,
            url: "https://example/".to_string(),
            body: "{}".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(ArmError::Authentication("no token".into()).status(), None);
    }

    #[test]
    fn test_missing_field_message() {
        let err = ArmError::missing_field("subscription list", "value");
        assert_eq!(
            err.to_string(),
            "error decoding subscription list: path=value error=missing field `value`"
        );
    }
}
