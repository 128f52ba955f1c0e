//! OAuth2 client-credentials token acquisition.

use super::decode::decode_body;
use crate::config::{ClientConfig, Credentials};
use crate::error::{ArmError, Result};
use chrono::{DateTime, Duration, Utc};
use colored::Colorize;
use serde_json::Value;
use std::fmt;

/// Bearer token ready to be sent as an `Authorization` header.
///
/// Expiry is recorded for information only; there is no refresh path.
#[derive(Clone)]
pub struct AccessToken {
    header: String,
    acquired_at: DateTime<Utc>,
    expires_in: Option<u64>,
}

impl AccessToken {
    /// Wrap a raw access token as `Bearer <token>`.
    pub fn bearer(access_token: &str) -> Self {
        AccessToken {
            header: format!("Bearer {access_token}"),
            acquired_at: Utc::now(),
            expires_in: None,
        }
    }

    /// The full header value, including the `Bearer ` prefix.
    pub fn as_header(&self) -> &str {
        &self.header
    }

    pub fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in?).ok()?;
        Some(self.acquired_at + Duration::seconds(secs))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("header", &"Bearer ***")
            .field("acquired_at", &self.acquired_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// POST the client-credentials grant to `{authority}/{tenant}/oauth2/token`.
pub async fn request_token(
    http: &reqwest::Client,
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<AccessToken> {
    let token_url = config.token_url(&credentials.tenant_id);
    let resource = config.token_resource();
    log::info!(
        "Requesting token from {url} for client_id={client_id}",
        url = token_url.on_blue(),
        client_id = credentials.client_id
    );

    let response = http
        .post(&token_url)
        .form(&[
            ("grant_type", config.grant_type.as_str()),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_key.as_str()),
            ("resource", resource.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ArmError::Authentication(format!("token request failed: {e}")))?;

    let status = response.status();
    log::debug!("Token request status: {status}");
    let body = response
        .text()
        .await
        .map_err(|e| ArmError::Authentication(format!("token response unreadable: {e}")))?;

    if !status.is_success() {
        log::warn!(
            "{failed} token request status={status}",
            failed = "failed".on_red()
        );
        return Err(ArmError::Authentication(format!(
            "token endpoint returned {status}: {body}"
        )));
    }

    let token_data: Value = decode_body(&body, "token response")
        .map_err(|e| ArmError::Authentication(format!("token response is not JSON: {e}")))?;
    let access_token = token_data
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ArmError::Authentication("no access_token in token response".into()))?;

    let mut token = AccessToken::bearer(access_token);
    token.expires_in = token_data.get("expires_in").and_then(parse_seconds);
    log::info!(
        "Token acquired, expires_at={:?}",
        token.expires_at().map(|t| t.to_rfc3339())
    );
    Ok(token)
}

/// The v1 endpoint sends `expires_in` as a string, v2 as a number.
fn parse_seconds(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bearer_prefix() {
        let token = AccessToken::bearer("abc");
        assert_eq!(token.as_header(), "Bearer abc");
        assert!(token.expires_at().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let token = AccessToken::bearer("very-secret");
        assert!(!format!("{token:?}").contains("very-secret"));
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds(&json!(3599)), Some(3599));
        assert_eq!(parse_seconds(&json!("3599")), Some(3599));
        assert_eq!(parse_seconds(&json!("soon")), None);
        assert_eq!(parse_seconds(&json!(null)), None);
    }

    #[test]
    fn test_expires_at() {
        let mut token = AccessToken::bearer("abc");
        token.expires_in = Some(60);
        assert_eq!(
            token.expires_at(),
            Some(token.acquired_at() + Duration::seconds(60))
        );
    }
}
