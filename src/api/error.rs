//! API Error Type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted fetch)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; `message` is what the user sees in the toast
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Body was not the JSON shape we expected
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Http { status, message: error_message(status, body) }
    }
}

/// Extract the backend's error text.
/// FastAPI puts it under `detail` (string or validation list); other
/// handlers use `message`. Falls back to the bare status.
pub fn error_message(status: u16, body: &str) -> String {
    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return format!("HTTP error! status: {}", status),
    };

    let detail = match json.get("detail") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()).map(str::to_string))
                .collect();
            if parts.is_empty() { None } else { Some(parts.join("; ")) }
        }
        _ => None,
    };

    detail
        .or_else(|| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        assert_eq!(error_message(503, r#"{"detail":"AI_UNAVAILABLE"}"#), "AI_UNAVAILABLE");
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","message"],"msg":"field required"},{"msg":"bad language"}]}"#;
        assert_eq!(error_message(422, body), "field required; bad language");
    }

    #[test]
    fn test_message_field() {
        let body = r#"{"code":"RATE_LIMIT","message":"Too many requests"}"#;
        assert_eq!(error_message(429, body), "Too many requests");
    }

    #[test]
    fn test_fallback_to_status() {
        assert_eq!(error_message(500, "<html>oops</html>"), "HTTP error! status: 500");
        assert_eq!(error_message(404, "{}"), "HTTP error! status: 404");
    }

    #[test]
    fn test_http_error_display() {
        let err = ApiError::from_status(402, r#"{"detail":"NO_CREDITS"}"#);
        assert_eq!(err.to_string(), "NO_CREDITS");
        assert!(matches!(err, ApiError::Http { status: 402, .. }));
    }
}
