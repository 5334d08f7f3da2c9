//! Backend API Client
//!
//! Thin JSON wrapper over the REST backend, organized by domain.
//! Every call sets the JSON content type, maps non-2xx responses to
//! `ApiError::Http` with the backend's message, and logs failures.

mod error;
mod chat;
mod weather;
mod schemes;
mod tips;
mod mandi;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;

// Re-export all public items
pub use error::*;
pub use chat::*;
pub use weather::*;
pub use schemes::*;
pub use tips::*;
pub use mandi::*;

/// Characters escaped when an id is used as a path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

thread_local! {
    static CLIENT: ApiClient = ApiClient::new(&AppConfig::load().api_base);
}

/// Shared client for the configured backend
pub fn client() -> ApiClient {
    CLIENT.with(ApiClient::clone)
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        let base_url = resolve_base(base_url, origin.as_deref()).unwrap_or_else(|e| {
            log::error!("[API] {}", e);
            base_url.to_string()
        });
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let full = format!("{}{}", self.base_url, endpoint);
        Url::parse(&full).map_err(|e| ApiError::InvalidUrl(format!("{} ({})", full, e)))
    }

    pub async fn get<T, Q>(&self, endpoint: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request::<T, (), Q>(Method::GET, endpoint, None, query).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.request::<T, B, [(&str, &str)]>(Method::POST, endpoint, Some(body), &[]).await
    }

    async fn request<T, B, Q>(&self, method: Method, endpoint: &str, body: Option<&B>, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
        Q: Serialize + ?Sized,
    {
        let result = self.send(method.clone(), endpoint, body, query).await;
        if let Err(e) = &result {
            log::error!("[API] {} {} failed: {}", method, endpoint, e);
        }
        result
    }

    async fn send<T, B, Q>(&self, method: Method, endpoint: &str, body: Option<&B>, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
        Q: Serialize + ?Sized,
    {
        let mut builder = self
            .http
            .request(method, self.url(endpoint)?)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .query(query);
        if let Some(body) = body {
            builder = builder.body(serde_json::to_string(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Turn the configured base into an absolute URL without a trailing slash.
/// reqwest's fetch backend rejects relative URLs, so `/api/v1` is joined
/// onto the page origin.
pub fn resolve_base(base: &str, origin: Option<&str>) -> Result<String, ApiError> {
    let base = base.trim().trim_end_matches('/');
    if base.starts_with("http://") || base.starts_with("https://") {
        return Ok(base.to_string());
    }
    let origin = origin
        .map(|o| o.trim_end_matches('/'))
        .filter(|o| !o.is_empty() && *o != "null")
        .ok_or_else(|| ApiError::InvalidUrl(format!("relative base '{}' without page origin", base)))?;
    if base.is_empty() || base.starts_with('/') {
        Ok(format!("{}{}", origin, base))
    } else {
        Ok(format!("{}/{}", origin, base))
    }
}

/// Encode an id for use as a single path segment
pub fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT_ENCODE_SET).to_string()
}

/// Backend liveness probe
pub async fn health_check() -> Result<serde_json::Value, ApiError> {
    client().get("/health", &[] as &[(&str, &str)]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_base_uses_origin() {
        assert_eq!(
            resolve_base("/api/v1", Some("http://localhost:8080")).unwrap(),
            "http://localhost:8080/api/v1"
        );
        assert_eq!(
            resolve_base("api/v1/", Some("https://kisan.example.in/")).unwrap(),
            "https://kisan.example.in/api/v1"
        );
    }

    #[test]
    fn test_absolute_base_kept() {
        assert_eq!(
            resolve_base("https://backend.example.in/api/v1/", None).unwrap(),
            "https://backend.example.in/api/v1"
        );
    }

    #[test]
    fn test_relative_base_without_origin_fails() {
        assert!(matches!(resolve_base("/api/v1", None), Err(ApiError::InvalidUrl(_))));
        assert!(resolve_base("/api/v1", Some("null")).is_err());
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("pm-kisan"), "pm-kisan");
        assert_eq!(path_segment("a/b c?"), "a%2Fb%20c%3F");
    }

    #[test]
    fn test_client_url_join() {
        let client = ApiClient {
            base_url: "http://localhost:8000/api/v1".to_string(),
            http: reqwest::Client::new(),
        };
        let url = client.url("/schemes/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/schemes/");
    }
}
