//! Stats backend API client
//!
//! Thin reqwest wrapper over the backend REST contract. Every request is a
//! plain JSON GET with a whole-request timeout.

pub mod model;

use futures_util::future::BoxFuture;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

pub use model::HealthStatus;

use crate::features::player_search::{LookupError, PlayerLookup};
use crate::features::settings::{BackendSettings, NetworkSettings};

/// Default client timeout in seconds
const TIMEOUT: u64 = 10;

#[derive(Clone)]
pub struct StatsApi {
    client: Client,
    base_url: String,
}

impl fmt::Debug for StatsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsApi")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl StatsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(TIMEOUT))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Self::builder(timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    /// Build a client from the persisted backend and network settings
    pub fn from_settings(
        backend: &BackendSettings,
        network: &NetworkSettings,
    ) -> Result<Self, ApiError> {
        let timeout = Duration::from_secs(backend.timeout_secs.max(1));
        let mut builder = Self::builder(timeout);
        if let Some(url) = network.proxy_url() {
            let proxy = reqwest::Proxy::all(&url).map_err(|e| ApiError::Request(e.to_string()))?;
            debug!("Using proxy {}", url);
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: normalize_base_url(backend.base_url.clone()),
        })
    }

    fn builder(timeout: Duration) -> reqwest::ClientBuilder {
        Client::builder()
            .timeout(timeout)
            .default_headers(default_headers())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making API request: GET {}", path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            let err = ApiError::from_transport(&e);
            warn!("API error on GET {}: {}", path, err);
            err
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        if !status.is_success() {
            let err = ApiError::Status(status, error_detail(&body));
            warn!("API error on GET {}: {}", path, err);
            return Err(err);
        }
        Ok(body)
    }

    /// `GET /api/player/search/{term}`
    pub async fn search_players(&self, term: &str) -> Result<Vec<String>, ApiError> {
        let path = format!("/api/player/search/{}", urlencoding::encode(term));
        let body = self.request(&path).await?;
        model::to_usernames(&body)
    }

    /// `GET /api/health`
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let body = self.request("/api/health").await?;
        model::to_health_status(&body)
    }
}

impl PlayerLookup for StatsApi {
    fn search(&self, term: &str) -> BoxFuture<'static, Result<Vec<String>, LookupError>> {
        let api = self.clone();
        let term = term.to_string();
        Box::pin(async move { api.search_players(&term).await.map_err(LookupError::from) })
    }
}

fn default_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    headers
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Pull `detail` out of a FastAPI-style error body
fn error_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<serde_json::Value>,
    }

    let detail = serde_json::from_str::<ErrorBody>(body).ok()?.detail?;
    match detail {
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Errors from the stats backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection or client setup failure
    Request(String),
    /// The request exceeded the client timeout
    Timeout,
    /// Non-success status, with the backend's `detail` if it sent one
    Status(StatusCode, Option<String>),
    /// Body was not the expected JSON
    Decode(String),
}

impl ApiError {
    fn from_transport(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Request(e.to_string())
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "Request failed: {}", e),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Status(status, Some(detail)) => write!(f, "HTTP {}: {}", status, detail),
            ApiError::Status(status, None) => write!(f, "HTTP {}", status),
            ApiError::Decode(e) => write!(f, "Failed to decode response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for LookupError {
    fn from(e: ApiError) -> Self {
        LookupError::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" http://localhost:8001/ ".to_string()),
            "http://localhost:8001"
        );
        assert_eq!(
            normalize_base_url("https://stats.example.net//".to_string()),
            "https://stats.example.net"
        );
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "Player not found"}"#).as_deref(),
            Some("Player not found")
        );
        assert_eq!(error_detail("<html>bad gateway</html>"), None);
        assert_eq!(error_detail(r#"{"message": "x"}"#), None);
    }

    #[tokio::test]
    async fn test_search_players() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/player/search/stev")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["Steve", "Stevie_01"]"#)
            .create_async()
            .await;

        let api = StatsApi::new(server.url()).unwrap();
        let names = api.search_players("stev").await.unwrap();

        assert_eq!(names, vec!["Steve", "Stevie_01"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_term_is_percent_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/player/search/a%20b%2Fc")
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let api = StatsApi::new(server.url()).unwrap();
        assert!(api.search_players("a b/c").await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/player/search/xyz")
            .with_status(500)
            .with_body(r#"{"detail": "API request failed: upstream"}"#)
            .create_async()
            .await;

        let api = StatsApi::new(server.url()).unwrap();
        let err = api.search_players("xyz").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status(
                StatusCode::INTERNAL_SERVER_ERROR,
                Some("API request failed: upstream".to_string())
            )
        );
    }

    #[tokio::test]
    async fn test_lookup_error_hides_detail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/player/search/xyz")
            .with_status(404)
            .create_async()
            .await;

        let api = StatsApi::new(server.url()).unwrap();
        let err = PlayerLookup::search(&api, "xyz").await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to search players");
        assert!(err.detail().contains("404"));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on the discard port
        let api = StatsApi::with_timeout("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = api.search_players("abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_) | ApiError::Timeout));
    }

    #[tokio::test]
    async fn test_health_check() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_body(r#"{"status": "healthy", "service": "coral-stats-api"}"#)
            .create_async()
            .await;

        let api = StatsApi::new(format!("{}/", server.url())).unwrap();
        let health = api.health_check().await.unwrap();
        assert!(health.is_healthy());
    }

    #[test]
    fn test_from_settings() {
        let backend = BackendSettings {
            base_url: "http://stats.local:8001/".to_string(),
            timeout_secs: 3,
        };
        let api = StatsApi::from_settings(&backend, &NetworkSettings::default()).unwrap();
        assert_eq!(api.base_url(), "http://stats.local:8001");
    }
}
