//! HTTP backend client implementation.

use super::{
    BackendClient, ChatRequest, ChatResponse, ErrorBody, HealthResponse, ProcessVideoRequest,
    ProcessVideoResponse,
};
use crate::error::{AtytError, Result};
use crate::session::ChatMessage;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Maximum length of an error body echoed back to the user.
const ERROR_DETAIL_MAX_LEN: usize = 200;

/// Backend client over HTTP.
///
/// Requests are fire-once: no retries and no client-side timeout, matching
/// the backend's own semantics. A hung request is only resolved by the user.
pub struct HttpBackendClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpBackendClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url.trim()).map_err(|e| {
            AtytError::Config(format!("Invalid backend base URL '{}': {}", base_url, e))
        })?;

        // Url::join treats a path without a trailing slash as a file.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| AtytError::Config(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AtytError::Backend {
                status: status.as_u16(),
                detail: error_detail(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            AtytError::MalformedResponse(format!("'{}' returned invalid JSON: {}", path, e))
        })
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn process_video(&self, url: &str) -> Result<ProcessVideoResponse> {
        let request = ProcessVideoRequest {
            url: url.to_string(),
        };
        self.post_json("process-video", &request).await
    }

    async fn chat(
        &self,
        query: &str,
        video_id: &str,
        history: &[ChatMessage],
    ) -> Result<ChatResponse> {
        let request = ChatRequest {
            query: query.to_string(),
            video_id: video_id.to_string(),
            history: history.to_vec(),
        };
        self.post_json("chat", &request).await
    }

    async fn health(&self) -> Result<HealthResponse> {
        let url = self.endpoint("")?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AtytError::Backend {
                status: status.as_u16(),
                detail: error_detail(&text),
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| AtytError::MalformedResponse(format!("'/' returned invalid JSON: {}", e)))
    }
}

/// Reduce an error body to a single readable line.
///
/// The backend sends `{"detail": "..."}` for handled failures, but proxies
/// and crashes can produce arbitrary text or HTML.
fn error_detail(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }

    let flattened = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.is_empty() {
        return "empty response body".to_string();
    }

    if flattened.chars().count() <= ERROR_DETAIL_MAX_LEN {
        flattened
    } else {
        let truncated: String = flattened.chars().take(ERROR_DETAIL_MAX_LEN).collect();
        format!("{}...", truncated)
    }
}
