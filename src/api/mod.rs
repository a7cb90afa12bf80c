//! Backend API abstraction for Atyt.
//!
//! Defines the wire types spoken by the AskTheYouTube backend and a
//! trait-based client interface so the controller can be tested without a
//! live server.

mod http;

pub use http::HttpBackendClient;

use crate::error::Result;
use crate::session::ChatMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request body for `POST /process-video`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessVideoRequest {
    pub url: String,
}

/// Response body for `POST /process-video`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessVideoResponse {
    /// Canonical video ID extracted by the backend.
    pub video_id: String,
    /// Human-readable status ("processed and indexed" vs "loaded from cache").
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub video_id: String,
    /// Prior conversation, oldest first. Excludes the query being asked.
    pub history: Vec<ChatMessage>,
}

/// A retrieved transcript chunk cited by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub text: String,
    /// Offset into the video, in seconds.
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub score: f32,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Response body for the `GET /` health probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: String,
}

/// Error body the backend sends for handled failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Trait for backend client implementations.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Ask the backend to fetch, chunk and index a video's transcript.
    async fn process_video(&self, url: &str) -> Result<ProcessVideoResponse>;

    /// Ask a question about the current video, with prior history as context.
    async fn chat(
        &self,
        query: &str,
        video_id: &str,
        history: &[ChatMessage],
    ) -> Result<ChatResponse>;

    /// Probe the backend health endpoint.
    async fn health(&self) -> Result<HealthResponse>;
}
