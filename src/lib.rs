//! Atyt - Ask The YouTube
//!
//! A terminal chat client for AskTheYouTube-style RAG backends: the backend
//! fetches, chunks and embeds a YouTube video's transcript; this client
//! submits videos for processing, asks questions against them, and keeps the
//! conversation on disk so it survives restarts.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `api` - Backend wire types and the HTTP client
//! - `session` - Chat messages, session state and persistence
//! - `controller` - The session/chat controller driving both endpoints
//! - `cli` - Command-line interface and terminal rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use atyt::api::HttpBackendClient;
//! use atyt::config::Settings;
//! use atyt::controller::SessionController;
//! use atyt::session::FileSessionStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let store = Arc::new(FileSessionStore::new(settings.session_path()));
//!     let client = Arc::new(HttpBackendClient::new(&settings.backend.base_url)?);
//!
//!     let mut controller = SessionController::new(store, client);
//!     controller.process_video("https://youtu.be/dQw4w9WgXcQ").await?;
//!     let outcome = controller.send_message("What is this video about?").await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;

pub use error::{AtytError, Result};
