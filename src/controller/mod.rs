//! Session/chat controller.
//!
//! Owns the session state, the persistence layer and the backend client,
//! and drives the two network operations: submit a video for processing and
//! submit a chat query. The CLI layer only renders the typed outcomes
//! returned here.

use crate::api::{BackendClient, Source};
use crate::error::{AtytError, Result};
use crate::session::{
    ChatMessage, SessionState, SessionStore, HISTORY_KEY, VIDEO_ID_KEY,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed message shown when a chat request fails. The failure itself is
/// never appended to the history.
pub const CHAT_FAILURE_MESSAGE: &str =
    "Sorry, something went wrong while answering. Please try again.";

/// Which view the UI should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Waiting for a video URL.
    Input,
    /// A video is active; questions can be asked.
    Chat,
}

/// Result of a successful `process_video`.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub video_id: String,
    /// Backend status line (freshly indexed vs loaded from cache).
    pub message: Option<String>,
}

/// Result of a `send_message` call.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// Nothing was sent: empty query, or a request already in flight.
    Skipped,
    /// The model replied; the reply is already appended and persisted.
    Reply {
        content: String,
        sources: Vec<Source>,
    },
    /// The request failed; the user message stays in history, no error
    /// entry is appended.
    Failed { message: String },
}

/// Drives one chat session against the backend.
pub struct SessionController {
    state: SessionState,
    view: View,
    store: Arc<dyn SessionStore>,
    client: Arc<dyn BackendClient>,
}

impl SessionController {
    pub fn new(store: Arc<dyn SessionStore>, client: Arc<dyn BackendClient>) -> Self {
        Self {
            state: SessionState::new(),
            view: View::Input,
            store,
            client,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn video_id(&self) -> Option<&str> {
        self.state.current_video_id.as_deref()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.state.chat_history
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing
    }

    /// Restore a previously persisted session.
    ///
    /// Returns true (and switches to the chat view) if a video ID was
    /// persisted; the caller re-renders `history()`. Nothing is written
    /// back to the store. A persisted ID with a corrupt or absent history
    /// restores with an empty history.
    pub fn restore_session(&mut self) -> Result<bool> {
        let Some(video_id) = self.store.get(VIDEO_ID_KEY)? else {
            return Ok(false);
        };

        let history = match self.store.get(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
                Ok(history) => history,
                Err(e) => {
                    warn!("Persisted history is unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        debug!(
            "Restored session for video {} with {} messages",
            video_id,
            history.len()
        );

        self.state.current_video_id = Some(video_id);
        self.state.chat_history = history;
        self.view = View::Chat;
        Ok(true)
    }

    /// Submit a video URL for processing.
    ///
    /// An empty URL is rejected before any network call. On failure the
    /// in-memory and persisted state are left untouched and the view stays
    /// on input.
    pub async fn process_video(&mut self, url: &str) -> Result<ProcessOutcome> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AtytError::InvalidInput(
                "Please enter a YouTube URL.".to_string(),
            ));
        }

        let response = self.client.process_video(url).await?;

        self.state.current_video_id = Some(response.video_id.clone());
        self.persist()?;
        self.view = View::Chat;

        Ok(ProcessOutcome {
            video_id: response.video_id,
            message: response.message,
        })
    }

    /// Submit a chat query.
    ///
    /// The user message is appended and persisted before the request goes
    /// out (optimistic update); the request history excludes it. No-op when
    /// the query is empty or a request is already in flight.
    pub async fn send_message(&mut self, query: &str) -> Result<SendOutcome> {
        let query = query.trim();
        if query.is_empty() || self.state.is_processing {
            return Ok(SendOutcome::Skipped);
        }

        let video_id = self
            .state
            .current_video_id
            .clone()
            .ok_or(AtytError::NoSession)?;

        self.state.is_processing = true;
        self.state.chat_history.push(ChatMessage::user(query));
        if let Err(e) = self.persist() {
            self.state.is_processing = false;
            return Err(e);
        }

        let prior = &self.state.chat_history[..self.state.chat_history.len() - 1];
        let result = self.client.chat(query, &video_id, prior).await;
        self.state.is_processing = false;

        match result {
            Ok(response) => {
                self.state
                    .chat_history
                    .push(ChatMessage::model(&response.response));
                self.persist()?;
                Ok(SendOutcome::Reply {
                    content: response.response,
                    sources: response.sources,
                })
            }
            Err(e) => {
                debug!("Chat request failed: {}", e);
                Ok(SendOutcome::Failed {
                    message: CHAT_FAILURE_MESSAGE.to_string(),
                })
            }
        }
    }

    /// Clear persisted and in-memory state entirely.
    pub fn reset_session(&mut self) -> Result<()> {
        self.store.clear()?;
        self.state.clear();
        self.view = View::Input;
        Ok(())
    }

    /// Persist the current video ID and history under their storage keys.
    fn persist(&self) -> Result<()> {
        if let Some(video_id) = &self.state.current_video_id {
            self.store.set(VIDEO_ID_KEY, video_id)?;
        }
        let history = serde_json::to_string(&self.state.chat_history)?;
        self.store.set(HISTORY_KEY, &history)?;
        Ok(())
    }

    #[cfg(test)]
    fn force_in_flight(&mut self, value: bool) {
        self.state.is_processing = value;
    }
}
