//! CLI command implementations.

mod ask;
mod chat;
mod config;
mod doctor;
mod process;
mod reset;
mod status;

pub use ask::run_ask;
pub use chat::run_chat;
pub use config::run_config;
pub use doctor::run_doctor;
pub use process::run_process;
pub use reset::run_reset;
pub use status::run_status;

use crate::api::HttpBackendClient;
use crate::config::Settings;
use crate::controller::SessionController;
use crate::session::FileSessionStore;
use std::sync::Arc;

/// Build a controller over the configured session file and backend.
pub(crate) fn build_controller(settings: &Settings) -> crate::error::Result<SessionController> {
    let store = Arc::new(FileSessionStore::new(settings.session_path()));
    let client = Arc::new(HttpBackendClient::new(&settings.backend.base_url)?);
    Ok(SessionController::new(store, client))
}
