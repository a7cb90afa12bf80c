//! Status command implementation.

use super::build_controller;
use crate::cli::Output;
use crate::config::Settings;

/// Run the status command: show the active session.
pub async fn run_status(settings: Settings) -> anyhow::Result<()> {
    let mut controller = build_controller(&settings)?;

    Output::header("Session");

    if controller.restore_session()? {
        Output::kv("Video", controller.video_id().unwrap_or_default());
        Output::kv("Messages", &controller.history().len().to_string());
    } else {
        Output::info("No active session.");
    }

    Output::kv(
        "Session file",
        &settings.session_path().display().to_string(),
    );
    Output::kv("Backend", &settings.backend.base_url);

    Ok(())
}
