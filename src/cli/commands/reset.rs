//! Reset command implementation.

use super::build_controller;
use crate::cli::Output;
use crate::config::Settings;

/// Run the reset command: clear the active session entirely.
pub async fn run_reset(settings: Settings) -> anyhow::Result<()> {
    let mut controller = build_controller(&settings)?;
    controller.reset_session()?;
    Output::success("Session cleared.");
    Ok(())
}
