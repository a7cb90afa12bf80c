//! Process command implementation.

use super::build_controller;
use crate::cli::Output;
use crate::config::Settings;

/// Run the process command: submit a video and save the session.
pub async fn run_process(url: &str, settings: Settings) -> anyhow::Result<()> {
    let mut controller = build_controller(&settings)?;

    let spinner = Output::spinner("Processing video...");
    let result = controller.process_video(url).await;
    spinner.finish_and_clear();

    match result {
        Ok(outcome) => {
            if let Some(message) = &outcome.message {
                Output::success(message);
            } else {
                Output::success("Video processed.");
            }
            Output::kv("Video ID", &outcome.video_id);
            Output::info("Ask away with 'atyt chat' or 'atyt ask <question>'.");
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("{}", e));
            Err(e.into())
        }
    }
}
