//! Ask command implementation.

use super::build_controller;
use crate::cli::Output;
use crate::config::Settings;
use crate::controller::SendOutcome;
use crate::error::AtytError;

/// Run the ask command: one question against the active session.
pub async fn run_ask(question: &str, settings: Settings) -> anyhow::Result<()> {
    let mut controller = build_controller(&settings)?;

    if !controller.restore_session()? {
        let e = AtytError::NoSession;
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let spinner = Output::spinner("Thinking...");
    let outcome = controller.send_message(question).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(SendOutcome::Reply { content, sources }) => {
            Output::model_reply(&content, settings.chat.markdown);
            if settings.chat.show_sources {
                Output::sources(&sources);
            }
            Ok(())
        }
        Ok(SendOutcome::Failed { message }) => {
            Output::error(&message);
            Ok(())
        }
        Ok(SendOutcome::Skipped) => {
            Output::warning("Nothing to ask.");
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("{}", e));
            Err(e.into())
        }
    }
}
