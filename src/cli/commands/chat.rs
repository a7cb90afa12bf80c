//! Interactive chat command.

use super::build_controller;
use crate::cli::Output;
use crate::config::Settings;
use crate::controller::{SendOutcome, SessionController, View};
use crate::session::Role;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat command.
pub async fn run_chat(url: Option<String>, settings: Settings) -> anyhow::Result<()> {
    let mut controller = build_controller(&settings)?;

    println!("\n{}", style("Atyt Chat").bold().cyan());
    println!(
        "{}\n",
        style("Ask questions about a YouTube video. 'new' switches video, 'exit' quits.").dim()
    );

    if controller.restore_session()? {
        let video_id = controller.video_id().unwrap_or_default().to_string();
        Output::info(&format!(
            "Resuming session for video {} ({} messages).",
            video_id,
            controller.history().len()
        ));
        replay_history(&controller, &settings);
    } else if let Some(url) = url {
        process_with_spinner(&mut controller, &url).await;
    }

    // Re-prompt for a URL until a video is active.
    while controller.view() == View::Input {
        let Some(input) = prompt(&style("Video URL:").magenta().bold().to_string())? else {
            return Ok(());
        };
        if is_quit(&input) {
            return Ok(());
        }
        process_with_spinner(&mut controller, &input).await;
    }

    loop {
        let Some(input) = prompt(&style("You:").green().bold().to_string())? else {
            break;
        };

        if input.is_empty() {
            continue;
        }

        if is_quit(&input) {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("new") {
            controller.reset_session()?;
            Output::info("Session cleared.");

            while controller.view() == View::Input {
                let Some(url) = prompt(&style("Video URL:").magenta().bold().to_string())? else {
                    return Ok(());
                };
                if is_quit(&url) {
                    return Ok(());
                }
                process_with_spinner(&mut controller, &url).await;
            }
            continue;
        }

        let spinner = Output::spinner("Thinking...");
        let outcome = controller.send_message(&input).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(SendOutcome::Reply { content, sources }) => {
                Output::model_reply(&content, settings.chat.markdown);
                if settings.chat.show_sources {
                    Output::sources(&sources);
                }
            }
            Ok(SendOutcome::Failed { message }) => {
                Output::error(&message);
            }
            Ok(SendOutcome::Skipped) => {}
            Err(e) => {
                Output::error(&format!("{}", e));
            }
        }
    }

    Ok(())
}

/// Re-render a restored conversation the way it was originally shown.
fn replay_history(controller: &SessionController, settings: &Settings) {
    for message in controller.history() {
        match message.role {
            Role::User => Output::user_message(&message.content),
            Role::Model => Output::model_reply(&message.content, settings.chat.markdown),
        }
    }
}

/// Submit a URL for processing, reporting the outcome. On failure the
/// controller stays in the input view and the caller re-prompts.
async fn process_with_spinner(controller: &mut SessionController, url: &str) {
    let spinner = Output::spinner("Processing video...");
    let result = controller.process_video(url).await;
    spinner.finish_and_clear();

    match result {
        Ok(outcome) => {
            let message = outcome
                .message
                .unwrap_or_else(|| "Video processed.".to_string());
            Output::success(&format!("{} ({})", message, outcome.video_id));
        }
        Err(e) => {
            Output::error(&format!("{}", e));
        }
    }
}

/// Read one trimmed line from stdin. None on EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{} ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}
