//! CLI module for Atyt.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Atyt - Ask The YouTube
///
/// A terminal chat client for AskTheYouTube-style RAG backends: point it at
/// a YouTube video, then ask questions answered from the video's transcript.
#[derive(Parser, Debug)]
#[command(name = "atyt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(long, env = "ATYT_BACKEND_URL", global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session (resumes the saved session if any)
    Chat {
        /// YouTube URL to process when starting a fresh session
        url: Option<String>,
    },

    /// Submit a video for processing and save it as the active session
    Process {
        /// YouTube URL
        url: String,
    },

    /// Ask a single question against the active session
    Ask {
        /// The question to ask
        question: String,
    },

    /// Show the active session
    Status,

    /// Clear the active session
    Reset,

    /// Check configuration and backend reachability
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "backend.base_url")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Show configuration file path
    Path,
}
