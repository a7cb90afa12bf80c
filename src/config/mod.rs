//! Configuration module for Atyt.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{BackendSettings, ChatSettings, GeneralSettings, Settings};
