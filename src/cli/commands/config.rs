//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, mut settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            match key.as_str() {
                "backend.base_url" => settings.backend.base_url = value.clone(),
                "general.data_dir" => settings.general.data_dir = value.clone(),
                "general.log_level" => settings.general.log_level = value.clone(),
                "chat.markdown" => settings.chat.markdown = parse_bool(key, value)?,
                "chat.show_sources" => settings.chat.show_sources = parse_bool(key, value)?,
                _ => {
                    anyhow::bail!(
                        "Unknown config key '{}'. Known keys: backend.base_url, \
                         general.data_dir, general.log_level, chat.markdown, chat.show_sources",
                        key
                    );
                }
            }

            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
        }

        ConfigAction::Path => {
            let config_path = Settings::default_config_path();
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("'{}' expects true or false, got '{}'", key, value))
}
