//! Doctor command - verify configuration and backend reachability.

use crate::api::{BackendClient, HttpBackendClient};
use crate::cli::Output;
use crate::config::Settings;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    hint: Option<String>,
}

#[derive(Debug, PartialEq)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub async fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Atyt Doctor");
    println!();

    let mut results = Vec::new();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        results.push(CheckResult::ok(
            "Config",
            &config_path.display().to_string(),
        ));
    } else {
        results.push(CheckResult::warning(
            "Config",
            "no config file, using defaults",
            "Run 'atyt config show' to see the effective configuration.",
        ));
    }

    match std::fs::create_dir_all(settings.data_dir()) {
        Ok(()) => results.push(CheckResult::ok(
            "Data dir",
            &settings.data_dir().display().to_string(),
        )),
        Err(e) => results.push(CheckResult::error(
            "Data dir",
            &format!("not writable: {}", e),
            "Set general.data_dir to a writable location.",
        )),
    }

    match HttpBackendClient::new(&settings.backend.base_url) {
        Ok(client) => {
            results.push(CheckResult::ok("Backend URL", &settings.backend.base_url));

            let spinner = Output::spinner("Probing backend...");
            let health = client.health().await;
            spinner.finish_and_clear();

            match health {
                Ok(health) => results.push(CheckResult::ok(
                    "Backend",
                    &format!("{} ({})", health.status, health.service),
                )),
                Err(e) => results.push(CheckResult::error(
                    "Backend",
                    &format!("unreachable: {}", e),
                    "Is the backend running? Check backend.base_url.",
                )),
            }
        }
        Err(e) => results.push(CheckResult::error(
            "Backend URL",
            &format!("{}", e),
            "Set backend.base_url to a valid URL, e.g. http://localhost:8080.",
        )),
    }

    for result in &results {
        result.print();
    }
    println!();

    let errors = results
        .iter()
        .filter(|r| r.status == CheckStatus::Error)
        .count();

    if errors > 0 {
        Output::error(&format!("{} check(s) failed.", errors));
    } else {
        Output::success("All checks passed.");
    }

    Ok(())
}
