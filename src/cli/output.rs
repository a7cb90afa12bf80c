//! CLI output formatting utilities.

use crate::api::Source;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a user message the way it appears in the chat view.
    pub fn user_message(content: &str) {
        println!("{} {}", style("You:").green().bold(), content);
    }

    /// Print a model reply, optionally rendered as terminal Markdown.
    pub fn model_reply(content: &str, markdown: bool) {
        let body = if markdown {
            render_markdown(content)
        } else {
            content.to_string()
        };
        println!("\n{} {}\n", style("Atyt:").cyan().bold(), body);
    }

    /// Print source citations under a reply.
    pub fn sources(sources: &[Source]) {
        if sources.is_empty() {
            return;
        }
        println!("{}", style("  Sources:").dim());
        for source in sources {
            println!(
                "  {} {} ({:.2}) {}",
                style("*").cyan(),
                style(format_timestamp(source.start_time)).cyan(),
                source.score,
                style(content_preview(&source.text, 80)).dim()
            );
        }
        println!();
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Format a video offset in seconds as mm:ss or hh:mm:ss.
pub fn format_timestamp(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as u32;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Truncate content with ellipsis, flattening newlines.
pub fn content_preview(content: &str, max_len: usize) -> String {
    let content = content.replace('\n', " ");
    if content.chars().count() <= max_len {
        content
    } else {
        let truncated: String = content.chars().take(max_len).collect();
        format!("{}...", truncated)
    }
}

/// Render a Markdown subset for the terminal.
///
/// Handles headers, bullet lists, fenced code blocks, `**bold**` and
/// `` `inline code` ``. Everything else passes through untouched.
pub fn render_markdown(content: &str) -> String {
    let mut out = Vec::new();
    let mut in_fence = false;

    for line in content.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }

        if in_fence {
            out.push(format!("    {}", style(line).dim()));
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix('#') {
            let text = heading.trim_start_matches('#').trim_start();
            out.push(style(text).bold().to_string());
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            out.push(format!("  {} {}", style("*").cyan(), render_inline(item)));
            continue;
        }

        out.push(render_inline(line));
    }

    out.join("\n")
}

/// Apply `**bold**` and backtick styling within a single line.
fn render_inline(line: &str) -> String {
    let mut result = String::new();

    for (i, chunk) in line.split("**").enumerate() {
        if i % 2 == 1 && !chunk.is_empty() {
            result.push_str(&style(chunk).bold().to_string());
        } else {
            for (j, piece) in chunk.split('`').enumerate() {
                if j % 2 == 1 && !piece.is_empty() {
                    result.push_str(&style(piece).cyan().to_string());
                } else {
                    result.push_str(piece);
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(125.0), "02:05");
        assert_eq!(format_timestamp(3725.0), "01:02:05");
        assert_eq!(format_timestamp(-3.0), "00:00");
    }

    #[test]
    fn test_content_preview() {
        assert_eq!(content_preview("short", 10), "short");
        assert_eq!(content_preview("multi\nline", 20), "multi line");
        assert_eq!(content_preview("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn test_render_markdown_headers_and_bullets() {
        let input = "# Title\n- one\n- two";
        let rendered = render_markdown(input);
        let plain = strip_ansi_codes(&rendered).to_string();
        assert_eq!(plain, "Title\n  * one\n  * two");
    }

    #[test]
    fn test_render_markdown_strips_emphasis_markers() {
        let rendered = render_markdown("This is **important** and `code`.");
        let plain = strip_ansi_codes(&rendered).to_string();
        assert_eq!(plain, "This is important and code.");
    }

    #[test]
    fn test_render_markdown_code_fence() {
        let input = "before\n```\nlet x = 1;\n```\nafter";
        let rendered = render_markdown(input);
        let plain = strip_ansi_codes(&rendered).to_string();
        assert_eq!(plain, "before\n    let x = 1;\nafter");
    }

    #[test]
    fn test_render_markdown_plain_text_passthrough() {
        let input = "just a plain answer";
        let plain = strip_ansi_codes(&render_markdown(input)).to_string();
        assert_eq!(plain, input);
    }
}
