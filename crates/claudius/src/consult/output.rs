use crate::prelude::{println, *};
use claudius_core::consult::{
    is_error_response, render_preview, ExecTarget, SkippedInput, PREVIEW_CHARS,
};
use colored::Colorize;
use serde::Serialize;

const RULE_WIDTH: usize = 60;

/// JSON document printed with `--json`.
#[derive(Debug, Serialize)]
pub struct ConsultOutput {
    pub container: String,
    pub user: String,
    pub timeout_secs: u64,
    pub prompt_chars: usize,
    pub skipped: Vec<SkippedInput>,
    pub response: String,
    pub is_error: bool,
}

impl ConsultOutput {
    pub fn new(
        target: &ExecTarget,
        global: &crate::Global,
        prompt: &str,
        skipped: Vec<SkippedInput>,
        response: &str,
    ) -> Self {
        Self {
            container: target.container.clone(),
            user: target.user.clone(),
            timeout_secs: global.timeout,
            prompt_chars: prompt.chars().count(),
            skipped,
            response: response.to_string(),
            is_error: is_error_response(response),
        }
    }
}

/// Convert the output to a JSON string
fn format_json(output: &ConsultOutput) -> Result<String> {
    serde_json::to_string_pretty(output).context("JSON serialization failed")
}

pub fn print_json(output: &ConsultOutput) -> Result<()> {
    println!("{}", format_json(output)?);
    Ok(())
}

/// Banner shown before the assistant is called.
fn format_request(prompt: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{}\n{}\n{}\n{}\n{}",
        rule.bright_cyan(),
        "[*] Consulting Claudius...".bright_cyan().bold(),
        rule.bright_cyan(),
        render_preview(prompt, PREVIEW_CHARS),
        rule.bright_cyan(),
    )
}

/// Response block shown after the assistant returns.
fn format_response(response: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let body = if is_error_response(response) {
        response.red().to_string()
    } else {
        response.to_string()
    };
    format!(
        "\n{}\n{}\n{}\n{}",
        "[>] Response from Claudius:".green().bold(),
        rule.green(),
        body,
        rule.green(),
    )
}

pub fn print_request(prompt: &str) {
    println!("{}", format_request(prompt));
}

pub fn print_response(response: &str) {
    println!("{}", format_response(response));
}

#[cfg(test)]
mod tests {
    use super::*;
    use claudius_core::consult::{InputKind, SkipReason};

    fn output(response: &str) -> ConsultOutput {
        ConsultOutput {
            container: "claude-code-minimax".to_string(),
            user: "claude".to_string(),
            timeout_secs: 300,
            prompt_chars: 27,
            skipped: vec![SkippedInput {
                kind: InputKind::File,
                path: "missing.rs".to_string(),
                reason: SkipReason::NotFound,
            }],
            response: response.to_string(),
            is_error: is_error_response(response),
        }
    }

    #[test]
    fn test_format_json_fields() {
        let json = format_json(&output("Use flexbox.")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["container"], "claude-code-minimax");
        assert_eq!(value["timeout_secs"], 300);
        assert_eq!(value["response"], "Use flexbox.");
        assert_eq!(value["is_error"], false);
        assert_eq!(value["skipped"][0]["kind"], "file");
        assert_eq!(value["skipped"][0]["path"], "missing.rs");
        assert_eq!(value["skipped"][0]["reason"], "not_found");
    }

    #[test]
    fn test_format_json_error_response() {
        let json = format_json(&output("Error: Command timed out")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is_error"], true);
    }

    #[test]
    fn test_format_request_contains_truncated_preview() {
        colored::control::set_override(false);
        let prompt = format!("## Instruction\n{}", "x".repeat(1000));

        let text = format_request(&prompt);

        assert!(text.contains("[*] Consulting Claudius..."));
        assert!(text.contains("Prompt preview:\n## Instruction\n"));
        assert!(text.contains("...\n[truncated]"));
        assert!(!text.contains(&"x".repeat(600)));
    }

    #[test]
    fn test_format_response_contains_full_text() {
        colored::control::set_override(false);
        let response = "line one\n".repeat(200);

        let text = format_response(&response);

        assert!(text.contains("[>] Response from Claudius:"));
        assert!(text.contains(&response));
    }
}
