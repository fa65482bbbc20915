//! Dry-run plan of the git invocations for a sparse clone

use core::str::FromStr;

use crate::config::CloneConfig;
use crate::error::SparseCloneError;
use crate::git::GitStep;
use crate::operations::sparse_clone::build_steps;
use anyhow::Result;
use serde::Serialize;

/// Output format for the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// One shell-escaped command per line
    Shell,
    /// JSON document with the URL, output directory and steps
    Json,
}

impl FromStr for OutputFormat {
    type Err = SparseCloneError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "json" => Ok(Self::Json),
            _ => Err(SparseCloneError::configuration(format!(
                "Invalid format: {s}. Use 'shell' or 'json'"
            ))),
        }
    }
}

/// Everything a sparse clone will do, without doing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseClonePlan {
    pub url: String,
    pub output_dir: String,
    pub steps: [GitStep; 4],
}

impl SparseClonePlan {
    /// Build the plan for a resolved configuration
    #[must_use]
    #[inline]
    pub fn from_config(config: &CloneConfig) -> Self {
        Self {
            url: config.repo_url(),
            output_dir: config.output_dir.clone(),
            steps: build_steps(config),
        }
    }

    /// Render the plan in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be serialized
    #[inline]
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Shell => Ok(self.format_as_shell()),
            OutputFormat::Json => self.format_as_json(),
        }
    }

    fn format_as_shell(&self) -> String {
        let [clone, init, set, checkout] = &self.steps;
        [
            command_line(clone),
            format!("cd {}", shell_escape(&self.output_dir)),
            command_line(init),
            command_line(set),
            command_line(checkout),
        ]
        .join("\n")
    }

    fn format_as_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {e}"))
    }
}

/// Format a step as a shell command line
fn command_line(step: &GitStep) -> String {
    core::iter::once(step.program)
        .chain(step.args.iter().map(String::as_str))
        .map(shell_escape)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a string for shell execution
/// Uses double quotes for safety, escaping special characters inside
fn shell_escape(s: &str) -> String {
    if !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.' | ':' | '@')
        })
    {
        return s.to_owned();
    }

    let mut result = String::from('"');
    for ch in s.chars() {
        match ch {
            '"' => result.push_str(r#"\""#),
            '\\' => result.push_str(r"\\"),
            '$' => result.push_str(r"\$"),
            '`' => result.push_str(r"\`"),
            '!' => result.push_str(r"\!"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}
