//! Output dispatch and terminal styling.
//!
//! Text mode hands the data to a render closure; JSON mode serializes the data
//! itself, so machine consumers see the same records regardless of layout.

use crate::error::ApiError;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ApiError::UsageError(format!(
                "Invalid output format \"{}\". Use: text, json",
                s
            ))),
        }
    }
}

/// Whether ANSI styling should be applied to stdout.
///
/// Disabled by `--no-color`, by a non-empty `NO_COLOR`, or when stdout is not a terminal.
pub fn color_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").map_or(false, |v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    format: OutputFormat,
    color: bool,
}

impl Output {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Render `data` as JSON, or hand it to `render` in text mode.
    ///
    /// `render` runs for empty data too; it owns the empty notice.
    pub fn emit<T, F>(&self, data: &[T], render: F) -> Result<String, ApiError>
    where
        T: Serialize,
        F: FnOnce(&[T]) -> String,
    {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(data)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| ApiError::OutputError(e.to_string())),
            OutputFormat::Text => Ok(render(data)),
        }
    }

    /// Section heading, bold and underlined when color is on.
    pub fn heading(&self, title: &str) -> String {
        if self.color {
            format!("{}", title.bold().underline())
        } else {
            title.to_string()
        }
    }

    /// Muted text for secondary lines.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.dimmed())
        } else {
            text.to_string()
        }
    }
}
