use colored::*;

use crate::utils::error::SponsorsError;

/// Formats diagnostics for CLI display
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format error message for CLI display
    pub fn format_error(error: &SponsorsError, colorize: bool) -> String {
        if colorize {
            format!("{} {}", "Error:".red().bold(), error.to_string().red())
        } else {
            format!("Error: {}", error)
        }
    }

    /// Usage line printed after argument errors
    pub fn format_usage_hint() -> String {
        "Usage: sponsors list <user>".to_string()
    }
}
