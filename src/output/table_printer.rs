use colored::*;
use std::io::{self, Write};

use crate::output::IoStreams;

const COLUMN_GUTTER: &str = "  ";

/// Terminal-aware table renderer.
///
/// On a terminal rows are printed under a header with left-aligned columns.
/// Anywhere else the header is dropped and fields are separated by tabs,
/// one row per line, so the output stays easy to consume from scripts.
#[derive(Debug, Clone)]
pub struct TablePrinter {
    is_tty: bool,
    color_enabled: bool,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    current_row: Vec<String>,
}

impl TablePrinter {
    /// Create a printer matching the terminal state of `io`
    pub fn new(io: &IoStreams) -> Self {
        Self {
            is_tty: io.is_stdout_tty(),
            color_enabled: io.color_enabled(),
            header: None,
            rows: Vec::new(),
            current_row: Vec::new(),
        }
    }

    /// Set the header labels, shown only on a terminal
    pub fn with_header(mut self, labels: &[&str]) -> Self {
        self.header = Some(labels.iter().map(|label| label.to_uppercase()).collect());
        self
    }

    pub fn add_field(&mut self, field: impl Into<String>) {
        self.current_row.push(field.into());
    }

    pub fn end_row(&mut self) {
        let row = std::mem::take(&mut self.current_row);
        self.rows.push(row);
    }

    /// Write the table to `io` with a single write
    pub fn render(mut self, io: &mut IoStreams) -> io::Result<()> {
        if !self.current_row.is_empty() {
            self.end_row();
        }

        let output = if self.is_tty {
            self.format_aligned()
        } else {
            self.format_plain()
        };

        let out = io.out();
        out.write_all(output.as_bytes())?;
        out.flush()
    }

    fn format_plain(&self) -> String {
        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&row.join("\t"));
            output.push('\n');
        }
        output
    }

    fn format_aligned(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        if let Some(header) = &self.header {
            output.push_str(&self.format_row(header, &widths, true));
        }
        for row in &self.rows {
            output.push_str(&self.format_row(row, &widths, false));
        }

        output
    }

    fn format_row(&self, fields: &[String], widths: &[usize], is_header: bool) -> String {
        let mut line = String::new();
        let last = fields.len().saturating_sub(1);

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GUTTER);
            }

            if is_header && self.color_enabled {
                line.push_str(&field.bold().to_string());
            } else {
                line.push_str(field);
            }

            // Last column is never padded
            if i < last {
                let padding = widths[i].saturating_sub(display_width(field));
                line.push_str(&" ".repeat(padding));
            }
        }

        line.push('\n');
        line
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        let all_rows = self.header.iter().chain(self.rows.iter());

        for row in all_rows {
            for (i, field) in row.iter().enumerate() {
                let width = display_width(field);
                match widths.get_mut(i) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        widths
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}
