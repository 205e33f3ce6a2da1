//! Output formatting for the command-line driver.
//!
//! Supports multiple output formats:
//! - `table` - Human-readable text (default)
//! - `json` - Structured JSON
//! - `yaml` - YAML format
//! - `jsonl` - JSON Lines (one object per line)
//!
//! Status lines go to stderr so stdout stays machine-readable.

mod table;

pub use table::TableFormatter;

use std::io::IsTerminal;

use serde::Serialize;

use crate::error::Result;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// JSON Lines format (one object per line).
    JsonLines,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "jsonl" | "jsonlines" => Ok(Self::JsonLines),
            _ => Err(crate::error::Error::invalid_arg(format!(
                "Unknown output format '{s}'. Use: table, json, yaml, jsonl"
            ))),
        }
    }
}

/// Trait for types that can be displayed as table rows.
pub trait Displayable {
    /// Display as a table row.
    fn table_row(&self) -> Vec<String>;

    /// Get column headers for table display.
    fn table_headers() -> Vec<&'static str>;
}

/// Output writer that handles format selection and terminal capabilities.
#[derive(Debug)]
pub struct Output {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output writer.
    pub const fn new(format: OutputFormat, color: bool, quiet: bool) -> Self {
        Self { format, color, quiet }
    }

    /// Create an output writer from CLI options.
    pub fn from_cli(format: &str, color: &str, quiet: bool) -> Result<Self> {
        let format = OutputFormat::parse(format)?;

        let color = match color {
            "always" => true,
            "never" => false,
            _ => std::io::stderr().is_terminal(),
        };

        Ok(Self::new(format, color, quiet))
    }

    /// Output a single serializable value in a structured format.
    ///
    /// In table mode nothing is printed; callers print their own summary.
    pub fn value<T: Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Table => Ok(()),
            OutputFormat::Json => Self::json(value),
            OutputFormat::Yaml => Self::yaml(value),
            OutputFormat::JsonLines => Self::jsonl(value),
        }
    }

    /// Output a list of items.
    pub fn table<T: Displayable + Serialize>(&self, items: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                let mut formatter = TableFormatter::new();
                formatter.headers(T::table_headers());
                for item in items {
                    formatter.row(item.table_row());
                }
                formatter.print();
                Ok(())
            },
            OutputFormat::Json => Self::json(items),
            OutputFormat::Yaml => Self::yaml(items),
            OutputFormat::JsonLines => {
                for item in items {
                    Self::jsonl(item)?;
                }
                Ok(())
            },
        }
    }

    fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn yaml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        print!("{}", serde_yaml::to_string(value)?);
        Ok(())
    }

    fn jsonl<T: Serialize>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string(value)?);
        Ok(())
    }

    /// Print a message to stderr.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            if self.color {
                eprintln!("\x1b[32m✓\x1b[0m {message}");
            } else {
                eprintln!("✓ {message}");
            }
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            if self.color {
                eprintln!("\x1b[33m⚠\x1b[0m {message}");
            } else {
                eprintln!("⚠ {message}");
            }
        }
    }

    /// Print a line to stdout.
    pub fn line(&self, text: &str) {
        println!("{text}");
    }

    /// Get the current output format.
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether human-readable text output is selected.
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Table
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(OutputFormat::Table, false, false)
    }
}
