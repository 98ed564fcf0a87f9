//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Classification, Locale, ScannerFormat, Symbology};
use crate::core::services::{NoiseReason, ScanStats};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn validity_marker(valid: bool) -> String {
    if valid {
        "VALID".green().bold().to_string()
    } else {
        "INVALID".red().bold().to_string()
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of classifying a single code
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    /// The classification
    #[serde(flatten)]
    pub classification: Classification,
    /// Noise rule that rejected the code, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_as: Option<NoiseReason>,
}

impl ClassifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let c = &self.classification;
        println!("{} {}", validity_marker(c.is_valid), c.code);
        println!("  Format:      {} {}", c.icon(), c.format);
        if let Some(digit) = c.check_digit {
            println!("  Check digit: {digit}");
        }
        if let Some(reason) = self.rejected_as {
            println!("  Rejected:    {reason}");
        }
        println!("  {}", c.description);
    }
}

/// Result of classifying a batch of codes
#[derive(Debug, Serialize)]
pub struct BatchResult {
    /// One classification per input line
    pub results: Vec<Classification>,
    /// Aggregate statistics
    pub stats: ScanStats,
}

impl BatchResult {
    /// Build a batch result, computing statistics
    #[must_use]
    pub fn new(results: Vec<Classification>) -> Self {
        let stats = ScanStats::from_history(&results);
        Self { results, stats }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("No codes to classify.");
            return;
        }

        for c in &self.results {
            let digit = c.check_digit.map(|d| format!(" check={d}")).unwrap_or_default();
            println!("{:<8} {:<8} {}{digit}", validity_marker(c.is_valid), c.format, c.code);
        }

        let stats = &self.stats;
        println!();
        println!(
            "Scanned: {}  Valid: {}  Invalid: {}  ({:.0}% valid)",
            stats.total,
            stats.valid,
            stats.invalid(),
            stats.validation_rate
        );
        if let Some(top) = stats.most_scanned() {
            println!("Most scanned: {} {top}", top.icon());
        }
        println!("Types detected:");
        for t in &stats.by_type {
            println!("  {} {:<8} {}", t.format.icon(), t.format, t.count);
        }
    }
}

/// What happened to one frame of a scan stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// Valid and not a repeat
    Accepted,
    /// Classified as invalid
    Rejected,
    /// Repeat of the last accepted code inside the window
    Duplicate,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
            Self::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// One event emitted by `stream`
#[derive(Debug, Serialize)]
pub struct ScanEvent {
    /// When the frame was processed (RFC 3339)
    pub timestamp: String,
    /// Outcome
    pub status: ScanStatus,
    /// The raw frame text, trimmed
    pub code: String,
    /// Classification, absent for duplicates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

impl ScanEvent {
    /// Render the event based on output mode
    ///
    /// JSON mode emits one compact object per line.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let status = match self.status {
                    ScanStatus::Accepted => self.status.to_string().green(),
                    ScanStatus::Rejected => self.status.to_string().red(),
                    ScanStatus::Duplicate => self.status.to_string().dimmed(),
                };
                let format = self
                    .classification
                    .as_ref()
                    .map(|c| format!(" ({})", c.format))
                    .unwrap_or_default();
                println!("[{}] {status} {}{format}", self.timestamp, self.code);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string(self).unwrap_or_default());
            },
        }
    }
}

/// Result of the `check-digit` command
#[derive(Debug, Serialize)]
pub struct CheckDigitResult {
    /// Digits given on the command line
    pub input: String,
    /// Full code including its check digit
    pub code: String,
    /// EAN-13 or EAN-8
    pub format: Symbology,
    /// The check digit
    pub check_digit: char,
    /// For full-length input: whether its own check digit was correct
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_valid: Option<bool>,
}

impl CheckDigitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                match self.input_valid {
                    Some(valid) => {
                        println!("{} {} ({})", validity_marker(valid), self.input, self.format);
                        if !valid {
                            println!("  Expected check digit {}: {}", self.check_digit, self.code);
                        }
                    },
                    None => println!("{} ({}, check digit {})", self.code, self.format, self.check_digit),
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Information about one symbology
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormatInfo {
    /// Display name
    pub name: Symbology,
    /// Description in the configured locale
    pub description: &'static str,
    /// Badge color classes
    pub color_class: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Whether a check digit is recomputed
    pub has_check_digit: bool,
    /// Scanner hint that selects this symbology
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

/// Result of the `formats` command
#[derive(Debug, Serialize)]
pub struct FormatsResult {
    /// Every symbology
    pub formats: Vec<FormatInfo>,
}

impl FormatsResult {
    /// Describe every symbology in `locale`
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        let formats = Symbology::ALL
            .into_iter()
            .map(|s| FormatInfo {
                name: s,
                description: s.description(locale),
                color_class: s.color_class(),
                icon: s.icon(),
                has_check_digit: s.has_check_digit(),
                hint: s.scanner_format().map(ScannerFormat::as_str),
            })
            .collect();
        Self { formats }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for f in &self.formats {
                    let hint = f.hint.map(|h| format!(" [--hint {h}]")).unwrap_or_default();
                    println!("{} {:<8} {}{hint}", f.icon, f.name, f.description);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
