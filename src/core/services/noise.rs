//! Noise filter - rejects camera misreads of ordinary text
//!
//! Scanners pointed at a screen or a label sometimes "decode" UI text or
//! accented words. These reads pass as Code128 by shape alone, so every code
//! is screened here before any format-specific rule runs.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Lowercase accented Latin letters that never appear in a barcode payload
pub(crate) const ACCENTED: &str = "àáâãäåæçèéêëìíîïñòóôõöøùúûüý";

/// Shortest payload accepted by any format
pub const MIN_LEN: usize = 3;

/// Longest payload accepted by any format
pub const MAX_LEN: usize = 50;

static ACCENT_OR_TYPOGRAPHIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)[{ACCENTED}'\"„“”‘’–—…‚]")).expect("static pattern")
});

static SPECIAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[&"'<>%@#$]{3,}"#).expect("static pattern"));

static SYMBOLS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^a-zA-Z0-9]{2,}$").expect("static pattern"));

/// Why a code was rejected as noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseReason {
    /// Accented letter, quote or typographic punctuation
    AccentOrTypographic,
    /// Three or more of `& " ' < > % @ # $` in a row
    SpecialCharacterRun,
    /// Nothing but non-alphanumerics
    SymbolsOnly,
    /// Shorter than 3 or longer than 50 characters
    Length,
}

impl std::fmt::Display for NoiseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccentOrTypographic => write!(f, "contains accented or typographic characters"),
            Self::SpecialCharacterRun => write!(f, "contains a run of special characters"),
            Self::SymbolsOnly => write!(f, "contains only symbols"),
            Self::Length => write!(f, "length outside {MIN_LEN}..={MAX_LEN}"),
        }
    }
}

/// One entry of the noise rule table
#[derive(Debug, Clone, Copy)]
pub struct NoiseRule {
    /// Reported when the rule fires
    pub reason: NoiseReason,
    /// Returns true when the code is noise
    pub test: fn(&str) -> bool,
}

fn accent_or_typographic(code: &str) -> bool {
    ACCENT_OR_TYPOGRAPHIC.is_match(code)
}

fn special_run(code: &str) -> bool {
    SPECIAL_RUN.is_match(code)
}

fn symbols_only(code: &str) -> bool {
    SYMBOLS_ONLY.is_match(code)
}

fn length_out_of_range(code: &str) -> bool {
    let len = code.chars().count();
    !(MIN_LEN..=MAX_LEN).contains(&len)
}

/// Noise rules, evaluated in order
pub static NOISE_RULES: [NoiseRule; 4] = [
    NoiseRule {
        reason: NoiseReason::AccentOrTypographic,
        test: accent_or_typographic,
    },
    NoiseRule {
        reason: NoiseReason::SpecialCharacterRun,
        test: special_run,
    },
    NoiseRule {
        reason: NoiseReason::SymbolsOnly,
        test: symbols_only,
    },
    NoiseRule {
        reason: NoiseReason::Length,
        test: length_out_of_range,
    },
];

/// First noise rule the code trips, if any
#[must_use]
pub fn noise_reason(code: &str) -> Option<NoiseReason> {
    let reason = NOISE_RULES.iter().find(|rule| (rule.test)(code)).map(|rule| rule.reason);
    if let Some(reason) = reason {
        log::debug!("rejected {code:?} as noise: {reason}");
    }
    reason
}

/// Whether the code looks like a misread rather than a barcode payload
#[must_use]
pub fn is_noise(code: &str) -> bool {
    noise_reason(code).is_some()
}

/// Whether the code contains an accented Latin letter (any case)
#[must_use]
pub fn has_accented(code: &str) -> bool {
    code.chars()
        .flat_map(char::to_lowercase)
        .any(|c| ACCENTED.contains(c))
}
