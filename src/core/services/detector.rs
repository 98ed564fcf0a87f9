//! Format auto-detection
//!
//! Used when the scanner gave no hint, or a hint the classifier does not
//! know. Detection looks only at length and character set. The rules are an
//! ordered table and the first match wins: digit-only retail shapes are
//! unambiguous and come first, Code128 accepts almost anything and comes last.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Symbology;

static CODE39_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Z\-. $/+%*]+$").expect("static pattern"));

/// One entry of the detection table
#[derive(Debug, Clone, Copy)]
pub struct DetectionRule {
    /// Short rule name, for logs
    pub name: &'static str,
    /// Returns true when the code has this rule's shape
    pub test: fn(&str) -> bool,
    /// Symbology assigned on match
    pub symbology: Symbology,
}

fn digits_of_len(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn is_code39_charset(code: &str) -> bool {
    CODE39_CHARSET.is_match(code)
}

pub(crate) fn is_star_framed(code: &str) -> bool {
    code.starts_with('*') && code.ends_with('*')
}

fn ean13_shape(code: &str) -> bool {
    digits_of_len(code, 13)
}

fn ean8_shape(code: &str) -> bool {
    digits_of_len(code, 8)
}

fn upca_shape(code: &str) -> bool {
    digits_of_len(code, 12)
}

fn upce_shape(code: &str) -> bool {
    (6..=8).any(|len| digits_of_len(code, len))
}

fn code39_shape(code: &str) -> bool {
    is_code39_charset(code) && is_star_framed(code)
}

fn code128_shape(code: &str) -> bool {
    code.len() >= 4 && code.is_ascii()
}

/// Detection rules, evaluated in order
pub static DETECTION_RULES: [DetectionRule; 6] = [
    DetectionRule {
        name: "13 digits",
        test: ean13_shape,
        symbology: Symbology::Ean13,
    },
    DetectionRule {
        name: "8 digits",
        test: ean8_shape,
        symbology: Symbology::Ean8,
    },
    DetectionRule {
        name: "12 digits",
        test: upca_shape,
        symbology: Symbology::UpcA,
    },
    DetectionRule {
        name: "6-8 digits",
        test: upce_shape,
        symbology: Symbology::UpcE,
    },
    DetectionRule {
        name: "code39 framed",
        test: code39_shape,
        symbology: Symbology::Code39,
    },
    DetectionRule {
        name: "ascii catch-all",
        test: code128_shape,
        symbology: Symbology::Code128,
    },
];

/// Infer the most likely symbology from the code's shape
#[must_use]
pub fn detect(code: &str) -> Symbology {
    DETECTION_RULES.iter().find(|rule| (rule.test)(code)).map_or_else(
        || {
            log::trace!("no detection rule matched {code:?}");
            Symbology::Unknown
        },
        |rule| {
            log::trace!("detected {code:?} as {} ({})", rule.symbology, rule.name);
            rule.symbology
        },
    )
}
