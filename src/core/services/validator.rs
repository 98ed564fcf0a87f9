//! Per-format validation
//!
//! [`validate_format`] checks a code against one symbology's shape and
//! checksum rules; [`validate`] additionally screens it through the noise
//! filter first. Both are total: every input yields a boolean.
//!
//! Code93, Codabar and UPC-E only get a length check. Without their
//! encoding tables there is no checksum to verify.

use std::sync::LazyLock;

use regex::Regex;

use super::checksum::{EAN8_LEN, EAN13_LEN, ean8_check_digit, ean13_check_digit};
use super::detector::{is_code39_charset, is_star_framed};
use super::noise::{self, MAX_LEN, MIN_LEN};
use crate::core::models::Symbology;

static CODE128_PRINTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x20-\x7E]+$").expect("static pattern"));

/// Reads that look like UI text rather than a Code128 payload
static CODE128_SUSPICIOUS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"^[-&"'àéèç\s]+$"#).expect("static pattern"),
        Regex::new(r"^[^\w\s]{3,}$").expect("static pattern"),
    ]
});

fn all_digits(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_digit())
}

fn last_char(code: &str) -> Option<char> {
    code.chars().last()
}

fn validate_ean13(code: &str) -> bool {
    all_digits(code, EAN13_LEN) && ean13_check_digit(code) == last_char(code)
}

fn validate_ean8(code: &str) -> bool {
    all_digits(code, EAN8_LEN) && ean8_check_digit(code) == last_char(code)
}

/// UPC-A is EAN-13 with an implicit leading zero
fn validate_upca(code: &str) -> bool {
    all_digits(code, EAN13_LEN - 1) && validate_ean13(&format!("0{code}"))
}

fn validate_code128(code: &str) -> bool {
    if !CODE128_PRINTABLE.is_match(code) {
        return false;
    }
    if !(4..=48).contains(&code.len()) {
        return false;
    }
    !(CODE128_SUSPICIOUS.iter().any(|re| re.is_match(code)) || noise::has_accented(code))
}

fn validate_code39(code: &str) -> bool {
    is_code39_charset(code) && (3..=43).contains(&code.len()) && is_star_framed(code)
}

fn validate_length_only(code: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&code.chars().count())
}

/// Check a code against one symbology's structural and checksum rules
#[must_use]
pub fn validate_format(code: &str, symbology: Symbology) -> bool {
    match symbology {
        Symbology::Ean13 => validate_ean13(code),
        Symbology::Ean8 => validate_ean8(code),
        Symbology::UpcA => validate_upca(code),
        Symbology::Code128 => validate_code128(code),
        Symbology::Code39 => validate_code39(code),
        Symbology::Code93 | Symbology::Codabar | Symbology::UpcE => validate_length_only(code),
        Symbology::Unknown => false,
    }
}

/// Full validity: not noise, and valid for the symbology
#[must_use]
pub fn validate(code: &str, symbology: Symbology) -> bool {
    !noise::is_noise(code) && validate_format(code, symbology)
}
