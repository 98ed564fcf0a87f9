//! Classification entry point
//!
//! Stateless and total: any string, including the empty string, yields a
//! [`Classification`]. Malformed input is reported through `is_valid`, never
//! through an error or a panic.

use super::checksum::{ean8_check_digit, ean13_check_digit, upca_check_digit};
use super::detector::detect;
use super::validator::validate;
use crate::core::models::{Classification, Locale, ScannerFormat, Symbology};

/// Byte order mark, left on the first line of files saved by some editors
const BOM: char = '\u{FEFF}';

fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Classify a decoded string, with English descriptions
///
/// # Examples
///
/// ```
/// use barcheck::core::models::Symbology;
/// use barcheck::core::services::classify;
///
/// let c = classify(" 4006381333931 ", None);
/// assert_eq!(c.code, "4006381333931");
/// assert_eq!(c.format, Symbology::Ean13);
/// assert!(c.is_valid);
/// assert_eq!(c.check_digit, Some('1'));
/// ```
#[must_use]
pub fn classify(raw: &str, hint: Option<ScannerFormat>) -> Classification {
    classify_localized(raw, hint, Locale::default())
}

/// Classify a decoded string, with descriptions in `locale`
#[must_use]
pub fn classify_localized(raw: &str, hint: Option<ScannerFormat>, locale: Locale) -> Classification {
    let code = trim_input(raw);
    let format = resolve_symbology(code, hint);
    let is_valid = validate(code, format);

    log::debug!("classified {code:?} as {format} (valid: {is_valid})");

    Classification {
        code: code.to_string(),
        format,
        is_valid,
        description: format.description(locale),
        check_digit: check_digit(code, format),
    }
}

/// Use the hint when it names a known symbology, otherwise detect
#[must_use]
pub fn resolve_symbology(code: &str, hint: Option<ScannerFormat>) -> Symbology {
    match hint.and_then(ScannerFormat::symbology) {
        Some(symbology) => symbology,
        None => {
            if let Some(hint) = hint {
                log::debug!("hint {hint} has no symbology, auto-detecting");
            }
            detect(code)
        },
    }
}

/// Recomputed check digit for the EAN/UPC family
#[must_use]
pub fn check_digit(code: &str, format: Symbology) -> Option<char> {
    match format {
        Symbology::Ean13 => ean13_check_digit(code),
        Symbology::Ean8 => ean8_check_digit(code),
        Symbology::UpcA => upca_check_digit(code),
        Symbology::Code128
        | Symbology::Code39
        | Symbology::Code93
        | Symbology::UpcE
        | Symbology::Codabar
        | Symbology::Unknown => None,
    }
}
