//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use barcheck::core::services::{NoiseReason, check_payload, detect, noise_reason, validate};
use barcheck::{ScannerFormat, Symbology, classify};
use test_case::test_case;

// =============================================================================
// Detection Tests
// =============================================================================

#[test_case("4006381333931", Symbology::Ean13 ; "thirteen digits")]
#[test_case("96385074", Symbology::Ean8 ; "eight digits")]
#[test_case("036000291452", Symbology::UpcA ; "twelve digits")]
#[test_case("123456", Symbology::UpcE ; "six digits")]
#[test_case("1234567", Symbology::UpcE ; "seven digits")]
#[test_case("*ABC-123*", Symbology::Code39 ; "star framed")]
#[test_case("ABC-123", Symbology::Code128 ; "bare alphanumeric")]
#[test_case("12345678901", Symbology::Code128 ; "eleven digits")]
#[test_case("ab", Symbology::Unknown ; "too short")]
#[test_case("naïve-1", Symbology::Unknown ; "non ascii")]
fn test_detect(code: &str, expected: Symbology) {
    assert_eq!(detect(code), expected);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test_case("4006381333931", Symbology::Ean13, true ; "ean13 good")]
#[test_case("4006381333932", Symbology::Ean13, false ; "ean13 bad digit")]
#[test_case("96385074", Symbology::Ean8, true ; "ean8 good")]
#[test_case("96385070", Symbology::Ean8, false ; "ean8 bad digit")]
#[test_case("036000291452", Symbology::UpcA, true ; "upca good")]
#[test_case("036000291450", Symbology::UpcA, false ; "upca bad digit")]
#[test_case("*CODE39*", Symbology::Code39, true ; "code39 framed")]
#[test_case("CODE39", Symbology::Code39, false ; "code39 unframed")]
#[test_case("ABCD", Symbology::Code128, true ; "code128 minimum")]
#[test_case("ABC", Symbology::Code128, false ; "code128 too short")]
#[test_case("A1B2C3", Symbology::Code93, true ; "code93 length only")]
#[test_case("A1B2C3", Symbology::Codabar, true ; "codabar length only")]
#[test_case("A1B2C3", Symbology::Unknown, false ; "unknown never valid")]
fn test_validate(code: &str, symbology: Symbology, expected: bool) {
    assert_eq!(validate(code, symbology), expected);
}

// =============================================================================
// Noise Tests
// =============================================================================

#[test_case("café", Some(NoiseReason::AccentOrTypographic) ; "accent")]
#[test_case("“smart”", Some(NoiseReason::AccentOrTypographic) ; "curly quotes")]
#[test_case("AB&<>CD", Some(NoiseReason::SpecialCharacterRun) ; "special run")]
#[test_case("--//", Some(NoiseReason::SymbolsOnly) ; "symbols only")]
#[test_case("AB", Some(NoiseReason::Length) ; "too short")]
#[test_case("ABC123", None ; "clean")]
fn test_noise_reason(code: &str, expected: Option<NoiseReason>) {
    assert_eq!(noise_reason(code), expected);
}

// =============================================================================
// Hint Tests
// =============================================================================

#[test_case("ean13", Symbology::Ean13 ; "ean13")]
#[test_case("EAN_8", Symbology::Ean8 ; "ean8 constant")]
#[test_case("upc-a", Symbology::UpcA ; "upca dashed")]
#[test_case("CODE_128", Symbology::Code128 ; "code128 constant")]
#[test_case("qr_code", Symbology::Ean13 ; "unmapped hint falls back")]
fn test_hint_resolution(hint: &str, expected: Symbology) {
    let hint: ScannerFormat = hint.parse().unwrap();
    assert_eq!(classify("4006381333931", Some(hint)).format, expected);
}

// =============================================================================
// Check Digit Tests
// =============================================================================

#[test_case("400638133393", "4006381333931" ; "complete ean13")]
#[test_case("9638507", "96385074" ; "complete ean8")]
#[test_case("4006381333930", "4006381333931" ; "correct ean13")]
fn test_check_payload(input: &str, expected: &str) {
    assert_eq!(check_payload(input).unwrap().code, expected);
}
