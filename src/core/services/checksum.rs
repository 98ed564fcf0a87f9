//! Mod-10 check digits for the EAN/UPC family
//!
//! EAN-13 weights its payload 1,3,1,3... from the left while EAN-8 weights
//! 3,1,3,1... The two patterns are mirror images; both standards align the
//! weight 3 with the digit immediately left of the check digit.

use thiserror::Error;

use crate::core::models::Symbology;

/// Length of a full EAN-13 code
pub const EAN13_LEN: usize = 13;

/// Length of a full EAN-8 code
pub const EAN8_LEN: usize = 8;

/// Errors from completing a payload with its check digit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// Payload contained something other than ASCII digits
    #[error("payload must contain only digits: {0}")]
    NotNumeric(String),

    /// Payload length fits no supported format
    #[error("payload must have {expected} digits, got {actual}")]
    WrongLength {
        /// Required number of digits
        expected: usize,
        /// Digits supplied
        actual: usize,
    },

    /// Digit count matches neither EAN-8 nor EAN-13, with or without check digit
    #[error("{0} digits fits no EAN format (expected 7, 8, 12 or 13)")]
    UnsupportedLength(usize),
}

/// Outcome of [`check_payload`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadCheck {
    /// EAN-13 or EAN-8
    pub format: Symbology,
    /// Full code with the correct check digit
    pub code: String,
    /// The correct check digit
    pub check_digit: char,
    /// For full-length input, whether its own check digit was correct
    pub input_valid: Option<bool>,
}

/// Weighted mod-10 over the first `take` characters of `code`
///
/// Returns `None` if any of those characters is not an ASCII digit.
fn weighted_check_digit(code: &str, take: usize, even_weight: u32, odd_weight: u32) -> Option<char> {
    let mut sum = 0u32;
    for (i, ch) in code.chars().take(take).enumerate() {
        let d = ch.to_digit(10)?;
        sum += d * if i % 2 == 0 { even_weight } else { odd_weight };
    }
    char::from_digit((10 - sum % 10) % 10, 10)
}

/// Check digit of a full 13-character EAN-13 code (its 13th position is ignored)
#[must_use]
pub fn ean13_check_digit(code: &str) -> Option<char> {
    if code.chars().count() != EAN13_LEN {
        return None;
    }
    weighted_check_digit(code, EAN13_LEN - 1, 1, 3)
}

/// Check digit of a full 8-character EAN-8 code (its 8th position is ignored)
#[must_use]
pub fn ean8_check_digit(code: &str) -> Option<char> {
    if code.chars().count() != EAN8_LEN {
        return None;
    }
    weighted_check_digit(code, EAN8_LEN - 1, 3, 1)
}

/// Check digit of a 12-digit UPC-A code, computed on its zero-padded EAN-13 form
#[must_use]
pub fn upca_check_digit(code: &str) -> Option<char> {
    if code.chars().count() != EAN13_LEN - 1 {
        return None;
    }
    ean13_check_digit(&format!("0{code}"))
}

/// Append the EAN-13 check digit to a 12-digit payload
pub fn complete_ean13(payload: &str) -> Result<String, CheckDigitError> {
    complete(payload, EAN13_LEN, 1, 3)
}

/// Append the EAN-8 check digit to a 7-digit payload
pub fn complete_ean8(payload: &str) -> Result<String, CheckDigitError> {
    complete(payload, EAN8_LEN, 3, 1)
}

/// Complete a bare payload, or verify a full code
///
/// 12 and 7 digits are completed as EAN-13 and EAN-8. 13 and 8 digits are
/// checked against their own last digit.
pub fn check_payload(input: &str) -> Result<PayloadCheck, CheckDigitError> {
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(CheckDigitError::NotNumeric(input.to_string()));
    }

    let format = match input.len() {
        12 | 13 => Symbology::Ean13,
        7 | 8 => Symbology::Ean8,
        len => return Err(CheckDigitError::UnsupportedLength(len)),
    };
    let payload_len = if format == Symbology::Ean13 { EAN13_LEN - 1 } else { EAN8_LEN - 1 };
    let (payload, given) = input.split_at(payload_len);

    let code = if format == Symbology::Ean13 {
        complete_ean13(payload)?
    } else {
        complete_ean8(payload)?
    };
    let check_digit = code.chars().last().unwrap_or('0');

    Ok(PayloadCheck {
        format,
        input_valid: given.chars().next().map(|d| d == check_digit),
        code,
        check_digit,
    })
}

fn complete(payload: &str, full_len: usize, even: u32, odd: u32) -> Result<String, CheckDigitError> {
    if !payload.chars().all(|c| c.is_ascii_digit()) {
        return Err(CheckDigitError::NotNumeric(payload.to_string()));
    }
    if payload.len() != full_len - 1 {
        return Err(CheckDigitError::WrongLength {
            expected: full_len - 1,
            actual: payload.len(),
        });
    }
    let check = weighted_check_digit(payload, full_len - 1, even, odd)
        .ok_or_else(|| CheckDigitError::NotNumeric(payload.to_string()))?;
    let mut code = payload.to_string();
    code.push(check);
    Ok(code)
}
