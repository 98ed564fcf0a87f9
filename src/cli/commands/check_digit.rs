//! Compute or verify EAN check digits

use barcheck::core::services::check_payload;
use barcheck::output::CheckDigitResult;

use super::Context;

/// Complete a 7/12 digit payload, or verify an 8/13 digit code
pub fn check_digit(ctx: &Context, payload: &str) -> anyhow::Result<()> {
    let input = payload.trim();
    let check = check_payload(input)?;

    let result = CheckDigitResult {
        input: input.to_string(),
        code: check.code,
        format: check.format,
        check_digit: check.check_digit,
        input_valid: check.input_valid,
    };
    result.render(ctx.mode);

    Ok(())
}
