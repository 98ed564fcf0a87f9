//! Classify a single code

use barcheck::ScannerFormat;
use barcheck::core::services::{classify_localized, noise_reason};
use barcheck::output::ClassifyResult;

use super::Context;

/// Classify one code and print the result
pub fn classify(
    ctx: &Context,
    code: &str,
    hint: Option<ScannerFormat>,
    strict: bool,
) -> anyhow::Result<()> {
    let classification = classify_localized(code, ctx.hint(hint), ctx.config.locale);

    // Noise explains most rejections of otherwise well-shaped codes
    let rejected_as = if ctx.verbose && !classification.is_valid {
        noise_reason(&classification.code)
    } else {
        None
    };

    let is_valid = classification.is_valid;
    let result = ClassifyResult {
        classification,
        rejected_as,
    };
    result.render(ctx.mode);

    if strict && !is_valid {
        anyhow::bail!("Invalid barcode: {}", result.classification.code);
    }

    Ok(())
}
