//! List supported formats

use barcheck::output::FormatsResult;

use super::Context;

/// Print every symbology with its description, color and icon
pub fn formats(ctx: &Context) -> anyhow::Result<()> {
    FormatsResult::new(ctx.config.locale).render(ctx.mode);
    Ok(())
}
