//! Classify a batch of codes

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context as _;

use barcheck::ScannerFormat;
use barcheck::core::services::classify_localized;
use barcheck::output::BatchResult;

use super::Context;

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            Ok(buf)
        },
    }
}

/// Classify one code per line, skipping blank lines
pub fn batch(
    ctx: &Context,
    file: Option<&Path>,
    hint: Option<ScannerFormat>,
    strict: bool,
) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let hint = ctx.hint(hint);

    let results: Vec<_> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| classify_localized(line, hint, ctx.config.locale))
        .collect();

    log::debug!("classified {} code(s)", results.len());

    let result = BatchResult::new(results);
    result.render(ctx.mode);

    let invalid = result.stats.invalid();
    if strict && invalid > 0 {
        anyhow::bail!("{invalid} invalid barcode(s)");
    }

    Ok(())
}
