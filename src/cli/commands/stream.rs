//! Classify a live stream of scanner frames

use std::io::{self, BufRead};
use std::time::{Duration, Instant};

use barcheck::ScannerFormat;
use barcheck::core::services::{DuplicateFilter, classify_localized};
use barcheck::output::{ScanEvent, ScanStatus};

use super::Context;

/// Read one decoded frame per stdin line until EOF
pub fn stream(ctx: &Context, window_ms: Option<u64>, hint: Option<ScannerFormat>) -> anyhow::Result<()> {
    let window = window_ms.map_or_else(|| ctx.config.dedup_window(), Duration::from_millis);
    let hint = ctx.hint(hint);
    let mut filter = DuplicateFilter::new(window);

    log::debug!("streaming with a {}ms duplicate window", window.as_millis());

    for line in io::stdin().lock().lines() {
        let line = line?;
        let code = line.trim();
        if code.is_empty() {
            continue;
        }

        let now = Instant::now();
        let event = if filter.is_duplicate(code, now) {
            ScanEvent {
                timestamp: chrono::Utc::now().to_rfc3339(),
                status: ScanStatus::Duplicate,
                code: code.to_string(),
                classification: None,
            }
        } else {
            let classification = classify_localized(code, hint, ctx.config.locale);
            let status = if classification.is_valid {
                filter.record(code, now);
                ScanStatus::Accepted
            } else {
                ScanStatus::Rejected
            };
            ScanEvent {
                timestamp: chrono::Utc::now().to_rfc3339(),
                status,
                code: code.to_string(),
                classification: Some(classification),
            }
        };

        event.render(ctx.mode);
    }

    Ok(())
}
