//! Scan statistics over a classification history

use std::collections::HashMap;

use serde::Serialize;

use crate::core::models::{Classification, Symbology};

/// Count of scans resolved to one symbology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    /// The symbology
    pub format: Symbology,
    /// Number of scans
    pub count: usize,
}

/// Aggregate view of a batch or session of scans
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanStats {
    /// Number of scans
    pub total: usize,
    /// Number of valid scans
    pub valid: usize,
    /// Valid scans as a percentage of all scans (0 when empty)
    pub validation_rate: f64,
    /// Per-type counts, most frequent first
    pub by_type: Vec<TypeCount>,
}

impl ScanStats {
    /// Compute statistics over a history of classifications
    #[must_use]
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = &'a Classification>,
    {
        let mut total = 0usize;
        let mut valid = 0usize;
        let mut counts: HashMap<Symbology, usize> = HashMap::new();

        for info in history {
            total += 1;
            if info.is_valid {
                valid += 1;
            }
            *counts.entry(info.format).or_default() += 1;
        }

        let mut by_type: Vec<TypeCount> = counts
            .into_iter()
            .map(|(format, count)| TypeCount { format, count })
            .collect();
        by_type.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.format.display_name().cmp(b.format.display_name()))
        });

        #[allow(clippy::cast_precision_loss)]
        let validation_rate = if total == 0 {
            0.0
        } else {
            valid as f64 / total as f64 * 100.0
        };

        Self {
            total,
            valid,
            validation_rate,
            by_type,
        }
    }

    /// Number of invalid scans
    #[must_use]
    pub const fn invalid(&self) -> usize {
        self.total - self.valid
    }

    /// The symbology scanned most often, if any
    #[must_use]
    pub fn most_scanned(&self) -> Option<Symbology> {
        self.by_type.first().map(|t| t.format)
    }
}
