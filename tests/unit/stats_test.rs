//! Tests for scan statistics and duplicate suppression

use std::time::{Duration, Instant};

use barcheck::core::services::{DuplicateFilter, ScanStats};
use barcheck::{Symbology, classify};

use crate::common::{NOISE, VALID_EAN13, classify_all};

#[test]
fn test_stats_over_mixed_history() {
    let mut history = classify_all(VALID_EAN13);
    history.extend(classify_all(NOISE));

    let stats = ScanStats::from_history(&history);
    assert_eq!(stats.total, VALID_EAN13.len() + NOISE.len());
    assert_eq!(stats.valid, VALID_EAN13.len());
    assert_eq!(stats.invalid(), NOISE.len());

    // three each of Code128, EAN-13 and Unknown: ties break by name
    let by_type: Vec<_> = stats.by_type.iter().map(|t| (t.format, t.count)).collect();
    assert_eq!(
        by_type,
        vec![(Symbology::Code128, 3), (Symbology::Ean13, 3), (Symbology::Unknown, 3)]
    );
    assert_eq!(stats.most_scanned(), Some(Symbology::Code128));

    let counted: usize = stats.by_type.iter().map(|t| t.count).sum();
    assert_eq!(counted, stats.total);
}

#[test]
fn test_most_scanned_prefers_higher_count() {
    let mut history = classify_all(VALID_EAN13);
    history.extend(classify_all(NOISE));
    history.push(classify(VALID_EAN13[0], None));

    let stats = ScanStats::from_history(&history);
    assert_eq!(stats.most_scanned(), Some(Symbology::Ean13));
    assert_eq!(stats.by_type[0].count, 4);
}

#[test]
fn test_stats_sorted_descending() {
    let history = classify_all(&["96385074", "55123457", "*A1*", "4006381333931", "96385074"]);
    let stats = ScanStats::from_history(&history);
    let counts: Vec<_> = stats.by_type.iter().map(|t| t.count).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(stats.by_type[0].format, Symbology::Ean8);
    assert_eq!(stats.by_type[0].count, 3);
}

#[test]
fn test_stats_serialize() {
    let stats = ScanStats::from_history(&[classify("4006381333931", None)]);
    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("\"total\":1"));
    assert!(json.contains("\"format\":\"EAN-13\""));
}

#[test]
fn test_scanner_session_suppresses_repeats() {
    let t0 = Instant::now();
    let mut filter = DuplicateFilter::new(Duration::from_secs(3));
    let frames = [
        (0, "4006381333931"),
        (100, "4006381333931"),
        (200, "caf\u{e9}"),
        (300, "4006381333931"),
        (3500, "4006381333931"),
    ];

    let mut accepted = Vec::new();
    for (ms, code) in frames {
        let now = t0 + Duration::from_millis(ms);
        if filter.is_duplicate(code, now) {
            continue;
        }
        if classify(code, None).is_valid {
            filter.record(code, now);
            accepted.push(ms);
        }
    }

    assert_eq!(accepted, vec![0, 3500]);
}

#[test]
fn test_invalid_read_does_not_arm_window() {
    let t0 = Instant::now();
    let mut filter = DuplicateFilter::default();
    let code = "4006381333930";
    assert!(!classify(code, None).is_valid);
    assert!(!filter.is_duplicate(code, t0));
    // caller only records valid scans
    assert!(!filter.is_duplicate(code, t0 + Duration::from_millis(10)));
    filter.record("96385074", t0);
    assert!(!filter.is_duplicate(code, t0));
}
