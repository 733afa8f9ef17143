//! Token Accuracy Tracker
//!
//! Bounded, newest-first ledger of estimate-vs-actual precision samples.

use crate::models::TokenRecord;

/// Maximum ledger length
pub const LEDGER_CAP: usize = 50;

/// Precision percentage for an estimate/actual pair.
///
/// `max(0, (1 - |estimated - actual| / estimated) * 100)` when estimated is
/// positive, else a fixed 100. Only the lower bound is clamped.
pub fn precision(estimated: u32, actual: u32) -> f64 {
    if estimated == 0 {
        return 100.0;
    }
    let deviation = (estimated as f64 - actual as f64).abs() / estimated as f64;
    ((1.0 - deviation) * 100.0).max(0.0)
}

/// Insert a sample at the front of the ledger and truncate to the cap.
pub fn record(
    history: &mut Vec<TokenRecord>,
    date: String,
    estimated: u32,
    actual: u32,
    task_id: Option<String>,
    task_title: Option<String>,
) {
    history.insert(
        0,
        TokenRecord {
            date,
            estimated,
            actual,
            precision: precision(estimated, actual),
            task_id,
            task_title,
        },
    );
    history.truncate(LEDGER_CAP);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_estimate_is_full_precision() {
        assert!((precision(2000, 2000) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_precision_within_double_estimate_stays_in_range() {
        for actual in [0, 500, 1000, 1500, 2000] {
            let p = precision(1000, actual);
            assert!((0.0..=100.0).contains(&p), "precision {} out of range", p);
        }
    }

    #[test]
    fn test_precision_floors_at_zero_for_large_deviation() {
        assert_eq!(precision(1000, 2001), 0.0);
        assert_eq!(precision(100, 10_000), 0.0);
    }

    #[test]
    fn test_zero_estimate_is_fixed_hundred() {
        assert_eq!(precision(0, 3000), 100.0);
    }

    #[test]
    fn test_ledger_is_newest_first_and_capped() {
        let mut history = Vec::new();
        for i in 0..60u32 {
            record(&mut history, format!("2026-01-{:02}", i % 28 + 1), i, i, None, None);
        }
        assert_eq!(history.len(), LEDGER_CAP);
        // The newest record is always at index 0.
        assert_eq!(history[0].estimated, 59);
        assert_eq!(history[LEDGER_CAP - 1].estimated, 10);
    }
}
