//! Mood histogram
//!
//! Groups raw mood values into the product's fixed five-band partition of
//! the 0-100 scale. Band labels are the display strings shown to users.

use crate::types::{BucketSummary, MoodBucket};

/// Fixed bands over the 0-100 mood scale, inclusive on both ends
const MOOD_BANDS: [(&str, u32, u32); 5] = [
    ("Éprouvé", 0, 20),
    ("Sous tension", 21, 40),
    ("Mitigé", 41, 60),
    ("Serein", 61, 80),
    ("Épanoui", 81, 100),
];

/// Build the five-bucket histogram over a list of mood values.
///
/// Each value lands in the first band containing it; the bands tile [0, 100]
/// so assignment is unambiguous for in-range input. A value outside [0, 100]
/// is counted in `total_checkins` but in no bucket, matching the upstream
/// contract that clamps moods to 1..=100 before they ever reach persistence.
pub fn build_bucket_summary(values: &[f64]) -> BucketSummary {
    let mut buckets: Vec<MoodBucket> = MOOD_BANDS
        .iter()
        .map(|(label, min, max)| MoodBucket {
            label: (*label).to_string(),
            range: [*min, *max],
            count: 0,
            percent: 0,
        })
        .collect();

    for value in values {
        let hit = buckets
            .iter_mut()
            .find(|bucket| *value >= f64::from(bucket.range[0]) && *value <= f64::from(bucket.range[1]));
        if let Some(bucket) = hit {
            bucket.count += 1;
        }
    }

    let total = values.len() as u32;
    for bucket in &mut buckets {
        bucket.percent = if total > 0 {
            (f64::from(bucket.count) * 100.0 / f64::from(total)).round() as u32
        } else {
            0
        };
    }

    BucketSummary {
        total_checkins: total,
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_band_boundaries() {
        let summary = build_bucket_summary(&[0.0, 20.0, 21.0, 40.0, 41.0, 60.0, 61.0, 80.0, 81.0, 100.0]);
        let counts: Vec<u32> = summary.buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 2, 2, 2, 2]);
        assert_eq!(summary.total_checkins, 10);
    }

    #[test]
    fn test_counts_sum_to_input_size() {
        let values = [55.0, 55.0, 72.0, 13.0, 91.0, 44.0];
        let summary = build_bucket_summary(&values);
        let count_sum: u32 = summary.buckets.iter().map(|b| b.count).sum();
        assert_eq!(count_sum, values.len() as u32);
    }

    #[test]
    fn test_percent_rounding_tolerance() {
        // three values split 2/1: 67% + 33% = 100
        let summary = build_bucket_summary(&[50.0, 50.0, 75.0]);
        let percents: Vec<u32> = summary.buckets.iter().map(|b| b.percent).collect();
        assert_eq!(percents, vec![0, 0, 67, 33, 0]);

        // 1/1/1 rounds each third to 33
        let summary = build_bucket_summary(&[10.0, 50.0, 90.0]);
        let percent_sum: u32 = summary.buckets.iter().map(|b| b.percent).sum();
        assert!((99..=101).contains(&percent_sum));
    }

    #[test]
    fn test_empty_input_has_zero_percents() {
        let summary = build_bucket_summary(&[]);
        assert_eq!(summary.total_checkins, 0);
        assert!(summary.buckets.iter().all(|b| b.count == 0 && b.percent == 0));
        assert_eq!(summary.buckets.len(), 5);
    }

    #[test]
    fn test_out_of_range_value_counts_in_total_only() {
        let summary = build_bucket_summary(&[150.0, 50.0]);
        assert_eq!(summary.total_checkins, 2);
        let count_sum: u32 = summary.buckets.iter().map(|b| b.count).sum();
        assert_eq!(count_sum, 1);
        // the in-range value still reads as half the sample
        assert_eq!(summary.buckets[2].percent, 50);
    }

    #[test]
    fn test_band_labels() {
        let summary = build_bucket_summary(&[]);
        let labels: Vec<&str> = summary.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Éprouvé", "Sous tension", "Mitigé", "Serein", "Épanoui"]
        );
    }
}
