//! Aggregation orchestration
//!
//! This module provides the public API answering the two period queries:
//! the mood summary and the causal factor breakdown. Both are pure over
//! row sets the collaborator has already fetched; callers run
//! [`validate_anchor`](crate::period::validate_anchor) and
//! [`resolve_range`](crate::period::resolve_range) first and pass the
//! resolved range in.
//!
//! The summary consumes both collaborator row shapes: the per-day series
//! (deduplicated, pooled per date for teams) drives the daily entries,
//! participation and day counters, while the per-check-in rows drive the
//! overall average so every team member's check-in weighs in. An individual
//! subject simply passes the same fetch for both.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::causes::{is_known_cause, parse_causes};
use crate::histogram::build_bucket_summary;
use crate::mood::{display_average, round_to_tenth};
use crate::series::SeriesBuilder;
use crate::types::{CheckinRow, FactorSummary, MoodRow, Period, PeriodRange, PeriodSummary};

/// Mood summary over one period.
///
/// `series_rows` holds one row per calendar day with a recorded check-in;
/// duplicate dates resolve last-write-wins and pooled team values are
/// re-rounded to one decimal. `checkin_rows` holds one row per individual
/// check-in and only feeds the overall average.
pub fn period_summary(
    series_rows: &[MoodRow],
    checkin_rows: &[CheckinRow],
    period: Period,
    range: &PeriodRange,
) -> PeriodSummary {
    let mut mood_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in series_rows {
        if let Some(mood) = row.mood_value {
            mood_by_date.insert(row.date, round_to_tenth(mood));
        }
    }

    let mut mood_total = 0.0;
    let mut mood_count = 0;
    for row in checkin_rows {
        if let Some(mood) = row.mood_value {
            mood_total += mood;
            mood_count += 1;
        }
    }

    let series = SeriesBuilder::build(period, range, &mood_by_date);

    PeriodSummary {
        week_start: range.start,
        week_end: range.end,
        period,
        participation: series.participation,
        average_mood: display_average(mood_total, mood_count),
        daily: series.daily,
        stats: series.stats,
    }
}

/// Causal factor breakdown over one period.
///
/// Every non-null mood feeds the overall histogram; each recognized cause is
/// registered in discovery order and collects the moods of the check-ins
/// mentioning it. Unknown tags and malformed cause blobs are dropped
/// silently.
pub fn period_factors(rows: &[CheckinRow], period: Period, range: &PeriodRange) -> FactorSummary {
    let mut summary_values = Vec::new();
    let mut available_causes: Vec<String> = Vec::new();
    let mut values_by_cause: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for row in rows {
        if let Some(mood) = row.mood_value {
            summary_values.push(mood);
        }

        for cause in parse_causes(row.causes.as_ref()) {
            if !is_known_cause(&cause) {
                continue;
            }
            if !available_causes.contains(&cause) {
                available_causes.push(cause.clone());
            }
            if let Some(mood) = row.mood_value {
                values_by_cause.entry(cause).or_default().push(mood);
            }
        }
    }

    let by_cause = available_causes
        .iter()
        .map(|cause| {
            let values = values_by_cause.get(cause).map(Vec::as_slice).unwrap_or(&[]);
            (cause.clone(), build_bucket_summary(values))
        })
        .collect();

    FactorSummary {
        week_start: range.start,
        week_end: range.end,
        period,
        available_causes,
        summary: build_bucket_summary(&summary_values),
        by_cause,
    }
}
