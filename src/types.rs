//! Core types for the period-aggregation engine
//!
//! This module defines the data structures that flow through each stage of
//! aggregation: raw rows fetched by the collaborator, the resolved period
//! range, labeled daily/monthly series, and the summary payloads handed back
//! to the serialization layer.
//!
//! Field names on the output types are part of the wire contract consumed by
//! the HTTP layer and must not drift (`weekStart`, `averageMood`,
//! `totalCheckins`, `byCause`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregation granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Expected anchor format for this granularity
    pub fn anchor_format(&self) -> &'static str {
        match self {
            Period::Week => "YYYY-MM-DD",
            Period::Month => "YYYY-MM",
            Period::Year => "YYYY",
        }
    }

    /// Interpret a raw query parameter. Unrecognized values fall back to the
    /// weekly view, which is the product default.
    pub fn from_param(value: Option<&str>) -> Period {
        match value {
            Some("month") => Period::Month,
            Some("year") => Period::Year,
            _ => Period::Week,
        }
    }
}

/// Inclusive calendar date range covered by one aggregation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every calendar day in the range, start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

/// One mood reading per calendar day for a subject.
///
/// Team rows are pooled per-date averages computed upstream, hence the
/// fractional mood value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRow {
    pub date: NaiveDate,
    #[serde(default)]
    pub mood_value: Option<f64>,
}

/// One row per individual check-in, as stored: the mood value on the 1-100
/// scale and the causes column in whatever state persistence returns it.
/// Not deduplicated by date; several team members may check in the same day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRow {
    pub date: NaiveDate,
    #[serde(default)]
    pub mood_value: Option<f64>,
    #[serde(default)]
    pub causes: Option<RawCauses>,
}

/// The persisted causes column: either an already-structured tag list or a
/// serialized (possibly malformed) JSON text blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCauses {
    List(Vec<String>),
    Text(String),
}

/// Categorical label attached to each day of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayLabel {
    #[serde(rename = "Jour excellent")]
    Excellent,
    #[serde(rename = "Jour correct")]
    Correct,
    #[serde(rename = "Jour difficile")]
    Difficult,
    #[serde(rename = "Aucun check-in")]
    Missing,
}

impl DayLabel {
    /// Display string shown to end users (the wire value)
    pub fn as_str(&self) -> &'static str {
        match self {
            DayLabel::Excellent => "Jour excellent",
            DayLabel::Correct => "Jour correct",
            DayLabel::Difficult => "Jour difficile",
            DayLabel::Missing => "Aucun check-in",
        }
    }
}

/// One labeled day of a weekly or monthly summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub mood_value: Option<f64>,
    pub label: DayLabel,
}

/// One month of a yearly summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEntry {
    /// Month key, "YYYY-MM"
    pub month: String,
    /// Average mood on the 1-10 display scale, one decimal
    pub average_mood: Option<f64>,
    /// Days of that month with a recorded mood
    pub participation: u32,
}

/// The `daily` payload of a summary: per-day entries for week and month
/// views, per-month entries for the year view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DailySeries {
    Days(Vec<DailyEntry>),
    Months(Vec<MonthlyEntry>),
}

impl DailySeries {
    pub fn len(&self) -> usize {
        match self {
            DailySeries::Days(entries) => entries.len(),
            DailySeries::Months(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_days(&self) -> Option<&[DailyEntry]> {
        match self {
            DailySeries::Days(entries) => Some(entries),
            DailySeries::Months(_) => None,
        }
    }

    pub fn as_months(&self) -> Option<&[MonthlyEntry]> {
        match self {
            DailySeries::Days(_) => None,
            DailySeries::Months(entries) => Some(entries),
        }
    }
}

/// Day-label counters accumulated over every day iterated in a period.
/// The four counters always sum to the number of days walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub excellent_days: u32,
    pub correct_days: u32,
    pub difficult_days: u32,
    pub missing_days: u32,
}

impl WeeklyStats {
    pub fn total(&self) -> u32 {
        self.excellent_days + self.correct_days + self.difficult_days + self.missing_days
    }
}

/// Mood summary for one subject (or pooled team) over one period.
///
/// `weekStart`/`weekEnd` carry the resolved range bounds for every
/// granularity; the historical field names are kept for client
/// compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub period: Period,
    pub participation: u32,
    pub average_mood: Option<f64>,
    pub daily: DailySeries,
    pub stats: WeeklyStats,
}

/// One band of the fixed five-way mood histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodBucket {
    pub label: String,
    /// Inclusive [min, max] bounds on the 0-100 scale
    pub range: [u32; 2],
    pub count: u32,
    pub percent: u32,
}

/// Histogram of mood values over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    pub total_checkins: u32,
    pub buckets: Vec<MoodBucket>,
}

/// Causal factor breakdown for one subject (or team) over one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorSummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub period: Period,
    /// Causes seen at least once, in order of first occurrence
    pub available_causes: Vec<String>,
    pub summary: BucketSummary,
    pub by_cause: BTreeMap<String, BucketSummary>,
}

/// Whether a day in a backwards history walk has a recorded check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinStatus {
    Completed,
    Missed,
}

/// One day of an N-day check-in history, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub status: CheckinStatus,
    pub mood_value: Option<f64>,
}

/// Pooled per-day average used for the team trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRow {
    pub date: NaiveDate,
    pub average_mood: f64,
}

/// Share of today's check-ins mentioning one cause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseShare {
    pub cause: String,
    pub percent: u32,
}

/// One point of the team trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// One-letter French day label (D/L/M/M/J/V/S, Sunday first)
    pub day: String,
    /// Pooled average on the 1-10 display scale
    pub value: f64,
}

/// Same-day pooled view of a team's mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub global_score: f64,
    pub mood_label: String,
    pub distribution: Vec<CauseShare>,
    pub weekly_trend: Vec<TrendPoint>,
}
