//! Huma Pulse - Period-aggregation engine for team well-being check-ins
//!
//! Pulse turns raw check-in rows into the summaries the product shows:
//! labeled daily series, participation counters, mood histograms and causal
//! factor breakdowns, for an individual or a pooled team roster, across
//! three period granularities (week, month, year).
//!
//! The engine is pure computation over rows a persistence collaborator has
//! already fetched: no I/O, no clock reads (the caller injects the reference
//! date), no shared state. The only error it raises is a malformed period
//! anchor; malformed cause data is silently discarded as a data-quality
//! event.
//!
//! ## Modules
//!
//! - **period**: anchor parsing and date-range resolution
//! - **series**: day-by-day bucketing into labeled daily/monthly series
//! - **histogram**: fixed five-band mood histograms
//! - **causes**: cause vocabulary and lenient decoding
//! - **aggregate**: the two period queries (summary, factors)
//! - **snapshot**: same-day pooled team view

pub mod aggregate;
pub mod causes;
pub mod error;
pub mod histogram;
pub mod mood;
pub mod period;
pub mod series;
pub mod snapshot;
pub mod types;

pub use aggregate::{period_factors, period_summary};
pub use causes::{parse_causes, CHECKIN_CAUSES, FEEDBACK_CATEGORIES};
pub use error::EngineError;
pub use histogram::build_bucket_summary;
pub use mood::classify;
pub use period::{resolve_range, validate_anchor, week_monday};
pub use series::{build_history, PeriodSeries, SeriesBuilder};
pub use snapshot::team_snapshot;
pub use types::{
    BucketSummary, CauseShare, CheckinRow, CheckinStatus, DailyEntry, DailySeries, DayLabel,
    FactorSummary, HistoryEntry, MonthlyEntry, MoodBucket, MoodRow, Period, PeriodRange,
    PeriodSummary, RawCauses, TeamSnapshot, TrendPoint, TrendRow, WeeklyStats,
};
