//! Period resolution
//!
//! This module turns a period granularity plus a caller-supplied anchor into
//! a concrete calendar range:
//! - week: the anchor's Monday through Friday (weekends are not part of the
//!   reporting week)
//! - month: first through last day of the anchor's calendar month
//! - year: January 1 through December 31 of the anchor's year
//!
//! Anchor parsing is strict about shape; an anchor that does not parse makes
//! resolution fall back to the reference date the caller injects. Validation
//! is a separate, stricter gate applied before resolution.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::EngineError;
use crate::types::{Period, PeriodRange};

/// Parse a strict `YYYY-MM-DD` anchor.
pub(crate) fn parse_date_anchor(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse a strict `YYYY-MM` anchor to the first day of that month.
pub(crate) fn parse_month_anchor(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || b.is_ascii_digit())
    {
        return None;
    }
    let year: i32 = value[..4].parse().ok()?;
    let month: u32 = value[5..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Parse a strict `YYYY` anchor to January 1 of that year.
pub(crate) fn parse_year_anchor(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = value.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Monday of the ISO week containing `date`; Sunday maps to the previous
/// Monday.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

fn week_range(anchor: NaiveDate) -> PeriodRange {
    let monday = week_monday(anchor);
    let friday = monday.checked_add_days(Days::new(4)).unwrap_or(monday);
    PeriodRange {
        start: monday,
        end: friday,
    }
}

fn month_range(anchor: NaiveDate) -> PeriodRange {
    let start = anchor.with_day(1).unwrap_or(anchor);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(start);
    PeriodRange { start, end }
}

fn year_range(anchor: NaiveDate) -> PeriodRange {
    let year = anchor.year();
    PeriodRange {
        start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(anchor),
        end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(anchor),
    }
}

/// Resolve the concrete date range for a request.
///
/// For the weekly view `week_start` wins over the generic `date` parameter;
/// any anchor that fails to parse falls back to `today`, which the calling
/// layer resolves once per request (the engine never reads the clock).
pub fn resolve_range(
    period: Period,
    week_start: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
) -> PeriodRange {
    match period {
        Period::Week => {
            let anchor = week_start
                .and_then(parse_date_anchor)
                .or_else(|| date.and_then(parse_date_anchor))
                .unwrap_or(today);
            week_range(anchor)
        }
        Period::Month => month_range(date.and_then(parse_month_anchor).unwrap_or(today)),
        Period::Year => year_range(date.and_then(parse_year_anchor).unwrap_or(today)),
    }
}

/// Reject a `date` parameter that does not match the expected format for the
/// requested period.
///
/// Resolution alone would silently fall back to `today`; callers apply this
/// gate first so a malformed anchor surfaces as a caller-correctable error
/// instead of an unexpected range.
pub fn validate_anchor(period: Period, date: Option<&str>) -> Result<(), EngineError> {
    let Some(value) = date else {
        return Ok(());
    };

    let parsed = match period {
        Period::Week => parse_date_anchor(value).is_some(),
        Period::Month => parse_month_anchor(value).is_some(),
        Period::Year => parse_year_anchor(value).is_some(),
    };

    if parsed {
        Ok(())
    } else {
        Err(EngineError::Validation(format!(
            "date must be in {} format for period={}",
            period.anchor_format(),
            period.as_str()
        )))
    }
}
