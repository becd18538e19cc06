//! Daily bucketing
//!
//! Walks a resolved period day by day against a sparse mood-by-date map and
//! produces the labeled series of a summary:
//! - week: exactly five entries, Monday through Friday
//! - month: one entry per calendar day
//! - year: days are grouped into per-month aggregates, while day-label
//!   counters still accumulate day by day across the whole year
//!
//! Also hosts the backwards N-day history walk used by the check-in history
//! view.

use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

use crate::mood::{classify, display_average};
use crate::types::{
    CheckinStatus, DailyEntry, DailySeries, DayLabel, HistoryEntry, MonthlyEntry, Period,
    PeriodRange, WeeklyStats,
};

/// Labeled series plus the counters accumulated while walking it
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSeries {
    pub daily: DailySeries,
    /// Days with a recorded mood
    pub participation: u32,
    pub stats: WeeklyStats,
}

/// Walks a period's date range and accumulates the labeled series.
pub struct SeriesBuilder;

impl SeriesBuilder {
    pub fn build(
        period: Period,
        range: &PeriodRange,
        mood_by_date: &BTreeMap<NaiveDate, f64>,
    ) -> PeriodSeries {
        match period {
            Period::Week => build_week(range, mood_by_date),
            Period::Month => build_month(range, mood_by_date),
            Period::Year => build_year(range, mood_by_date),
        }
    }
}

fn record_day(label: DayLabel, stats: &mut WeeklyStats) {
    match label {
        DayLabel::Excellent => stats.excellent_days += 1,
        DayLabel::Correct => stats.correct_days += 1,
        DayLabel::Difficult => stats.difficult_days += 1,
        DayLabel::Missing => stats.missing_days += 1,
    }
}

fn build_week(range: &PeriodRange, mood_by_date: &BTreeMap<NaiveDate, f64>) -> PeriodSeries {
    let mut stats = WeeklyStats::default();
    let mut participation = 0;
    let mut daily = Vec::with_capacity(5);

    // exactly five weekdays from the range start
    for date in range.start.iter_days().take(5) {
        let mood_value = mood_by_date.get(&date).copied();
        let label = classify(mood_value);
        record_day(label, &mut stats);
        if mood_value.is_some() {
            participation += 1;
        }
        daily.push(DailyEntry {
            date,
            mood_value,
            label,
        });
    }

    PeriodSeries {
        daily: DailySeries::Days(daily),
        participation,
        stats,
    }
}

fn build_month(range: &PeriodRange, mood_by_date: &BTreeMap<NaiveDate, f64>) -> PeriodSeries {
    let mut stats = WeeklyStats::default();
    let mut participation = 0;
    let mut daily = Vec::new();

    for date in range.days() {
        let mood_value = mood_by_date.get(&date).copied();
        let label = classify(mood_value);
        record_day(label, &mut stats);
        if mood_value.is_some() {
            participation += 1;
        }
        daily.push(DailyEntry {
            date,
            mood_value,
            label,
        });
    }

    PeriodSeries {
        daily: DailySeries::Days(daily),
        participation,
        stats,
    }
}

#[derive(Default)]
struct MonthAccum {
    total: f64,
    count: u32,
    participation: u32,
}

fn build_year(range: &PeriodRange, mood_by_date: &BTreeMap<NaiveDate, f64>) -> PeriodSeries {
    let mut stats = WeeklyStats::default();
    let mut participation = 0;
    // BTreeMap keys iterate sorted, which for "YYYY-MM" keys is chronological
    let mut months: BTreeMap<String, MonthAccum> = BTreeMap::new();

    for date in range.days() {
        let mood_value = mood_by_date.get(&date).copied();
        let label = classify(mood_value);
        record_day(label, &mut stats);

        let accum = months.entry(date.format("%Y-%m").to_string()).or_default();
        if let Some(mood) = mood_value {
            participation += 1;
            accum.total += mood;
            accum.count += 1;
            accum.participation += 1;
        }
    }

    let daily = months
        .into_iter()
        .map(|(month, accum)| MonthlyEntry {
            month,
            average_mood: display_average(accum.total, accum.count),
            participation: accum.participation,
        })
        .collect();

    PeriodSeries {
        daily: DailySeries::Months(daily),
        participation,
        stats,
    }
}

/// Walk `days` calendar days backwards from `today` inclusive, newest first,
/// marking each day completed or missed against the sparse mood map.
pub fn build_history(
    today: NaiveDate,
    days: u32,
    mood_by_date: &BTreeMap<NaiveDate, f64>,
) -> Vec<HistoryEntry> {
    (0..days)
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| {
            let mood_value = mood_by_date.get(&date).copied();
            HistoryEntry {
                date,
                status: if mood_value.is_some() {
                    CheckinStatus::Completed
                } else {
                    CheckinStatus::Missed
                },
                mood_value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn week_range() -> PeriodRange {
        PeriodRange {
            start: date("2026-02-16"),
            end: date("2026-02-20"),
        }
    }

    #[test]
    fn test_week_emits_five_labeled_days() {
        let mut moods = BTreeMap::new();
        moods.insert(date("2026-02-16"), 70.0);
        moods.insert(date("2026-02-18"), 55.0);

        let series = SeriesBuilder::build(Period::Week, &week_range(), &moods);
        let days = series.daily.as_days().unwrap();

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].label, DayLabel::Excellent);
        assert_eq!(days[1].label, DayLabel::Missing);
        assert_eq!(days[2].mood_value, Some(55.0));
        assert_eq!(series.participation, 2);
        assert_eq!(series.stats.excellent_days, 1);
        assert_eq!(series.stats.correct_days, 1);
        assert_eq!(series.stats.missing_days, 3);
        assert_eq!(series.stats.total(), 5);
    }

    #[test]
    fn test_empty_week_is_all_missing() {
        let series = SeriesBuilder::build(Period::Week, &week_range(), &BTreeMap::new());
        assert_eq!(series.participation, 0);
        assert_eq!(series.stats.missing_days, 5);
        assert!(series
            .daily
            .as_days()
            .unwrap()
            .iter()
            .all(|d| d.label == DayLabel::Missing));
    }

    #[test]
    fn test_month_walks_every_calendar_day() {
        let range = PeriodRange {
            start: date("2026-02-01"),
            end: date("2026-02-28"),
        };
        let mut moods = BTreeMap::new();
        moods.insert(date("2026-02-03"), 35.0);
        moods.insert(date("2026-02-14"), 88.0);

        let series = SeriesBuilder::build(Period::Month, &range, &moods);
        assert_eq!(series.daily.len(), 28);
        assert_eq!(series.participation, 2);
        assert_eq!(series.stats.difficult_days, 1);
        assert_eq!(series.stats.excellent_days, 1);
        assert_eq!(series.stats.total(), 28);
    }

    #[test]
    fn test_year_groups_by_month() {
        let range = PeriodRange {
            start: date("2026-01-01"),
            end: date("2026-12-31"),
        };
        let mut moods = BTreeMap::new();
        moods.insert(date("2026-03-02"), 80.0);
        moods.insert(date("2026-03-03"), 60.0);
        moods.insert(date("2026-11-20"), 30.0);

        let series = SeriesBuilder::build(Period::Year, &range, &moods);
        let months = series.daily.as_months().unwrap();

        // every month of the year appears, in chronological order
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].month, "2026-01");
        assert_eq!(months[11].month, "2026-12");

        let march = &months[2];
        assert_eq!(march.month, "2026-03");
        assert_eq!(march.average_mood, Some(7.0));
        assert_eq!(march.participation, 2);

        let november = &months[10];
        assert_eq!(november.average_mood, Some(3.0));
        assert_eq!(november.participation, 1);

        assert_eq!(months[0].average_mood, None);
        assert_eq!(months[0].participation, 0);

        // counters still accumulate per day over the full year
        assert_eq!(series.participation, 3);
        assert_eq!(series.stats.total(), 365);
        assert_eq!(series.stats.missing_days, 362);
    }

    #[test]
    fn test_history_walks_backwards_newest_first() {
        let mut moods = BTreeMap::new();
        moods.insert(date("2026-02-18"), 64.0);
        moods.insert(date("2026-02-15"), 42.0);

        let history = build_history(date("2026-02-18"), 7, &moods);

        assert_eq!(history.len(), 7);
        assert_eq!(history[0].date, date("2026-02-18"));
        assert_eq!(history[0].status, CheckinStatus::Completed);
        assert_eq!(history[0].mood_value, Some(64.0));
        assert_eq!(history[1].status, CheckinStatus::Missed);
        assert_eq!(history[1].mood_value, None);
        assert_eq!(history[3].date, date("2026-02-15"));
        assert_eq!(history[3].status, CheckinStatus::Completed);
        assert_eq!(history[6].date, date("2026-02-12"));
    }
}
