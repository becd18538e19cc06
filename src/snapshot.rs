//! Same-day team snapshot
//!
//! A pooled view of a team's mood for the current day: the global score on
//! the 1-10 display scale, its display label, the top causes mentioned
//! today, and the one-week trend line. Pure over rows the collaborator has
//! already fetched for the roster.

use crate::causes::parse_causes;
use crate::mood::round_to_tenth;
use crate::types::{CauseShare, CheckinRow, TeamSnapshot, TrendPoint, TrendRow};
use chrono::Datelike;

/// One-letter French day labels, Sunday first
pub const TREND_DAY_LABELS: [&str; 7] = ["D", "L", "M", "M", "J", "V", "S"];

/// Label shown when the team has no check-in data today
pub const NO_DATA_LABEL: &str = "Aucune donnée disponible";

/// How many causes the distribution keeps
const TOP_CAUSES: usize = 3;

fn score_label(score: f64) -> &'static str {
    if score >= 8.0 {
        "L'équipe est au top !"
    } else if score >= 6.0 {
        "Tout va bien aujourd'hui"
    } else if score >= 4.0 {
        "Ambiance mitigée"
    } else {
        "Journée difficile pour l'équipe"
    }
}

/// Build the snapshot from today's check-in rows and the pre-pooled per-day
/// trend rows.
pub fn team_snapshot(today_rows: &[CheckinRow], trend_rows: &[TrendRow]) -> TeamSnapshot {
    let total_checkins = today_rows.len() as u32;

    let mut mood_total = 0.0;
    let mut mood_count = 0;
    for row in today_rows {
        if let Some(mood) = row.mood_value {
            mood_total += mood;
            mood_count += 1;
        }
    }

    // count causes in discovery order; malformed blobs decode to nothing
    let mut cause_counts: Vec<(String, u32)> = Vec::new();
    for row in today_rows {
        for cause in parse_causes(row.causes.as_ref()) {
            match cause_counts.iter_mut().find(|(name, _)| *name == cause) {
                Some((_, count)) => *count += 1,
                None => cause_counts.push((cause, 1)),
            }
        }
    }
    cause_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let distribution = cause_counts
        .into_iter()
        .take(TOP_CAUSES)
        .map(|(cause, count)| CauseShare {
            cause,
            percent: if total_checkins > 0 {
                (f64::from(count) * 100.0 / f64::from(total_checkins)).round() as u32
            } else {
                0
            },
        })
        .collect();

    let weekly_trend = trend_rows
        .iter()
        .map(|row| TrendPoint {
            day: TREND_DAY_LABELS[row.date.weekday().num_days_from_sunday() as usize].to_string(),
            value: round_to_tenth(row.average_mood / 10.0),
        })
        .collect();

    let (global_score, mood_label) = if mood_count == 0 {
        (0.0, NO_DATA_LABEL.to_string())
    } else {
        let score = round_to_tenth(mood_total / f64::from(mood_count) / 10.0);
        (score, score_label(score).to_string())
    };

    TeamSnapshot {
        global_score,
        mood_label,
        distribution,
        weekly_trend,
    }
}
