//! Pulse CLI - drive the aggregation engine over a local rows file
//!
//! Commands:
//! - summary: weekly/monthly/yearly mood summary over a check-in rows file
//! - factors: causal factor breakdown over the same rows
//!
//! The CLI plays the row-source collaborator for local files: it reads a
//! JSON array of check-in rows, keeps the rows inside the resolved range,
//! and prints the engine's output as JSON. This is the one place the wall
//! clock is read; the engine itself takes the reference date as input.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use huma_pulse::types::{CheckinRow, MoodRow, Period, PeriodRange};
use huma_pulse::{period_factors, period_summary, resolve_range, validate_anchor};

/// Pulse - period aggregation over well-being check-ins
#[derive(Parser)]
#[command(name = "pulse")]
#[command(author = "Huma Engineering")]
#[command(version)]
#[command(about = "Aggregate check-in rows into period summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mood summary for a period
    Summary {
        /// Input file: JSON array of check-in rows (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Aggregation granularity: week, month or year
        #[arg(long, default_value = "week")]
        period: String,

        /// Week anchor (YYYY-MM-DD); takes priority over --date for weeks
        #[arg(long)]
        week_start: Option<String>,

        /// Period anchor; format follows the granularity
        #[arg(long)]
        date: Option<String>,
    },

    /// Causal factor breakdown for a period
    Factors {
        /// Input file: JSON array of check-in rows (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Aggregation granularity: week, month or year
        #[arg(long, default_value = "week")]
        period: String,

        /// Week anchor (YYYY-MM-DD); takes priority over --date for weeks
        #[arg(long)]
        week_start: Option<String>,

        /// Period anchor; format follows the granularity
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pulse: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            input,
            period,
            week_start,
            date,
        } => {
            let (period, range) = resolve(&period, week_start.as_deref(), date.as_deref())?;
            let rows = read_rows(&input, &range)?;
            // a single local file is an individual-style source: the per-day
            // series and the per-check-in rows are the same fetch
            let series: Vec<MoodRow> = rows
                .iter()
                .map(|row| MoodRow {
                    date: row.date,
                    mood_value: row.mood_value,
                })
                .collect();
            let summary = period_summary(&series, &rows, period, &range);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Factors {
            input,
            period,
            week_start,
            date,
        } => {
            let (period, range) = resolve(&period, week_start.as_deref(), date.as_deref())?;
            let rows = read_rows(&input, &range)?;
            let factors = period_factors(&rows, period, &range);
            println!("{}", serde_json::to_string_pretty(&factors)?);
        }
    }

    Ok(())
}

fn resolve(
    period: &str,
    week_start: Option<&str>,
    date: Option<&str>,
) -> Result<(Period, PeriodRange), Box<dyn std::error::Error>> {
    let period = Period::from_param(Some(period));
    validate_anchor(period, date)?;
    let today = chrono::Utc::now().date_naive();
    Ok((period, resolve_range(period, week_start, date, today)))
}

fn read_rows(
    path: &Path,
    range: &PeriodRange,
) -> Result<Vec<CheckinRow>, Box<dyn std::error::Error>> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    let mut rows: Vec<CheckinRow> = serde_json::from_str(&text)?;
    rows.retain(|row| range.contains(row.date));
    Ok(rows)
}
