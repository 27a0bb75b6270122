use chrono::{NaiveDate, Weekday};

use crate::calendar::{first_of_month, last_of_month, week_start_of};
use crate::models::activity::{DailyActivityRecord, MatchOutcome, MatchResult};
use crate::models::summary::{Period, PlaySummary};

/// Inclusive first and last day of the period containing `reference`.
pub fn period_bounds(
    period: Period,
    reference: NaiveDate,
    week_start: Weekday,
) -> (NaiveDate, NaiveDate) {
    match period {
        Period::Day => (reference, reference),
        Period::Week => {
            let start = week_start_of(reference, week_start);
            let end = start
                .checked_add_signed(chrono::Duration::days(6))
                .unwrap_or(NaiveDate::MAX);
            (start, end)
        }
        Period::Month => (first_of_month(reference), last_of_month(reference)),
    }
}

pub fn play_summary(
    activity: &[DailyActivityRecord],
    matches: &[MatchResult],
    period: Period,
    reference: NaiveDate,
    week_start: Weekday,
) -> PlaySummary {
    let (start, end) = period_bounds(period, reference, week_start);
    let in_period = |date: NaiveDate| date >= start && date <= end;

    let total_minutes = activity
        .iter()
        .filter(|r| in_period(r.date))
        .map(|r| r.minutes as u64)
        .sum();

    let (wins, losses) = matches
        .iter()
        .filter(|m| in_period(m.date))
        .fold((0, 0), |(w, l), m| match m.outcome {
            MatchOutcome::Win => (w + 1, l),
            MatchOutcome::Loss => (w, l + 1),
        });

    PlaySummary {
        period,
        start,
        end,
        total_minutes,
        wins,
        losses,
    }
}

/// "45m", "2h", "2h 20m"
pub fn format_duration(minutes: u64) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
