//! Week-major calendar grid for the activity heatmap.
//!
//! Week 0 starts on the week boundary at or before the earliest record, so a
//! partial first week keeps its natural weekday offset. Missing days become
//! empty cells rather than being dropped, and every week has seven slots.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::calendar::{month_abbrev, weekday_index};
use crate::error::{AppError, AppResult};
use crate::models::activity::DailyActivityRecord;
use crate::models::heatmap::{
    Heatmap, HeatmapCell, HeatmapOptions, HeatmapWeek, IntensityBand, DAYS_PER_WEEK,
};

pub fn bucketize(records: &[DailyActivityRecord], options: HeatmapOptions) -> Heatmap {
    if records.is_empty() {
        return Heatmap::default();
    }

    // Stable sort: equal dates keep input order, so the later one wins below.
    let mut ordered: Vec<&DailyActivityRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let start_date = ordered[0].date;
    let start_weekday = weekday_index(start_date, options.week_start);

    let mut matrix: BTreeMap<usize, BTreeMap<u32, &DailyActivityRecord>> = BTreeMap::new();
    let mut month_labels = BTreeMap::new();
    let mut labelled_months = HashSet::new();

    for &record in &ordered {
        let week = week_index(record.date, start_date, start_weekday);
        let weekday = weekday_index(record.date, options.week_start);
        matrix.entry(week).or_default().insert(weekday, record);

        // A month name is labelled once; a dataset longer than a year loses
        // the later labels for repeated names.
        if record.date.day() == 1 {
            let label = month_abbrev(record.date);
            if labelled_months.insert(label.clone()) {
                month_labels.insert(week, label);
            }
        }
    }

    let week_count = matrix.keys().next_back().map_or(0, |last| last + 1);
    let weeks = (0..week_count)
        .map(|index| {
            let days = matrix.get(&index);
            HeatmapWeek {
                index,
                cells: std::array::from_fn(|slot| {
                    let weekday = slot as u32;
                    match days.and_then(|d| d.get(&weekday)) {
                        Some(record) => HeatmapCell {
                            week_index: index,
                            weekday,
                            date: Some(record.date),
                            minutes: record.minutes,
                            band: IntensityBand::from_minutes(record.minutes),
                        },
                        None => HeatmapCell::empty(index, weekday),
                    }
                }),
            }
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        weeks = week_count,
        start = %start_date,
        "Heatmap bucketized"
    );

    Heatmap {
        weeks,
        month_labels,
    }
}

/// Parses a JSON array of `{date, minutes}` records, e.g. a bundled fixture.
pub fn parse_activity_records(json: &str) -> AppResult<Vec<DailyActivityRecord>> {
    serde_json::from_str(json)
        .map_err(|e| AppError::Validation(format!("Invalid activity records: {e}")))
}

fn week_index(date: NaiveDate, start_date: NaiveDate, start_weekday: u32) -> usize {
    let days_since = (date - start_date).num_days();
    ((days_since + start_weekday as i64) / DAYS_PER_WEEK as i64) as usize
}
