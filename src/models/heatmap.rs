use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapOptions {
    pub week_start: Weekday,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}

impl From<&Config> for HeatmapOptions {
    fn from(config: &Config) -> Self {
        Self {
            week_start: config.week_start,
        }
    }
}

/// Color step for a day's minutes. Thresholds sit at 0, 30 and 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityBand {
    None,
    Light,
    Medium,
    High,
}

impl IntensityBand {
    pub fn from_minutes(minutes: u32) -> Self {
        match minutes {
            0 => Self::None,
            1..=30 => Self::Light,
            31..=60 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::None => "#ebedf0",
            Self::Light => "#c6e48b",
            Self::Medium => "#7bc96f",
            Self::High => "#239a3b",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub week_index: usize,
    pub weekday: u32,
    /// `None` marks a slot with no record; serialized as `""`.
    #[serde(with = "empty_date")]
    pub date: Option<NaiveDate>,
    pub minutes: u32,
    pub band: IntensityBand,
}

impl HeatmapCell {
    pub fn empty(week_index: usize, weekday: u32) -> Self {
        Self {
            week_index,
            weekday,
            date: None,
            minutes: 0,
            band: IntensityBand::None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapWeek {
    pub index: usize,
    pub cells: [HeatmapCell; DAYS_PER_WEEK],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    pub weeks: Vec<HeatmapWeek>,
    /// week index -> abbreviated month name
    pub month_labels: BTreeMap<usize, String>,
}

impl Heatmap {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn cell(&self, week_index: usize, weekday: u32) -> Option<&HeatmapCell> {
        self.weeks
            .get(week_index)
            .and_then(|week| week.cells.get(weekday as usize))
    }
}

mod empty_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
