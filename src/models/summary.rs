use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaySummary {
    pub period: Period,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_minutes: u64,
    pub wins: u32,
    pub losses: u32,
}

impl PlaySummary {
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// `None` when no matches were played in the period.
    pub fn win_rate(&self) -> Option<f64> {
        match self.matches_played() {
            0 => None,
            played => Some(self.wins as f64 / played as f64),
        }
    }

    pub fn pie_slices(&self) -> [PieSlice; 2] {
        [
            PieSlice {
                name: "win",
                value: self.wins,
                color: "#0f59a4",
            },
            PieSlice {
                name: "loss",
                value: self.losses,
                color: "#cccccc",
            },
        ]
    }
}
