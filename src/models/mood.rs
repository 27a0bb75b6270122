use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const KEY_PREFIX: &str = "mood-";
pub const NOTE_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😊")]
    Happy,
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "😢")]
    Sad,
    #[serde(rename = "😡")]
    Angry,
    #[serde(rename = "🎉")]
    Celebrate,
}

impl Mood {
    /// Picker order of the mood row.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
        Mood::Celebrate,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
            Mood::Angry => "😡",
            Mood::Celebrate => "🎉",
        }
    }

    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.glyph() == glyph)
    }
}

/// Value stored under `mood-<date>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub mood: Mood,
    pub note: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub note: String,
    pub timestamp: String,
}

impl MoodEntry {
    pub fn from_record(date: NaiveDate, record: MoodRecord) -> Self {
        Self {
            date,
            mood: record.mood,
            note: record.note,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct SaveMoodRequest {
    pub date: NaiveDate,
    pub mood: Mood,
    #[validate(length(max = 50, message = "Note must be at most 50 characters"))]
    pub note: String,
}

pub fn mood_key(date: NaiveDate) -> String {
    format!("{}{}", KEY_PREFIX, date.format("%Y-%m-%d"))
}

pub fn date_from_key(key: &str) -> Option<NaiveDate> {
    key.strip_prefix(KEY_PREFIX)
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}
