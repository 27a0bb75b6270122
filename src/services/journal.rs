use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use validator::Validate;

use crate::calendar::month_days;
use crate::config::{Config, DEFAULT_TIMESTAMP_FORMAT};
use crate::db::KeyValueStore;
use crate::error::{AppError, AppResult};
use crate::models::mood::{
    date_from_key, mood_key, Mood, MoodEntry, MoodRecord, SaveMoodRequest,
};

/// One mood entry per calendar day, stored under `mood-<date>`.
///
/// Storage failures are returned as [`AppError::StorageUnavailable`]. A stored
/// value that does not parse is logged and read back as if it had never been
/// saved, so one corrupt day never hides the rest of the month.
pub struct MoodJournal<S> {
    store: S,
    timestamp_format: String,
}

/// Month summaries only need the glyph.
#[derive(Deserialize)]
struct MoodOnly {
    mood: Mood,
}

impl<S: KeyValueStore> MoodJournal<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
        }
    }

    pub fn with_config(store: S, config: &Config) -> Self {
        Self::new(store).with_timestamp_format(config.timestamp_format.clone())
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load(&self, date: NaiveDate) -> AppResult<Option<MoodEntry>> {
        let key = mood_key(date);
        let Some(raw) = self.store.get(&key).await? else {
            tracing::debug!(key = %key, "No mood entry");
            return Ok(None);
        };

        match decode::<MoodRecord>(&key, &raw) {
            Ok(record) => Ok(Some(MoodEntry::from_record(date, record))),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Ignoring malformed mood record");
                Ok(None)
            }
        }
    }

    /// Overwrites whatever was stored for `date`.
    pub async fn save(
        &self,
        date: NaiveDate,
        mood: Mood,
        note: impl Into<String>,
    ) -> AppResult<MoodEntry> {
        let request = SaveMoodRequest {
            date,
            mood,
            note: note.into(),
        };
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let key = mood_key(date);
        let record = MoodRecord {
            mood: request.mood,
            note: request.note,
            timestamp: self.timestamp(),
        };
        let payload = serde_json::to_string(&record).map_err(|e| AppError::MalformedRecord {
            key: key.clone(),
            reason: e.to_string(),
        })?;

        self.store.set(&key, &payload).await?;
        tracing::debug!(key = %key, mood = record.mood.glyph(), "Mood entry saved");

        Ok(MoodEntry::from_record(date, record))
    }

    pub async fn clear(&self, date: NaiveDate) -> AppResult<()> {
        let key = mood_key(date);
        self.store.remove(&key).await?;
        tracing::debug!(key = %key, "Mood entry cleared");
        Ok(())
    }

    /// Mood glyph for every day of `reference`'s month that has a readable entry.
    pub async fn load_month_range(
        &self,
        reference: NaiveDate,
    ) -> AppResult<BTreeMap<NaiveDate, Mood>> {
        let keys: Vec<String> = month_days(reference).into_iter().map(mood_key).collect();
        let rows = self.store.multi_get(&keys).await?;

        let mut moods = BTreeMap::new();
        for (key, value) in rows {
            let (Some(raw), Some(date)) = (value, date_from_key(&key)) else {
                continue;
            };
            match decode::<MoodOnly>(&key, &raw) {
                Ok(entry) => {
                    moods.insert(date, entry.mood);
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Skipping malformed mood record");
                }
            }
        }

        tracing::debug!(
            month = %reference.format("%Y-%m"),
            entries = moods.len(),
            "Monthly mood map loaded"
        );
        Ok(moods)
    }

    pub async fn load_current_month(&self) -> AppResult<BTreeMap<NaiveDate, Mood>> {
        self.load_month_range(Local::now().date_naive()).await
    }

    fn timestamp(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.timestamp_format)).is_ok() {
            return out;
        }
        tracing::warn!(
            format = %self.timestamp_format,
            "Invalid timestamp format, using default"
        );
        now.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    }
}

fn decode<T: for<'de> Deserialize<'de>>(key: &str, raw: &str) -> AppResult<T> {
    serde_json::from_str(raw).map_err(|e| AppError::MalformedRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
