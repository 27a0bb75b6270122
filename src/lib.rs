//! # courtlog
//!
//! Data core of the court companion app: the activity heatmap grid, the
//! per-day mood journal and the play-time summaries behind the profile screen.
//!
//! - [`services::heatmap::bucketize`] turns `{date, minutes}` records into a
//!   week-major grid with month labels.
//! - [`services::journal::MoodJournal`] persists one mood entry per day in any
//!   [`db::KeyValueStore`] (in-memory or SQLite).
//! - [`services::summary::play_summary`] totals minutes and wins/losses for a
//!   day, week or month.

pub mod calendar;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use db::{KeyValueStore, MemoryStore, SqliteStore};
pub use error::{AppError, AppResult, StorageError};
pub use services::journal::MoodJournal;

/// Opens the SQLite store named by `config` and wraps it in a journal.
pub async fn open_journal(config: &Config) -> AppResult<MoodJournal<SqliteStore>> {
    let store = SqliteStore::open(
        &config.database_url,
        config.max_connections,
        config.storage_scope.clone(),
    )
    .await?;
    Ok(MoodJournal::with_config(store, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models::mood::Mood;

    #[tokio::test]
    async fn test_open_journal_round_trip() {
        telemetry::init_tracing(telemetry::DEFAULT_FILTER);
        let config = Config {
            database_url: "sqlite::memory:".into(),
            storage_scope: "player-1".into(),
            ..Config::default()
        };
        let journal = open_journal(&config).await.unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        journal.save(date, Mood::Neutral, "doubles night").await.unwrap();
        let entry = journal.load(date).await.unwrap().unwrap();
        assert_eq!(entry.mood, Mood::Neutral);
        assert_eq!(entry.note, "doubles night");
        assert!(!entry.timestamp.is_empty());

        journal.store().set("mood-2024-03-20", "{").await.unwrap();
        let month = journal.load_month_range(date).await.unwrap();
        assert_eq!(month.len(), 1);

        journal.clear(date).await.unwrap();
        assert!(journal.load(date).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_journal_bad_url_is_storage_error() {
        let config = Config {
            database_url: "sqlite:///nonexistent-courtlog-dir/nested/courtlog.db".into(),
            ..Config::default()
        };
        let err = open_journal(&config).await.err().unwrap();
        assert!(err.is_storage());
    }
}
