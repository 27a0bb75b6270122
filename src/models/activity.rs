use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minutes of court time logged for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivityRecord {
    pub date: NaiveDate,
    pub minutes: u32,
}

impl DailyActivityRecord {
    pub fn new(date: NaiveDate, minutes: u32) -> Self {
        Self { date, minutes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub date: NaiveDate,
    pub outcome: MatchOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_record_deserializes() {
        let json = r#"[{"date":"2024-03-01","minutes":0},{"date":"2024-03-02","minutes":45}]"#;
        let records: Vec<DailyActivityRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(records[1].minutes, 45);
    }

    #[test]
    fn test_negative_minutes_rejected() {
        let json = r#"{"date":"2024-03-01","minutes":-5}"#;
        assert!(serde_json::from_str::<DailyActivityRecord>(json).is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        let json = r#"{"date":"2024-13-01","minutes":5}"#;
        assert!(serde_json::from_str::<DailyActivityRecord>(json).is_err());
    }

    #[test]
    fn test_match_outcome_lowercase() {
        let json = r#"{"date":"2024-03-01","outcome":"win"}"#;
        let m: MatchResult = serde_json::from_str(json).unwrap();
        assert_eq!(m.outcome, MatchOutcome::Win);
    }
}
