//! Calendar arithmetic shared by the heatmap and the summaries.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Position of `date` within a week that begins on `week_start` (0..=6).
pub fn weekday_index(date: NaiveDate, week_start: Weekday) -> u32 {
    let day = date.weekday().num_days_from_monday();
    let first = week_start.num_days_from_monday();
    (day + 7 - first) % 7
}

/// First day of the week containing `date`, clamped to `NaiveDate::MIN`.
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date.checked_sub_signed(Duration::days(weekday_index(date, week_start) as i64))
        .unwrap_or(NaiveDate::MIN)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // past the last representable month, the month ends at NaiveDate::MAX
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Every calendar date of the month containing `date`, in order.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    first_of_month(date)
        .iter_days()
        .take_while(|d| d.month() == date.month())
        .collect()
}

/// "Jan".."Dec"
pub fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── weekday_index ────────────────────────────────────────────────────

    #[test]
    fn test_weekday_index_sunday_start() {
        assert_eq!(weekday_index(ymd(2024, 3, 3), Weekday::Sun), 0); // Sunday
        assert_eq!(weekday_index(ymd(2024, 3, 1), Weekday::Sun), 5); // Friday
        assert_eq!(weekday_index(ymd(2024, 3, 2), Weekday::Sun), 6); // Saturday
    }

    #[test]
    fn test_weekday_index_monday_start() {
        assert_eq!(weekday_index(ymd(2024, 3, 4), Weekday::Mon), 0); // Monday
        assert_eq!(weekday_index(ymd(2024, 3, 3), Weekday::Mon), 6); // Sunday
    }

    #[test]
    fn test_week_start_of() {
        // Friday 2024-03-01 -> Sunday 2024-02-25 / Monday 2024-02-26
        assert_eq!(week_start_of(ymd(2024, 3, 1), Weekday::Sun), ymd(2024, 2, 25));
        assert_eq!(week_start_of(ymd(2024, 3, 1), Weekday::Mon), ymd(2024, 2, 26));
    }

    // ── month helpers ────────────────────────────────────────────────────

    #[test]
    fn test_month_days_leap_february() {
        let days = month_days(ymd(2024, 2, 14));
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], ymd(2024, 2, 1));
        assert_eq!(*days.last().unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_month_days_december() {
        let days = month_days(ymd(2023, 12, 31));
        assert_eq!(days.len(), 31);
        assert_eq!(last_of_month(ymd(2023, 12, 5)), ymd(2023, 12, 31));
    }

    #[test]
    fn test_calendar_edges_clamp() {
        for week_start in [Weekday::Sun, Weekday::Mon, Weekday::Thu] {
            assert_eq!(week_start_of(NaiveDate::MIN, week_start), NaiveDate::MIN);
        }
        assert_eq!(first_of_month(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(last_of_month(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(*month_days(NaiveDate::MAX).last().unwrap(), NaiveDate::MAX);
    }

    #[test]
    fn test_month_abbrev() {
        assert_eq!(month_abbrev(ymd(2024, 3, 1)), "Mar");
        assert_eq!(month_abbrev(ymd(2024, 12, 1)), "Dec");
    }
}
