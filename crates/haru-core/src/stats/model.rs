//! Session statistics domain model.
//!
//! Tracks the visit streak and the total number of cards viewed. The streak
//! works at calendar-day granularity: at most one visit is counted per day,
//! and a day with no visit resets the streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-user viewing statistics, persisted after every mutation by the
/// owning session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Total number of cards ever shown.
    pub total_cards_viewed: u64,
    /// The last calendar day on which a visit was recorded.
    pub last_visit_date: Option<NaiveDate>,
    /// Count of consecutive calendar days with at least one visit.
    pub streak_days: u32,
    /// Every day on which a visit was recorded, in visit order.
    #[serde(default)]
    pub visit_dates: Vec<NaiveDate>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visit for `today`, updating the streak.
    ///
    /// Idempotent within a day: a second call with the same `today` changes
    /// nothing and returns `false`. Otherwise the streak is extended when
    /// the previous visit was yesterday and reset to 1 for a first visit or
    /// a gap of two or more days. A `today` earlier than the last recorded
    /// visit (backward clock skew) falls into the reset branch as well, and
    /// the day is still recorded.
    ///
    /// Returns `true` when the visit was counted.
    pub fn record_visit(&mut self, today: NaiveDate) -> bool {
        if self.last_visit_date == Some(today) {
            return false;
        }

        let yesterday = today.pred_opt();
        if self.last_visit_date.is_some() && self.last_visit_date == yesterday {
            self.streak_days += 1;
        } else {
            // First-ever visit, a gap, or clock skew.
            self.streak_days = 1;
        }

        self.last_visit_date = Some(today);
        self.visit_dates.push(today);
        true
    }

    /// Counts one shown card.
    pub fn record_card_view(&mut self) {
        self.total_cards_viewed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_visit_starts_streak() {
        let mut stats = SessionStats::new();
        assert!(stats.record_visit(day(2024, 1, 1)));
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.last_visit_date, Some(day(2024, 1, 1)));
        assert_eq!(stats.visit_dates, vec![day(2024, 1, 1)]);
    }

    #[test]
    fn test_same_day_visit_is_idempotent() {
        let mut stats = SessionStats::new();
        stats.record_visit(day(2024, 1, 1));
        assert!(!stats.record_visit(day(2024, 1, 1)));
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.visit_dates.len(), 1);
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let mut stats = SessionStats::new();
        stats.record_visit(day(2024, 1, 1));
        stats.record_visit(day(2024, 1, 2));
        assert_eq!(stats.streak_days, 2);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut stats = SessionStats::new();
        stats.record_visit(day(2024, 1, 1));
        stats.record_visit(day(2024, 1, 2));
        stats.record_visit(day(2024, 1, 5));
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.visit_dates.len(), 3);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let mut stats = SessionStats::new();
        stats.record_visit(day(2024, 1, 31));
        stats.record_visit(day(2024, 2, 1));
        assert_eq!(stats.streak_days, 2);
    }

    #[test]
    fn test_backward_clock_skew_resets() {
        let mut stats = SessionStats::new();
        stats.record_visit(day(2024, 1, 10));
        assert!(stats.record_visit(day(2024, 1, 8)));
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.last_visit_date, Some(day(2024, 1, 8)));
    }

    #[test]
    fn test_record_card_view() {
        let mut stats = SessionStats::new();
        stats.record_card_view();
        stats.record_card_view();
        assert_eq!(stats.total_cards_viewed, 2);
    }
}
