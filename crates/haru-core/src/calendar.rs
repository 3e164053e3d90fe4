//! Streak calendar month view.
//!
//! Computes the month grid the UI renders: Sunday-first weeks, leading
//! blanks before the first day, and visited/today flags per day cell.

use chrono::{Datelike, NaiveDate};

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub visited: bool,
    pub is_today: bool,
}

/// A rendered month: leading blank count plus one cell per day.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 in a Sunday-first week row.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

/// Builds the month view for `year`/`month` from the recorded visit dates.
///
/// Visit dates outside the month are ignored. `today` only marks the cell
/// when it falls inside the month.
pub fn month_view(year: i32, month: u32, visit_dates: &[NaiveDate], today: NaiveDate) -> MonthView {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        // Invalid year/month yields an empty grid rather than a panic.
        return MonthView {
            year,
            month,
            leading_blanks: 0,
            days: Vec::new(),
        };
    };
    let leading_blanks = first.weekday().num_days_from_sunday();
    let days_in_month = days_in_month(year, month);

    let days = (1..=days_in_month)
        .map(|day| {
            let date = NaiveDate::from_ymd_opt(year, month, day);
            DayCell {
                day,
                visited: date.map(|d| visit_dates.contains(&d)).unwrap_or(false),
                is_today: date == Some(today),
            }
        })
        .collect();

    MonthView {
        year,
        month,
        leading_blanks,
        days,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next.and_then(|d| d.pred_opt()) {
        Some(last) => last.day(),
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leading_blanks_january_2024() {
        // 2024-01-01 was a Monday, so one blank (Sunday) precedes it.
        let view = month_view(2024, 1, &[], day(2024, 1, 15));
        assert_eq!(view.leading_blanks, 1);
        assert_eq!(view.days.len(), 31);
    }

    #[test]
    fn test_february_leap_year() {
        let view = month_view(2024, 2, &[], day(2024, 2, 1));
        assert_eq!(view.days.len(), 29);
    }

    #[test]
    fn test_visited_and_today_flags() {
        let visits = vec![day(2024, 1, 2), day(2024, 1, 5), day(2023, 12, 31)];
        let view = month_view(2024, 1, &visits, day(2024, 1, 5));

        let cell = |d: u32| view.days[(d - 1) as usize];
        assert!(cell(2).visited);
        assert!(cell(5).visited);
        assert!(cell(5).is_today);
        assert!(!cell(3).visited);
        // Out-of-month visit is ignored.
        assert_eq!(view.days.iter().filter(|c| c.visited).count(), 2);
    }
}
