use chrono::{Datelike, NaiveDate};

use haru_application::AffirmationSession;
use haru_core::calendar::month_view;
use haru_core::locale::Locale;

pub fn run(session: &AffirmationSession, locale: Locale, today: NaiveDate) {
    let stats = session.stats();

    match locale {
        Locale::Ko => {
            println!("총 카드: {}", stats.total_cards_viewed);
            println!("연속 방문: {}일", stats.streak_days);
            println!("즐겨찾기: {}", session.favorites().len());
        }
        Locale::En => {
            println!("Total cards: {}", stats.total_cards_viewed);
            println!("Streak: {} day(s)", stats.streak_days);
            println!("Favorites: {}", session.favorites().len());
        }
    }

    println!();
    print_calendar(session, locale, today);
}

fn print_calendar(session: &AffirmationSession, locale: Locale, today: NaiveDate) {
    let view = month_view(
        today.year(),
        today.month(),
        &session.stats().visit_dates,
        today,
    );

    match locale {
        Locale::Ko => {
            println!("{}년 {}월 방문", view.year, view.month);
            println!("일  월  화  수  목  금  토");
        }
        Locale::En => {
            println!("{}-{:02} visits", view.year, view.month);
            println!("Su  Mo  Tu  We  Th  Fr  Sa");
        }
    }

    for row in calendar_rows(&view) {
        println!("{}", row);
    }
}

fn calendar_rows(view: &haru_core::calendar::MonthView) -> Vec<String> {
    let mut rows = Vec::new();
    let mut column = view.leading_blanks;
    let mut line = "    ".repeat(view.leading_blanks as usize);
    for cell in &view.days {
        // Visited days are starred, today is bracketed. Every cell is four
        // characters wide so the columns stay aligned.
        let marker = match (cell.is_today, cell.visited) {
            (true, _) => format!("[{:>2}]", cell.day),
            (false, true) => format!("{:>2}* ", cell.day),
            (false, false) => format!("{:>2}  ", cell.day),
        };
        line.push_str(&marker);
        column += 1;
        if column == 7 {
            rows.push(line.trim_end().to_string());
            line.clear();
            column = 0;
        }
    }
    if !line.trim().is_empty() {
        rows.push(line.trim_end().to_string());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_marker_keeps_columns_aligned() {
        // 2024-01-07..13 fill the second week; today sits mid-row with a
        // visited day after it.
        let view = month_view(2024, 1, &[day(2024, 1, 12)], day(2024, 1, 10));
        let week = &calendar_rows(&view)[1];

        assert_eq!(week.find("[10]"), Some(12));
        // Cells after today still start on the usual 4-char boundaries.
        assert_eq!(week.find("11"), Some(16));
        assert_eq!(week.find("12*"), Some(20));
        assert_eq!(week.find("13"), Some(24));
    }

    #[test]
    fn test_leading_blanks_offset_first_week() {
        // 2024-01-01 was a Monday, so the first row starts one cell in.
        let view = month_view(2024, 1, &[], day(2024, 1, 20));
        let first = &calendar_rows(&view)[0];
        assert_eq!(first.find('1'), Some(5));
    }
}
