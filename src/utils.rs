use crate::error::{Result, StatementError};
use chrono::{Datelike, Days, NaiveDate};

pub fn next_month_end(date: NaiveDate) -> NaiveDate {
    let year = if date.month() == 12 {
        date.year() + 1
    } else {
        date.year()
    };

    let month = if date.month() == 12 {
        1
    } else {
        date.month() + 1
    };

    last_day_of_month(year, month)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .checked_sub_days(Days::new(1))
        .unwrap()
}

pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let year_diff = end.year() - start.year();
    let month_diff = end.month() as i32 - start.month() as i32;
    year_diff * 12 + month_diff
}

/// Builds the chronological period axis for a reporting window: one
/// month-end date per elapsed month, starting in the month of `start`.
pub fn period_axis(start: NaiveDate, elapsed_months: usize) -> Result<Vec<NaiveDate>> {
    if elapsed_months == 0 {
        return Err(StatementError::InvalidReportingWindow(format!(
            "window starting {} spans zero months",
            start
        )));
    }

    let mut dates = Vec::with_capacity(elapsed_months);
    let mut current = last_day_of_month(start.year(), start.month());
    for _ in 0..elapsed_months {
        dates.push(current);
        current = next_month_end(current);
    }

    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_month_end() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        assert_eq!(
            next_month_end(date),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );

        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(
            next_month_end(date),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(
            last_day_of_month(2023, 2),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            last_day_of_month(2024, 2),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            last_day_of_month(2023, 4),
            NaiveDate::from_ymd_opt(2023, 4, 30).unwrap()
        );
    }

    #[test]
    fn test_months_between() {
        let start = NaiveDate::from_ymd_opt(2023, 4, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(months_between(start, end), 11);
    }

    #[test]
    fn test_period_axis_crosses_year_boundary() {
        let start = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let axis = period_axis(start, 4).unwrap();
        assert_eq!(
            axis,
            vec![
                NaiveDate::from_ymd_opt(2023, 11, 30).unwrap(),
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            ]
        );
    }

    #[test]
    fn test_period_axis_rejects_empty_window() {
        let start = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
        assert!(period_axis(start, 0).is_err());
    }
}
