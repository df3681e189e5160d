//! Business-day arithmetic: Monday to Friday, minus holidays.

use crate::core::calendar::HolidayCalendar;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn is_business_day(date: NaiveDate, holidays: &HolidayCalendar) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(date)
}

/// Number of business days in the closed interval `[start, end]`.
///
/// Both endpoints count when they qualify, so `start == end` on a working
/// day yields 1. A reversed interval (`start > end`) yields 0.
pub fn count(start: NaiveDate, end: NaiveDate, holidays: &HolidayCalendar) -> AppResult<i64> {
    if start > end {
        return Ok(0);
    }

    let mut days = 0;
    let mut d = start;
    loop {
        if is_business_day(d, holidays) {
            days += 1;
        }
        if d == end {
            break;
        }
        d = d
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDateRange(format!("{start} .. {end}")))?;
    }

    Ok(days)
}
