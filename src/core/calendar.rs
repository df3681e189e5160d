//! Holiday calendar: the set of dates excluded from business-day counting.

use crate::errors::{AppError, AppResult};
use crate::models::holiday::HolidayEntry;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Leap year used to store recurring holidays, so that 02-29 is representable.
const RECURRING_ANCHOR_YEAR: i32 = 2000;

/// How holiday entries (month + day) are matched against real dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayMode {
    /// Each entry is one date in the reference year; other years never match.
    #[default]
    Anchored,
    /// Each entry matches the same month and day of any year.
    Recurring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    year: i32,
    mode: HolidayMode,
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Calendar without holidays: only weekends are excluded.
    pub fn empty(year: i32, mode: HolidayMode) -> Self {
        Self {
            year,
            mode,
            dates: HashSet::new(),
        }
    }

    /// Build the calendar from `(month, day)` entries anchored to `year`.
    /// Duplicate entries collapse into one date.
    pub fn load(entries: &[HolidayEntry], year: i32, mode: HolidayMode) -> AppResult<Self> {
        let storage_year = match mode {
            HolidayMode::Anchored => year,
            HolidayMode::Recurring => RECURRING_ANCHOR_YEAR,
        };

        let mut cal = Self::empty(year, mode);
        for entry in entries {
            let invalid = || AppError::InvalidHolidayData {
                month: entry.month.to_string(),
                day: entry.day.to_string(),
            };
            let month = entry.month.as_u32().ok_or_else(invalid)?;
            let day = entry.day.as_u32().ok_or_else(invalid)?;
            let date = NaiveDate::from_ymd_opt(storage_year, month, day).ok_or_else(invalid)?;
            cal.dates.insert(date);
        }

        Ok(cal)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.mode {
            HolidayMode::Anchored => self.dates.contains(&date),
            HolidayMode::Recurring => date
                .with_year(RECURRING_ANCHOR_YEAR)
                .is_some_and(|d| self.dates.contains(&d)),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn mode(&self) -> HolidayMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
