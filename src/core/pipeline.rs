//! One complete run: load both inputs, build the calendar, filter the roster.

use crate::config::Config;
use crate::core::calendar::{HolidayCalendar, HolidayMode};
use crate::core::filter::{FilterConfig, InactivityFilter};
use crate::errors::AppResult;
use crate::input::{holidays, roster};
use crate::models::outcome::FilterOutcome;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub holidays_path: PathBuf,
    pub roster_path: PathBuf,
    pub today: NaiveDate,
    /// Return the empty outcome without touching the inputs.
    pub check_mode: bool,
}

pub struct Pipeline {
    holiday_year: i32,
    holiday_mode: HolidayMode,
    filter: InactivityFilter,
}

impl Pipeline {
    pub fn new(holiday_year: i32, holiday_mode: HolidayMode, filter: FilterConfig) -> Self {
        Self {
            holiday_year,
            holiday_mode,
            filter: InactivityFilter::new(filter),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.holiday_year, cfg.holiday_mode, cfg.filter_config())
    }

    pub fn load_calendar(&self, request: &RunRequest) -> AppResult<HolidayCalendar> {
        let entries = holidays::read_holidays(&request.holidays_path)?;
        HolidayCalendar::load(&entries, self.holiday_year, self.holiday_mode)
    }

    /// Run the filter, propagating the first error.
    pub fn execute(&self, request: &RunRequest) -> AppResult<FilterOutcome> {
        if request.check_mode {
            info!("check mode: inputs not read");
            return Ok(FilterOutcome::unchanged());
        }

        let calendar = self.load_calendar(request)?;
        let rows = roster::read_roster(&request.roster_path)?;

        info!(
            holidays = calendar.len(),
            year = calendar.year(),
            mode = ?calendar.mode(),
            rows = rows.len(),
            today = %request.today,
            threshold = self.filter.config().threshold,
            "running inactivity filter"
        );

        self.filter.run(&rows, &calendar, request.today)
    }

    /// Same as [`execute`](Self::execute), with any error turned into a
    /// failure outcome. Partial results are never returned.
    pub fn run(&self, request: &RunRequest) -> FilterOutcome {
        match self.execute(request) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "inactivity filter failed");
                FilterOutcome::failure(e)
            }
        }
    }
}
