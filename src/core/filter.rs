//! Roster scan: exclusion rules, inactivity computation and threshold test.

use crate::core::calculator::business_days;
use crate::core::calendar::HolidayCalendar;
use crate::errors::{AppError, AppResult};
use crate::models::outcome::{FilterOutcome, InactivityResult, RowError};
use crate::models::roster::{RosterRecord, RosterSchema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_THRESHOLD: i64 = 45;
pub const DEFAULT_HOLIDAY_YEAR: i32 = 2022;
pub const DEFAULT_EXCLUDED_ORG_UNIT: &str =
    "District Offices/NYC Executive/User Accounts/Commissioners";

/// Last-activity value of a user that never logged in.
pub const NEVER_ACTIVE: &str = "0";

/// What to do with a row that cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first bad row; no partial result.
    #[default]
    Abort,
    /// Record the row in `skipped` and keep going.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub threshold: i64,
    pub excluded_org_unit: String,
    pub schema: RosterSchema,
    pub error_policy: ErrorPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            excluded_org_unit: DEFAULT_EXCLUDED_ORG_UNIT.to_string(),
            schema: RosterSchema::default(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

/// Parse the leading `YYYY-MM-DD` token of a last-activity field.
/// Anything after the first space (a time of day, usually) is ignored.
pub fn parse_last_activity(field: &str) -> AppResult<NaiveDate> {
    let malformed = || AppError::MalformedDateField(field.to_string());

    let token = field.split(' ').next().unwrap_or_default();
    let parts: Vec<&str> = token.split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(malformed());
    };

    let year = y.parse::<i32>().map_err(|_| malformed())?;
    let month = m.parse::<u32>().map_err(|_| malformed())?;
    let day = d.parse::<u32>().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

pub struct InactivityFilter {
    config: FilterConfig,
}

impl InactivityFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Scan the roster (first row is the header) and collect the users
    /// inactive for at least `threshold` business days as of `today`.
    pub fn run(
        &self,
        rows: &[Vec<String>],
        holidays: &HolidayCalendar,
        today: NaiveDate,
    ) -> AppResult<FilterOutcome> {
        let mut users = Vec::new();
        let mut skipped = Vec::new();

        for (idx, fields) in rows.iter().enumerate().skip(1) {
            let row = idx + 1;
            match self.evaluate(row, fields, holidays, today) {
                Ok(Some(result)) => users.push(result),
                Ok(None) => {}
                Err(e) => match self.config.error_policy {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Skip => {
                        warn!(row, error = %e, "skipping row");
                        skipped.push(RowError {
                            row,
                            error: e.to_string(),
                        });
                    }
                },
            }
        }

        debug!(
            rows = rows.len().saturating_sub(1),
            inactive = users.len(),
            skipped = skipped.len(),
            "roster scanned"
        );

        let header = rows
            .first()
            .map(|h| h.iter().skip(1).cloned().collect())
            .unwrap_or_default();

        Ok(FilterOutcome::from_users(users, skipped).with_header(header))
    }

    /// Evaluate one data row. `Ok(None)` means the row is excluded or below
    /// the threshold.
    pub fn evaluate(
        &self,
        row: usize,
        fields: &[String],
        holidays: &HolidayCalendar,
        today: NaiveDate,
    ) -> AppResult<Option<InactivityResult>> {
        let record = RosterRecord::from_fields(row, fields, &self.config.schema)?;

        if record.org_unit == self.config.excluded_org_unit {
            debug!(row, "excluded organizational unit");
            return Ok(None);
        }
        if record.last_activity == NEVER_ACTIVE {
            debug!(row, "never active");
            return Ok(None);
        }

        let last = parse_last_activity(record.last_activity)?;
        let inactive_days = business_days::count(last, today, holidays)? - 1;

        if inactive_days < self.config.threshold {
            return Ok(None);
        }

        Ok(Some(InactivityResult {
            fields: record.payload().to_vec(),
            inactive_days,
        }))
    }
}
