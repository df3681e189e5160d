use crate::errors::{AppError, AppResult};
use crate::models::holiday::HolidayEntry;
use std::fs;
use std::path::Path;

/// Read a JSON array of `{ "month": .., "day": .. }` objects.
pub fn read_holidays(path: &Path) -> AppResult<Vec<HolidayEntry>> {
    let content = fs::read_to_string(path).map_err(|e| AppError::unavailable(path, e))?;
    let entries = parse_holidays(&content)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "holiday file read");
    Ok(entries)
}

pub fn parse_holidays(content: &str) -> AppResult<Vec<HolidayEntry>> {
    Ok(serde_json::from_str(content)?)
}
