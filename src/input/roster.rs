use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read every row of a roster CSV, header included, as raw string fields.
pub fn read_roster(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let data = fs::read(path).map_err(|e| AppError::unavailable(path, e))?;
    let rows = parse_roster(data.as_slice())?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "roster read");
    Ok(rows)
}

/// Rows may have different lengths; length checks belong to the filter.
pub fn parse_roster<R: Read>(reader: R) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
