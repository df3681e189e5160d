use crate::errors::{AppError, AppResult};

/// Column positions of the fields the filter reads from a roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSchema {
    pub last_activity_col: usize,
    pub org_unit_col: usize,
}

impl Default for RosterSchema {
    fn default() -> Self {
        Self {
            last_activity_col: 4,
            org_unit_col: 8,
        }
    }
}

impl RosterSchema {
    /// Minimum number of fields a data row must carry.
    pub fn min_len(&self) -> usize {
        self.last_activity_col.max(self.org_unit_col) + 1
    }
}

/// Named view over one data row of the roster.
#[derive(Debug, Clone, Copy)]
pub struct RosterRecord<'a> {
    /// 1-based row number in the file, header included.
    pub row: usize,
    pub fields: &'a [String],
    pub last_activity: &'a str,
    pub org_unit: &'a str,
}

impl<'a> RosterRecord<'a> {
    pub fn from_fields(row: usize, fields: &'a [String], schema: &RosterSchema) -> AppResult<Self> {
        let expected = schema.min_len();
        if fields.len() < expected {
            return Err(AppError::MalformedRow {
                row,
                expected,
                found: fields.len(),
            });
        }

        Ok(Self {
            row,
            fields,
            last_activity: &fields[schema.last_activity_col],
            org_unit: &fields[schema.org_unit_col],
        })
    }

    /// Every field after the first one (the reported payload).
    pub fn payload(&self) -> &'a [String] {
        &self.fields[1..]
    }
}
