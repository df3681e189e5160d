use serde::Deserialize;
use std::fmt;

/// A month or day value as it appears in the holiday file.
///
/// Both `7` and `"7"` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateComponent {
    Number(i64),
    Text(String),
}

impl DateComponent {
    /// Convert to a 1-based calendar component, if it is a non-negative integer.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            DateComponent::Number(n) => u32::try_from(*n).ok(),
            DateComponent::Text(s) => s.trim().parse::<u32>().ok(),
        }
    }
}

impl fmt::Display for DateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateComponent::Number(n) => write!(f, "{n}"),
            DateComponent::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<u32> for DateComponent {
    fn from(v: u32) -> Self {
        DateComponent::Number(i64::from(v))
    }
}

/// One entry of the holiday file: `{ "month": 12, "day": 25 }`.
/// Any other key (e.g. `name`) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayEntry {
    pub month: DateComponent,
    pub day: DateComponent,
}

impl HolidayEntry {
    pub fn new(month: u32, day: u32) -> Self {
        Self {
            month: month.into(),
            day: day.into(),
        }
    }
}
