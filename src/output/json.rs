use crate::errors::AppResult;
use crate::models::outcome::FilterOutcome;

/// Serialize the outcome as pretty JSON.
pub fn to_json(outcome: &FilterOutcome) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
