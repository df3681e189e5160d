use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

pub const MSG_INACTIVE: &str = "The following users are have been inactive for 45 days or more";
pub const MSG_NONE: &str = "No inactive users currently in the list";

/// A roster row that crossed the inactivity threshold.
///
/// Serialized as a flat array: the row fields (from index 1) followed by
/// the number of inactive business days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactivityResult {
    pub fields: Vec<String>,
    pub inactive_days: i64,
}

impl Serialize for InactivityResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.fields.len() + 1))?;
        for f in &self.fields {
            seq.serialize_element(f)?;
        }
        seq.serialize_element(&self.inactive_days)?;
        seq.end()
    }
}

/// A row dropped under the skip policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row: usize,
    pub error: String,
}

/// Result of one filter run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub changed: bool,
    pub failed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub users: Vec<InactivityResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<RowError>,
    /// Roster header columns matching `users` fields; used by text output.
    #[serde(skip)]
    pub header: Vec<String>,
}

impl FilterOutcome {
    pub fn from_users(users: Vec<InactivityResult>, skipped: Vec<RowError>) -> Self {
        let changed = !users.is_empty();
        Self {
            changed,
            failed: false,
            message: if changed { MSG_INACTIVE } else { MSG_NONE }.to_string(),
            msg: None,
            users,
            skipped,
            header: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = header;
        self
    }

    /// Empty outcome returned in check mode, before anything is read.
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            failed: false,
            message: String::new(),
            msg: None,
            users: Vec::new(),
            skipped: Vec::new(),
            header: Vec::new(),
        }
    }

    /// Failure outcome: no users, `changed=false`, error text in both
    /// `message` and `msg`.
    pub fn failure<E: std::fmt::Display>(err: E) -> Self {
        let text = err.to_string();
        Self {
            changed: false,
            failed: true,
            message: text.clone(),
            msg: Some(text),
            users: Vec::new(),
            skipped: Vec::new(),
            header: Vec::new(),
        }
    }
}
