// src/output/mod.rs

pub mod json;
pub mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable outcome for automation tools
    #[default]
    Json,
    /// Summary line plus a table of inactive users
    Text,
}
