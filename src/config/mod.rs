use crate::core::calendar::HolidayMode;
use crate::core::filter::{
    DEFAULT_EXCLUDED_ORG_UNIT, DEFAULT_HOLIDAY_YEAR, DEFAULT_THRESHOLD, ErrorPolicy, FilterConfig,
};
use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterSchema;
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_holiday_year")]
    pub holiday_year: i32,
    #[serde(default)]
    pub holiday_mode: HolidayMode,
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    #[serde(default = "default_excluded_org_unit")]
    pub excluded_org_unit: String,
    #[serde(default = "default_last_activity_column")]
    pub last_activity_column: usize,
    #[serde(default = "default_org_unit_column")]
    pub org_unit_column: usize,
    #[serde(default)]
    pub error_policy: ErrorPolicy,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_holiday_year() -> i32 {
    DEFAULT_HOLIDAY_YEAR
}
fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD
}
fn default_excluded_org_unit() -> String {
    DEFAULT_EXCLUDED_ORG_UNIT.to_string()
}
fn default_last_activity_column() -> usize {
    RosterSchema::default().last_activity_col
}
fn default_org_unit_column() -> usize {
    RosterSchema::default().org_unit_col
}

impl Default for Config {
    fn default() -> Self {
        Self {
            holiday_year: default_holiday_year(),
            holiday_mode: HolidayMode::default(),
            threshold: default_threshold(),
            excluded_org_unit: default_excluded_org_unit(),
            last_activity_column: default_last_activity_column(),
            org_unit_column: default_org_unit_column(),
            error_policy: ErrorPolicy::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rinactive")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rinactive.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn schema(&self) -> RosterSchema {
        RosterSchema {
            last_activity_col: self.last_activity_column,
            org_unit_col: self.org_unit_column,
        }
    }

    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            threshold: self.threshold,
            excluded_org_unit: self.excluded_org_unit.clone(),
            schema: self.schema(),
            error_policy: self.error_policy,
        }
    }
}
