use crate::errors::{AppError, AppResult};
use crate::sheet::ParseOptions;
use crate::sheet::coerce::{DEFAULT_BILLABLE_KEYWORDS, NegativeMinutes};
use crate::sheet::layout::SheetLayout;
use crate::sheet::reconstruct::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub layout: SheetLayout,
    #[serde(default = "default_billable_keywords")]
    pub billable_keywords: Vec<String>,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    #[serde(default)]
    pub negative_minutes: NegativeMinutes,
    #[serde(default = "default_low_productivity")]
    pub low_productivity_mins: f64,
    #[serde(default = "default_working_days")]
    pub working_days: u32,
    #[serde(default = "default_daily_hours")]
    pub daily_hours: u32,
}

fn default_delimiter() -> String {
    ",".to_string()
}
fn default_billable_keywords() -> Vec<String> {
    DEFAULT_BILLABLE_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}
fn default_low_productivity() -> f64 {
    crate::core::anomalies::LOW_PRODUCTIVITY_MINS
}
fn default_working_days() -> u32 {
    22
}
fn default_daily_hours() -> u32 {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            layout: SheetLayout::default(),
            billable_keywords: default_billable_keywords(),
            duplicate_policy: DuplicatePolicy::default(),
            negative_minutes: NegativeMinutes::default(),
            low_productivity_mins: default_low_productivity(),
            working_days: default_working_days(),
            daily_hours: default_daily_hours(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        self.delimiter_byte()?;
        let l = &self.layout;
        if l.data_start_row <= l.date_row || l.data_start_row <= l.field_row {
            return Err(AppError::Config(
                "layout.data_start_row must come after the header rows".to_string(),
            ));
        }
        Ok(())
    }

    /// Single-byte delimiter; `\t` is accepted for tab.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_str() {
            "\\t" | "\t" => Ok(b'\t'),
            d if d.len() == 1 => Ok(d.as_bytes()[0]),
            other => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got '{other}'"
            ))),
        }
    }

    /// Expected minutes of one employee over the reporting period
    pub fn capacity_minutes(&self) -> Option<f64> {
        let mins = self.working_days as f64 * self.daily_hours as f64 * 60.0;
        (mins > 0.0).then_some(mins)
    }

    pub fn parse_options(&self) -> AppResult<ParseOptions> {
        Ok(ParseOptions {
            layout: self.layout,
            delimiter: self.delimiter_byte()?,
            billable_keywords: self.billable_keywords.clone(),
            duplicate_policy: self.duplicate_policy,
            negative_minutes: self.negative_minutes,
        })
    }

    /// Write the default configuration to `path`, creating parent directories
    pub fn init_at(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let config = Self::default();
        fs::write(path, serde_yaml::to_string(&config)?)?;
        Ok(config)
    }

    /// Top-level keys that the file at `path` does not set (defaults apply)
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path)?;
        let file: Value = serde_yaml::from_str(&content)?;
        let defaults = serde_yaml::to_value(Self::default())?;

        let (Some(file_map), Some(default_map)) = (file.as_mapping(), defaults.as_mapping())
        else {
            return Err(AppError::Config(format!(
                "{} is not a YAML mapping",
                path.display()
            )));
        };

        Ok(default_map
            .keys()
            .filter(|k| !file_map.contains_key(*k))
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect())
    }
}
