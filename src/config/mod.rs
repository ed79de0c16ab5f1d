use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_source_a_label")]
    pub source_a_label: String,
    #[serde(default = "default_source_b_label")]
    pub source_b_label: String,
    #[serde(default = "default_cutoff_time")]
    pub cutoff_time: String,
    #[serde(default = "default_known_stations")]
    pub known_stations: Vec<String>,
    #[serde(default)]
    pub default_station: String,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub severity: SeverityConfig,
    #[serde(default)]
    pub source_a: SourceAConfig,
    #[serde(default)]
    pub source_b: SourceBConfig,
}

/// How a source-A record picks its source-B partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Every source-A record may pick any source-B record, even one already
    /// picked by an earlier source-A record.
    Greedy,
    /// A source-B record picked once is removed from later candidate lists.
    Exclusive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchingConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_strategy")]
    pub strategy: MatchStrategy,
}

/// Upper bounds (inclusive) of the Match, Minor and Moderate tiers.
/// Anything above `moderate_max` is Major.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeverityConfig {
    #[serde(default = "default_match_max")]
    pub match_max: f64,
    #[serde(default = "default_minor_max")]
    pub minor_max: f64,
    #[serde(default = "default_moderate_max")]
    pub moderate_max: f64,
}

/// Layout of the punch-clock timecard export (source A).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceAConfig {
    #[serde(default = "default_a_marker")]
    pub header_marker: String,
    #[serde(default = "default_fallback_header_row")]
    pub fallback_header_row: usize,
    #[serde(default)]
    pub name_column: usize,
    #[serde(default = "default_time_in_column")]
    pub time_in_column: usize,
    #[serde(default = "default_time_out_column")]
    pub time_out_column: usize,
    #[serde(default = "default_max_break_minutes")]
    pub max_break_minutes: f64,
}

/// Header markers of the app break log (source B), matched as substrings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceBConfig {
    #[serde(default = "default_b_marker")]
    pub header_marker: String,
    #[serde(default = "default_transporter_marker")]
    pub transporter_marker: String,
    #[serde(default = "default_start_marker")]
    pub start_marker: String,
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
    #[serde(default = "default_minutes_markers")]
    pub minutes_markers: Vec<String>,
}

fn default_source_a_label() -> String {
    "ADP".to_string()
}
fn default_source_b_label() -> String {
    "Amazon app".to_string()
}
fn default_cutoff_time() -> String {
    "5 PM".to_string()
}
fn default_known_stations() -> Vec<String> {
    vec!["DFH1".to_string(), "DVB8".to_string()]
}
fn default_threshold() -> f64 {
    0.33
}
fn default_strategy() -> MatchStrategy {
    MatchStrategy::Greedy
}
fn default_match_max() -> f64 {
    1.0
}
fn default_minor_max() -> f64 {
    5.0
}
fn default_moderate_max() -> f64 {
    15.0
}
fn default_a_marker() -> String {
    "Time In".to_string()
}
fn default_fallback_header_row() -> usize {
    2
}
fn default_time_in_column() -> usize {
    5
}
fn default_time_out_column() -> usize {
    6
}
fn default_max_break_minutes() -> f64 {
    120.0
}
fn default_b_marker() -> String {
    "DA Name".to_string()
}
fn default_transporter_marker() -> String {
    "Transporter".to_string()
}
fn default_start_marker() -> String {
    "Break Start".to_string()
}
fn default_end_marker() -> String {
    "Break End".to_string()
}
fn default_minutes_markers() -> Vec<String> {
    vec!["Duration".to_string(), "Minutes".to_string()]
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            strategy: default_strategy(),
        }
    }
}

impl Default for SeverityConfig {
    fn default() -> Self {
        Self {
            match_max: default_match_max(),
            minor_max: default_minor_max(),
            moderate_max: default_moderate_max(),
        }
    }
}

impl Default for SourceAConfig {
    fn default() -> Self {
        Self {
            header_marker: default_a_marker(),
            fallback_header_row: default_fallback_header_row(),
            name_column: 0,
            time_in_column: default_time_in_column(),
            time_out_column: default_time_out_column(),
            max_break_minutes: default_max_break_minutes(),
        }
    }
}

impl Default for SourceBConfig {
    fn default() -> Self {
        Self {
            header_marker: default_b_marker(),
            transporter_marker: default_transporter_marker(),
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
            minutes_markers: default_minutes_markers(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_a_label: default_source_a_label(),
            source_b_label: default_source_b_label(),
            cutoff_time: default_cutoff_time(),
            known_stations: default_known_stations(),
            default_station: String::new(),
            matching: MatchingConfig::default(),
            severity: SeverityConfig::default(),
            source_a: SourceAConfig::default(),
            source_b: SourceBConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbreakcheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rbreakcheck")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbreakcheck.conf")
    }

    /// Resolve the config path, honouring a `--config` override.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject tier bounds and thresholds that would make classification
    /// ambiguous.
    pub fn validate(&self) -> AppResult<()> {
        let m = &self.matching;
        if !(m.threshold > 0.0 && m.threshold <= 1.0) {
            return Err(AppError::Config(format!(
                "matching.threshold must be in (0, 1], got {}",
                m.threshold
            )));
        }

        let s = &self.severity;
        if !(s.match_max >= 0.0 && s.match_max <= s.minor_max && s.minor_max <= s.moderate_max) {
            return Err(AppError::Config(format!(
                "severity bounds must satisfy 0 <= match_max <= minor_max <= moderate_max \
                 (got {}, {}, {})",
                s.match_max, s.minor_max, s.moderate_max
            )));
        }

        if self.source_a.max_break_minutes <= 0.0 {
            return Err(AppError::Config(
                "source_a.max_break_minutes must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Write a default configuration file at `path`, creating its directory.
    /// An existing file is left untouched.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        if path.exists() {
            return Ok(false);
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(true)
    }
}
