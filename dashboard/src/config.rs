//! Dashboard configuration file support.
//!
//! Wait-time thresholds and the eGate age limit are operational policy, not
//! constants, so they load from a TOML file with the historical values as
//! defaults. A missing file or missing keys fall back to those defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::domain::QueueKind;
use crate::error::DashboardError;

/// Wait-time highlight thresholds, in minutes.
///
/// A wait strictly above `breach_minutes` is a breach on every queue. Each
/// queue also has a warning band `[warning, breach_minutes)`; the non-EEA
/// band starts later than the other two, which is intentional. A wait equal
/// to `breach_minutes` exactly falls in neither band and carries no
/// highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitThresholds {
    #[serde(default = "default_breach_minutes")]
    pub breach_minutes: u32,
    #[serde(default = "default_desk_warning_minutes")]
    pub egates_warning_minutes: u32,
    #[serde(default = "default_desk_warning_minutes")]
    pub eea_warning_minutes: u32,
    #[serde(default = "default_non_eea_warning_minutes")]
    pub non_eea_warning_minutes: u32,
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub thresholds: WaitThresholds,
    /// Minimum age for automated clearance (eGate) eligibility.
    #[serde(default = "default_egate_min_age")]
    pub egate_min_age: u32,
}

fn default_breach_minutes() -> u32 {
    60
}

fn default_desk_warning_minutes() -> u32 {
    25
}

fn default_non_eea_warning_minutes() -> u32 {
    45
}

fn default_egate_min_age() -> u32 {
    11
}

impl Default for WaitThresholds {
    fn default() -> Self {
        Self {
            breach_minutes: default_breach_minutes(),
            egates_warning_minutes: default_desk_warning_minutes(),
            eea_warning_minutes: default_desk_warning_minutes(),
            non_eea_warning_minutes: default_non_eea_warning_minutes(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            thresholds: WaitThresholds::default(),
            egate_min_age: default_egate_min_age(),
        }
    }
}

impl WaitThresholds {
    /// Lower bound of the warning band for the given queue.
    pub fn warning_minutes(&self, queue: QueueKind) -> u32 {
        match queue {
            QueueKind::EGates => self.egates_warning_minutes,
            QueueKind::EeaDesk => self.eea_warning_minutes,
            QueueKind::NonEeaDesk => self.non_eea_warning_minutes,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DashboardError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: DashboardConfig = toml::from_str(&content).map_err(|e| {
            DashboardError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in the current directory and then its
    /// parent; falls back to defaults when no file is found.
    pub fn load_default() -> Self {
        for candidate in ["dashboard.toml", "../dashboard.toml"] {
            if Path::new(candidate).exists() {
                match Self::from_file(candidate) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::warn!("Ignoring unreadable config {}: {}", candidate, e);
                    }
                }
            }
        }
        Self::default()
    }
}
