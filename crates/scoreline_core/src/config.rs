//! Core configuration
//!
//! ```rust
//! use scoreline_core::config::CoreConfig;
//!
//! let config = CoreConfig::default();
//! assert_eq!(config.ranking.top_n, 5);
//! ```
//!
//! Only parsing and validation live here; callers decide where the JSON
//! comes from.

use crate::error::ConfigError;
use crate::models::MatchStatus;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Rows kept by top-N views (scorers, batsmen, bowlers)
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

/// Status codes the convenience views filter on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchStatusConfig {
    pub live_status: String,
    pub upcoming_status: String,
    pub completed_status: String,
}

impl Default for MatchStatusConfig {
    fn default() -> Self {
        Self {
            live_status: MatchStatus::IN_PROGRESS.to_string(),
            upcoming_status: MatchStatus::SCHEDULED.to_string(),
            completed_status: MatchStatus::COMPLETED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistConfig {
    pub dir: PathBuf,
    /// Upper bound for an encoded snapshot
    pub max_bytes: usize,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("snapshots"), max_bytes: 64 * 1024 * 1024 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub ranking: RankingConfig,
    pub matches: MatchStatusConfig,
    pub persist: PersistConfig,
}

impl CoreConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranking.top_n == 0 {
            return Err(ConfigError::Invalid("ranking.top_n must be at least 1".to_string()));
        }

        let statuses = [
            ("matches.live_status", &self.matches.live_status),
            ("matches.upcoming_status", &self.matches.upcoming_status),
            ("matches.completed_status", &self.matches.completed_status),
        ];
        for (key, value) in statuses {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }

        if self.persist.max_bytes < 64 {
            return Err(ConfigError::Invalid("persist.max_bytes is too small".to_string()));
        }

        Ok(())
    }
}
