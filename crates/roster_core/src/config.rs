//! Runtime configuration resolved from the process environment.
//!
//! # Responsibility
//! - Resolve store location and logging settings with stable defaults.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - `log_dir` is always absolute (relative values are joined onto `cwd`).

use crate::logging::{default_log_level, normalize_level};
use crate::store::DEFAULT_DB_FILE_NAME;
use std::path::{Path, PathBuf};

pub const ENV_DB_PATH: &str = "ROSTER_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ROSTER_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

/// Effective settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
}

impl RosterConfig {
    /// Reads `ROSTER_*` variables, falling back to defaults under `cwd`.
    pub fn from_env(cwd: &Path) -> Self {
        Self::resolve(cwd, |key| std::env::var(key).ok())
    }

    /// Resolves settings from an arbitrary variable lookup.
    ///
    /// An unsupported `ROSTER_LOG_LEVEL` falls back to the build default.
    pub fn resolve(cwd: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = read(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));
        let log_level = read(ENV_LOG_LEVEL)
            .and_then(|raw| normalize_level(&raw).ok())
            .unwrap_or_else(default_log_level);
        let log_dir = read(ENV_LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR_NAME));
        let log_dir = if log_dir.is_absolute() {
            log_dir
        } else {
            cwd.join(log_dir)
        };

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}
