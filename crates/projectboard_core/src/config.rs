//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve log level and log directory for front-ends.
//!
//! # Invariants
//! - Blank values count as unset.
//! - Level defaults to the build-mode default; the directory has no default,
//!   so file logging stays off unless asked for.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "PROJECTBOARD_LOG_LEVEL";
/// Environment variable enabling file logging in the given directory.
pub const ENV_LOG_DIR: &str = "PROJECTBOARD_LOG_DIR";

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Resolves configuration from process environment.
    ///
    /// # Errors
    /// - Returns an error when the level override is unsupported.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`.
    ///
    /// # Errors
    /// - Returns an error when the level override is unsupported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let log_level = match non_blank(lookup(ENV_LOG_LEVEL)) {
            Some(raw) => normalize_level(&raw)?,
            None => default_log_level(),
        };
        let log_dir = non_blank(lookup(ENV_LOG_DIR)).map(PathBuf::from);
        Ok(Self { log_level, log_dir })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::{default_log_level, LoggingError};
    use std::path::PathBuf;

    #[test]
    fn defaults_when_unset_or_blank() {
        let config = CoreConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);

        let config = CoreConfig::from_lookup(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn honours_overrides() {
        let config = CoreConfig::from_lookup(|key| match key {
            ENV_LOG_LEVEL => Some(" WARNING ".to_string()),
            ENV_LOG_DIR => Some("/tmp/projectboard".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/projectboard")));
    }

    #[test]
    fn rejects_unknown_level() {
        let err = CoreConfig::from_lookup(|key| {
            (key == ENV_LOG_LEVEL).then(|| "verbose".to_string())
        })
        .unwrap_err();
        assert_eq!(err, LoggingError::UnsupportedLevel("verbose".to_string()));
    }
}
