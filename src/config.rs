//! Runtime configuration for the terminal binary.
//!
//! Read from environment variables; missing or invalid values fall back to
//! the defaults.
//!
//! - `BOULDER_LEVEL_PATH`: JSON level file (default: built-in canonical level)
//! - `BOULDER_TICK_MS`: tick interval in milliseconds (default: 33)
//! - `BOULDER_MAX_PENDING`: commands buffered per tick (default: 16)
//! - `BOULDER_REQUIRE_BORDER`: set to "0" or "false" to allow open levels
//! - `BOULDER_LOG_PATH`: write logs to this file (filter with `RUST_LOG`)

use std::path::PathBuf;

use crate::core::{Level, LevelError, LevelRules};
use crate::types::{DEFAULT_MAX_PENDING, MAX_PENDING_COMMANDS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub level_path: Option<PathBuf>,
    pub tick_ms: u32,
    pub max_pending_commands: usize,
    pub require_border: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level_path: None,
            tick_ms: TICK_MS,
            max_pending_commands: DEFAULT_MAX_PENDING,
            require_border: true,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_ms = non_empty("BOULDER_TICK_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let max_pending_commands = non_empty("BOULDER_MAX_PENDING")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_PENDING_COMMANDS).contains(&n))
            .unwrap_or(defaults.max_pending_commands);

        let require_border = non_empty("BOULDER_REQUIRE_BORDER")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(defaults.require_border);

        Self {
            level_path: non_empty("BOULDER_LEVEL_PATH").map(PathBuf::from),
            tick_ms,
            max_pending_commands,
            require_border,
            log_path: non_empty("BOULDER_LOG_PATH").map(PathBuf::from),
        }
    }

    pub fn level_rules(&self) -> LevelRules {
        LevelRules {
            require_border: self.require_border,
        }
    }

    /// The configured level file, or the canonical level when none is set.
    pub fn load_level(&self) -> Result<Level, LevelError> {
        match &self.level_path {
            Some(path) => Level::from_path(path, self.level_rules()),
            None => Ok(Level::canonical()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn parses_values() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("BOULDER_LEVEL_PATH", "levels/one.json"),
            ("BOULDER_TICK_MS", "50"),
            ("BOULDER_MAX_PENDING", "4"),
            ("BOULDER_REQUIRE_BORDER", "false"),
            ("BOULDER_LOG_PATH", " /tmp/boulder.log "),
        ]));
        assert_eq!(cfg.level_path, Some(PathBuf::from("levels/one.json")));
        assert_eq!(cfg.tick_ms, 50);
        assert_eq!(cfg.max_pending_commands, 4);
        assert!(!cfg.require_border);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/boulder.log")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("BOULDER_TICK_MS", "0"),
            ("BOULDER_MAX_PENDING", "100000"),
            ("BOULDER_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.max_pending_commands, DEFAULT_MAX_PENDING);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn canonical_level_without_path() {
        let level = GameConfig::default().load_level().unwrap();
        assert_eq!(level.width(), 8);
        assert_eq!(level.height(), 6);
    }
}
