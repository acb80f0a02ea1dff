// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::output::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::error::{CleanerError, Result};
use std::env;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Cleaner configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Multi-document manifest to read
    pub input: PathBuf,
    /// Where the cleaned manifest is written
    pub output: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the demo layout
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let input = lookup("MANIFEST_INPUT").unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let output = lookup("MANIFEST_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let config = Config {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(CleanerError::Config("MANIFEST_INPUT is empty".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(CleanerError::Config("MANIFEST_OUTPUT is empty".to_string()));
        }
        if self.input == self.output {
            return Err(CleanerError::Config(format!(
                "input and output both point to {}",
                self.input.display()
            )));
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(CleanerError::Config(format!(
                "LOG_LEVEL {:?} is not one of off, error, warn, info, debug, trace",
                self.log_level
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            ("MANIFEST_INPUT", "in.yaml"),
            ("MANIFEST_OUTPUT", "out.yaml"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.input, PathBuf::from("in.yaml"));
        assert_eq!(config.output, PathBuf::from("out.yaml"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_same_input_and_output() {
        let err = Config::from_lookup(lookup_from(&[
            ("MANIFEST_INPUT", "same.yaml"),
            ("MANIFEST_OUTPUT", "same.yaml"),
        ]))
        .unwrap_err();

        assert!(matches!(err, CleanerError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_input() {
        let err = Config::from_lookup(lookup_from(&[("MANIFEST_INPUT", "")])).unwrap_err();
        assert!(matches!(err, CleanerError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        for level in ["inf", "verbose", "cart=debug"] {
            let err = Config::from_lookup(lookup_from(&[("LOG_LEVEL", level)])).unwrap_err();
            assert!(matches!(err, CleanerError::Config(_)), "{level}");
        }
    }

    #[test]
    fn test_accepts_any_case_log_level() {
        let config = Config::from_lookup(lookup_from(&[("LOG_LEVEL", "WARN")])).unwrap();
        assert_eq!(config.log_level, "WARN");
    }

    #[test]
    fn test_default_matches_unset_env() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
    }
}
