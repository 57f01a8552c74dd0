use std::{env, str::FromStr};

use complex_rs::format::DISPLAY_DECIMALS;
use log::LevelFilter;

pub const LOG_LEVEL_VAR: &str = "COMPLEX_LOG_LEVEL";
pub const DISPLAY_DECIMALS_VAR: &str = "COMPLEX_DISPLAY_DECIMALS";
pub const VERIFY_SAMPLES_VAR: &str = "COMPLEX_VERIFY_SAMPLES";
pub const VERIFY_TOLERANCE_VAR: &str = "COMPLEX_VERIFY_TOLERANCE";

/// Runtime settings, read from the environment (and `.env`, see
/// [`crate::env::init`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub display_decimals: usize,
    pub verify_samples: usize,
    pub verify_tolerance: f64,
    /// Variables that were set but could not be parsed, as `NAME=value`.
    /// The logger is not up yet when the config is read, so the caller
    /// reports them.
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            display_decimals: DISPLAY_DECIMALS,
            verify_samples: 1000,
            verify_tolerance: 1e-9,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut rejected = Vec::new();

        let log_level = read(&lookup, LOG_LEVEL_VAR, defaults.log_level, &mut rejected);
        let display_decimals = read(
            &lookup,
            DISPLAY_DECIMALS_VAR,
            defaults.display_decimals,
            &mut rejected,
        );
        let verify_samples = read(
            &lookup,
            VERIFY_SAMPLES_VAR,
            defaults.verify_samples,
            &mut rejected,
        );
        let mut verify_tolerance = read(
            &lookup,
            VERIFY_TOLERANCE_VAR,
            defaults.verify_tolerance,
            &mut rejected,
        );
        if !(verify_tolerance.is_finite() && verify_tolerance > 0.0) {
            rejected.push(format!("{}={}", VERIFY_TOLERANCE_VAR, verify_tolerance));
            verify_tolerance = defaults.verify_tolerance;
        }

        Self {
            log_level,
            display_decimals,
            verify_samples,
            verify_tolerance,
            rejected,
        }
    }
}

fn read<T, F>(lookup: &F, key: &str, default: T, rejected: &mut Vec<String>) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            rejected.push(format!("{}={}", key, raw));
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (LOG_LEVEL_VAR, "debug"),
            (DISPLAY_DECIMALS_VAR, "4"),
            (VERIFY_SAMPLES_VAR, " 25 "),
            (VERIFY_TOLERANCE_VAR, "1e-6"),
        ]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.display_decimals, 4);
        assert_eq!(config.verify_samples, 25);
        assert_eq!(config.verify_tolerance, 1e-6);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let config = config_from(&[
            (LOG_LEVEL_VAR, "loud"),
            (DISPLAY_DECIMALS_VAR, "-3"),
            (VERIFY_TOLERANCE_VAR, "-1"),
        ]);
        let defaults = Config::default();
        assert_eq!(config.log_level, defaults.log_level);
        assert_eq!(config.display_decimals, defaults.display_decimals);
        assert_eq!(config.verify_tolerance, defaults.verify_tolerance);
        assert_eq!(
            config.rejected,
            vec![
                "COMPLEX_LOG_LEVEL=loud".to_string(),
                "COMPLEX_DISPLAY_DECIMALS=-3".to_string(),
                "COMPLEX_VERIFY_TOLERANCE=-1".to_string(),
            ]
        );
    }
}
