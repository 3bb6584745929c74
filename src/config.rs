// Runtime settings for the booking demo, loaded from the environment
use crate::booking::DEFAULT_SERVICE_FEE;
use crate::format::DEFAULT_CURRENCY_SYMBOL;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub service_fee: f64,
    pub currency_symbol: String,
    pub log_level: String,
    // Builtin dataset when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_fee: DEFAULT_SERVICE_FEE,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: "info".to_string(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    // Reads BOOKING_* variables, picking up a .env file when present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let service_fee = match lookup("BOOKING_SERVICE_FEE") {
            Some(raw) => parse_amount("BOOKING_SERVICE_FEE", &raw)?,
            None => defaults.service_fee,
        };

        Ok(Self {
            service_fee,
            currency_symbol: lookup("BOOKING_CURRENCY_SYMBOL")
                .filter(|symbol| !symbol.trim().is_empty())
                .unwrap_or(defaults.currency_symbol),
            log_level: lookup("BOOKING_LOG_LEVEL").unwrap_or(defaults.log_level),
            catalog_path: lookup("BOOKING_CATALOG_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_amount(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.service_fee, 50.0);
        assert_eq!(config.currency_symbol, "₺");
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BOOKING_SERVICE_FEE", "75.5"),
            ("BOOKING_CURRENCY_SYMBOL", "€"),
            ("BOOKING_LOG_LEVEL", "debug"),
            ("BOOKING_CATALOG_PATH", "data/catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.service_fee, 75.5);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
    }

    #[test]
    fn test_rejects_invalid_service_fee() {
        for raw in ["fifty", "-5", "inf"] {
            let result = AppConfig::from_lookup(lookup_from(&[("BOOKING_SERVICE_FEE", raw)]));
            assert_eq!(
                result,
                Err(ConfigError::InvalidNumber {
                    key: "BOOKING_SERVICE_FEE",
                    value: raw.to_string()
                })
            );
        }
    }
}
