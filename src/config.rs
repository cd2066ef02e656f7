use std::time::Duration;

use crate::error::AppError;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings read from the environment. Command-specific options live on the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model: Option<ModelConfig>,
}

/// Remote language model settings; present only when an API key is set.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Config("PORT must be a number".into()))?;

        let model = match lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()) {
            Some(api_key) => {
                let timeout_secs: u64 = lookup("MODEL_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .map_err(|_| AppError::Config("MODEL_TIMEOUT_SECS must be a number".into()))?;
                Some(ModelConfig {
                    api_key,
                    model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                    base_url: lookup("GEMINI_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Self { host, port, model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.model.is_none());
    }

    #[test]
    fn api_key_enables_model() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("MODEL_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        let model = config.model.unwrap();
        assert_eq!(model.api_key, "secret");
        assert_eq!(model.model, DEFAULT_MODEL);
        assert_eq!(model.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert!(config.model.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
