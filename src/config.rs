use anyhow::{Context, Result};
use std::str::FromStr;

use crate::core::SESSION_TTL_SECONDS;

/// Runtime settings, read from the environment (and `.env` if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `development` allows any CORS origin and enables debug logging
    pub environment: String,
    pub session_ttl_seconds: u64,
    /// Origins allowed to call the API outside development
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "production".to_string(),
            session_ttl_seconds: SESSION_TTL_SECONDS,
            cors_origins: vec![
                "http://localhost:8000".to_string(),
                "http://127.0.0.1:8000".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load `.env` (if any) and build the config from process variables
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            session_ttl_seconds: parse_var(
                &lookup,
                "SESSION_TTL_SECONDS",
                defaults.session_ttl_seconds,
            )?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| parse_list(&raw))
                .unwrap_or(defaults.cors_origins),
        })
    }

    pub fn is_development(&self) -> bool {
        matches!(self.environment.as_str(), "development" | "dev")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.is_development() {
            "werewolf_dealer=debug,tower_http=info"
        } else {
            "werewolf_dealer=info,tower_http=warn"
        }
    }
}

/// Split a comma-separated variable, dropping blank entries
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(!config.is_development());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("ENVIRONMENT", "development"),
            ("SESSION_TTL_SECONDS", "600"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert!(config.is_development());
        assert_eq!(config.session_ttl_seconds, 600);
        assert_eq!(config.log_filter(), "werewolf_dealer=debug,tower_http=info");
    }

    #[test]
    fn test_cors_origins_from_list() {
        let config = Config::from_lookup(lookup_from(&[(
            "CORS_ORIGINS",
            "https://wolves.example, ,http://10.0.0.5:3000",
        )]))
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["https://wolves.example", "http://10.0.0.5:3000"]
        );
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
