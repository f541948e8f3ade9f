//! Engine configuration from environment variables.
//!
//! `main` loads `.env.local` / `.env` first, so these variables may come
//! from either the process environment or those files.

use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use snakeladder_shared::PlayerNames;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_OBSERVER_BUFFER: usize = 64;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Which origins the CORS layer admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// No CORS layer at all.
    Disabled,
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsOrigins,
    pub player_names: PlayerNames,
    /// Outbound queue length per realtime observer.
    pub observer_buffer: usize,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => parse_number("SERVER_PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let cors = match lookup("CORS_ALLOWED_ORIGINS") {
            None => CorsOrigins::Any,
            Some(raw) => parse_cors(&raw),
        };

        let defaults = PlayerNames::default();
        let player_names = PlayerNames::new(
            non_empty(lookup("PLAYER_ONE_NAME")).unwrap_or(defaults.first),
            non_empty(lookup("PLAYER_TWO_NAME")).unwrap_or(defaults.second),
        );

        let observer_buffer = match lookup("OBSERVER_CHANNEL_BUFFER") {
            Some(raw) => parse_number("OBSERVER_CHANNEL_BUFFER", &raw)?,
            None => DEFAULT_OBSERVER_BUFFER,
        };
        if observer_buffer == 0 {
            return Err(ConfigError::Invalid {
                var: "OBSERVER_CHANNEL_BUFFER",
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            host,
            port,
            cors,
            player_names,
            observer_buffer,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "SERVER_HOST",
                reason: e.to_string(),
            })
    }

    /// CORS layer for the action endpoints, or `None` when disabled.
    pub fn cors_layer(&self) -> Option<CorsLayer> {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE]);

        match &self.cors {
            CorsOrigins::Disabled => None,
            CorsOrigins::Any => Some(cors.allow_origin(Any)),
            CorsOrigins::List(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|s| HeaderValue::from_str(s).ok())
                    .collect();
                if origins.is_empty() {
                    return None;
                }
                Some(cors.allow_origin(origins))
            }
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            cors: CorsOrigins::Any,
            player_names: PlayerNames::default(),
            observer_buffer: DEFAULT_OBSERVER_BUFFER,
        }
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: raw.to_string(),
    })
}

fn parse_cors(raw: &str) -> CorsOrigins {
    let raw = raw.trim();
    if raw.is_empty() {
        return CorsOrigins::Disabled;
    }
    if raw == "*" {
        return CorsOrigins::Any;
    }
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() {
        CorsOrigins::Disabled
    } else {
        CorsOrigins::List(origins)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
        assert_eq!(config.cors, CorsOrigins::Any);
        assert_eq!(config.player_names, PlayerNames::default());
        assert_eq!(config.observer_buffer, 64);
    }

    #[test]
    fn port_falls_back_to_port_var() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);

        let config = config_from(&[("PORT", "8080"), ("SERVER_PORT", "9090")]).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = config_from(&[("SERVER_PORT", "http")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                var: "SERVER_PORT",
                value: "http".into()
            }
        );
    }

    #[test]
    fn zero_observer_buffer_is_rejected() {
        let err = config_from(&[("OBSERVER_CHANNEL_BUFFER", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn player_names_override_and_ignore_blank() {
        let config = config_from(&[("PLAYER_ONE_NAME", "Ada"), ("PLAYER_TWO_NAME", "  ")]).unwrap();
        assert_eq!(config.player_names, PlayerNames::new("Ada", "Ivan"));
    }

    #[test]
    fn cors_parsing() {
        assert_eq!(parse_cors("*"), CorsOrigins::Any);
        assert_eq!(parse_cors(""), CorsOrigins::Disabled);
        assert_eq!(parse_cors(" , "), CorsOrigins::Disabled);
        assert_eq!(
            parse_cors("http://localhost:3000, http://example.com"),
            CorsOrigins::List(vec![
                "http://localhost:3000".into(),
                "http://example.com".into()
            ])
        );
    }

    #[test]
    fn cors_layer_absent_when_disabled() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "")]).unwrap();
        assert!(config.cors_layer().is_none());
        assert!(EngineConfig::default().cors_layer().is_some());
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = config_from(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "4100")]).unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:4100");

        let bad = config_from(&[("SERVER_HOST", "not a host")]).unwrap();
        assert!(bad.socket_addr().is_err());
    }
}
