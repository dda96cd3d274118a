//! Runtime configuration.
//!
//! # Design
//! Everything externally supplied comes in through environment variables,
//! parsed once in `main` and passed by parameter from there on. The CORS
//! origin is the one value a deployment must be able to change (it has to
//! match the companion front-end's URL), so it is validated as a legal
//! header value at load time rather than at request time.

use std::str::FromStr;

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Configuration errors reported at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),

    #[error("unknown seed mode {0:?} (expected off, fixed, or demo)")]
    UnknownSeedMode(String),
}

/// Startup seeding behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// No sample data.
    Off,
    /// Sample todos with `completed = false`. Deterministic, the default.
    Fixed,
    /// Sample todos with random `completed` values, for manual demos.
    Demo,
}

impl FromStr for SeedMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(SeedMode::Off),
            "fixed" => Ok(SeedMode::Fixed),
            "demo" => Ok(SeedMode::Demo),
            other => Err(ConfigError::UnknownSeedMode(other.to_string())),
        }
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub seed: SeedMode,
    allowed_origin: HeaderValue,
}

impl Config {
    pub fn new(port: u16, origin: &str, seed: SeedMode) -> Result<Self, ConfigError> {
        let allowed_origin = HeaderValue::from_str(origin)
            .map_err(|_: InvalidHeaderValue| ConfigError::InvalidOrigin(origin.to_string()))?;
        Ok(Self {
            port,
            seed,
            allowed_origin,
        })
    }

    /// Read configuration from `PORT`, `CORS_ORIGIN`, and `TODO_SEED`.
    /// Unset variables fall back to defaults; set-but-invalid values are
    /// startup errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v))?,
            Err(_) => DEFAULT_PORT,
        };
        let origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        let seed = match std::env::var("TODO_SEED") {
            Ok(v) => v.parse()?,
            Err(_) => SeedMode::Fixed,
        };
        Self::new(port, &origin, seed)
    }

    /// The origin allowed to read responses, as a ready-to-send header value.
    pub fn allowed_origin(&self) -> &HeaderValue {
        &self.allowed_origin
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed: SeedMode::Fixed,
            allowed_origin: HeaderValue::from_static(DEFAULT_ORIGIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_mode_parses_known_values() {
        assert_eq!("off".parse::<SeedMode>().unwrap(), SeedMode::Off);
        assert_eq!("fixed".parse::<SeedMode>().unwrap(), SeedMode::Fixed);
        assert_eq!("demo".parse::<SeedMode>().unwrap(), SeedMode::Demo);
    }

    #[test]
    fn seed_mode_rejects_unknown_values() {
        let err = "random".parse::<SeedMode>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSeedMode(ref v) if v == "random"));
    }

    #[test]
    fn new_accepts_valid_origin() {
        let config = Config::new(3000, "https://todo.example.com", SeedMode::Off).unwrap();
        assert_eq!(config.allowed_origin(), "https://todo.example.com");
    }

    #[test]
    fn new_rejects_origin_with_control_characters() {
        let err = Config::new(3000, "http://bad\norigin", SeedMode::Off).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrigin(_)));
    }

    #[test]
    fn default_matches_companion_front_end() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.seed, SeedMode::Fixed);
        assert_eq!(config.allowed_origin(), "http://localhost:8080");
    }
}
