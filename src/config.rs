use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a configuration value cannot be parsed or fails validation.
/// Fatal at startup; the loader performs no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid configuration value for `{field}`: {reason}")]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: &'static str,
}

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Dev,
    Staging,
    Prod,
}

impl Env {
    /// Log level filter used by the logging bootstrap.
    pub fn log_level(self) -> log::LevelFilter {
        match self {
            Env::Dev => log::LevelFilter::Debug,
            Env::Staging | Env::Prod => log::LevelFilter::Info,
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Dev => write!(f, "dev"),
            Env::Staging => write!(f, "staging"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

/// Inclusive size range for spawned food items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSize {
    pub min: u32,
    pub max: u32,
}

/// Server configuration - immutable after load
///
/// Serialized field names match the original config keys (kebab-case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub env: Env,
    pub port: u16,
    pub origins: Vec<String>,
    pub max_connections: usize,
    pub logfile: PathBuf,
    pub food_colors: u32,
    pub food_size: FoodSize,
    pub start_food: u32,
    pub map_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: Env::Dev,
            port: 1337,
            origins: vec![
                "http://localhost:1337".to_string(),
                "http://slither.io".to_string(),
            ],
            max_connections: 1000,
            logfile: PathBuf::from("slither.log"),
            food_colors: 23,
            food_size: FoodSize { min: 35, max: 70 },
            start_food: 22000,
            map_size: 216000,
        }
    }
}

impl Config {
    /// Load configuration from defaults and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration from defaults and an explicit environment lookup.
    /// Only `PORT` is overridable; every other field keeps its default.
    pub fn load_from<E>(env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = env("PORT") {
            config.port = parse_port(&raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Address the listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check the merged record against the field constraints.
    /// Defaults always pass; this guards edited defaults and future overrides.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError {
                field: "port",
                reason: "invalid",
            });
        }
        if self.origins.is_empty() {
            return Err(ConfigError {
                field: "origins",
                reason: "must not be empty",
            });
        }
        if self.origins.iter().any(|origin| !origin.contains("://")) {
            return Err(ConfigError {
                field: "origins",
                reason: "must be absolute URLs",
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError {
                field: "max-connections",
                reason: "must be positive",
            });
        }
        if self.food_colors == 0 {
            return Err(ConfigError {
                field: "food-colors",
                reason: "must be positive",
            });
        }
        if self.food_size.min == 0 || self.food_size.min > self.food_size.max {
            return Err(ConfigError {
                field: "food-size",
                reason: "min must be positive and not exceed max",
            });
        }
        if self.map_size == 0 {
            return Err(ConfigError {
                field: "map-size",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

/// Parse a `PORT` override. Ports are 1-65535; the u16 parse rejects
/// anything above, zero is rejected here.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError {
            field: "port",
            reason: "invalid",
        }),
    }
}
