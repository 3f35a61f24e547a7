//! Engine configuration: defaults, TOML files and environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::CatalogPaths;
use crate::engine::retrieval::DEFAULT_THRESHOLD;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

// ------------------------------------------------------------------
// 1. Configuration struct
// ------------------------------------------------------------------
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum score for the single-best-match path.
    pub match_threshold: u32,
    /// How many ranked matches the cycle walks through.
    pub match_limit: usize,
    /// Sessions kept before the least recently used one is evicted.
    pub session_capacity: usize,
    pub catalogs: CatalogPaths,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_THRESHOLD,
            match_limit: 10,
            session_capacity: 256,
            catalogs: CatalogPaths::default(),
        }
    }
}

// ------------------------------------------------------------------
// 2. Builder
// ------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    inner: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn match_threshold(mut self, threshold: u32) -> Self {
        self.inner.match_threshold = threshold;
        self
    }

    pub fn match_limit(mut self, limit: usize) -> Self {
        self.inner.match_limit = limit;
        self
    }

    pub fn session_capacity(mut self, capacity: usize) -> Self {
        self.inner.session_capacity = capacity;
        self
    }

    pub fn catalogs(mut self, catalogs: CatalogPaths) -> Self {
        self.inner.catalogs = catalogs;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.inner
    }
}

// ------------------------------------------------------------------
// 3. Loading + validation
// ------------------------------------------------------------------
impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_limit == 0 {
            return Err(ConfigError::Zero("match_limit"));
        }
        if self.session_capacity == 0 {
            return Err(ConfigError::Zero("session_capacity"));
        }
        Ok(())
    }

    /// Missing keys keep their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Defaults overridden by the environment (a `.env` file is read first).
    /// ENV vars: PROMPTCRAFT_MATCH_THRESHOLD, PROMPTCRAFT_MATCH_LIMIT,
    /// PROMPTCRAFT_SESSION_CAPACITY, PROMPTCRAFT_{TEXT,IMAGE,VIDEO}_CATALOG
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::default().with_env_overrides(|var| env::var(var).ok())
    }

    /// Applies overrides from `lookup`, which maps variable names to values.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(threshold) = parse_var(&lookup, "PROMPTCRAFT_MATCH_THRESHOLD")? {
            self.match_threshold = threshold;
        }
        if let Some(limit) = parse_var(&lookup, "PROMPTCRAFT_MATCH_LIMIT")? {
            self.match_limit = limit;
        }
        if let Some(capacity) = parse_var(&lookup, "PROMPTCRAFT_SESSION_CAPACITY")? {
            self.session_capacity = capacity;
        }
        if let Some(path) = lookup("PROMPTCRAFT_TEXT_CATALOG") {
            self.catalogs.text = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("PROMPTCRAFT_IMAGE_CATALOG") {
            self.catalogs.image = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("PROMPTCRAFT_VIDEO_CATALOG") {
            self.catalogs.video = Some(PathBuf::from(path));
        }

        self.validate()?;
        Ok(self)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        None => Ok(None),
    }
}
