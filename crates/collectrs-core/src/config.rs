//! Library configuration that callers can serialize/deserialize.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Optional seed for the process-wide random source used by `random`.
    pub seed: Option<u64>,

    /// Upper bound on values a lazy sequence may produce when materialized
    /// without an explicit `take`. Guards against draining infinite producers.
    pub materialize_limit: usize,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            seed: None,
            materialize_limit: 1_000_000,
        }
    }
}

impl CollectConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `COLLECTRS_SEED`: random seed
    /// - `COLLECTRS_MATERIALIZE_LIMIT`: lazy materialization cap
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("COLLECTRS_SEED") {
            if let Ok(v) = s.parse::<u64>() {
                cfg.seed = Some(v);
            }
        }

        if let Ok(s) = std::env::var("COLLECTRS_MATERIALIZE_LIMIT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.materialize_limit = v;
            }
        }

        cfg
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_materialize_limit(mut self, limit: usize) -> Self {
        self.materialize_limit = limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.materialize_limit == 0 {
            return Err(Error::Config("materialize_limit must be at least 1".into()));
        }
        Ok(())
    }
}

static GLOBAL: OnceCell<CollectConfig> = OnceCell::new();
static FROM_ENV: OnceCell<CollectConfig> = OnceCell::new();

/// Install the process-wide configuration. Only the first install wins; later
/// calls get `Error::Config`. Reading the config through `global` beforehand
/// does not count as an install.
pub fn install(cfg: CollectConfig) -> Result<()> {
    cfg.validate()?;
    GLOBAL
        .set(cfg)
        .map_err(|_| Error::Config("configuration already installed".into()))
}

/// The installed configuration, or the environment's when nothing was
/// installed yet.
pub fn global() -> &'static CollectConfig {
    GLOBAL.get().unwrap_or_else(|| {
        FROM_ENV.get_or_init(|| {
            let cfg = CollectConfig::from_env();
            if cfg.validate().is_ok() {
                cfg
            } else {
                CollectConfig::default()
            }
        })
    })
}
