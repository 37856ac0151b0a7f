//! Runtime configuration, read from `BLOCKFALL_*` environment variables.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_FRAME_MS: &str = "BLOCKFALL_FRAME_MS";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";
pub const ENV_LOG: &str = "BLOCKFALL_LOG";

/// Frame period of the terminal loop (~60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Terminal runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Piece RNG seed; `None` picks a random one at startup.
    pub seed: Option<u32>,
    pub frame_ms: u32,
    /// Log file. Logging is off when unset (the game owns the terminal).
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{ENV_SEED}={raw:?} is not a u32"))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = get(ENV_FRAME_MS) {
            let frame_ms = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{ENV_FRAME_MS}={raw:?} is not a number"))?;
            if !(1..=1000).contains(&frame_ms) {
                bail!("{ENV_FRAME_MS} must be within 1..=1000, got {frame_ms}");
            }
            config.frame_ms = frame_ms;
        }

        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
