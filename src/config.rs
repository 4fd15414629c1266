//! Memoizer configuration.
//!
//! Options are plain data so hosts can keep them next to the rest of their
//! settings and hand them to [`crate::DefaultMemoize::with_options`].

use serde::Deserialize;

use crate::error::{ConfigError, Result};

pub const DEFAULT_MAX_SIZE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoizeOptions {
    /// Number of most recent argument lists kept in the cache.
    ///
    /// `1` is the classic "same inputs as last time" cache. Larger values
    /// keep an LRU window of recent inputs.
    pub max_size: usize,
}

impl MemoizeOptions {
    pub fn new(max_size: usize) -> Result<Self> {
        let options = Self { max_size };
        options.validate()?;
        Ok(options)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(content).map_err(|e| ConfigError::parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(ConfigError::invalid_max_size(self.max_size).into());
        }
        Ok(())
    }
}

impl Default for MemoizeOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}
