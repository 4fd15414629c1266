use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_size must be at least 1, got {max_size}")]
    InvalidMaxSize { max_size: usize },

    #[error("failed to parse memoize options: {message}")]
    Parse { message: String },
}

impl ConfigError {
    pub fn invalid_max_size(max_size: usize) -> Self {
        Self::InvalidMaxSize { max_size }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
