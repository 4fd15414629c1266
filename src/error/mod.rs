mod config;
mod selector;

pub use config::ConfigError;
pub use selector::SelectorError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install tracing subscriber: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
