use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("a selector needs at least one input selector")]
    NoInputSelectors,

    #[error("duplicate key '{key}' in structured selector")]
    DuplicateKey { key: String },
}

impl SelectorError {
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}
