//! Errors raised while generating a harness.
//!
//! Every variant is fatal: generation stops at the first one and no
//! artifact is written.

use std::io;
use thiserror::Error;

/// Result type returning [`Error`] or `T`
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reference oracle failed during {operation}: {reason}")]
    Oracle {
        /// What the oracle was asked to do.
        operation: &'static str,
        /// Why it refused.
        reason: String,
    },
    #[error("oracle shared secrets disagree for case `{0}`")]
    AsymmetricSharedSecret(String),
    #[error("malformed binary literal: {0}")]
    Encoding(String),
    #[error("invalid generator config: {0}")]
    Config(String),
    #[error("unable to parse config file: {0}")]
    ConfigFile(#[from] serde_yaml::Error),
    #[error("artifact io: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn oracle(operation: &'static str, reason: impl ToString) -> Self {
        Error::Oracle {
            operation,
            reason: reason.to_string(),
        }
    }
}
