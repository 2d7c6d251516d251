//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! All variants are precondition violations raised before any randomness is
//! consumed; none are recoverable internally.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown distribution policy '{tag}'")]
    InvalidPolicy { tag: String },

    #[error("unknown map type '{key}'")]
    UnknownMapType { key: String },

    #[error("weight vector has {got} entries but {expected} categories need one each")]
    InsufficientWeights { expected: usize, got: usize },
}
