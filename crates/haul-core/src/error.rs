//! Core error type.
//!
//! Sub-crates define their own error enums (`NetworkError`, `RouteError`);
//! `CoreError` covers the few failures that originate in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `haul-core`.
pub type CoreResult<T> = Result<T, CoreError>;
