//! Network-subsystem error type.

use thiserror::Error;

use haul_core::LocationId;

/// Errors produced by `haul-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("location {0} not found in network")]
    LocationNotFound(LocationId),

    #[error("invalid weight {weight} on edge {a} - {b}: weights must be finite and non-negative")]
    InvalidEdgeWeight {
        a:      LocationId,
        b:      LocationId,
        weight: f64,
    },

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
