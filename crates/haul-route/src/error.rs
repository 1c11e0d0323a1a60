//! Routing error type.

use thiserror::Error;

use haul_core::LocationId;
use haul_network::NetworkError;

/// Errors produced by `haul-route`.
///
/// `LocationNotFound` is raised before any search starts.  `Unreachable` is
/// raised after a completed search left the target at infinite distance.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("location {0} not found in network")]
    LocationNotFound(LocationId),

    #[error("no route from {from} to {to}")]
    Unreachable { from: LocationId, to: LocationId },

    #[error("predecessor chain from {target} is corrupt at {at}")]
    CorruptChain { target: LocationId, at: LocationId },

    #[error(transparent)]
    Network(NetworkError),
}

impl From<NetworkError> for RouteError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::LocationNotFound(id) => RouteError::LocationNotFound(id),
            other => RouteError::Network(other),
        }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
