//! Routing error type.
//!
//! "No path" is not an error: it is `Ok(None)` (or [`PathOutcome::NoPath`]).
//!
//! [`PathOutcome::NoPath`]: crate::PathOutcome::NoPath

use thiserror::Error;

use rn_core::{IntersectionId, RoadId};
use rn_network::NetworkError;

/// Errors produced by `rn-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("search from {start} to {end} passed its deadline after settling {settled} vertices")]
    DeadlineExceeded {
        start:   IntersectionId,
        end:     IntersectionId,
        settled: usize,
    },

    #[error("search from {start} to {end} exceeded the limit of {limit} settled vertices")]
    SearchLimit {
        start: IntersectionId,
        end:   IntersectionId,
        limit: usize,
    },

    #[error("malformed path at position {position}: {reason}")]
    MalformedPath {
        position: usize,
        reason:   &'static str,
    },

    /// The path names a road that the model does not connect to the
    /// neighbouring intersection.  Means the network changed between
    /// finding the path and describing it.
    #[error("path is inconsistent with the network: {road} is not connected to {intersection}")]
    InconsistentPath {
        intersection: IntersectionId,
        road:         RoadId,
    },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
