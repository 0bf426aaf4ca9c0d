//! Network-model error type.

use thiserror::Error;

use rn_core::CoreError;

/// Errors produced by `rn-network`.
///
/// Unknown ids are not errors here: mutating calls report them through
/// [`Connection`](crate::Connection) and otherwise no-op.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("network lock poisoned by a panicking writer")]
    LockPoisoned,

    #[error("network is still shared by {0} other handle(s)")]
    StillShared(usize),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
