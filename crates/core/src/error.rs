//! Stock error model.

use thiserror::Error;

use crate::id::HandleId;

/// Result type used across the stock crates.
pub type StockResult<T> = Result<T, StockError>;

/// Container operation that reported a failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockOperation {
    Add,
    Release,
}

impl core::fmt::Display for StockOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockOperation::Add => f.write_str("add"),
            StockOperation::Release => f.write_str("release"),
        }
    }
}

/// Stock-level error.
///
/// Every variant is a recoverable precondition failure: either no handle was
/// supplied, or the handle's identity did not fit the container (duplicate on
/// add, unknown on release). Reporting one never changes the container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// No handle was supplied.
    #[error("{operation}: no handle supplied")]
    NullHandle { operation: StockOperation },

    /// The container already owns a handle with this identity.
    #[error("handle {0} is already owned by this stock")]
    DuplicateHandle(HandleId),

    /// The container owns no handle with this identity.
    #[error("handle {0} is not owned by this stock")]
    UnknownHandle(HandleId),
}

impl StockError {
    pub fn null_handle(operation: StockOperation) -> Self {
        Self::NullHandle { operation }
    }

    pub fn duplicate(id: HandleId) -> Self {
        Self::DuplicateHandle(id)
    }

    pub fn unknown(id: HandleId) -> Self {
        Self::UnknownHandle(id)
    }

    pub fn is_null_handle(&self) -> bool {
        matches!(self, Self::NullHandle { .. })
    }

    /// Duplicate on add or not-found on release.
    pub fn is_identity_mismatch(&self) -> bool {
        matches!(self, Self::DuplicateHandle(_) | Self::UnknownHandle(_))
    }
}
