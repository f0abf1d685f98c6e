//! # Register Error Types
//!
//! The register surfaces two failure classes: domain rejections from
//! bliss-core (bad input, empty cart) and storage failures from
//! bliss-store. Storage errors only escape from [`crate::Register::open`];
//! once a session is running, save failures are logged and swallowed.

use thiserror::Error;

use bliss_core::CoreError;
use bliss_store::StoreError;

/// Errors returned by register operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// A business rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage could not be opened.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for register operations.
pub type RegisterResult<T> = Result<T, RegisterError>;
