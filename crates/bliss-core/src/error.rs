//! # Error Types
//!
//! Domain-specific error types for bliss-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bliss-core errors (this file)                                      │
//! │  ├── CoreError     - General domain errors                          │
//! │  ├── InvalidInput  - Malformed catalog input (name / price)         │
//! │  └── InvalidOrder  - Finalization precondition failures             │
//! │                                                                     │
//! │  bliss-store errors (separate crate)                                │
//! │  └── StoreError    - Persistence read/write failures                │
//! │                                                                     │
//! │  Flow: InvalidInput / InvalidOrder → CoreError → caller re-prompts  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Every variant is a local, recoverable condition - the operator
//!    corrects the input and re-invokes the operation

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to user-facing prompts; none of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Menu item cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - A cart add references an id that is not in the catalog
    /// - A stale id is replayed after the catalog record was replaced
    #[error("menu item not found: {0}")]
    ItemNotFound(String),

    /// Catalog input validation failed (wraps InvalidInput).
    #[error("invalid input: {0}")]
    Input(#[from] InvalidInput),

    /// Order finalization precondition failed (wraps InvalidOrder).
    #[error("invalid order: {0}")]
    Order(#[from] InvalidOrder),
}

// =============================================================================
// Invalid Input
// =============================================================================

/// Malformed catalog input.
///
/// Raised when adding a menu item with a bad name or price. The caller
/// surfaces the message and re-prompts; nothing is mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// Name is empty after trimming.
    #[error("name is required")]
    NameRequired,

    /// Price string could not be read as a decimal amount.
    #[error("price '{0}' is not a valid amount")]
    PriceUnparseable(String),

    /// Price rounds to zero or below; every menu item costs at least $0.01.
    #[error("price must be positive")]
    PriceNotPositive,
}

// =============================================================================
// Invalid Order
// =============================================================================

/// Order finalization precondition failures.
///
/// The UI disables the place-order action in these states, but the engine
/// must reject them regardless (the UI is not trusted to be the only
/// caller). On failure nothing is mutated: no ledger entry, cart intact.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidOrder {
    /// The cart has no lines.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// Customer name is empty after trimming.
    #[error("customer name is required")]
    CustomerNameRequired,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("taro-milk-tea".to_string());
        assert_eq!(err.to_string(), "menu item not found: taro-milk-tea");

        let err = CoreError::from(InvalidInput::PriceNotPositive);
        assert_eq!(err.to_string(), "invalid input: price must be positive");
    }

    #[test]
    fn test_invalid_order_converts_to_core_error() {
        let core_err: CoreError = InvalidOrder::EmptyCart.into();
        assert!(matches!(core_err, CoreError::Order(InvalidOrder::EmptyCart)));
    }
}
