//! # Error Types
//!
//! Domain-specific error types for toolpos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  toolpos-core errors (this file)                                        │
//! │  ├── CoreError        - Domain failures (unknown tool code)             │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CLI message → Customer             │
//! │                                                                         │
//! │  The CLI catches ValidationError to drive its re-prompt loop; a        │
//! │  CoreError that escapes the CLI terminates the checkout.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending code or value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain failures. They should be caught and
/// translated to user-friendly messages by the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Tool code is not in the catalog's known set.
    ///
    /// ## When This Occurs
    /// - Customer asks for a code the store does not stock
    /// - A typo survives caller-side validation (e.g. non-interactive args)
    #[error("Unknown tool code: {0}")]
    UnknownToolCode(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw user input does not meet the checkout
/// preconditions. They are produced by the `validation` module BEFORE the
/// calculator runs; the core itself never re-validates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A tool cannot be rented for less than one day.
    #[error("Invalid rental day count {given}: a tool cannot be rented for less than 1 day")]
    InvalidRentalDayCount { given: i64 },

    /// Discounts are whole percentages from 0 (full price) to 100 (free).
    #[error("Invalid discount percent {given}: must be between 0 (full price) and 100 (free)")]
    InvalidDiscountPercent { given: i64 },

    /// A numeric field did not parse as an integer.
    #[error("{field} must be a whole number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    /// Checkout date string did not parse as MM/DD/YY.
    #[error("Invalid checkout date '{input}': expected MM/DD/YY")]
    InvalidDateFormat { input: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
