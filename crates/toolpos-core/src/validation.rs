//! # Validation Module
//!
//! Caller-side input validation for checkout fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI / prompt loop                                             │
//! │  ├── Collects raw text from args or the terminal                        │
//! │  └── Calls THIS MODULE; a ValidationError drives the re-prompt          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: The core calculator                                           │
//! │  └── Trusts the validated values; never clamps, never re-validates      │
//! │                                                                         │
//! │  Validation returns structured Results, not exceptions: the retry       │
//! │  loop is ordinary control flow in the caller, decoupled from the        │
//! │  pure computation.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toolpos_core::validation::{validate_rental_days, validate_discount_percent};
//!
//! assert_eq!(validate_rental_days(5), Ok(5));
//! assert!(validate_rental_days(0).is_err());
//! assert!(validate_discount_percent(101).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a rental day count.
///
/// ## Rules
/// - Must be at least 1 (a tool cannot be rented for less than one day)
pub fn validate_rental_days(days: i64) -> ValidationResult<u32> {
    if days < 1 {
        return Err(ValidationError::InvalidRentalDayCount { given: days });
    }
    Ok(days as u32)
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Whole number between 0 (full price) and 100 (free), inclusive
pub fn validate_discount_percent(percent: i64) -> ValidationResult<u8> {
    if !(0..=100).contains(&percent) {
        return Err(ValidationError::InvalidDiscountPercent { given: percent });
    }
    Ok(percent as u8)
}

// =============================================================================
// Raw-Text Parsers
// =============================================================================
// These accept what the cashier actually typed. Parse failure and range
// failure are distinct variants so the prompt can say which happened.

/// Parses and validates a rental day count from raw text.
pub fn parse_rental_days(input: &str) -> ValidationResult<u32> {
    let days: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: "rental day count",
            input: input.trim().to_string(),
        })?;
    validate_rental_days(days)
}

/// Parses and validates a discount percentage from raw text.
pub fn parse_discount_percent(input: &str) -> ValidationResult<u8> {
    let percent: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: "discount percent",
            input: input.trim().to_string(),
        })?;
    validate_discount_percent(percent)
}

/// Parses a checkout date in `MM/DD/YY` form.
///
/// Two-digit years map into the 2000s, matching the store's receipts.
/// Four-digit years are accepted as written. The date must exist on the
/// calendar: `02/30/15` is rejected, `02/29/16` (a leap day) is not.
pub fn parse_checkout_date(input: &str) -> ValidationResult<NaiveDate> {
    let reject = || ValidationError::InvalidDateFormat {
        input: input.trim().to_string(),
    };

    let mut parts = input.trim().split('/');
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(reject)?;
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(reject)?;
    let mut year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(reject)?;
    if parts.next().is_some() {
        return Err(reject());
    }

    if (0..100).contains(&year) {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(reject)
}

// =============================================================================
// Unit Tests
// =============================================================================
