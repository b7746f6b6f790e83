//! # toolpos-core: Pure Business Logic for ToolPOS
//!
//! This crate is the **heart** of ToolPOS, a point-of-sale calculator for a
//! tool rental store. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ToolPOS Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (toolpos-cli)                       │   │
//! │  │    arg parsing ──► prompt/retry loops ──► agreement printing    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated inputs                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ toolpos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ calendar  │  │   │
//! │  │   │Descriptor │  │   Money   │  │  lookup   │  │ holidays  │  │   │
//! │  │   │ Agreement │  │ discounts │  │ 4 tools   │  │ weekends  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │ checkout  │  │ validation│                                 │   │
//! │  │   │ compute() │  │   rules   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PROMPTING • NO FORMATTING • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ToolDescriptor, RentalRequest, RentalAgreement)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed tool catalog, looked up by code
//! - [`calendar`] - Weekend and observed-holiday exclusion rules
//! - [`checkout`] - The rental calculator
//! - [`validation`] - Caller-side input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input =
//!    same output
//! 2. **No I/O**: Terminal, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Validate at the Edge**: The calculator trusts inputs the validation
//!    layer has already accepted; it never clamps
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toolpos_core::catalog::ToolCatalog;
//! use toolpos_core::checkout::RentalCalculator;
//!
//! let jackhammer = ToolCatalog::lookup("JAKD").unwrap();
//! let checkout = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
//!
//! // 6-day rental spanning a weekend and Labor Day: 3 chargeable days
//! let agreement = RentalCalculator::compute(&jackhammer, checkout, 6, 0);
//! assert_eq!(agreement.chargeable_days, 3);
//! assert_eq!(agreement.final_charge.to_string(), "$8.97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use toolpos_core::Money` instead of
// `use toolpos_core::money::Money`

pub use catalog::ToolCatalog;
pub use checkout::RentalCalculator;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
