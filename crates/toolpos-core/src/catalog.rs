//! # Tool Catalog
//!
//! Static reference data mapping tool codes to descriptors.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "JAKD" ──► ToolCatalog::lookup ──► Ok(ToolDescriptor { DeWalt, ... })  │
//! │  "DRLL" ──► ToolCatalog::lookup ──► Err(UnknownToolCode("DRLL"))        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Exact Match?
//! A code resolves only when the whole string matches a known code. A
//! membership test over one space-separated list of codes would also
//! accept embedded fragments ("ADW", "AK"); matching on the full code
//! cannot.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ExemptionPolicy, ToolCategory, ToolDescriptor};

// =============================================================================
// Catalog
// =============================================================================

/// The fixed set of tools the store rents out.
///
/// Read-only reference data with no mutation operations; safe to consult
/// from any thread. Four tools in this catalog: one ladder (charged every
/// day), one chainsaw (weekends free), two jackhammers (weekends and
/// holidays free).
pub struct ToolCatalog;

/// Every code the catalog resolves, for prompts and help text.
const KNOWN_CODES: &[&str] = &["LADW", "CHNS", "JAKD", "JAKR"];

impl ToolCatalog {
    /// Resolves a tool code to its descriptor.
    ///
    /// ## Errors
    /// Returns [`CoreError::UnknownToolCode`] when the code is not in the
    /// known set. Never returns a partially populated descriptor.
    ///
    /// ## Example
    /// ```rust
    /// use toolpos_core::catalog::ToolCatalog;
    /// use toolpos_core::types::ExemptionPolicy;
    ///
    /// let ladder = ToolCatalog::lookup("LADW").unwrap();
    /// assert_eq!(ladder.brand, "Werner");
    /// assert_eq!(ladder.exemption, ExemptionPolicy::None);
    ///
    /// assert!(ToolCatalog::lookup("NOPE").is_err());
    /// ```
    pub fn lookup(code: &str) -> CoreResult<ToolDescriptor> {
        let descriptor = match code {
            "LADW" => ToolDescriptor {
                code: "LADW".to_string(),
                category: ToolCategory::Ladder,
                brand: "Werner".to_string(),
                daily_rate: Money::from_cents(199),
                exemption: ExemptionPolicy::None,
            },
            "CHNS" => ToolDescriptor {
                code: "CHNS".to_string(),
                category: ToolCategory::Chainsaw,
                brand: "Stihl".to_string(),
                daily_rate: Money::from_cents(149),
                exemption: ExemptionPolicy::Weekends,
            },
            "JAKD" => ToolDescriptor {
                code: "JAKD".to_string(),
                category: ToolCategory::Jackhammer,
                brand: "DeWalt".to_string(),
                daily_rate: Money::from_cents(299),
                exemption: ExemptionPolicy::WeekendsAndHolidays,
            },
            "JAKR" => ToolDescriptor {
                code: "JAKR".to_string(),
                category: ToolCategory::Jackhammer,
                brand: "Rigid".to_string(),
                daily_rate: Money::from_cents(299),
                exemption: ExemptionPolicy::WeekendsAndHolidays,
            },
            unknown => return Err(CoreError::UnknownToolCode(unknown.to_string())),
        };
        Ok(descriptor)
    }

    /// The codes the catalog knows, in display order.
    pub fn codes() -> &'static [&'static str] {
        KNOWN_CODES
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
