//! # Domain Types
//!
//! Core domain types used throughout ToolPOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ToolDescriptor  │   │  RentalRequest  │   │ RentalAgreement │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │   │  tool_code      │   │  tool           │       │
//! │  │  category       │   │  checkout_date  │   │  due_date       │       │
//! │  │  brand          │   │  rental_days    │   │  chargeable_days│       │
//! │  │  daily_rate     │   │  discount_pct   │   │  base/final $   │       │
//! │  │  exemption      │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  ToolCategory   │   │ ExemptionPolicy │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Ladder         │   │  None           │                             │
//! │  │  Chainsaw       │   │  Weekends       │                             │
//! │  │  Jackhammer     │   │  WeekendsAnd... │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tool Category
// =============================================================================

/// What kind of tool a descriptor represents.
///
/// An enumerated tag, never a free string: a typo'd category cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Ladder,
    Chainsaw,
    Jackhammer,
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolCategory::Ladder => "Ladder",
            ToolCategory::Chainsaw => "Chainsaw",
            ToolCategory::Jackhammer => "Jackhammer",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Exemption Policy
// =============================================================================

/// Which days of a rental period are exempt from charge.
///
/// ## Why an Enum?
/// Never a free-text description: the three policies are exhaustive, so
/// the calculator cannot meet a misspelled or unknown one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExemptionPolicy {
    /// Every day of the rental period is chargeable.
    None,
    /// Saturdays and Sundays are free.
    Weekends,
    /// Saturdays, Sundays, and observed holidays are free.
    WeekendsAndHolidays,
}

impl ExemptionPolicy {
    /// True when the policy exempts any day at all.
    ///
    /// The calculator uses this to skip the day-by-day scan entirely for
    /// tools charged every day.
    #[inline]
    pub const fn exempts_any(&self) -> bool {
        !matches!(self, ExemptionPolicy::None)
    }
}

// =============================================================================
// Tool Descriptor
// =============================================================================

/// The static attributes of a rentable tool, looked up by code.
///
/// Immutable reference data: descriptors come out of the catalog fully
/// populated or not at all (an unknown code is a lookup failure, never a
/// partial descriptor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Four-character unique identifier (e.g. "LADW").
    pub code: String,

    /// What kind of tool this is.
    pub category: ToolCategory,

    /// Manufacturer display name (e.g. "Werner").
    pub brand: String,

    /// Amount charged per chargeable day.
    pub daily_rate: Money,

    /// Which days of a rental are free of charge.
    pub exemption: ExemptionPolicy,
}

impl fmt::Display for ToolDescriptor {
    /// Renders the descriptor the way it appears on a printed agreement,
    /// e.g. `Stihl Chainsaw (CHNS) $1.49/day`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}/day",
            self.brand, self.category, self.code, self.daily_rate
        )
    }
}

// =============================================================================
// Rental Request
// =============================================================================

/// A fully validated checkout request.
///
/// Constructed by the caller's validation layer; by the time one of these
/// exists, the day count is >= 1, the discount is within [0, 100], and the
/// tool code has resolved in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// Code of the tool being rented; must resolve in the catalog.
    pub tool_code: String,

    /// The calendar date the rental starts. No time-of-day component.
    pub checkout_date: NaiveDate,

    /// Number of days the tool is rented, at least 1.
    pub rental_days: u32,

    /// Whole-number discount percentage in [0, 100].
    pub discount_percent: u8,
}

// =============================================================================
// Rental Agreement
// =============================================================================

/// The contract produced by a checkout.
///
/// A value object: created once by the calculator and never mutated. All
/// derived figures are stored so the caller can print or export the
/// agreement without recomputing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// The resolved tool, snapshotted into the agreement.
    pub tool: ToolDescriptor,

    /// Date the rental started. The checkout day itself is never charged.
    pub checkout_date: NaiveDate,

    /// `checkout_date + rental_days` calendar days.
    pub due_date: NaiveDate,

    /// Number of days the tool is out.
    pub rental_days: u32,

    /// Days actually billed: `rental_days` minus exempt days in the
    /// charge window. Always within `[0, rental_days]`.
    pub chargeable_days: u32,

    /// Whole-number discount applied at checkout.
    pub discount_percent: u8,

    /// `chargeable_days × daily_rate`, exact to the cent.
    pub base_charge: Money,

    /// Discount figure as shown on the agreement (rounded to the cent).
    pub discount_amount: Money,

    /// Amount due at return: base less the exact discount, floored to the
    /// cent. Never rounded up.
    pub final_charge: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(ToolCategory::Jackhammer.to_string(), "Jackhammer");
        assert_eq!(ToolCategory::Ladder.to_string(), "Ladder");
    }

    #[test]
    fn test_exemption_exempts_any() {
        assert!(!ExemptionPolicy::None.exempts_any());
        assert!(ExemptionPolicy::Weekends.exempts_any());
        assert!(ExemptionPolicy::WeekendsAndHolidays.exempts_any());
    }

    #[test]
    fn test_descriptor_display() {
        let tool = ToolDescriptor {
            code: "CHNS".to_string(),
            category: ToolCategory::Chainsaw,
            brand: "Stihl".to_string(),
            daily_rate: Money::from_cents(149),
            exemption: ExemptionPolicy::Weekends,
        };
        assert_eq!(tool.to_string(), "Stihl Chainsaw (CHNS) $1.49/day");
    }

    #[test]
    fn test_exemption_serde_snake_case() {
        let json = serde_json::to_string(&ExemptionPolicy::WeekendsAndHolidays).unwrap();
        assert_eq!(json, "\"weekends_and_holidays\"");

        let back: ExemptionPolicy = serde_json::from_str("\"weekends\"").unwrap();
        assert_eq!(back, ExemptionPolicy::Weekends);
    }
}
