//! # Checkout Calculator
//!
//! Turns a validated rental request into a [`RentalAgreement`].
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  descriptor + checkout date + days + discount                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  due date = checkout + days            (calendar arithmetic)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  chargeable days = days - |excluded|   (set of exempt dates)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base = chargeable × daily rate                                         │
//! │  discount amount = base × pct / 100    (rounded to the cent)            │
//! │  final = base - exact discount         (floored to the cent)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step is pure: the calculator holds no state, performs no I/O, and
//! is freely callable from concurrent threads.

use chrono::{Days, NaiveDate};

use crate::calendar::excluded_dates;
use crate::catalog::ToolCatalog;
use crate::error::CoreResult;
use crate::types::{ExemptionPolicy, RentalAgreement, RentalRequest, ToolDescriptor};

// =============================================================================
// Rental Calculator
// =============================================================================

/// Computes rental agreements from validated inputs.
///
/// ## Trust Boundary
/// `compute` trusts its caller: day count and discount invariants are the
/// validation layer's job, and a violation reaching this far is a caller
/// bug. The calculator asserts instead of clamping; it never guesses.
pub struct RentalCalculator;

impl RentalCalculator {
    /// Resolves the request's tool code and computes its agreement.
    ///
    /// This is the one-call entry point for callers holding a validated
    /// [`RentalRequest`].
    ///
    /// ## Errors
    /// [`CoreError::UnknownToolCode`](crate::error::CoreError::UnknownToolCode)
    /// when the request's code is not in the catalog.
    pub fn checkout(request: &RentalRequest) -> CoreResult<RentalAgreement> {
        let tool = ToolCatalog::lookup(&request.tool_code)?;
        Ok(Self::compute(
            &tool,
            request.checkout_date,
            request.rental_days,
            request.discount_percent,
        ))
    }

    /// Computes the agreement for an already-resolved tool.
    ///
    /// ## Preconditions (caller-validated)
    /// - `rental_days >= 1`
    /// - `discount_percent <= 100`
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use toolpos_core::catalog::ToolCatalog;
    /// use toolpos_core::checkout::RentalCalculator;
    ///
    /// let chainsaw = ToolCatalog::lookup("CHNS").unwrap();
    /// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
    /// let agreement = RentalCalculator::compute(&chainsaw, checkout, 5, 25);
    ///
    /// assert_eq!(agreement.chargeable_days, 3);
    /// assert_eq!(agreement.final_charge.cents(), 335);
    /// ```
    pub fn compute(
        tool: &ToolDescriptor,
        checkout_date: NaiveDate,
        rental_days: u32,
        discount_percent: u8,
    ) -> RentalAgreement {
        debug_assert!(rental_days >= 1, "caller must reject day counts < 1");
        debug_assert!(
            discount_percent <= 100,
            "caller must reject discounts over 100%"
        );

        let due_date = checkout_date + Days::new(u64::from(rental_days));
        let chargeable_days = Self::chargeable_days(tool.exemption, checkout_date, due_date, rental_days);

        let base_charge = tool.daily_rate.times_days(chargeable_days);
        let discount_amount = base_charge.discount_amount(discount_percent);
        let final_charge = base_charge.less_discount_floored(discount_percent);

        RentalAgreement {
            tool: tool.clone(),
            checkout_date,
            due_date,
            rental_days,
            chargeable_days,
            discount_percent,
            base_charge,
            discount_amount,
            final_charge,
        }
    }

    /// Days billed within the charge window (day after checkout through
    /// the due date).
    ///
    /// A tool charged every day short-circuits: no scan, the full count.
    fn chargeable_days(
        policy: ExemptionPolicy,
        checkout: NaiveDate,
        due: NaiveDate,
        rental_days: u32,
    ) -> u32 {
        if !policy.exempts_any() {
            return rental_days;
        }
        let excluded = excluded_dates(policy, checkout, due);
        // The excluded set is a subset of the window, so this never underflows
        rental_days - excluded.len() as u32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_simple() {
        let ladder = ToolCatalog::lookup("LADW").unwrap();
        let agreement = RentalCalculator::compute(&ladder, date(2015, 9, 3), 5, 0);
        assert_eq!(agreement.due_date, date(2015, 9, 8));
    }

    #[test]
    fn test_due_date_rolls_over_month_and_year() {
        let ladder = ToolCatalog::lookup("LADW").unwrap();

        let agreement = RentalCalculator::compute(&ladder, date(2015, 1, 30), 3, 0);
        assert_eq!(agreement.due_date, date(2015, 2, 2));

        let agreement = RentalCalculator::compute(&ladder, date(2015, 12, 30), 4, 0);
        assert_eq!(agreement.due_date, date(2016, 1, 3));
    }

    #[test]
    fn test_due_date_across_leap_day() {
        let ladder = ToolCatalog::lookup("LADW").unwrap();

        // 2016 is a leap year: Feb 28 + 2 lands on Mar 1 via Feb 29
        let agreement = RentalCalculator::compute(&ladder, date(2016, 2, 28), 2, 0);
        assert_eq!(agreement.due_date, date(2016, 3, 1));

        // 2015 is not: Feb 28 + 2 lands on Mar 2
        let agreement = RentalCalculator::compute(&ladder, date(2015, 2, 28), 2, 0);
        assert_eq!(agreement.due_date, date(2015, 3, 2));
    }

    #[test]
    fn test_no_exemption_charges_every_day() {
        let ladder = ToolCatalog::lookup("LADW").unwrap();
        // Window spans two weekends and Labor Day; none of it matters
        for days in [1, 7, 14, 30] {
            let agreement = RentalCalculator::compute(&ladder, date(2015, 9, 3), days, 0);
            assert_eq!(agreement.chargeable_days, days);
        }
    }

    #[test]
    fn test_weekend_exemption_subtracts_weekend_days() {
        let chainsaw = ToolCatalog::lookup("CHNS").unwrap();
        // Thu 7/2 + 5: window Fri..Tue holds one Sat and one Sun
        let agreement = RentalCalculator::compute(&chainsaw, date(2015, 7, 2), 5, 0);
        assert_eq!(agreement.chargeable_days, 3);
    }

    #[test]
    fn test_holiday_exemption_subtracts_labor_day() {
        let jackhammer = ToolCatalog::lookup("JAKD").unwrap();
        // Thu 9/3 + 6: window Fri 4th..Wed 9th holds Sat, Sun, and Labor
        // Day Monday the 7th
        let agreement = RentalCalculator::compute(&jackhammer, date(2015, 9, 3), 6, 0);
        assert_eq!(agreement.chargeable_days, 3);
    }

    /// July 4 2020 is a Saturday: the Friday observance and the weekend
    /// must come out of the count as three distinct dates, not four.
    #[test]
    fn test_weekend_observance_not_double_subtracted() {
        let jackhammer = ToolCatalog::lookup("JAKR").unwrap();
        let agreement = RentalCalculator::compute(&jackhammer, date(2020, 7, 2), 4, 0);
        assert_eq!(agreement.chargeable_days, 1);
    }

    #[test]
    fn test_charges() {
        let chainsaw = ToolCatalog::lookup("CHNS").unwrap();
        let agreement = RentalCalculator::compute(&chainsaw, date(2015, 7, 2), 5, 25);

        assert_eq!(agreement.base_charge, Money::from_cents(447));
        assert_eq!(agreement.discount_amount, Money::from_cents(112));
        assert_eq!(agreement.final_charge, Money::from_cents(335));
    }

    #[test]
    fn test_zero_discount_keeps_base_charge() {
        let jackhammer = ToolCatalog::lookup("JAKD").unwrap();
        let agreement = RentalCalculator::compute(&jackhammer, date(2015, 9, 3), 6, 0);
        assert_eq!(agreement.discount_amount, Money::zero());
        assert_eq!(agreement.final_charge, agreement.base_charge);
    }

    #[test]
    fn test_full_discount_is_free() {
        let ladder = ToolCatalog::lookup("LADW").unwrap();
        let agreement = RentalCalculator::compute(&ladder, date(2015, 9, 3), 5, 100);
        assert_eq!(agreement.discount_amount, agreement.base_charge);
        assert_eq!(agreement.final_charge, Money::zero());
    }

    #[test]
    fn test_checkout_resolves_request() {
        let request = RentalRequest {
            tool_code: "LADW".to_string(),
            checkout_date: date(2015, 9, 3),
            rental_days: 5,
            discount_percent: 10,
        };
        let agreement = RentalCalculator::checkout(&request).unwrap();
        assert_eq!(agreement.tool.brand, "Werner");
        assert_eq!(agreement.final_charge, Money::from_cents(895));
    }

    #[test]
    fn test_checkout_unknown_code_yields_no_agreement() {
        let request = RentalRequest {
            tool_code: "DRLL".to_string(),
            checkout_date: date(2015, 9, 3),
            rental_days: 5,
            discount_percent: 10,
        };
        assert!(RentalCalculator::checkout(&request).is_err());
    }

    /// The same inputs always produce the same agreement (pure function).
    #[test]
    fn test_compute_is_deterministic() {
        let chainsaw = ToolCatalog::lookup("CHNS").unwrap();
        let a = RentalCalculator::compute(&chainsaw, date(2015, 7, 2), 5, 25);
        let b = RentalCalculator::compute(&chainsaw, date(2015, 7, 2), 5, 25);
        assert_eq!(a, b);
    }
}
