//! # Rental Calendar
//!
//! Determines which dates in a rental period are exempt from charge.
//!
//! ## Exclusion Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Policy              │  Excluded dates in the charge window            │
//! │  ────────────────────┼───────────────────────────────────────────────  │
//! │  None                │  (nothing; callers skip the scan entirely)      │
//! │  Weekends            │  every Saturday and Sunday                      │
//! │  WeekendsAndHolidays │  weekends + observed Independence Day           │
//! │                      │  + Labor Day (first Monday of September)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Set?
//! Exclusions are collected into a `HashSet<NaiveDate>` and counted once.
//! Independent per-rule decrement counters would subtract the same date
//! twice whenever rules overlap; the set union cannot.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::HashSet;

use crate::types::ExemptionPolicy;

// =============================================================================
// Day Predicates
// =============================================================================

/// True for Saturdays and Sundays.
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True when `date` is an observed holiday.
///
/// Two holidays exist in this store's world:
///
/// * **Independence Day** (July 4). Observed on July 4 itself when that is
///   a weekday; on Friday July 3 when July 4 falls on a Saturday; on
///   Monday July 5 when July 4 falls on a Sunday. Exactly one observance
///   per year, always a weekday.
/// * **Labor Day**, the first Monday of September. A weekday by
///   construction.
pub fn is_observed_holiday(date: NaiveDate) -> bool {
    let w = date.weekday();
    let m = date.month();
    let d = date.day();

    // Independence Day on a weekday
    if d == 4 && m == 7 && !matches!(w, Weekday::Sat | Weekday::Sun) {
        return true;
    }
    // July 3 is a Friday, so July 4 falls on Saturday: observed early
    if d == 3 && m == 7 && w == Weekday::Fri {
        return true;
    }
    // July 5 is a Monday, so July 4 fell on Sunday: observed late
    if d == 5 && m == 7 && w == Weekday::Mon {
        return true;
    }
    // Labor Day
    if w == Weekday::Mon && m == 9 && is_first_weekday_of_month(date) {
        return true;
    }
    false
}

/// True when `date` is the first occurrence of its weekday within its
/// month: the same weekday seven days earlier lands in the previous month.
pub fn is_first_weekday_of_month(date: NaiveDate) -> bool {
    match date.checked_sub_days(Days::new(7)) {
        Some(week_earlier) => week_earlier.month() != date.month(),
        // Only reachable within a week of NaiveDate::MIN
        None => true,
    }
}

// =============================================================================
// Excluded-Date Collection
// =============================================================================

/// Collects every charge-exempt date in the charge window of a rental.
///
/// The charge window runs from the day AFTER `checkout` through `due`,
/// inclusive: the checkout day is never charged, the due-date day is.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use toolpos_core::calendar::excluded_dates;
/// use toolpos_core::types::ExemptionPolicy;
///
/// // Thu 2015-07-02 + 5 days: window is Fri 3rd through Tue 7th.
/// // Weekends-only policy excludes Sat 4th and Sun 5th.
/// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2015, 7, 7).unwrap();
/// let excluded = excluded_dates(ExemptionPolicy::Weekends, checkout, due);
/// assert_eq!(excluded.len(), 2);
/// ```
pub fn excluded_dates(
    policy: ExemptionPolicy,
    checkout: NaiveDate,
    due: NaiveDate,
) -> HashSet<NaiveDate> {
    let mut excluded = HashSet::new();
    if !policy.exempts_any() {
        return excluded;
    }

    // skip(1): the checkout day itself is outside the charge window
    for day in checkout.iter_days().skip(1).take_while(|d| *d <= due) {
        if is_weekend(day) {
            excluded.insert(day);
        }
        if policy == ExemptionPolicy::WeekendsAndHolidays && is_observed_holiday(day) {
            excluded.insert(day);
        }
    }
    excluded
}

// =============================================================================
// Unit Tests
// =============================================================================
