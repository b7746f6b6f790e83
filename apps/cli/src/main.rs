//! # ToolPOS CLI
//!
//! Terminal checkout flow for the tool rental store.
//!
//! ## Two Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  toolpos LADW 9/3/15 5 10      all four args: validate once, print     │
//! │                                 the agreement or exit non-zero          │
//! │                                                                         │
//! │  toolpos                        no args: prompt for each field,        │
//! │                                 re-prompting until it validates         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field order matches the store's register habit: tool code, checkout
//! date (MM/DD/YY), rental days, discount percent.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use toolpos_core::catalog::ToolCatalog;
use toolpos_core::checkout::RentalCalculator;
use toolpos_core::types::{RentalAgreement, RentalRequest, ToolDescriptor};
use toolpos_core::validation::{parse_checkout_date, parse_discount_percent, parse_rental_days};

// =============================================================================
// Arguments
// =============================================================================

/// Point-of-sale checkout for the tool rental store.
#[derive(Parser, Debug)]
#[command(name = "toolpos", version, about)]
struct Cli {
    /// Tool code (LADW, CHNS, JAKD, JAKR)
    #[arg(requires = "checkout_date")]
    tool_code: Option<String>,

    /// Checkout date as MM/DD/YY
    #[arg(requires = "days")]
    checkout_date: Option<String>,

    /// Number of days to rent the tool (at least 1)
    #[arg(requires = "discount")]
    days: Option<String>,

    /// Discount percent, 0 (full price) to 100 (free)
    discount: Option<String>,
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let request = match cli.tool_code {
        // All-args mode: every field must validate on the first try
        Some(_) => match request_from_args(&cli) {
            Ok(request) => request,
            Err(message) => {
                eprintln!("{message}");
                return ExitCode::FAILURE;
            }
        },
        // Interactive mode: re-prompt until each field validates
        None => match prompt_for_request() {
            Ok(request) => request,
            Err(err) => {
                eprintln!("Input error: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    debug!(tool_code = %request.tool_code, days = request.rental_days, "checking out");

    match RentalCalculator::checkout(&request) {
        Ok(agreement) => {
            debug!(final_charge = %agreement.final_charge, "agreement computed");
            println!("{}", render_agreement(&agreement));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Non-Interactive Mode
// =============================================================================

/// Builds a request from the four positional args. clap's `requires`
/// chain guarantees that if the first is present, all four are.
fn request_from_args(cli: &Cli) -> Result<RentalRequest, String> {
    let (Some(code), Some(date), Some(days), Some(discount)) = (
        cli.tool_code.as_deref(),
        cli.checkout_date.as_deref(),
        cli.days.as_deref(),
        cli.discount.as_deref(),
    ) else {
        return Err("expected: TOOL_CODE CHECKOUT_DATE DAYS DISCOUNT".to_string());
    };

    let tool = ToolCatalog::lookup(code.trim()).map_err(|e| e.to_string())?;
    let checkout_date = parse_checkout_date(date).map_err(|e| e.to_string())?;
    let rental_days = parse_rental_days(days).map_err(|e| e.to_string())?;
    let discount_percent = parse_discount_percent(discount).map_err(|e| e.to_string())?;

    Ok(RentalRequest {
        tool_code: tool.code,
        checkout_date,
        rental_days,
        discount_percent,
    })
}

// =============================================================================
// Interactive Mode
// =============================================================================

/// Collects a full request from the terminal, one field at a time.
fn prompt_for_request() -> io::Result<RentalRequest> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let tool = prompt_until(&mut lines, "Please enter tool code >>> ", |input| {
        ToolCatalog::lookup(input.trim())
            .map_err(|_| format!("Unrecognized tool code. Known codes: {}", ToolCatalog::codes().join(", ")))
    })?;

    let checkout_date = prompt_until(
        &mut lines,
        "Enter the checkout date as MM/DD/YY >>> ",
        |input| parse_checkout_date(input).map_err(|e| e.to_string()),
    )?;

    let days_prompt = format!("For how many days do you want to rent {}? >>> ", tool.code);
    let rental_days = prompt_until(&mut lines, &days_prompt, |input| {
        parse_rental_days(input).map_err(|e| e.to_string())
    })?;

    let discount_percent = prompt_until(
        &mut lines,
        "Enter the discount percent, 0 to 100 >>> ",
        |input| parse_discount_percent(input).map_err(|e| e.to_string()),
    )?;

    Ok(RentalRequest {
        tool_code: tool.code,
        checkout_date,
        rental_days,
        discount_percent,
    })
}

/// Prompts until `parse` accepts a line, echoing the rejection reason on
/// each failed attempt. Validation failures are ordinary values here, not
/// errors: only losing stdin ends the loop early.
fn prompt_until<T>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> io::Result<T> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before checkout was complete",
                ))
            }
        };

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(reason) => println!("{reason}"),
        }
    }
}

// =============================================================================
// Agreement Rendering
// =============================================================================

/// Renders the printed agreement: dates as MM/DD/YY, currency as $X.XX,
/// the discount as N%.
fn render_agreement(agreement: &RentalAgreement) -> String {
    let RentalAgreement {
        tool,
        checkout_date,
        due_date,
        rental_days,
        chargeable_days,
        discount_percent,
        base_charge,
        discount_amount,
        final_charge,
    } = agreement;

    format!(
        "{} rented on {}.\n\
         Rental period: {} -- {} ({} days, {} chargeable)\n\
         Initial charge: {}. Discount applied: {}% (amount: {})\n\
         Final amount due at return: {}",
        render_tool(tool),
        checkout_date.format("%m/%d/%y"),
        checkout_date.format("%m/%d/%y"),
        due_date.format("%m/%d/%y"),
        rental_days,
        chargeable_days,
        base_charge,
        discount_percent,
        discount_amount,
        final_charge,
    )
}

fn render_tool(tool: &ToolDescriptor) -> String {
    format!("{} {} ({})", tool.brand, tool.category, tool.code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_agreement() {
        let chainsaw = ToolCatalog::lookup("CHNS").unwrap();
        let agreement = RentalCalculator::compute(&chainsaw, date(2015, 7, 2), 5, 25);

        let rendered = render_agreement(&agreement);
        assert_eq!(
            rendered,
            "Stihl Chainsaw (CHNS) rented on 07/02/15.\n\
             Rental period: 07/02/15 -- 07/07/15 (5 days, 3 chargeable)\n\
             Initial charge: $4.47. Discount applied: 25% (amount: $1.12)\n\
             Final amount due at return: $3.35"
        );
    }

    #[test]
    fn test_request_from_args() {
        let cli = Cli {
            tool_code: Some("LADW".to_string()),
            checkout_date: Some("9/3/15".to_string()),
            days: Some("5".to_string()),
            discount: Some("10".to_string()),
        };
        let request = request_from_args(&cli).unwrap();
        assert_eq!(request.tool_code, "LADW");
        assert_eq!(request.checkout_date, date(2015, 9, 3));
        assert_eq!(request.rental_days, 5);
        assert_eq!(request.discount_percent, 10);
    }

    #[test]
    fn test_request_from_args_rejects_bad_fields() {
        let base = || Cli {
            tool_code: Some("LADW".to_string()),
            checkout_date: Some("9/3/15".to_string()),
            days: Some("5".to_string()),
            discount: Some("10".to_string()),
        };

        let mut cli = base();
        cli.tool_code = Some("DRLL".to_string());
        assert!(request_from_args(&cli).is_err());

        let mut cli = base();
        cli.days = Some("0".to_string());
        assert!(request_from_args(&cli).is_err());

        let mut cli = base();
        cli.discount = Some("101".to_string());
        assert!(request_from_args(&cli).is_err());

        let mut cli = base();
        cli.checkout_date = Some("13/40/15".to_string());
        assert!(request_from_args(&cli).is_err());
    }

    #[test]
    fn test_prompt_until_retries_then_accepts() {
        let mut lines = ["nonsense", "101", "25"]
            .into_iter()
            .map(|s| Ok(s.to_string()));

        let value = prompt_until(&mut lines, "discount >>> ", |input| {
            parse_discount_percent(input).map_err(|e| e.to_string())
        })
        .unwrap();
        assert_eq!(value, 25);
    }

    #[test]
    fn test_prompt_until_eof_is_an_error() {
        let mut lines = std::iter::empty();
        let result = prompt_until(&mut lines, ">>> ", |_| Ok::<(), String>(()));
        assert!(result.is_err());
    }
}
