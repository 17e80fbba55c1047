//! # Order Pricing
//!
//! Validates a crust/size/toppings selection and computes its price
//! breakdown. Follows the same shape as the other pure calculations:
//!
//! - [`Order`](crate::order::Order) - input parameters
//! - [`PriceBreakdown`] - derived result (JSON-serializable)
//! - [`compute_summary`] / [`calculate`] - pure calculation functions
//!
//! ## Arithmetic
//!
//! ```text
//! subtotal = base_price(size) + count(toppings) * TOPPING_PRICE
//! tax      = subtotal * TAX_RATE
//! total    = subtotal + tax
//! ```
//!
//! Amounts stay as unrounded `f64` dollars; rounding to cents happens only
//! when the breakdown is formatted for display.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use pizza_core::menu::{CrustOption, SizeOption, Topping};
//! use pizza_core::pricing::compute_summary;
//!
//! let toppings = BTreeSet::from([Topping::Pepperoni, Topping::Onions]);
//! let breakdown = compute_summary(Some(CrustOption::Regular), SizeOption::Medium, &toppings).unwrap();
//!
//! assert_eq!(breakdown.subtotal, 14.0);
//! assert!((breakdown.total - 14.98).abs() < 1e-9);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{OrderResult, ValidationError};
use crate::menu::{CrustOption, SizeOption, Topping, TAX_RATE, TOPPING_PRICE};
use crate::order::Order;

/// One priced topping in the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToppingLine {
    pub topping: Topping,
    /// Price of this topping in dollars
    pub unit_price: f64,
}

impl ToppingLine {
    pub fn name(&self) -> &'static str {
        self.topping.display_name()
    }
}

/// Price breakdown for a validated order.
///
/// Produced fresh on every submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Crust the order was priced for
    pub crust: CrustOption,
    /// Size the order was priced for
    pub size: SizeOption,
    /// Base price of the size (dollars)
    pub base_price: f64,
    /// Selected toppings in canonical menu order
    pub topping_lines: Vec<ToppingLine>,
    /// Base price plus toppings, before tax (dollars)
    pub subtotal: f64,
    /// Tax rate applied to the subtotal
    pub tax_rate: f64,
    /// Subtotal times tax rate (dollars, unrounded)
    pub tax: f64,
    /// Subtotal plus tax (dollars, unrounded)
    pub total: f64,
}

impl PriceBreakdown {
    /// Number of toppings on the order
    pub fn topping_count(&self) -> usize {
        self.topping_lines.len()
    }

    /// Header text for the summary, e.g. "Regular Crust & Medium"
    pub fn headline(&self) -> String {
        format!("{} & {}", self.crust.summary_label(), self.size.display_name())
    }
}

/// Validate a selection and compute its price breakdown.
///
/// The crust is checked before the toppings, so a selection missing both
/// reports [`ValidationError::NoCrustSelected`].
///
/// # Errors
///
/// - [`ValidationError::NoCrustSelected`] if `crust` is `None`
/// - [`ValidationError::NoToppingsSelected`] if `toppings` is empty
pub fn compute_summary(
    crust: Option<CrustOption>,
    size: SizeOption,
    toppings: &BTreeSet<Topping>,
) -> OrderResult<PriceBreakdown> {
    let crust = crust.ok_or(ValidationError::NoCrustSelected)?;
    if toppings.is_empty() {
        return Err(ValidationError::NoToppingsSelected);
    }

    let base_price = size.base_price();

    // BTreeSet iterates in declaration order of `Topping`, i.e. menu order
    let topping_lines: Vec<ToppingLine> = toppings
        .iter()
        .map(|&topping| ToppingLine {
            topping,
            unit_price: topping.unit_price(),
        })
        .collect();

    let subtotal = base_price + topping_lines.len() as f64 * TOPPING_PRICE;
    let tax = subtotal * TAX_RATE;
    let total = subtotal + tax;

    log::debug!(
        "priced {} {} with {} topping(s): subtotal={:.2} tax={:.2} total={:.2}",
        crust,
        size,
        topping_lines.len(),
        subtotal,
        tax,
        total
    );

    Ok(PriceBreakdown {
        crust,
        size,
        base_price,
        topping_lines,
        subtotal,
        tax_rate: TAX_RATE,
        tax,
        total,
    })
}

/// Price an [`Order`] snapshot taken from the form
pub fn calculate(order: &Order) -> OrderResult<PriceBreakdown> {
    compute_summary(order.crust, order.size, &order.toppings)
}

// ============================================================================
// TESTS
// ============================================================================
