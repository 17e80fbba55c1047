//! # Order and Form State
//!
//! [`OrderForm`] is the in-memory state behind the order form: the crust
//! radio group, the size combo box, the topping checkboxes and the summary
//! text area. Front ends map widget events onto its methods and render from
//! its fields, so the Order and Clear commands behave the same in every UI.
//!
//! [`Order`] is the snapshot handed to the calculator on each submit.
//!
//! ## Example
//!
//! ```rust
//! use pizza_core::menu::{CrustOption, SizeOption, Topping};
//! use pizza_core::order::OrderForm;
//!
//! let mut form = OrderForm::new();
//! form.select_crust(CrustOption::Thin);
//! form.set_topping(Topping::ExtraCheese, true);
//!
//! let breakdown = form.submit().unwrap();
//! assert_eq!(breakdown.subtotal, 9.0);
//! assert!(!form.summary.is_empty());
//!
//! form.clear();
//! assert_eq!(form.size, SizeOption::Small);
//! assert!(form.summary.is_empty());
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::OrderResult;
use crate::menu::{CrustOption, SizeOption, Topping};
use crate::pricing::{self, PriceBreakdown};
use crate::summary::format_summary;

/// Selection snapshot taken from the form at submit time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Order {
    /// `None` until the user picks a crust
    pub crust: Option<CrustOption>,
    pub size: SizeOption,
    /// Ordered by menu position, not by when they were checked
    pub toppings: BTreeSet<Topping>,
}

/// Current state of the order form.
///
/// `Default` is the cleared state: no crust, first size, no toppings and an
/// empty summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderForm {
    pub crust: Option<CrustOption>,
    pub size: SizeOption,
    pub toppings: BTreeSet<Topping>,
    /// Text of the summary area; empty when nothing has been ordered yet
    pub summary: String,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_crust(&mut self, crust: CrustOption) {
        self.crust = Some(crust);
    }

    pub fn select_size(&mut self, size: SizeOption) {
        self.size = size;
    }

    /// Check or uncheck a topping
    pub fn set_topping(&mut self, topping: Topping, selected: bool) {
        if selected {
            self.toppings.insert(topping);
        } else {
            self.toppings.remove(&topping);
        }
    }

    /// Flip a topping checkbox, returning its new state
    pub fn toggle_topping(&mut self, topping: Topping) -> bool {
        let selected = !self.is_topping_selected(topping);
        self.set_topping(topping, selected);
        selected
    }

    pub fn is_topping_selected(&self, topping: Topping) -> bool {
        self.toppings.contains(&topping)
    }

    /// Snapshot the current selection
    pub fn order(&self) -> Order {
        Order {
            crust: self.crust,
            size: self.size,
            toppings: self.toppings.clone(),
        }
    }

    /// Order command: validate and price the current selection.
    ///
    /// On success the summary text is replaced with the new breakdown. On a
    /// validation error the summary is left exactly as it was.
    pub fn submit(&mut self) -> OrderResult<PriceBreakdown> {
        let breakdown = pricing::calculate(&self.order())?;
        self.summary = format_summary(&breakdown);
        Ok(breakdown)
    }

    /// Clear command: reset every field and empty the summary
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    fn filled_form() -> OrderForm {
        let mut form = OrderForm::new();
        form.select_crust(CrustOption::DeepDish);
        form.select_size(SizeOption::Large);
        form.set_topping(Topping::Bacon, true);
        form.set_topping(Topping::Mushrooms, true);
        form
    }

    #[test]
    fn test_new_form_is_cleared() {
        let form = OrderForm::new();
        assert_eq!(form.crust, None);
        assert_eq!(form.size, SizeOption::Small);
        assert!(form.toppings.is_empty());
        assert!(form.summary.is_empty());
    }

    #[test]
    fn test_submit_fills_summary() {
        let mut form = filled_form();
        let breakdown = form.submit().unwrap();
        assert_eq!(breakdown.subtotal, 18.0);
        assert!(form.summary.contains("Deep Dish & Large"));
        assert!(form.summary.contains("Mushrooms"));
    }

    #[test]
    fn test_failed_submit_keeps_previous_summary() {
        let mut form = filled_form();
        form.submit().unwrap();
        let previous = form.summary.clone();

        form.set_topping(Topping::Bacon, false);
        form.set_topping(Topping::Mushrooms, false);
        assert_eq!(form.submit().unwrap_err(), ValidationError::NoToppingsSelected);
        assert_eq!(form.summary, previous);
    }

    #[test]
    fn test_failed_submit_on_empty_form() {
        let mut form = OrderForm::new();
        assert_eq!(form.submit().unwrap_err(), ValidationError::NoCrustSelected);
        assert!(form.summary.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled_form();
        form.submit().unwrap();
        form.clear();

        assert_eq!(form.crust, None);
        assert_eq!(form.size, SizeOption::Small);
        assert!(form.toppings.is_empty());
        assert!(form.summary.is_empty());
        assert_eq!(form, OrderForm::default());
    }

    #[test]
    fn test_toggle_topping() {
        let mut form = OrderForm::new();
        assert!(form.toggle_topping(Topping::Onions));
        assert!(form.is_topping_selected(Topping::Onions));
        assert!(!form.toggle_topping(Topping::Onions));
        assert!(!form.is_topping_selected(Topping::Onions));
    }

    #[test]
    fn test_crust_selection_is_exclusive() {
        let mut form = OrderForm::new();
        form.select_crust(CrustOption::Thin);
        form.select_crust(CrustOption::Regular);
        assert_eq!(form.order().crust, Some(CrustOption::Regular));
    }
}
