//! # pizza_core - Pizza Order Pricing Engine
//!
//! `pizza_core` holds everything behind the pizza order form that is not a
//! widget: the menu, validation of a selection, price computation, the
//! summary text, and the form commands (Order, Clear). The GUI and CLI are
//! thin layers that map their input events onto [`OrderForm`].
//!
//! ## Design Philosophy
//!
//! - **Stateless pricing**: [`compute_summary`] is a pure function of the selection
//! - **JSON-First**: results and errors implement Serialize/Deserialize
//! - **Rich Errors**: validation failures are an enum, not strings
//! - **No I/O**: nothing here touches files, network or the terminal
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use pizza_core::{compute_summary, format_summary, CrustOption, SizeOption, Topping};
//!
//! let toppings = BTreeSet::from([Topping::ExtraCheese]);
//! let breakdown = compute_summary(Some(CrustOption::Thin), SizeOption::Small, &toppings).unwrap();
//! println!("{}", format_summary(&breakdown));
//!
//! // Serialize to JSON for scripting
//! let json = serde_json::to_string_pretty(&breakdown).unwrap();
//! assert!(json.contains("\"subtotal\": 9.0"));
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Crusts, sizes, toppings and their prices
//! - [`order`] - Order snapshot and form state with its commands
//! - [`pricing`] - Validation and price breakdown
//! - [`summary`] - Fixed-width summary text
//! - [`errors`] - Structured error types

pub mod errors;
pub mod menu;
pub mod order;
pub mod pricing;
pub mod summary;

// Re-export commonly used types at crate root for convenience
pub use errors::{OrderResult, ValidationError};
pub use menu::{CrustOption, SizeOption, Topping, TAX_RATE, TOPPING_PRICE};
pub use order::{Order, OrderForm};
pub use pricing::{compute_summary, PriceBreakdown, ToppingLine};
pub use summary::format_summary;
