//! # Error Types
//!
//! Structured error types for pizza_core. An order can only fail validation:
//! there is no I/O and no parsing of untrusted data in the core, so every
//! error here is a user-input problem the user can fix and resubmit.
//!
//! ## Example
//!
//! ```rust
//! use pizza_core::errors::{OrderResult, ValidationError};
//! use pizza_core::menu::CrustOption;
//!
//! fn require_crust(crust: Option<CrustOption>) -> OrderResult<CrustOption> {
//!     crust.ok_or(ValidationError::NoCrustSelected)
//! }
//!
//! let err = require_crust(None).unwrap_err();
//! assert_eq!(err.to_string(), "Please select a crust type!");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for order operations
pub type OrderResult<T> = Result<T, ValidationError>;

/// Validation failure for an order submission.
///
/// Variants are checked in declaration order: a missing crust is reported
/// before missing toppings. The `Display` text is the message shown to the
/// user.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// No crust radio button is selected
    #[error("Please select a crust type!")]
    NoCrustSelected,

    /// Not a single topping is checked
    #[error("Please select at least one topping!")]
    NoToppingsSelected,
}

impl ValidationError {
    /// All validation failures can be corrected by the user and resubmitted
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::NoCrustSelected => "NO_CRUST_SELECTED",
            ValidationError::NoToppingsSelected => "NO_TOPPINGS_SELECTED",
        }
    }

    /// Name of the form field the user has to fix
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NoCrustSelected => "crust",
            ValidationError::NoToppingsSelected => "toppings",
        }
    }
}
