//! # Menu
//!
//! The fixed menu: crust styles, size tiers with their base prices, and the
//! flat-priced toppings. Every option carries its own price and labels, so
//! there is no separate table that has to stay index-aligned with a list of
//! names.
//!
//! ## Prices
//!
//! | Size   | Base   |
//! |--------|--------|
//! | Small  | $8.00  |
//! | Medium | $12.00 |
//! | Large  | $16.00 |
//! | Super  | $20.00 |
//!
//! Each topping is $1.00. Sales tax is 7% of the subtotal.

use serde::{Deserialize, Serialize};

/// Price of a single topping, in dollars
pub const TOPPING_PRICE: f64 = 1.00;

/// Sales tax rate applied to the subtotal (7%)
pub const TAX_RATE: f64 = 0.07;

// ============================================================================
// CRUST
// ============================================================================

/// Crust style. Exactly one must be chosen before an order is valid; the
/// "nothing chosen yet" state is `Option::<CrustOption>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CrustOption {
    Thin,
    Regular,
    DeepDish,
}

impl CrustOption {
    /// All crusts in form order
    pub const ALL: [CrustOption; 3] = [CrustOption::Thin, CrustOption::Regular, CrustOption::DeepDish];

    /// Label on the crust radio button
    pub fn display_name(&self) -> &'static str {
        match self {
            CrustOption::Thin => "Thin",
            CrustOption::Regular => "Regular",
            CrustOption::DeepDish => "Deep-dish",
        }
    }

    /// Label used in the first line of the order summary
    pub fn summary_label(&self) -> &'static str {
        match self {
            CrustOption::Thin => "Thin Crust",
            CrustOption::Regular => "Regular Crust",
            CrustOption::DeepDish => "Deep Dish",
        }
    }
}

impl std::fmt::Display for CrustOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// SIZE
// ============================================================================

/// Pizza size tier. Determines the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum SizeOption {
    #[default]
    Small,
    Medium,
    Large,
    Super,
}

impl SizeOption {
    /// All sizes for UI selection, smallest first (the first is the default)
    pub const ALL: [SizeOption; 4] = [
        SizeOption::Small,
        SizeOption::Medium,
        SizeOption::Large,
        SizeOption::Super,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SizeOption::Small => "Small",
            SizeOption::Medium => "Medium",
            SizeOption::Large => "Large",
            SizeOption::Super => "Super",
        }
    }

    /// Base price before toppings and tax, in dollars
    pub fn base_price(&self) -> f64 {
        match self {
            SizeOption::Small => 8.00,
            SizeOption::Medium => 12.00,
            SizeOption::Large => 16.00,
            SizeOption::Super => 20.00,
        }
    }
}

impl std::fmt::Display for SizeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// TOPPINGS
// ============================================================================

/// Optional add-on ingredient. Any number may be selected.
///
/// The derived `Ord` follows declaration order, which is the canonical menu
/// order; a `BTreeSet<Topping>` therefore iterates in menu order no matter
/// in which order the toppings were picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topping {
    Pepperoni,
    Mushrooms,
    Sausage,
    Bacon,
    Onions,
    ExtraCheese,
}

impl Topping {
    /// All toppings in canonical menu order
    pub const ALL: [Topping; 6] = [
        Topping::Pepperoni,
        Topping::Mushrooms,
        Topping::Sausage,
        Topping::Bacon,
        Topping::Onions,
        Topping::ExtraCheese,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Topping::Pepperoni => "Pepperoni",
            Topping::Mushrooms => "Mushrooms",
            Topping::Sausage => "Sausage",
            Topping::Bacon => "Bacon",
            Topping::Onions => "Onions",
            Topping::ExtraCheese => "Extra Cheese",
        }
    }

    /// Every topping costs the same flat price
    pub fn unit_price(&self) -> f64 {
        TOPPING_PRICE
    }
}

impl std::fmt::Display for Topping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
