//! # Order Summary Text
//!
//! Renders a [`PriceBreakdown`] as the fixed-width block shown in the
//! summary area of the form. Meant for a monospace font:
//!
//! ```text
//! =========================================
//! Regular Crust & Medium             $12.00
//! Ingredient
//! Pepperoni                           $1.00
//! Onions                              $1.00
//! -----------------------------------------
//! Sub-total:                         $14.00
//! Tax:                                $0.98
//! -----------------------------------------
//! Total:                             $14.98
//! =========================================
//! ```
//!
//! This is the only place amounts are rounded (to two decimals).

use crate::pricing::PriceBreakdown;

/// Width of the left-aligned label column
pub const LABEL_WIDTH: usize = 25;

/// Width of the right-aligned amount column
pub const AMOUNT_WIDTH: usize = 16;

/// Total line width; the separators span the full width
pub const LINE_WIDTH: usize = LABEL_WIDTH + AMOUNT_WIDTH;

/// Format a dollar amount to two decimals, e.g. `$14.98`
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Render the full summary block, one line per row, ending with a newline
pub fn format_summary(breakdown: &PriceBreakdown) -> String {
    let frame = "=".repeat(LINE_WIDTH);
    let rule = "-".repeat(LINE_WIDTH);

    let mut lines = vec![
        frame.clone(),
        amount_line(&breakdown.headline(), breakdown.base_price),
        "Ingredient".to_string(),
    ];
    lines.extend(
        breakdown
            .topping_lines
            .iter()
            .map(|line| amount_line(line.name(), line.unit_price)),
    );
    lines.push(rule.clone());
    lines.push(amount_line("Sub-total:", breakdown.subtotal));
    lines.push(amount_line("Tax:", breakdown.tax));
    lines.push(rule);
    lines.push(amount_line("Total:", breakdown.total));
    lines.push(frame);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// One label/amount row without the trailing newline
fn amount_line(label: &str, amount: f64) -> String {
    format!(
        "{:<label_w$}{:>amount_w$}",
        label,
        format_money(amount),
        label_w = LABEL_WIDTH,
        amount_w = AMOUNT_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::menu::{CrustOption, SizeOption, Topping};
    use crate::pricing::compute_summary;

    fn breakdown(crust: CrustOption, size: SizeOption, toppings: &[Topping]) -> PriceBreakdown {
        let set: BTreeSet<Topping> = toppings.iter().copied().collect();
        compute_summary(Some(crust), size, &set).unwrap()
    }

    #[test]
    fn test_regular_medium_summary() {
        let text = format_summary(&breakdown(
            CrustOption::Regular,
            SizeOption::Medium,
            &[Topping::Onions, Topping::Pepperoni],
        ));

        let expected = "\
=========================================
Regular Crust & Medium             $12.00
Ingredient
Pepperoni                           $1.00
Onions                              $1.00
-----------------------------------------
Sub-total:                         $14.00
Tax:                                $0.98
-----------------------------------------
Total:                             $14.98
=========================================
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_lines_fit_width() {
        let text = format_summary(&breakdown(CrustOption::DeepDish, SizeOption::Super, &Topping::ALL));
        for line in text.lines() {
            assert!(line.len() <= LINE_WIDTH, "line too long: {:?}", line);
        }
        assert!(text.contains("Deep Dish & Super"));
        assert!(text.contains("Extra Cheese"));
        // 20 + 6 = 26, tax 1.82, total 27.82
        assert!(text.contains("$26.00"));
        assert!(text.contains("$1.82"));
        assert!(text.contains("$27.82"));
    }

    #[test]
    fn test_one_row_per_topping() {
        for count in 1..=Topping::ALL.len() {
            let text = format_summary(&breakdown(
                CrustOption::Thin,
                SizeOption::Small,
                &Topping::ALL[..count],
            ));
            // frame, headline, "Ingredient", toppings, rule, sub-total, tax, rule, total, frame
            assert_eq!(text.lines().count(), 9 + count);
            assert!(text.ends_with("=\n"));
            assert!(!text.ends_with("\n\n"));
        }
    }

    #[test]
    fn test_format_money_rounds_to_cents() {
        assert_eq!(format_money(0.6300000000000001), "$0.63");
        assert_eq!(format_money(9.63), "$9.63");
        assert_eq!(format_money(8.0), "$8.00");
    }
}
