//! Parsing of typed menu selections.
//!
//! Each field accepts either the number shown in the menu listing or the
//! option's name (case-insensitive). A blank line means "nothing selected"
//! for crust and toppings and "the first size" for size.

use std::collections::BTreeSet;

use thiserror::Error;

use pizza_core::{CrustOption, SizeOption, Topping};

/// A typed entry that does not name a menu option
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a crust; enter 1-3 or a crust name")]
    UnknownCrust(String),

    #[error("'{0}' is not a size; enter 1-4 or a size name")]
    UnknownSize(String),

    #[error("'{0}' is not a topping; enter numbers 1-6 or topping names, separated by commas")]
    UnknownTopping(String),
}

/// Resolve `entry` against `options` by 1-based position or display name
fn lookup<T: Copy>(entry: &str, options: &[T], name: impl Fn(&T) -> &'static str) -> Option<T> {
    if let Ok(n) = entry.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }

    let wanted = normalize(entry);
    options.iter().find(|o| normalize(name(o)) == wanted).copied()
}

/// Lowercase and drop separators so "Deep-dish", "deep dish" and "DEEPDISH" match
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

pub fn parse_crust(entry: &str) -> Result<Option<CrustOption>, InputError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Ok(None);
    }
    lookup(entry, &CrustOption::ALL, |c| c.display_name())
        .map(Some)
        .ok_or_else(|| InputError::UnknownCrust(entry.to_string()))
}

pub fn parse_size(entry: &str) -> Result<SizeOption, InputError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Ok(SizeOption::default());
    }
    lookup(entry, &SizeOption::ALL, |s| s.display_name())
        .ok_or_else(|| InputError::UnknownSize(entry.to_string()))
}

/// Parse a comma-separated topping list. Duplicates collapse into one.
pub fn parse_toppings(entry: &str) -> Result<BTreeSet<Topping>, InputError> {
    entry
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            lookup(part, &Topping::ALL, |t| t.display_name())
                .ok_or_else(|| InputError::UnknownTopping(part.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crust() {
        assert_eq!(parse_crust(""), Ok(None));
        assert_eq!(parse_crust(" 2 "), Ok(Some(CrustOption::Regular)));
        assert_eq!(parse_crust("deep dish"), Ok(Some(CrustOption::DeepDish)));
        assert_eq!(parse_crust("Deep-dish"), Ok(Some(CrustOption::DeepDish)));
        assert_eq!(parse_crust("0"), Err(InputError::UnknownCrust("0".to_string())));
        assert_eq!(parse_crust("4"), Err(InputError::UnknownCrust("4".to_string())));
        assert!(parse_crust("stuffed").is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(""), Ok(SizeOption::Small));
        assert_eq!(parse_size("4"), Ok(SizeOption::Super));
        assert_eq!(parse_size("medium"), Ok(SizeOption::Medium));
        assert_eq!(parse_size("XL"), Err(InputError::UnknownSize("XL".to_string())));
    }

    #[test]
    fn test_parse_toppings() {
        assert!(parse_toppings("").unwrap().is_empty());
        assert!(parse_toppings(" , ").unwrap().is_empty());

        let toppings = parse_toppings("6, 1,extra cheese").unwrap();
        assert_eq!(
            toppings.into_iter().collect::<Vec<_>>(),
            vec![Topping::Pepperoni, Topping::ExtraCheese]
        );

        assert_eq!(
            parse_toppings("1, pineapple"),
            Err(InputError::UnknownTopping("pineapple".to_string()))
        );
    }
}
