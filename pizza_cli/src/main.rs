//! # Pizza Order Form CLI Application
//!
//! Terminal version of the order form. Drives the same
//! [`pizza_core::OrderForm`] commands as the GUI through line-based prompts.
//!
//! ## Usage
//!
//! ```text
//! pizza_cli [--json]
//! ```
//!
//! `--json` additionally prints each price breakdown (or validation error)
//! as JSON for scripting.

mod input;

use std::io::{self, BufRead, Write};

use pizza_core::{CrustOption, OrderForm, SizeOption, Topping};

use input::{parse_crust, parse_size, parse_toppings, InputError};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("Usage: pizza_cli [--json]");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: pizza_cli [--json]");
                std::process::exit(2);
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut form = OrderForm::new();
    run(&mut stdin.lock(), &mut stdout.lock(), &mut form, json)
}

/// Action chosen at the top-level prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Order,
    Clear,
    Quit,
}

fn parse_action(entry: &str) -> Option<Action> {
    match entry.trim().to_lowercase().as_str() {
        "" | "o" | "order" => Some(Action::Order),
        "c" | "clear" => Some(Action::Clear),
        "q" | "quit" => Some(Action::Quit),
        _ => None,
    }
}

/// Main prompt loop over `form`. Returns when the user confirms quit or input ends.
fn run(input: &mut impl BufRead, out: &mut impl Write, form: &mut OrderForm, json: bool) -> io::Result<()> {
    writeln!(out, "Pizza Order Form")?;
    writeln!(out, "================")?;

    loop {
        writeln!(out)?;
        let Some(line) = prompt(input, out, "(o)rder, (c)lear, (q)uit [o]: ")? else {
            return Ok(());
        };

        match parse_action(&line) {
            Some(Action::Order) => {
                if !read_selection(input, out, form)? {
                    return Ok(());
                }
                place_order(out, form, json)?;
            }
            Some(Action::Clear) => {
                form.clear();
                log::info!("form cleared");
                writeln!(out, "Form cleared.")?;
            }
            Some(Action::Quit) => {
                let answer = prompt(input, out, "Are you sure you want to quit? [y/N]: ")?;
                match answer {
                    None => return Ok(()),
                    Some(a) if matches!(a.trim().to_lowercase().as_str(), "y" | "yes") => {
                        log::info!("quit confirmed");
                        return Ok(());
                    }
                    Some(_) => {}
                }
            }
            None => writeln!(out, "Unknown action '{}'.", line.trim())?,
        }
    }
}

/// Prompt for crust, size and toppings and store them in the form.
///
/// Returns `false` if input ended before all three were entered.
fn read_selection(input: &mut impl BufRead, out: &mut impl Write, form: &mut OrderForm) -> io::Result<bool> {
    print_menu(out)?;

    let Some(crust) = prompt_until_valid(input, out, "Crust [1-3, blank for none]: ", parse_crust)? else {
        return Ok(false);
    };
    let Some(size) = prompt_until_valid(input, out, "Size [1-4, blank for Small]: ", parse_size)? else {
        return Ok(false);
    };
    let Some(toppings) = prompt_until_valid(input, out, "Toppings [e.g. 1,5, blank for none]: ", parse_toppings)? else {
        return Ok(false);
    };

    form.crust = crust;
    form.select_size(size);
    for topping in Topping::ALL {
        form.set_topping(topping, toppings.contains(&topping));
    }
    Ok(true)
}

/// Run the Order command and print its outcome
fn place_order(out: &mut impl Write, form: &mut OrderForm, json: bool) -> io::Result<()> {
    match form.submit() {
        Ok(breakdown) => {
            log::info!("order placed: {}, total {:.2}", breakdown.headline(), breakdown.total);
            writeln!(out)?;
            write!(out, "{}", form.summary)?;
            if json {
                if let Ok(text) = serde_json::to_string_pretty(&breakdown) {
                    writeln!(out)?;
                    writeln!(out, "{}", text)?;
                }
            }
        }
        Err(e) => {
            log::info!("order rejected: {}", e.error_code());
            writeln!(out, "Error: {}", e)?;
            if json {
                if let Ok(text) = serde_json::to_string_pretty(&e) {
                    writeln!(out, "{}", text)?;
                }
            }
        }
    }
    Ok(())
}

fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Crust Type:")?;
    for (i, crust) in CrustOption::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, crust)?;
    }
    writeln!(out, "Size:")?;
    for (i, size) in SizeOption::ALL.iter().enumerate() {
        writeln!(out, "  {}. {:<8} ${:.2}", i + 1, size, size.base_price())?;
    }
    writeln!(out, "Toppings ($1 each):")?;
    for (i, topping) in Topping::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, topping)?;
    }
    Ok(())
}

/// Print `text` and read one line. `None` at end of input.
///
/// Invalid UTF-8 is replaced rather than rejected, so a garbled entry is
/// reported by the field parser and re-prompted instead of ending the session.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Keep prompting until `parse` accepts the entry. `None` at end of input.
fn prompt_until_valid<T>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> io::Result<Option<T>> {
    loop {
        let Some(line) = prompt(input, out, text)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}
