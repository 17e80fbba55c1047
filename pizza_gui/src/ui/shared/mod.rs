//! Shared UI components reusable across panels
//!
//! Contains:
//! - `panel` - Titled group box wrapping a set of related inputs

pub mod panel;
