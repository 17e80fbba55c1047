//! UI module for the Pizza Order Form GUI
//!
//! # Panel Structure
//! - `toolbar` - Header with title and theme toggle
//! - `order_panel` - Crust radio group, size pick list, topping checkboxes
//! - `summary_panel` - Read-only monospace order summary
//! - `button_bar` - Order, Clear, Quit
//! - `status_bar` - Bottom status message
//! - `modal` - Validation alert and quit confirmation overlays
//!
//! # Shared Components
//! - `shared/panel` - Titled, bordered group box

// Top-level panels
pub mod toolbar;
pub mod order_panel;
pub mod summary_panel;
pub mod button_bar;
pub mod status_bar;

// Overlays
pub mod modal;

// Shared components
pub mod shared;
