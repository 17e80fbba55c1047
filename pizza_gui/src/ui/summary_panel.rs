//! Order Summary
//!
//! Read-only view of the formatted summary. The text is laid out in fixed
//! columns by pizza_core, so it is rendered in a monospace font.

use iced::widget::{scrollable, text};
use iced::{Element, Font, Length};

use crate::Message;
use super::shared::panel::titled_panel;

/// Render the summary text area
pub fn view_summary_panel(summary: &str) -> Element<'_, Message> {
    let body = scrollable(text(summary).font(Font::MONOSPACE).size(12))
        .width(Length::Fill)
        .height(Length::Fixed(220.0));

    titled_panel("Order Summary", body)
}
