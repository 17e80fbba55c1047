//! Action buttons: Order, Clear, Quit

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the centered button row
pub fn view_button_bar() -> Element<'static, Message> {
    row![
        Space::new().width(Length::Fill),
        button(text("Order").size(12))
            .on_press(Message::PlaceOrder)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
        button(text("Clear").size(12))
            .on_press(Message::ClearForm)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        button(text("Quit").size(12))
            .on_press(Message::QuitRequested)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
