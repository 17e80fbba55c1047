//! Titled Panel
//!
//! A bordered box with a small caption above its content, used to group
//! the crust, size, toppings and summary inputs.

use iced::widget::{column, container, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Wrap `content` in a bordered box captioned with `title`
pub fn titled_panel<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let caption = text(title).size(12).color([0.4, 0.4, 0.4]);

    container(column![caption, Space::new().height(6), content.into()])
        .padding(Padding::from([8, 10]))
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
