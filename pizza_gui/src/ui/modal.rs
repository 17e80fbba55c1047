//! Modal dialog component
//!
//! Blocking overlays shown on top of the form: the alert for a rejected
//! order and the quit confirmation.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use pizza_core::ValidationError;

use crate::Message;

/// Types of modal dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalType {
    /// The order could not be placed; shows the validation message
    ValidationFailed(ValidationError),
    /// "Are you sure you want to quit?" with Yes / No
    ConfirmQuit,
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
///
/// Clicking the backdrop dismisses an alert; the quit prompt has to be
/// answered explicitly.
pub fn view_backdrop(modal_type: &ModalType) -> Element<'static, Message> {
    let on_press = match modal_type {
        ModalType::ValidationFailed(_) => Some(Message::ModalDismiss),
        ModalType::ConfirmQuit => None,
    };

    button(Space::new())
        .on_press_maybe(on_press)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render a modal dialog based on its type
pub fn view_modal(modal_type: &ModalType) -> Element<'static, Message> {
    match modal_type {
        ModalType::ValidationFailed(error) => view_alert_modal(*error),
        ModalType::ConfirmQuit => view_confirm_quit_modal(),
    }
}

fn view_alert_modal(error: ValidationError) -> Element<'static, Message> {
    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("OK").size(11))
            .on_press(Message::ModalDismiss)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    view_dialog("Message", error.to_string(), buttons.into())
}

fn view_confirm_quit_modal() -> Element<'static, Message> {
    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("No").size(11))
            .on_press(Message::ModalDismiss)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(8),
        button(text("Yes").size(11))
            .on_press(Message::ConfirmQuit)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    view_dialog("Confirm", "Are you sure you want to quit?".to_string(), buttons.into())
}

/// Title, message and button row in a bordered box centered on screen
fn view_dialog(
    title: &'static str,
    message: String,
    buttons: Element<'static, Message>,
) -> Element<'static, Message> {
    let content = column![
        text(title).size(18),
        Space::new().height(12),
        text(message).size(12),
        Space::new().height(20),
        buttons,
    ]
    .width(Length::Fixed(320.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

