//! Message dispatch for the order form
//!
//! Maps every [`Message`] onto an [`OrderForm`](pizza_core::OrderForm)
//! command or a modal/theme change. While a modal is open, only the
//! dialog's own messages and window close requests are handled.

use iced::Task;

use crate::ui::modal::ModalType;
use crate::{App, Message};

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        // While a dialog is open only the dialog's own messages get through
        if self.modal.is_some() && !Self::is_modal_message(&message) {
            return Task::none();
        }

        match message {
            Message::CrustSelected(crust) => {
                self.form.select_crust(crust);
            }
            Message::SizeSelected(size) => {
                self.form.select_size(size);
            }
            Message::ToppingToggled(topping, selected) => {
                self.form.set_topping(topping, selected);
            }
            Message::PlaceOrder => match self.form.submit() {
                Ok(breakdown) => {
                    log::info!(
                        "order placed: {} with {} topping(s), total {:.2}",
                        breakdown.headline(),
                        breakdown.topping_count(),
                        breakdown.total
                    );
                    self.status = format!("Order placed - total ${:.2}", breakdown.total);
                }
                Err(e) => {
                    log::warn!("order rejected: {} ({})", e, e.error_code());
                    self.status = format!("Order not placed: {}", e);
                    self.modal = Some(ModalType::ValidationFailed(e));
                }
            },
            Message::ClearForm => {
                self.form.clear();
                log::info!("form cleared");
                self.status = "Form cleared".to_string();
            }
            Message::QuitRequested | Message::WindowCloseRequested(_) => {
                self.modal = Some(ModalType::ConfirmQuit);
            }
            Message::ModalDismiss => {
                self.modal = None;
            }
            Message::ConfirmQuit => {
                log::info!("quit confirmed");
                self.modal = None;
                return iced::exit();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }

        Task::none()
    }

    fn is_modal_message(message: &Message) -> bool {
        matches!(
            message,
            Message::ModalDismiss | Message::ConfirmQuit | Message::WindowCloseRequested(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use iced::{window, Theme};
    use pizza_core::{CrustOption, OrderForm, SizeOption, Topping, ValidationError};

    use super::*;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn test_order_without_crust_opens_alert() {
        let mut app = app();
        let _ = app.update(Message::ToppingToggled(Topping::Bacon, true));
        let _ = app.update(Message::PlaceOrder);

        assert_eq!(app.modal, Some(ModalType::ValidationFailed(ValidationError::NoCrustSelected)));
        assert!(app.form.summary.is_empty());
    }

    #[test]
    fn test_form_ignores_input_while_modal_open() {
        let mut app = app();
        let _ = app.update(Message::PlaceOrder);
        assert!(app.modal.is_some());

        let _ = app.update(Message::CrustSelected(CrustOption::Thin));
        assert_eq!(app.form.crust, None);

        let _ = app.update(Message::ModalDismiss);
        assert!(app.modal.is_none());
        let _ = app.update(Message::CrustSelected(CrustOption::Thin));
        assert_eq!(app.form.crust, Some(CrustOption::Thin));
    }

    #[test]
    fn test_order_then_clear() {
        let mut app = app();
        let _ = app.update(Message::CrustSelected(CrustOption::Regular));
        let _ = app.update(Message::SizeSelected(SizeOption::Medium));
        let _ = app.update(Message::ToppingToggled(Topping::Pepperoni, true));
        let _ = app.update(Message::ToppingToggled(Topping::Onions, true));
        let _ = app.update(Message::PlaceOrder);

        assert!(app.modal.is_none());
        assert!(app.form.summary.contains("$14.98"));
        assert_eq!(app.status, "Order placed - total $14.98");

        let _ = app.update(Message::ClearForm);
        assert_eq!(app.form, OrderForm::default());
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut app = app();
        let _ = app.update(Message::QuitRequested);
        assert_eq!(app.modal, Some(ModalType::ConfirmQuit));

        let _ = app.update(Message::ModalDismiss);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_window_close_asks_for_confirmation() {
        let mut app = app();
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert_eq!(app.modal, Some(ModalType::ConfirmQuit));
    }

    #[test]
    fn test_window_close_replaces_open_alert() {
        let mut app = app();
        let _ = app.update(Message::CrustSelected(CrustOption::Regular));
        let _ = app.update(Message::ToppingToggled(Topping::Sausage, true));
        let _ = app.update(Message::PlaceOrder);
        let summary = app.form.summary.clone();
        assert!(!summary.is_empty());

        let _ = app.update(Message::ToppingToggled(Topping::Sausage, false));
        let _ = app.update(Message::PlaceOrder);
        assert_eq!(
            app.modal,
            Some(ModalType::ValidationFailed(ValidationError::NoToppingsSelected))
        );
        let form_before = app.form.clone();

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert_eq!(app.modal, Some(ModalType::ConfirmQuit));
        assert_eq!(app.form, form_before);
        assert_eq!(app.form.summary, summary);
    }
}
