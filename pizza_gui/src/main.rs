//! # Pizza Order Form GUI Application
//!
//! Single-window order form built with Iced. All order state lives in
//! [`pizza_core::OrderForm`]; this crate only maps widget events onto its
//! commands and renders the result.
//!
//! ## Layout
//! - Header with theme toggle
//! - Crust radio group and size pick list side by side
//! - Topping checkboxes
//! - Read-only order summary
//! - Order / Clear / Quit buttons
//! - Status bar
//!
//! Validation failures and quit confirmation are shown as modal overlays.

mod ui;
mod update;

use iced::widget::{column, container, stack, Space};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};

use pizza_core::{CrustOption, OrderForm, SizeOption, Topping};

use ui::modal::ModalType;

/// Window title, also shown in the header
pub const APP_TITLE: &str = "Pizza Order Form";

const WINDOW_WIDTH: f32 = 500.0;
const WINDOW_HEIGHT: f32 = 600.0;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("starting {}", APP_TITLE);

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            // Closing goes through the same confirmation as the Quit button
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .run()
}

/// Messages produced by the form widgets, buttons and dialogs
#[derive(Debug, Clone)]
pub enum Message {
    // Form inputs
    CrustSelected(CrustOption),
    SizeSelected(SizeOption),
    ToppingToggled(Topping, bool),

    // Buttons
    PlaceOrder,
    ClearForm,
    QuitRequested,

    // Window close button
    WindowCloseRequested(window::Id),

    // Modal actions
    /// OK on an alert, No on the quit prompt, or a click on the backdrop
    ModalDismiss,
    /// Yes on the quit prompt
    ConfirmQuit,

    // Settings
    ToggleDarkMode,
}

/// Application state
#[derive(Debug, Default)]
pub struct App {
    /// Crust, size, toppings and summary text
    pub form: OrderForm,
    /// Modal currently shown on top of the form, if any
    pub modal: Option<ModalType>,
    /// Outcome of the last action, shown in the status bar
    pub status: String,
    pub dark_mode: bool,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Message>) {
        let app = App {
            status: "Ready".to_string(),
            ..App::default()
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    pub(crate) fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::WindowCloseRequested)
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_header(APP_TITLE, self.dark_mode),
            Space::new().height(8),
            ui::order_panel::view_order_panel(&self.form),
            Space::new().height(8),
            ui::summary_panel::view_summary_panel(&self.form.summary),
            Space::new().height(8),
            ui::button_bar::view_button_bar(),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .padding(10);

        let base: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match &self.modal {
            Some(modal_type) => stack![
                base,
                ui::modal::view_backdrop(modal_type),
                ui::modal::view_modal(modal_type),
            ]
            .into(),
            None => base,
        }
    }
}
