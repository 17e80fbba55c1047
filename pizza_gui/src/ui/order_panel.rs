//! Order inputs
//!
//! Displays:
//! - Crust type radio group (none selected until the user picks one)
//! - Size pick list
//! - Topping checkboxes in a 3x2 grid

use iced::widget::{checkbox, column, pick_list, radio, row, Column, Row};
use iced::{Element, Length};

use pizza_core::{CrustOption, OrderForm, SizeOption, Topping};

use crate::Message;
use super::shared::panel::titled_panel;

/// Toppings per grid row
const TOPPING_COLUMNS: usize = 2;

/// Render crust and size side by side with the toppings below
pub fn view_order_panel(form: &OrderForm) -> Element<'_, Message> {
    let top = row![
        titled_panel("Crust Type", view_crust_group(form.crust)),
        titled_panel("Size", view_size_picker(form.size)),
    ]
    .spacing(8);

    column![top, titled_panel("Toppings ($1 each)", view_topping_grid(form))]
        .spacing(8)
        .into()
}

fn view_crust_group(selected: Option<CrustOption>) -> Element<'static, Message> {
    let mut group: Column<'static, Message> = column![].spacing(4);

    for crust in CrustOption::ALL {
        group = group.push(
            radio(crust.display_name(), crust, selected, Message::CrustSelected)
                .size(14)
                .text_size(12),
        );
    }

    group.into()
}

fn view_size_picker(selected: SizeOption) -> Element<'static, Message> {
    pick_list(&SizeOption::ALL[..], Some(selected), Message::SizeSelected)
        .width(Length::Fixed(120.0))
        .text_size(12)
        .into()
}

fn view_topping_grid(form: &OrderForm) -> Element<'_, Message> {
    let mut grid: Column<'_, Message> = column![].spacing(6);

    for chunk in Topping::ALL.chunks(TOPPING_COLUMNS) {
        let mut grid_row: Row<'_, Message> = row![].spacing(8);
        for &topping in chunk {
            grid_row = grid_row.push(
                checkbox(form.is_topping_selected(topping))
                    .label(topping.display_name())
                    .on_toggle(move |checked| Message::ToppingToggled(topping, checked))
                    .text_size(12)
                    .width(Length::FillPortion(1)),
            );
        }
        grid = grid.push(grid_row);
    }

    grid.into()
}
