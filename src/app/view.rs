// SPDX-License-Identifier: MPL-2.0
//! Renders whichever screen is on top of the navigation stack.

use super::navigation::Navigator;
use super::{Message, Screen};
use crate::ui::main_screen::{self, ViewContext as MainViewContext};
use crate::ui::picker;
use iced::{widget::Container, Element, Length};

pub fn view(navigator: &Navigator) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match navigator.active_screen() {
        Screen::Main => main_screen::view(MainViewContext {
            selected: navigator.selected(),
        })
        .map(Message::Main),
        Screen::Picker => picker::view().map(Message::Picker),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
