// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the two screens.
//!
//! Screens turn their messages into events; these handlers apply the events
//! to the [`Navigator`]. Nothing here is asynchronous, so every handler
//! returns `Task::none()`.

use super::navigation::Navigator;
use super::Message;
use crate::ui::main_screen::{self, Event as MainEvent};
use crate::ui::picker::{self, Event as PickerEvent};
use iced::Task;

pub fn handle_main_message(
    navigator: &mut Navigator,
    message: main_screen::Message,
) -> Task<Message> {
    match main_screen::update(&message) {
        MainEvent::OpenPicker => navigator.open_picker(),
        MainEvent::ClearSelection => navigator.clear_selection(),
    }
    Task::none()
}

pub fn handle_picker_message(
    navigator: &mut Navigator,
    message: picker::Message,
) -> Task<Message> {
    match picker::update(&message) {
        PickerEvent::ColorPicked(item) => navigator.on_color_chosen(item),
    }
    Task::none()
}
