// SPDX-License-Identifier: MPL-2.0
//! Picker screen: the palette as a list of clickable rows.
//!
//! The screen keeps no state. Clicking a row emits
//! [`Event::ColorPicked`]; storing the color and leaving the screen is the
//! navigator's job.

use crate::domain::color::{ColorItem, PALETTE};
use crate::ui::components::swatch;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, scrollable, Column, Row, Text},
    Element, Font, Length,
};

/// Messages emitted by the picker screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    RowPressed(ColorItem),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ColorPicked(ColorItem),
}

/// Process a picker message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::RowPressed(item) => Event::ColorPicked(*item),
    }
}

/// Render the picker screen.
#[must_use]
pub fn view<'a>() -> Element<'a, Message> {
    let rows = PALETTE.iter().map(row);

    let list = Column::with_children(rows)
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .width(Length::Fill);

    scrollable(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn row<'a>(item: &ColorItem) -> Element<'a, Message> {
    let label = Text::new(item.name())
        .size(typography::BODY_LG)
        .font(Font {
            weight: Weight::Medium,
            ..Font::default()
        });

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(swatch::view(item.color(), sizing::SWATCH_SM, radius::MD))
        .push(label);

    button(content)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::list_row)
        .on_press(Message::RowPressed(*item))
        .into()
}
