// SPDX-License-Identifier: MPL-2.0
//! Main screen: shows the picked color, or a prompt when nothing is picked.
//!
//! Rendering is a pure function of the current selection. [`Layout`] picks
//! the branch once, so the populated branch always has a color to draw.

use crate::domain::color::ColorItem;
use crate::ui::components::swatch;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Text},
    Element, Length,
};

pub const EMPTY_TITLE: &str = "No color selected";
pub const PICK_LABEL: &str = "Pick a Color";
pub const PICK_ANOTHER_LABEL: &str = "Pick Another Color";
pub const CLEAR_LABEL: &str = "Clear Selection";

/// Contextual data needed to render the main screen.
pub struct ViewContext<'a> {
    pub selected: Option<&'a ColorItem>,
}

/// Messages emitted by the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenPicker,
    ClearSelection,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenPicker,
    ClearSelection,
}

/// Process a main screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenPicker => Event::OpenPicker,
        Message::ClearSelection => Event::ClearSelection,
    }
}

/// Which of the two main screen variants to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout<'a> {
    Empty,
    Picked(&'a ColorItem),
}

impl<'a> Layout<'a> {
    #[must_use]
    pub fn for_selection(selected: Option<&'a ColorItem>) -> Self {
        match selected {
            Some(item) => Layout::Picked(item),
            None => Layout::Empty,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Layout::Empty => EMPTY_TITLE.to_string(),
            Layout::Picked(item) => format!("Picked Color: {}", item.name()),
        }
    }

    /// Buttons shown under the title, top to bottom.
    #[must_use]
    pub fn actions(&self) -> &'static [(&'static str, Message)] {
        match self {
            Layout::Empty => &[(PICK_LABEL, Message::OpenPicker)],
            Layout::Picked(_) => &[
                (PICK_ANOTHER_LABEL, Message::OpenPicker),
                (CLEAR_LABEL, Message::ClearSelection),
            ],
        }
    }
}

/// Render the main screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let layout = Layout::for_selection(ctx.selected);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(layout.title()).size(typography::TITLE_LG));

    if let Layout::Picked(item) = layout {
        content = content.push(swatch::view(item.color(), sizing::SWATCH_LG, radius::LG));
    }

    for (label, message) in layout.actions() {
        content = content.push(
            button(Text::new(*label).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(*message),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::{self, PALETTE};

    #[test]
    fn empty_layout_iff_nothing_selected() {
        assert_eq!(Layout::for_selection(None), Layout::Empty);
        for item in &PALETTE {
            assert_eq!(Layout::for_selection(Some(item)), Layout::Picked(item));
        }
    }

    #[test]
    fn empty_layout_prompts_to_pick() {
        let layout = Layout::Empty;
        assert_eq!(layout.title(), "No color selected");
        assert_eq!(layout.actions(), &[("Pick a Color", Message::OpenPicker)]);
    }

    #[test]
    fn picked_layout_names_color_and_offers_clear() {
        let blue = color::find("Blue").expect("blue is in the palette");
        let layout = Layout::Picked(&blue);
        assert_eq!(layout.title(), "Picked Color: Blue");
        assert_eq!(
            layout.actions(),
            &[
                ("Pick Another Color", Message::OpenPicker),
                ("Clear Selection", Message::ClearSelection),
            ]
        );
    }

    #[test]
    fn update_maps_messages_to_events() {
        assert_eq!(update(&Message::OpenPicker), Event::OpenPicker);
        assert_eq!(update(&Message::ClearSelection), Event::ClearSelection);
    }

    #[test]
    fn view_renders_both_branches() {
        let _empty = view(ViewContext { selected: None });
        let _picked = view(ViewContext {
            selected: Some(&PALETTE[3]),
        });
    }
}
