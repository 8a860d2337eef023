// SPDX-License-Identifier: MPL-2.0
//! Color swatch component.

use crate::domain::color::Rgba;
use crate::ui::styles;
use iced::widget::{Column, Container};
use iced::{Color, Element, Length};

/// Converts a domain color into an Iced color.
#[must_use]
pub fn to_iced(color: Rgba) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

/// Square block of `color`, `size` pixels wide, outlined and rounded.
pub fn view<'a, Message: 'a>(color: Rgba, size: f32, corner_radius: f32) -> Element<'a, Message> {
    Container::new(Column::new())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(styles::container::swatch(to_iced(color), corner_radius))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_iced_keeps_channels() {
        let color = to_iced(Rgba::rgb(255, 165, 0));
        assert_eq!(color.r, 1.0);
        assert!((color.g - 165.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }
}
