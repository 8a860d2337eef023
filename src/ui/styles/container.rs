// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Outline drawn around every swatch so black and white stay visible on
/// either theme.
pub const SWATCH_OUTLINE: Color = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..Color::BLACK
};

/// Filled, outlined block of `fill` with rounded corners.
pub fn swatch(fill: Color, corner_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: SWATCH_OUTLINE,
            width: border::WIDTH_MD,
            radius: corner_radius.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_uses_fill_and_outline() {
        let style = swatch(Color::from_rgb(1.0, 0.0, 0.0), 8.0)(&Theme::Dark);

        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0)))
        );
        assert_eq!(style.border.color, SWATCH_OUTLINE);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }
}
