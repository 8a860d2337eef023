// SPDX-License-Identifier: MPL-2.0
//! Pickable colors.
//!
//! The application only ever offers the ten entries of [`PALETTE`]. Because
//! [`ColorItem`] cannot be built outside this module, any `ColorItem` held
//! elsewhere in the program is guaranteed to be one of those entries.

use std::fmt;

// =============================================================================
// Rgba
// =============================================================================

/// 8-bit-per-channel color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color from its red, green and blue channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != u8::MAX {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

// =============================================================================
// ColorItem
// =============================================================================

/// A display name paired with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorItem {
    name: &'static str,
    color: Rgba,
}

impl ColorItem {
    const fn new(name: &'static str, color: Rgba) -> Self {
        Self { name, color }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }
}

/// Every color the picker offers, in display order.
pub static PALETTE: [ColorItem; 10] = [
    ColorItem::new("Red", Rgba::rgb(255, 0, 0)),
    ColorItem::new("Green", Rgba::rgb(0, 255, 0)),
    ColorItem::new("Blue", Rgba::rgb(0, 0, 255)),
    ColorItem::new("Yellow", Rgba::rgb(255, 255, 0)),
    ColorItem::new("Cyan", Rgba::rgb(0, 255, 255)),
    ColorItem::new("Magenta", Rgba::rgb(255, 0, 255)),
    ColorItem::new("Black", Rgba::rgb(0, 0, 0)),
    ColorItem::new("White", Rgba::rgb(255, 255, 255)),
    ColorItem::new("Gray", Rgba::rgb(136, 136, 136)),
    // Not a standard named color.
    ColorItem::new("Orange", Rgba::rgb(255, 165, 0)),
];

/// Looks up a palette entry by its display name (case-sensitive).
#[must_use]
pub fn find(name: &str) -> Option<ColorItem> {
    PALETTE.iter().copied().find(|item| item.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_keeps_display_order() {
        let names: Vec<_> = PALETTE.iter().map(ColorItem::name).collect();
        assert_eq!(
            names,
            [
                "Red", "Green", "Blue", "Yellow", "Cyan", "Magenta", "Black", "White", "Gray",
                "Orange"
            ]
        );
    }

    #[test]
    fn palette_names_are_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn orange_is_custom_rgb() {
        let orange = find("Orange").expect("orange is in the palette");
        assert_eq!(orange.color(), Rgba::rgb(255, 165, 0));
    }

    #[test]
    fn all_palette_colors_are_opaque() {
        assert!(PALETTE.iter().all(|item| item.color().a == u8::MAX));
    }

    #[test]
    fn find_is_case_sensitive() {
        assert!(find("Blue").is_some());
        assert!(find("blue").is_none());
        assert!(find("Purple").is_none());
    }

    #[test]
    fn rgba_displays_as_hex() {
        assert_eq!(Rgba::rgb(255, 165, 0).to_string(), "#FFA500");
        assert_eq!(
            Rgba {
                a: 0x80,
                ..Rgba::rgb(0, 0, 0)
            }
            .to_string(),
            "#00000080"
        );
    }
}
