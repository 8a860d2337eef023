// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Picker,
}

impl Screen {
    /// Route name of the screen.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Screen::Main => "main",
            Screen::Picker => "picker",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_stable() {
        assert_eq!(Screen::Main.route(), "main");
        assert_eq!(Screen::Picker.route(), "picker");
    }
}
