// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Screens
//!
//! - [`main_screen`] - Picked color, or the empty-state prompt
//! - [`picker`] - List of pickable colors
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (color swatch)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (spacing, sizing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod main_screen;
pub mod picker;
pub mod styles;
pub mod theming;
