// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across both screens.
//!
//! # Components
//!
//! - [`swatch`] - Outlined color block for a [`ColorItem`](crate::domain::color::ColorItem)

pub mod swatch;
