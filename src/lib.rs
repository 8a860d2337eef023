// SPDX-License-Identifier: MPL-2.0
//! `iced_swatch` is a small color picker built with the Iced GUI framework.
//!
//! Two screens share one piece of state: the main screen shows the picked
//! color (or a prompt when there is none) and the picker screen lists the
//! ten colors of [`domain::color::PALETTE`].

pub mod app;
pub mod domain;
pub mod error;
pub mod ui;
