// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`color`]: The fixed color table ([`ColorItem`](color::ColorItem),
//!   [`Rgba`](color::Rgba), [`PALETTE`](color::PALETTE))

pub mod color;
