// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 480;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 640;

/// Smallest window width the layout supports.
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Smallest window height the layout supports.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const _: () = {
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
