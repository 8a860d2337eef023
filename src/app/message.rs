// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::main_screen;
use crate::ui::picker;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Main(main_screen::Message),
    Picker(picker::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme override for this run; takes precedence over `settings.toml`.
    pub theme_mode: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SWATCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
