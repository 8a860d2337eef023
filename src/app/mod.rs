// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two screens.
//!
//! `App` owns the [`Navigator`](navigation::Navigator), which in turn owns
//! the picked color. Screens only emit messages; `App::update` routes them
//! to the navigator and Iced re-renders through `App::view` afterwards.

pub mod config;
mod message;
pub mod navigation;
pub mod paths;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::color::ColorItem;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use navigation::Navigator;

/// Name shown in the window title bar.
pub const APP_TITLE: &str = "Color Picker";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    navigator: Navigator,
    /// Resolved once in [`App::new`]; Iced asks for it on every redraw.
    theme: Theme,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &config::Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        log::warn!("{warning}; using default settings");
    }

    let theme_mode = flags.theme_mode.unwrap_or(config.general.theme_mode);
    log::info!(
        "starting with theme mode {theme_mode}, config at {}",
        config::config_path_with_override(None)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<none>".to_string())
    );

    let boot = move || (App::new(theme_mode), Task::none());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(&config))
        .run()
}

impl App {
    /// Fresh state: main screen, nothing picked.
    #[must_use]
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self {
            navigator: Navigator::new(),
            theme: theme_mode.theme(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigator.active_screen()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ColorItem> {
        self.navigator.selected()
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.screen() {
            Screen::Main => APP_TITLE.to_string(),
            Screen::Picker => format!("{} - {APP_TITLE}", crate::ui::main_screen::PICK_LABEL),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Main(main_message) => {
                update::handle_main_message(&mut self.navigator, main_message)
            }
            Message::Picker(picker_message) => {
                update::handle_picker_message(&mut self.navigator, picker_message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(&self.navigator)
    }
}
