// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the featured and gallery
//! screens.
//!
//! The `App` struct wires the carousels, the shared page supply, and
//! localization together, and owns the screen-lifecycle policy: leaving the
//! featured screen detaches its indicator mediator, returning rebuilds the
//! carousel and re-attaches it, so a stale indicator is never painted.

mod message;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, MAX_CAROUSEL_COUNT, MAX_PAGES_PER_CAROUSEL};
use crate::content::AlternatingSupply;
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging UI components and localization.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    supply: AlternatingSupply,
    featured: carousel::State,
    gallery: Vec<carousel::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery_len", &self.gallery.len())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load config: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);

        let pages = flags
            .pages
            .unwrap_or_else(|| config.pages_per_carousel())
            .min(MAX_PAGES_PER_CAROUSEL);
        let carousels = flags
            .carousels
            .unwrap_or_else(|| config.carousel_count())
            .clamp(1, MAX_CAROUSEL_COUNT);

        let supply = AlternatingSupply::new(pages);
        let featured = carousel::State::new(&supply);
        let gallery = (0..carousels)
            .map(|_| carousel::State::new(&supply))
            .collect();

        let app = App {
            i18n,
            screen: Screen::Featured,
            supply,
            featured,
            gallery,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
