// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::config::MAX_PAGES_PER_CAROUSEL;
use crate::ui::carousel::{self, Effect};
use iced::Task;

/// Handles a top-level message.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Featured(inner) => {
            let effect = app.featured.handle(inner);
            apply_featured_effect(app, effect);
        }
        Message::Gallery { index, message } => {
            // Indices come from rendered widgets; a stale one is dropped.
            if let Some(item) = app.gallery.get_mut(index) {
                report_rejection(item.handle(message));
            }
        }
        Message::SwitchScreen(target) => switch_screen(app, target),
        Message::AddPage => {
            if app.featured.page_count() < MAX_PAGES_PER_CAROUSEL {
                let content = app.supply.page(app.featured.page_count());
                app.featured.push_page(content);
            }
        }
        Message::RemovePage => app.featured.pop_page(),
    }

    Task::none()
}

fn apply_featured_effect(app: &mut App, effect: Effect) {
    match effect {
        // Clicking the featured page opens the gallery.
        Effect::Activated => switch_screen(app, Screen::Gallery),
        other => report_rejection(other),
    }
}

/// Rejected page changes keep the previous indicator state; they are logged
/// rather than crashing or silently vanishing.
fn report_rejection(effect: Effect) {
    if let Effect::Rejected(err) = effect {
        eprintln!("Ignoring page change: {err}");
    }
}

fn switch_screen(app: &mut App, target: Screen) {
    if app.screen == target {
        return;
    }

    match target {
        Screen::Gallery => {
            // The featured screen is being torn down; detach its mediator
            // before any further event could reach the dead indicator.
            app.featured.detach();
        }
        Screen::Featured => {
            app.featured = carousel::State::new(&app.supply);
        }
    }

    app.screen = target;
}
