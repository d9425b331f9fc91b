// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::carousel;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message for the featured carousel.
    Featured(carousel::Message),
    /// Message for one gallery carousel, addressed by list position.
    Gallery {
        index: usize,
        message: carousel::Message,
    },
    SwitchScreen(Screen),
    /// Append a page to the featured carousel.
    AddPage,
    /// Remove the last page of the featured carousel.
    RemovePage,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery carousel count override.
    pub carousels: Option<usize>,
    /// Optional pages-per-carousel override.
    pub pages: Option<usize>,
}
