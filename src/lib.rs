// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a demo gallery of swipeable image carousels built with
//! the Iced GUI framework.
//!
//! Each carousel pairs a horizontally paged image row with a page-indicator
//! dot row; a small mediator keeps the two in sync and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
