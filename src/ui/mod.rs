// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`carousel`] - Swipeable page row with a synced page-indicator, built on
//!   the pager–indicator mediator
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (page-indicator dot row)
//! - [`styles`] - Centralized styling (containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod carousel;
pub mod design_tokens;
pub mod styles;
pub mod widgets;
