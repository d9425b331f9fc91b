// SPDX-License-Identifier: MPL-2.0
pub mod page_indicator;

pub use page_indicator::PageIndicator;
