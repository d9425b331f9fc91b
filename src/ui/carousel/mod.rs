// SPDX-License-Identifier: MPL-2.0
//! Carousel component: a horizontally paged image row with a synced
//! page-indicator beneath it.
//!
//! The component owns the three pieces of the synchronization design:
//! a [`Pager`] (the paged content host), an [`IndicatorState`] (the marks
//! host) and the [`IndicatorMediator`] binding them. All page changes go
//! through the mediator, so the indicator can never drift from the pager.

pub mod indicator;
pub mod mediator;

pub use indicator::IndicatorState;
pub use mediator::{IndicatorMarks, IndicatorMediator, PagedContent};

use crate::content::{PageContent, PageSupply};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::widgets::page_indicator;
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Text};
use iced::{Alignment, ContentFit, Element, Length};

/// Paged content side of the carousel; what the mediator observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    count: usize,
    current: usize,
}

impl PagedContent for Pager {
    fn page_count(&self) -> usize {
        self.count
    }

    fn current_page(&self) -> usize {
        self.current
    }
}

/// Messages emitted by the carousel's widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Advance to the next page (clamped at the last page).
    NextPage,
    /// Go back to the previous page (clamped at the first page).
    PreviousPage,
    /// An indicator mark was tapped; request that page.
    MarkPressed(usize),
    /// The page image itself was clicked.
    PagePressed,
}

/// Side effects the host should perform after handling a carousel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing for the host to do.
    None,
    /// The current page was activated; the host decides what opening means.
    Activated,
    /// A page change was rejected; the host should surface the error.
    Rejected(Error),
}

/// Carousel component state.
#[derive(Debug, Clone)]
pub struct State {
    pages: Vec<PageContent>,
    pager: Pager,
    indicator: IndicatorState,
    mediator: IndicatorMediator,
}

impl State {
    /// Builds a carousel over every page the supply offers and attaches the
    /// indicator mediator, painting the initial page.
    #[must_use]
    pub fn new(supply: &impl PageSupply) -> Self {
        let pages: Vec<PageContent> = (0..supply.len()).filter_map(|i| supply.get(i)).collect();
        let pager = Pager {
            count: pages.len(),
            current: 0,
        };
        let mut indicator = IndicatorState::new();
        let mediator = IndicatorMediator::attach(&pager, &mut indicator);

        Self {
            pages,
            pager,
            indicator,
            mediator,
        }
    }

    /// Handles a carousel message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::NextPage => {
                if self.pager.current + 1 < self.pager.count {
                    self.select(self.pager.current + 1)
                } else {
                    Effect::None
                }
            }
            Message::PreviousPage => {
                if self.pager.current > 0 {
                    self.select(self.pager.current - 1)
                } else {
                    Effect::None
                }
            }
            Message::MarkPressed(index) => self.select(index),
            Message::PagePressed => Effect::Activated,
        }
    }

    /// Routes a page change through the mediator. The pager only moves when
    /// the mediator accepted the index, so both hosts stay consistent.
    fn select(&mut self, target: usize) -> Effect {
        match self.mediator.page_changed(target, &mut self.indicator) {
            Ok(()) => {
                self.pager.current = target;
                Effect::None
            }
            // No-op by design: the indicator this would repaint is gone.
            Err(Error::Detached) => Effect::None,
            Err(err) => Effect::Rejected(err),
        }
    }

    /// Appends a page and resizes the indicator row.
    pub fn push_page(&mut self, content: PageContent) {
        self.pages.push(content);
        self.sync_page_count();
    }

    /// Removes the last page and resizes the indicator row.
    pub fn pop_page(&mut self) {
        if self.pages.pop().is_some() {
            self.sync_page_count();
        }
    }

    fn sync_page_count(&mut self) {
        self.pager.count = self.pages.len();
        if self.pager.current >= self.pager.count {
            self.pager.current = self.pager.count.saturating_sub(1);
        }
        self.mediator.pages_changed(&self.pager, &mut self.indicator);
    }

    /// Unbinds the indicator. Call before dropping the component while pager
    /// events may still be in flight.
    pub fn detach(&mut self) {
        self.mediator.detach();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.mediator.is_attached()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pager.count
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pager.current
    }

    #[must_use]
    pub fn current_content(&self) -> Option<&PageContent> {
        self.pages.get(self.pager.current)
    }

    #[must_use]
    pub fn indicator(&self) -> &IndicatorState {
        &self.indicator
    }

    /// Renders the carousel: arrows flanking the page image, dots beneath.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let page: Element<'a, Message> = match self.current_content() {
            Some(content) => mouse_area(
                Image::new(content.handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::CAROUSEL_PAGE_HEIGHT)),
            )
            .on_press(Message::PagePressed)
            .into(),
            None => Container::new(Text::new(i18n.tr("carousel-empty")).size(typography::BODY))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(sizing::CAROUSEL_PAGE_HEIGHT))
                .into(),
        };

        let previous = button(Text::new("‹").size(typography::TITLE_MD))
            .on_press_maybe((self.pager.current > 0).then_some(Message::PreviousPage))
            .padding(spacing::XS);
        let next = button(Text::new("›").size(typography::TITLE_MD))
            .on_press_maybe(
                (self.pager.current + 1 < self.pager.count).then_some(Message::NextPage),
            )
            .padding(spacing::XS);

        let pager_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(previous)
            .push(page)
            .push(next);

        Column::new()
            .spacing(spacing::XS)
            .align_x(Alignment::Center)
            .push(pager_row)
            .push(page_indicator::view(&self.indicator))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AlternatingSupply, PageSupply};

    fn carousel(pages: usize) -> State {
        State::new(&AlternatingSupply::new(pages))
    }

    #[test]
    fn new_carousel_starts_on_the_first_page() {
        let state = carousel(5);
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.page_count(), 5);
        assert_eq!(state.indicator().active_mark(), Some(0));
        assert_eq!(state.indicator().mark_count(), 5);
    }

    #[test]
    fn navigation_moves_pager_and_indicator_together() {
        let mut state = carousel(3);

        state.handle(Message::NextPage);
        state.handle(Message::NextPage);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.indicator().active_mark(), Some(2));

        state.handle(Message::PreviousPage);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.indicator().active_mark(), Some(1));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = carousel(2);

        assert_eq!(state.handle(Message::PreviousPage), Effect::None);
        assert_eq!(state.current_page(), 0);

        state.handle(Message::NextPage);
        assert_eq!(state.handle(Message::NextPage), Effect::None);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn mark_taps_request_the_page() {
        let mut state = carousel(5);

        state.handle(Message::MarkPressed(3));

        assert_eq!(state.current_page(), 3);
        assert_eq!(state.indicator().active_mark(), Some(3));
    }

    #[test]
    fn out_of_range_mark_tap_is_rejected() {
        let mut state = carousel(5);
        state.handle(Message::MarkPressed(2));

        let effect = state.handle(Message::MarkPressed(7));

        assert_eq!(
            effect,
            Effect::Rejected(Error::IndexOutOfRange { index: 7, count: 5 })
        );
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.indicator().active_mark(), Some(2));
    }

    #[test]
    fn page_press_activates() {
        let mut state = carousel(5);
        assert_eq!(state.handle(Message::PagePressed), Effect::Activated);
    }

    #[test]
    fn detached_carousel_ignores_navigation() {
        let mut state = carousel(4);
        state.handle(Message::NextPage);
        let generation = state.indicator().render_generation();

        state.detach();
        assert_eq!(state.handle(Message::NextPage), Effect::None);
        assert_eq!(state.handle(Message::MarkPressed(3)), Effect::None);

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.indicator().render_generation(), generation);
    }

    #[test]
    fn adding_and_removing_pages_resizes_the_indicator() {
        let supply = AlternatingSupply::new(2);
        let mut state = State::new(&supply);

        state.push_page(supply.get(0).unwrap());
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.indicator().mark_count(), 3);

        state.handle(Message::MarkPressed(2));
        state.pop_page();

        assert_eq!(state.page_count(), 2);
        assert_eq!(state.indicator().mark_count(), 2);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.indicator().active_mark(), Some(1));
    }

    #[test]
    fn empty_carousel_renders_no_marks() {
        let mut state = carousel(0);

        assert_eq!(state.indicator().mark_count(), 0);
        assert_eq!(state.indicator().active_mark(), None);
        assert_eq!(state.handle(Message::NextPage), Effect::None);
    }
}
