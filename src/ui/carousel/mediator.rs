// SPDX-License-Identifier: MPL-2.0
//! Pager–indicator synchronizer.
//!
//! Keeps an indicator row consistent with a paged content host: one mark per
//! page, exactly one active, and the active mark index always equal to the
//! current page index. The mediator holds no reference to either host; both
//! are borrowed per call, so it can never outlive them.
//!
//! Lifecycle: [`IndicatorMediator::attach`] paints the initial state,
//! [`IndicatorMediator::detach`] is terminal. Events arriving after detach
//! report [`Error::Detached`] and never touch the marks host.

use crate::error::{Error, Result};

/// Host capability of the paged content side: an ordered sequence of pages
/// with a current position. Page-change notification happens by the owner
/// routing events into [`IndicatorMediator::page_changed`].
pub trait PagedContent {
    fn page_count(&self) -> usize;
    fn current_page(&self) -> usize;
}

/// Host capability of the indicator side.
pub trait IndicatorMarks {
    /// Resizes the mark row to `count` marks. Count 0 clears the row.
    fn set_mark_count(&mut self, count: usize);

    /// Highlights mark `index`, deactivating all others.
    fn set_active_mark(&mut self, index: usize);
}

/// Synchronizes one indicator with one pager for the lifetime of the
/// containing component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorMediator {
    attached: bool,
    count: usize,
    active: Option<usize>,
}

impl IndicatorMediator {
    /// Binds to a pager and immediately paints the indicator to match it,
    /// including a non-zero initial page. A page count of 0 clears the row.
    pub fn attach(pager: &impl PagedContent, marks: &mut impl IndicatorMarks) -> Self {
        let count = pager.page_count();
        marks.set_mark_count(count);

        let current = pager.current_page();
        let active = if current < count {
            marks.set_active_mark(current);
            Some(current)
        } else {
            None
        };

        Self {
            attached: true,
            count,
            active,
        }
    }

    /// Handles a page-change event for page `index`.
    ///
    /// Repeating the current index is a no-op: no call reaches the marks
    /// host, so rendering is never invalidated twice for the same page.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= page_count`; the previous
    /// active mark is retained. [`Error::Detached`] after [`Self::detach`];
    /// callers treat that one as a no-op.
    pub fn page_changed(&mut self, index: usize, marks: &mut impl IndicatorMarks) -> Result<()> {
        if !self.attached {
            return Err(Error::Detached);
        }
        if index >= self.count {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        if self.active == Some(index) {
            return Ok(());
        }

        marks.set_active_mark(index);
        self.active = Some(index);
        Ok(())
    }

    /// Handles a page-count change on the pager: the mark row resizes to the
    /// new count and the active mark is clamped into range (or cleared when
    /// the count reaches 0). Equal counts are a no-op.
    pub fn pages_changed(&mut self, pager: &impl PagedContent, marks: &mut impl IndicatorMarks) {
        if !self.attached {
            return;
        }
        let count = pager.page_count();
        if count == self.count {
            return;
        }

        self.count = count;
        marks.set_mark_count(count);

        if count == 0 {
            self.active = None;
            return;
        }

        // Resizing rebuilds the row, so the active mark is repainted even
        // when its index survived the resize.
        let target = self.active.unwrap_or_else(|| pager.current_page()).min(count - 1);
        marks.set_active_mark(target);
        self.active = Some(target);
    }

    /// Ends the binding. Terminal: no further mutation reaches the marks host.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Index of the currently active mark, if any.
    #[must_use]
    pub fn active_mark(&self) -> Option<usize> {
        self.active
    }

    /// Page count the indicator is currently sized for.
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.count
    }
}
