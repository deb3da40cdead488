//! Reconcile - Lazy Cross-Page Selection
//!
//! Turns a "select N rows" request into per-page row counts as the user pages
//! forward. Nothing is fetched ahead of navigation: each page load consumes rows
//! from the pending request until it is exhausted.
//!
//! ```text
//! Idle ──request(n)──▶ AwaitingPage ──page loads consume remaining──▶ Satisfied
//!   ▲                     │  (page > initial, (page - initial) * P <= target)
//!   └──── request(n) ─────┘
//! ```
//!
//! Pages outside the span leave the remaining count unconsumed, whether the
//! user paged backward or jumped past it. Rows are never selected
//! retroactively.
//!
//! A page inside the span is filled at most once per request. Revisiting a page
//! that was already filled selects nothing further and leaves the remaining
//! count untouched.

use std::collections::BTreeSet;

use crate::constants::ROWS_PER_PAGE;

/// Reconciliation state for one table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Reconciliation {
    /// No request has been made
    #[default]
    Idle,
    /// Rows are still owed to a request
    AwaitingPage {
        /// Requested total
        target: usize,
        /// Page the request was issued on
        initial_page: u32,
        /// Rows still owed
        remaining: usize,
    },
    /// The request has been fully assigned
    Satisfied { target: usize },
}

/// Lazy reconciler driven by page navigation
#[derive(Debug, Clone)]
pub struct LazyReconciler {
    state: Reconciliation,
    current_page: u32,
    page_size: usize,
    /// Pages already filled by the pending request
    filled: BTreeSet<u32>,
}

impl Default for LazyReconciler {
    fn default() -> Self {
        Self::new(ROWS_PER_PAGE)
    }
}

impl LazyReconciler {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: Reconciliation::Idle,
            current_page: 1,
            page_size,
            filled: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> &Reconciliation {
        &self.state
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Rows still owed to the pending request
    pub fn remaining(&self) -> usize {
        match self.state {
            Reconciliation::AwaitingPage { remaining, .. } => remaining,
            _ => 0,
        }
    }

    /// Record a new request issued on the current page
    ///
    /// Returns how many leading rows of the current page to select now.
    pub fn request_selection(&mut self, target: usize, rows_on_page: usize) -> usize {
        let take = target.min(rows_on_page);
        let remaining = target - take;

        self.filled.clear();
        self.filled.insert(self.current_page);
        self.state = if remaining == 0 {
            Reconciliation::Satisfied { target }
        } else {
            Reconciliation::AwaitingPage {
                target,
                initial_page: self.current_page,
                remaining,
            }
        };

        tracing::debug!(
            requested = target,
            page = self.current_page,
            selected = take,
            remaining,
            "Selection requested"
        );
        take
    }

    /// Move to another page; the next load decides whether to continue
    pub fn on_page_change(&mut self, page: u32) {
        self.current_page = page;
    }

    /// A page finished loading with `rows_on_page` rows
    ///
    /// Returns `Some(k)` when the first `k` rows of that page should be selected.
    pub fn on_page_loaded(&mut self, page: u32, rows_on_page: usize) -> Option<usize> {
        let Reconciliation::AwaitingPage {
            target,
            initial_page,
            remaining,
        } = self.state
        else {
            return None;
        };

        if page != self.current_page || !self.within_span(page, initial_page, target) {
            return None;
        }
        if !self.filled.insert(page) {
            return None;
        }

        let take = remaining.min(rows_on_page);
        let remaining = remaining - take;
        self.state = if remaining == 0 {
            Reconciliation::Satisfied { target }
        } else {
            Reconciliation::AwaitingPage {
                target,
                initial_page,
                remaining,
            }
        };

        tracing::debug!(page, selected = take, remaining, "Reconciled page");
        Some(take)
    }

    /// Forget any pending request
    pub fn reset(&mut self) {
        self.state = Reconciliation::Idle;
        self.filled.clear();
    }

    fn within_span(&self, page: u32, initial_page: u32, target: usize) -> bool {
        page > initial_page && (page - initial_page) as usize * self.page_size <= target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u32) -> LazyReconciler {
        let mut reconciler = LazyReconciler::new(12);
        reconciler.on_page_change(page);
        reconciler
    }

    #[test]
    fn test_request_fits_current_page() {
        let mut reconciler = on_page(1);
        assert_eq!(reconciler.request_selection(1, 12), 1);
        assert_eq!(reconciler.state(), &Reconciliation::Satisfied { target: 1 });
        assert_eq!(reconciler.remaining(), 0);
    }

    #[test]
    fn test_forward_continuation() {
        let mut reconciler = on_page(1);
        assert_eq!(reconciler.request_selection(20, 12), 12);
        assert_eq!(reconciler.remaining(), 8);

        reconciler.on_page_change(2);
        assert_eq!(reconciler.on_page_loaded(2, 12), Some(8));
        assert_eq!(reconciler.state(), &Reconciliation::Satisfied { target: 20 });
    }

    #[test]
    fn test_short_page_leaves_remainder_pending() {
        let mut reconciler = on_page(1);
        reconciler.request_selection(30, 12);

        reconciler.on_page_change(2);
        assert_eq!(reconciler.on_page_loaded(2, 5), Some(5));
        assert_eq!(reconciler.remaining(), 13);
    }

    #[test]
    fn test_stop_outside_span() {
        let mut reconciler = on_page(1);
        reconciler.request_selection(20, 12);

        reconciler.on_page_change(5);
        assert_eq!(reconciler.on_page_loaded(5, 12), None);
        assert_eq!(reconciler.remaining(), 8);
    }

    #[test]
    fn test_stop_on_backward_navigation() {
        let mut reconciler = on_page(3);
        reconciler.request_selection(30, 12);

        reconciler.on_page_change(2);
        assert_eq!(reconciler.on_page_loaded(2, 12), None);
        reconciler.on_page_change(3);
        assert_eq!(reconciler.on_page_loaded(3, 12), None);
        assert_eq!(reconciler.remaining(), 18);
    }

    #[test]
    fn test_span_boundary_is_inclusive() {
        let mut reconciler = on_page(1);
        reconciler.request_selection(25, 12);

        reconciler.on_page_change(2);
        assert_eq!(reconciler.on_page_loaded(2, 12), Some(12));
        reconciler.on_page_change(3);
        // (3 - 1) * 12 = 24 <= 25
        assert_eq!(reconciler.on_page_loaded(3, 12), Some(1));
        assert_eq!(reconciler.remaining(), 0);
    }

    #[test]
    fn test_page_beyond_target_span_stops_even_with_remainder() {
        let mut reconciler = on_page(1);
        reconciler.request_selection(20, 12);

        reconciler.on_page_change(2);
        assert_eq!(reconciler.on_page_loaded(2, 3), Some(3));
        assert_eq!(reconciler.remaining(), 5);

        // (3 - 1) * 12 = 24 > 20
        reconciler.on_page_change(3);
        assert_eq!(reconciler.on_page_loaded(3, 12), None);
        assert_eq!(reconciler.remaining(), 5);
    }

    #[test]
    fn test_revisited_page_is_not_consumed_twice() {
        let mut reconciler = on_page(1);
        reconciler.request_selection(40, 12);

        reconciler.on_page_change(2);
        assert_eq!(reconciler.on_page_loaded(2, 12), Some(12));
        reconciler.on_page_change(1);
        assert_eq!(reconciler.on_page_loaded(1, 12), None);
        reconciler.on_page_change(2);
        assert_eq!(reconciler.on_page_loaded(2, 12), None);
        assert_eq!(reconciler.remaining(), 16);

        reconciler.on_page_change(3);
        assert_eq!(reconciler.on_page_loaded(3, 12), Some(12));
        assert_eq!(reconciler.remaining(), 4);
    }

    #[test]
    fn test_stale_load_for_other_page_ignored() {
        let mut reconciler = on_page(1);
        reconciler.request_selection(20, 12);

        reconciler.on_page_change(2);
        reconciler.on_page_change(3);
        assert_eq!(reconciler.on_page_loaded(2, 12), None);
        assert_eq!(reconciler.remaining(), 8);
    }

    #[test]
    fn test_new_request_replaces_pending() {
        let mut reconciler = on_page(1);
        reconciler.request_selection(40, 12);
        reconciler.on_page_change(2);
        reconciler.on_page_loaded(2, 12);

        assert_eq!(reconciler.request_selection(3, 12), 3);
        assert_eq!(reconciler.state(), &Reconciliation::Satisfied { target: 3 });

        reconciler.on_page_change(3);
        assert_eq!(reconciler.on_page_loaded(3, 12), None);
    }

    #[test]
    fn test_zero_request() {
        let mut reconciler = on_page(4);
        assert_eq!(reconciler.request_selection(0, 12), 0);
        assert_eq!(reconciler.state(), &Reconciliation::Satisfied { target: 0 });
    }
}
