//! TableState - Per-Table Paging and Selection State
//!
//! Both table views share this state; `kind` decides how a selection request is
//! reconciled. Lazy tables consume the request as pages load, eager tables hand
//! it to the service layer and merge the result in one update.

use std::sync::Arc;

use crate::constants::{CATALOG_TOTAL_RECORDS, ROWS_PER_PAGE};
use crate::domain::artwork::Artwork;
use crate::domain::reconcile::LazyReconciler;
use crate::domain::selection::SelectionMap;
use crate::services::catalog::PageLoad;
use crate::services::eager_select::{EagerOutcome, EagerStop};

/// Reconciliation strategy of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Selection continues as the user pages forward
    Lazy,
    /// Selection fetches every needed page up front
    Eager,
}

impl TableKind {
    /// Translation key for the toggle label
    pub fn title_key(&self) -> &'static str {
        match self {
            TableKind::Lazy => "nav-lazy-table",
            TableKind::Eager => "nav-eager-table",
        }
    }

    pub fn all() -> &'static [TableKind] {
        &[TableKind::Lazy, TableKind::Eager]
    }
}

/// State for one table view
#[derive(Debug, Clone)]
pub struct TableState {
    pub kind: TableKind,
    /// 1-based page on screen
    pub current_page: u32,
    /// Rows of the current page
    pub rows: Vec<Artwork>,
    pub loading: bool,
    /// Last page fetch failure
    pub error: Option<Arc<str>>,
    /// Catalog size for the paginator
    pub total_records: u64,
    pub selection: SelectionMap,
    /// Pending lazy request (lazy tables only)
    pub reconciler: LazyReconciler,
    /// An eager request is in flight
    pub selecting: bool,
    /// Identifies the newest eager request
    pub generation: u64,
    /// How the last eager request ended
    pub last_stop: Option<EagerStop>,
    /// Selection overlay is shown
    pub overlay_open: bool,
    /// Digits typed into the overlay's count field
    pub draft: String,
}

impl TableState {
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            current_page: 1,
            rows: Vec::new(),
            loading: false,
            error: None,
            total_records: CATALOG_TOTAL_RECORDS,
            selection: SelectionMap::new(),
            reconciler: LazyReconciler::new(ROWS_PER_PAGE),
            selecting: false,
            generation: 0,
            last_stop: None,
            overlay_open: false,
            draft: String::new(),
        }
    }

    /// Total pages for the paginator
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_records.div_ceil(ROWS_PER_PAGE as u64).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether the selection form accepts a request
    pub fn can_request(&self) -> bool {
        !self.loading && !self.selecting
    }

    /// Rows still owed to a pending lazy request
    pub fn remaining(&self) -> usize {
        self.reconciler.remaining()
    }

    // ==================== Paging ====================

    /// Navigate to a page and mark it loading
    pub fn begin_page_load(&mut self, page: u32) {
        let page = page.max(1);
        self.current_page = page;
        self.loading = true;
        self.error = None;
        self.reconciler.on_page_change(page);
    }

    /// Apply a finished fetch
    ///
    /// Loads for a page that is no longer on screen are dropped; returns whether
    /// the load was applied.
    pub fn finish_page_load(&mut self, load: PageLoad) -> bool {
        if load.page != self.current_page {
            tracing::debug!(
                page = load.page,
                current = self.current_page,
                "Dropping stale page load"
            );
            return false;
        }

        self.loading = false;
        if let Some(total) = load.total {
            self.total_records = total;
        }

        if let Some(error) = load.error {
            self.error = Some(error);
            self.rows.clear();
            return true;
        }

        self.error = None;
        self.rows = load.rows;

        if self.kind == TableKind::Lazy {
            if let Some(count) = self.reconciler.on_page_loaded(load.page, self.rows.len()) {
                self.selection.select_prefix(load.page, &self.rows, count);
            }
        }
        true
    }

    // ==================== Lazy Selection ====================

    /// Select `count` rows starting on the current page
    ///
    /// Returns the rows selected right away, or `None` while the page is loading.
    pub fn request_selection(&mut self, count: usize) -> Option<usize> {
        if self.loading {
            return None;
        }
        let take = self.reconciler.request_selection(count, self.rows.len());
        self.selection.select_prefix(self.current_page, &self.rows, take);
        Some(take)
    }

    /// Forget the rows still owed to a lazy request; selected rows stay
    pub fn drop_pending(&mut self) {
        self.reconciler.reset();
    }

    // ==================== Eager Selection ====================

    /// Start an eager request, superseding any in flight
    ///
    /// Returns the generation the result must carry to be applied.
    pub fn begin_eager(&mut self) -> u64 {
        self.generation += 1;
        self.selecting = true;
        self.last_stop = None;
        self.generation
    }

    /// Merge a finished eager request; stale generations are ignored
    pub fn finish_eager(&mut self, generation: u64, outcome: EagerOutcome) -> bool {
        if !self.selecting || generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Dropping stale selection");
            return false;
        }

        self.selecting = false;
        self.selection.merge(outcome.selection);
        self.last_stop = Some(outcome.stop);
        true
    }

    /// Abandon the in-flight eager request
    pub fn cancel_eager(&mut self) {
        if self.selecting {
            self.selecting = false;
            self.generation += 1;
        }
    }

    /// Error from the last eager request, if it failed
    pub fn selection_error(&self) -> Option<&Arc<str>> {
        match &self.last_stop {
            Some(EagerStop::Failed { error, .. }) => Some(error),
            _ => None,
        }
    }

    // ==================== Overlay ====================

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    /// Hide the overlay and forget the typed count
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
        self.draft.clear();
    }

    /// Append a typed character; only ASCII digits are accepted
    pub fn push_draft_char(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() || (self.draft == "0" && ch == '0') {
            return false;
        }
        if self.draft == "0" {
            self.draft.clear();
        }
        let mut next = self.draft.clone();
        next.push(ch);
        // Reject input that would overflow the count
        if next.parse::<usize>().is_err() {
            return false;
        }
        self.draft = next;
        true
    }

    pub fn pop_draft_char(&mut self) {
        self.draft.pop();
    }

    /// Count typed into the overlay, `None` while the field is empty
    pub fn draft_count(&self) -> Option<usize> {
        self.draft.parse().ok()
    }

    // ==================== Manual Selection ====================

    /// Checkbox on a row of the current page
    pub fn toggle_row(&mut self, index: usize) {
        self.selection.toggle_row(self.current_page, &self.rows, index);
    }

    /// Header checkbox: select every row on the page, or clear the page
    pub fn toggle_all_on_page(&mut self) {
        if self.all_selected() {
            self.selection.clear_page(self.current_page);
        } else {
            self.selection.select_prefix(self.current_page, &self.rows, self.rows.len());
        }
    }

    /// Whether every row of the current page is selected
    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selection.count_on(self.current_page) == self.rows.len()
    }

    /// Whether a row of the current page is selected
    pub fn is_row_selected(&self, index: usize) -> bool {
        index < self.rows.len() && self.selection.is_selected(self.current_page, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::sample_rows;

    fn loaded(page: u32, count: usize) -> PageLoad {
        PageLoad {
            page,
            rows: sample_rows(page, count),
            total: None,
            error: None,
        }
    }

    fn lazy_on_first_page() -> TableState {
        let mut state = TableState::new(TableKind::Lazy);
        state.begin_page_load(1);
        assert!(state.finish_page_load(loaded(1, 12)));
        state
    }

    #[test]
    fn test_lazy_single_row_scenario() {
        let mut state = lazy_on_first_page();
        assert_eq!(state.request_selection(1), Some(1));
        assert_eq!(state.selection.positions(1), vec![0]);
        assert_eq!(state.selection.total(), 1);
    }

    #[test]
    fn test_lazy_forward_continuation() {
        let mut state = lazy_on_first_page();
        assert_eq!(state.request_selection(20), Some(12));
        assert_eq!(state.remaining(), 8);

        state.begin_page_load(2);
        // Nothing happens until the page has loaded
        assert_eq!(state.selection.count_on(2), 0);
        state.finish_page_load(loaded(2, 12));

        assert_eq!(state.selection.positions(2), (0..8).collect::<Vec<_>>());
        assert_eq!(state.selection.total(), 20);
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn test_lazy_stop_outside_span() {
        let mut state = lazy_on_first_page();
        state.request_selection(20);

        state.begin_page_load(5);
        state.finish_page_load(loaded(5, 12));

        assert_eq!(state.selection.count_on(5), 0);
        assert_eq!(state.remaining(), 8);
        assert_eq!(state.selection.total(), 12);
    }

    #[test]
    fn test_lazy_failed_load_does_not_consume() {
        let mut state = lazy_on_first_page();
        state.request_selection(20);

        state.begin_page_load(2);
        state.finish_page_load(PageLoad {
            page: 2,
            error: Some("Catalog returned status 503 for page 2".into()),
            ..Default::default()
        });
        assert!(state.error.is_some());
        assert!(state.rows.is_empty());
        assert_eq!(state.remaining(), 8);

        // Retrying the same page still reconciles
        state.begin_page_load(2);
        assert!(state.error.is_none());
        state.finish_page_load(loaded(2, 12));
        assert_eq!(state.selection.count_on(2), 8);
    }

    #[test]
    fn test_request_rejected_while_loading() {
        let mut state = lazy_on_first_page();
        state.begin_page_load(2);
        assert!(!state.can_request());
        assert_eq!(state.request_selection(5), None);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_manual_override_keeps_remaining() {
        let mut state = lazy_on_first_page();
        state.request_selection(20);

        state.toggle_row(0);
        assert_eq!(state.selection.count_on(1), 11);
        assert!(!state.is_row_selected(0));
        assert_eq!(state.remaining(), 8);

        state.begin_page_load(2);
        state.finish_page_load(loaded(2, 12));
        assert_eq!(state.selection.count_on(2), 8);
    }

    #[test]
    fn test_toggle_all_on_page() {
        let mut state = lazy_on_first_page();
        state.toggle_all_on_page();
        assert!(state.all_selected());
        state.toggle_all_on_page();
        assert_eq!(state.selection.count_on(1), 0);
    }

    #[test]
    fn test_duplicate_rows_shown_by_position() {
        let mut state = TableState::new(TableKind::Lazy);
        state.begin_page_load(1);
        let mut load = loaded(1, 3);
        load.rows[1] = load.rows[0].clone();
        state.finish_page_load(load);

        assert_eq!(state.request_selection(1), Some(1));
        let shown: Vec<bool> = (0..3).map(|i| state.is_row_selected(i)).collect();
        assert_eq!(shown, vec![true, false, false]);

        state.toggle_all_on_page();
        assert!(state.all_selected());
        state.toggle_row(1);
        assert!(!state.all_selected());
        assert!(state.is_row_selected(0));
        assert!(!state.is_row_selected(1));
        assert_eq!(state.selection.total(), 2);
    }

    #[test]
    fn test_stale_page_load_dropped() {
        let mut state = lazy_on_first_page();
        state.begin_page_load(2);
        state.begin_page_load(3);

        assert!(!state.finish_page_load(loaded(2, 12)));
        assert!(state.loading);
        assert!(state.finish_page_load(loaded(3, 12)));
        assert!(!state.loading);
    }

    #[test]
    fn test_total_from_response() {
        let mut state = TableState::new(TableKind::Eager);
        assert_eq!(state.total_pages(), 10_507);

        state.begin_page_load(1);
        state.finish_page_load(PageLoad {
            total: Some(30),
            ..loaded(1, 12)
        });
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_eager_does_not_reconcile_on_navigation() {
        let mut state = TableState::new(TableKind::Eager);
        state.begin_page_load(1);
        state.finish_page_load(loaded(1, 12));
        state.begin_page_load(2);
        state.finish_page_load(loaded(2, 12));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_eager_merge_and_stale_generation() {
        let mut state = TableState::new(TableKind::Eager);
        let first = state.begin_eager();
        let second = state.begin_eager();
        assert!(!state.can_request());

        let mut selection = SelectionMap::new();
        selection.select_prefix(1, &sample_rows(1, 12), 12);
        selection.select_prefix(2, &sample_rows(2, 12), 3);
        let outcome = EagerOutcome {
            selection,
            requested: 15,
            selected: 15,
            stop: EagerStop::Satisfied,
        };

        assert!(!state.finish_eager(first, outcome.clone()));
        assert!(state.selection.is_empty());

        assert!(state.finish_eager(second, outcome));
        assert_eq!(state.selection.total(), 15);
        assert!(!state.selecting);
        assert!(state.selection_error().is_none());
    }

    #[test]
    fn test_eager_cancel_drops_late_result() {
        let mut state = TableState::new(TableKind::Eager);
        let generation = state.begin_eager();
        state.cancel_eager();
        assert!(state.can_request());

        let outcome = EagerOutcome {
            selection: SelectionMap::new(),
            requested: 5,
            selected: 0,
            stop: EagerStop::Exhausted,
        };
        assert!(!state.finish_eager(generation, outcome));
        assert!(state.last_stop.is_none());
    }

    #[test]
    fn test_eager_failure_surfaces_error() {
        let mut state = TableState::new(TableKind::Eager);
        let generation = state.begin_eager();

        let mut selection = SelectionMap::new();
        selection.select_prefix(1, &sample_rows(1, 12), 12);
        let outcome = EagerOutcome {
            selection,
            requested: 40,
            selected: 12,
            stop: EagerStop::Failed {
                page: 2,
                error: "timeout".into(),
            },
        };

        assert!(state.finish_eager(generation, outcome));
        assert_eq!(state.selection.total(), 12);
        assert_eq!(state.selection_error().map(|e| e.as_ref()), Some("timeout"));
    }

    #[test]
    fn test_draft_accepts_digits_only() {
        let mut state = TableState::new(TableKind::Lazy);
        assert_eq!(state.draft_count(), None);

        assert!(state.push_draft_char('2'));
        assert!(!state.push_draft_char('-'));
        assert!(!state.push_draft_char('x'));
        assert!(state.push_draft_char('0'));
        assert_eq!(state.draft_count(), Some(20));

        state.pop_draft_char();
        assert_eq!(state.draft_count(), Some(2));
        state.pop_draft_char();
        assert_eq!(state.draft_count(), None);
    }

    #[test]
    fn test_draft_drops_leading_zero() {
        let mut state = TableState::new(TableKind::Eager);
        assert!(state.push_draft_char('0'));
        assert!(!state.push_draft_char('0'));
        assert!(state.push_draft_char('7'));
        assert_eq!(state.draft, "7");
    }

    #[test]
    fn test_draft_rejects_overflow() {
        let mut state = TableState::new(TableKind::Eager);
        state.draft = usize::MAX.to_string();
        assert!(!state.push_draft_char('9'));
        assert_eq!(state.draft_count(), Some(usize::MAX));
    }

    #[test]
    fn test_close_overlay_clears_draft() {
        let mut state = TableState::new(TableKind::Lazy);
        state.open_overlay();
        state.push_draft_char('5');
        state.close_overlay();
        assert!(!state.overlay_open);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_drop_pending_keeps_selection() {
        let mut state = lazy_on_first_page();
        state.request_selection(20);
        state.drop_pending();
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.selection.total(), 12);

        state.begin_page_load(2);
        state.finish_page_load(loaded(2, 12));
        assert_eq!(state.selection.count_on(2), 0);
    }
}
