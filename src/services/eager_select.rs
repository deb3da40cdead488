//! Eager Selection Pipeline
//!
//! Satisfies a "select N rows" request immediately by fetching as many pages as
//! needed, independent of navigation.
//!
//! ```text
//! start_page ─▶ [fetch p .. p+k-1 concurrently] ─▶ in page order ─▶ take min(remaining, rows)
//!                                                      │
//!               stop: remaining == 0 | empty page | fetch error
//! ```
//!
//! Pages are fetched with a bounded number in flight but consumed strictly in
//! page order, so out-of-order completions cannot shift rows between pages.
//! Pages prefetched past the stop point are dropped unread.

use std::sync::Arc;

use futures::StreamExt;

use crate::domain::selection::SelectionMap;
use crate::services::catalog::{load_page, CatalogSource};

/// Why the pipeline stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EagerStop {
    /// Every requested row was assigned
    Satisfied,
    /// A page came back empty before the target was reached
    Exhausted,
    /// A fetch failed; earlier pages are kept
    Failed { page: u32, error: Arc<str> },
}

/// Result of an eager selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EagerOutcome {
    /// Per-page selections, to be merged in one update
    pub selection: SelectionMap,
    /// Rows requested
    pub requested: usize,
    /// Rows assigned
    pub selected: usize,
    pub stop: EagerStop,
}

impl EagerOutcome {
    pub fn error(&self) -> Option<&Arc<str>> {
        match &self.stop {
            EagerStop::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Select `count` rows starting at `start_page`
pub async fn select_across_pages<S: CatalogSource>(
    source: Arc<S>,
    start_page: u32,
    count: usize,
    concurrency: usize,
) -> EagerOutcome {
    let mut selection = SelectionMap::new();
    let mut remaining = count;

    if count == 0 {
        return EagerOutcome {
            selection,
            requested: 0,
            selected: 0,
            stop: EagerStop::Satisfied,
        };
    }

    tracing::info!(
        start_page,
        count,
        concurrency,
        "Selecting rows across pages"
    );

    let start_page = start_page.max(1);
    let mut pages = futures::stream::iter(start_page..)
        .map(|page| {
            let source = source.clone();
            async move { load_page(source.as_ref(), page).await }
        })
        .buffered(concurrency.max(1));

    let stop = loop {
        let Some(load) = pages.next().await else {
            // The page range is unbounded; only reachable at u32::MAX
            break EagerStop::Exhausted;
        };

        if let Some(error) = load.error {
            tracing::warn!(page = load.page, remaining, "Eager selection stopped by fetch failure");
            break EagerStop::Failed {
                page: load.page,
                error,
            };
        }
        if load.rows.is_empty() {
            tracing::info!(page = load.page, remaining, "Catalog exhausted");
            break EagerStop::Exhausted;
        }

        remaining -= selection.select_prefix(load.page, &load.rows, remaining);
        if remaining == 0 {
            break EagerStop::Satisfied;
        }
    };

    let outcome = EagerOutcome {
        selected: selection.total(),
        selection,
        requested: count,
        stop,
    };
    tracing::info!(
        requested = outcome.requested,
        selected = outcome.selected,
        stop = ?outcome.stop,
        "Eager selection finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROWS_PER_PAGE;
    use crate::services::catalog::fake::FakeCatalog;

    #[tokio::test]
    async fn test_selects_exact_total() {
        let catalog = Arc::new(FakeCatalog::with_rows(1000));
        let outcome = select_across_pages(catalog.clone(), 1, 40, 4).await;

        assert_eq!(outcome.stop, EagerStop::Satisfied);
        assert_eq!(outcome.selection.total(), 40);
        assert_eq!(outcome.selection.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(outcome.selection.count_on(4), 4);
    }

    #[tokio::test]
    async fn test_selections_are_page_prefixes() {
        let catalog = Arc::new(FakeCatalog::with_rows(1000));
        let outcome = select_across_pages(catalog.clone(), 3, 30, 8).await;

        for page in outcome.selection.pages() {
            let rows = catalog.rows_for(page);
            let selected = outcome.selection.selected_on(page);
            let prefix: Vec<_> = rows.iter().take(selected.len()).collect();
            assert_eq!(selected, prefix, "page {page}");
            assert_eq!(
                outcome.selection.positions(page),
                (0..selected.len()).collect::<Vec<_>>()
            );
        }
        assert_eq!(outcome.selection.pages().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(outcome.selection.count_on(5), 6);
    }

    #[tokio::test]
    async fn test_exhaustion_is_not_an_error() {
        let catalog = Arc::new(FakeCatalog::with_rows(30));
        let outcome = select_across_pages(catalog, 1, 100, 2).await;

        assert_eq!(outcome.stop, EagerStop::Exhausted);
        assert_eq!(outcome.selected, 30);
        assert!(outcome.error().is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_earlier_pages() {
        let catalog = Arc::new(FakeCatalog::with_rows(1000).failing_on(3));
        let outcome = select_across_pages(catalog, 1, 60, 4).await;

        assert!(matches!(outcome.stop, EagerStop::Failed { page: 3, .. }));
        assert!(outcome.error().is_some());
        assert_eq!(outcome.selection.pages().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(outcome.selected, 2 * ROWS_PER_PAGE);
    }

    #[tokio::test]
    async fn test_single_row() {
        let catalog = Arc::new(FakeCatalog::with_rows(1000));
        let outcome = select_across_pages(catalog.clone(), 1, 1, 4).await;

        assert_eq!(outcome.selected, 1);
        let first_page = catalog.rows_for(1);
        assert_eq!(outcome.selection.selected_on(1), vec![&first_page[0]]);
    }

    #[tokio::test]
    async fn test_zero_rows_fetches_nothing() {
        let catalog = Arc::new(FakeCatalog::with_rows(1000));
        let outcome = select_across_pages(catalog.clone(), 1, 0, 4).await;

        assert_eq!(outcome.stop, EagerStop::Satisfied);
        assert!(outcome.selection.is_empty());
        assert!(catalog.requested.lock().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_when_concurrency_is_one() {
        let catalog = Arc::new(FakeCatalog::with_rows(1000));
        select_across_pages(catalog.clone(), 2, 24, 1).await;

        assert_eq!(*catalog.requested.lock(), vec![2, 3]);
    }
}
