//! Catalog Table Controller
//!
//! Turns user actions on a table view into state updates and service
//! commands. One controller per table; the table kind decides how a
//! selection request is reconciled.

use gpui::{App, Entity};

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;
use crate::state::table_state::{TableKind, TableState};

/// Controller for one table view
#[derive(Clone)]
pub struct CatalogTableController {
    entities: AppEntities,
    table: TableKind,
}

impl CatalogTableController {
    pub fn new(entities: AppEntities, table: TableKind) -> Self {
        Self { entities, table }
    }

    pub fn table(&self) -> TableKind {
        self.table
    }

    pub fn state(&self) -> &Entity<TableState> {
        self.entities.table(self.table)
    }

    fn log(&self, event: AppEvent, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(event);
        }
    }

    /// Show `page` and fetch its rows
    pub fn load_page(&self, page: u32, cx: &mut App) {
        let page = page.max(1);
        self.state().update(cx, |state, cx| {
            state.begin_page_load(page);
            cx.notify();
        });

        tracing::debug!(table = ?self.table, page, "Loading page");
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.fetch_page(self.table, page);
        }
    }

    /// Paginator callback; out-of-range pages are clamped
    pub fn change_page(&self, new_page: u32, cx: &mut App) {
        let (current, total, failed) = {
            let state = self.state().read(cx);
            (state.current_page, state.total_pages(), state.error.is_some())
        };

        let page = new_page.clamp(1, total);
        // Re-requesting the page on screen only makes sense as a retry
        if page == current && !failed {
            return;
        }
        self.load_page(page, cx);
    }

    /// Select `count` rows starting with the first row of the current page
    pub fn submit_selection(&self, count: usize, cx: &mut App) {
        match self.table {
            TableKind::Lazy => self.submit_lazy(count, cx),
            TableKind::Eager => self.submit_eager(count, cx),
        }
    }

    /// Submit the count typed into the overlay; an empty field does nothing
    pub fn submit_draft(&self, cx: &mut App) {
        let Some(count) = self.state().read(cx).draft_count() else {
            return;
        };
        self.submit_selection(count, cx);
    }

    fn submit_lazy(&self, count: usize, cx: &mut App) {
        let (accepted, page, remaining) = self.state().update(cx, |state, cx| {
            let accepted = state.request_selection(count);
            if accepted.is_some() {
                state.close_overlay();
            }
            cx.notify();
            (accepted, state.current_page, state.remaining())
        });

        match accepted {
            Some(selected) => {
                tracing::info!(page, count, selected, remaining, "Lazy selection");
                let message = if remaining > 0 {
                    format!(
                        "Selected {selected} rows on page {page}, \
                         {remaining} more on the following pages"
                    )
                } else {
                    format!("Selected {selected} rows on page {page}")
                };
                self.log(AppEvent::info(message), cx);
            }
            None => self.log(AppEvent::warn("Wait for the page to finish loading"), cx),
        }
    }

    fn submit_eager(&self, count: usize, cx: &mut App) {
        let started = self.state().update(cx, |state, cx| {
            state.close_overlay();
            cx.notify();
            if count == 0 {
                return None;
            }
            // A newer request supersedes one still in flight
            let generation = state.begin_eager();
            Some((state.current_page, generation))
        });

        let Some((start_page, generation)) = started else {
            return;
        };
        tracing::info!(start_page, count, generation, "Eager selection");
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.select_across(self.table, start_page, count, generation);
        }
    }

    /// Stop the pending selection: abort the eager fetch, or drop the rows a
    /// lazy request still owes
    pub fn cancel_selection(&self, cx: &mut App) {
        match self.table {
            TableKind::Eager => {
                let was_selecting = self.state().update(cx, |state, cx| {
                    let was_selecting = state.selecting;
                    state.cancel_eager();
                    cx.notify();
                    was_selecting
                });
                if was_selecting {
                    if let Some(hub) = cx.try_global::<ServiceHub>() {
                        hub.cancel_selection(self.table);
                    }
                }
            }
            TableKind::Lazy => {
                let remaining = self.state().update(cx, |state, cx| {
                    let remaining = state.remaining();
                    state.drop_pending();
                    cx.notify();
                    remaining
                });
                if remaining > 0 {
                    self.log(AppEvent::warn(format!("Dropped {remaining} pending rows")), cx);
                }
            }
        }
    }

    pub fn toggle_row(&self, index: usize, cx: &mut App) {
        self.state().update(cx, |state, cx| {
            state.toggle_row(index);
            cx.notify();
        });
    }

    pub fn toggle_all(&self, cx: &mut App) {
        self.state().update(cx, |state, cx| {
            state.toggle_all_on_page();
            cx.notify();
        });
    }

    pub fn open_overlay(&self, cx: &mut App) {
        self.state().update(cx, |state, cx| {
            state.open_overlay();
            cx.notify();
        });
    }

    pub fn close_overlay(&self, cx: &mut App) {
        self.state().update(cx, |state, cx| {
            state.close_overlay();
            cx.notify();
        });
    }

    pub fn push_draft_char(&self, ch: char, cx: &mut App) {
        self.state().update(cx, |state, cx| {
            if state.push_draft_char(ch) {
                cx.notify();
            }
        });
    }

    pub fn pop_draft_char(&self, cx: &mut App) {
        self.state().update(cx, |state, cx| {
            state.pop_draft_char();
            cx.notify();
        });
    }
}
