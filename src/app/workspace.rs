//! Workspace - Main Shell with Layout and Event Pump
//!
//! Holds the header, the active table page and the log panel, and runs the
//! event pump that applies service results to the entities.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::catalog_table::page::CatalogTablePage;
use crate::state::table_state::TableKind;
use crate::theme::colors::AppColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    log_panel: Entity<LogPanel>,
    lazy_page: Entity<CatalogTablePage>,
    eager_page: Entity<CatalogTablePage>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let lazy_page = cx.new(|cx| CatalogTablePage::new(entities.clone(), TableKind::Lazy, cx));
        let eager_page = cx.new(|cx| CatalogTablePage::new(entities.clone(), TableKind::Eager, cx));

        let switch_to = {
            let entities = entities.clone();
            let pages = [lazy_page.clone(), eager_page.clone()];
            move |table: TableKind, cx: &mut App| show_table(table, &entities, &pages, cx)
        };
        let header = cx.new(|cx| Header::new(entities.clone(), switch_to, cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities.clone(), cx);

        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        // The first table loads its first page right away
        show_table(
            TableKind::Lazy,
            &entities,
            &[lazy_page.clone(), eager_page.clone()],
            cx,
        );

        Self {
            entities,
            header,
            log_panel,
            lazy_page,
            eager_page,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

/// Make `table` the visible view, loading its first page on first show
fn show_table(
    table: TableKind,
    entities: &AppEntities,
    pages: &[Entity<CatalogTablePage>; 2],
    cx: &mut App,
) {
    let first_visit = entities.navigation.update(cx, |nav, cx| {
        let first_visit = nav.activate(table);
        cx.notify();
        first_visit
    });

    if first_visit {
        let page = match table {
            TableKind::Lazy => &pages[0],
            TableKind::Eager => &pages[1],
        };
        let controller = page.read(cx).controller().clone();
        controller.load_page(1, cx);
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.entities.navigation.read(cx).active() {
            TableKind::Lazy => self.lazy_page.clone(),
            TableKind::Eager => self.eager_page.clone(),
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(AppColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(AppColors::content_bg())
                    .child(content),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::PageLoaded { table, load } => {
            let page = load.page;
            let rows = load.rows.len();
            let failed = load.failed();
            let applied = entities.table(table).update(cx, |state, cx| {
                let applied = state.finish_page_load(load);
                if applied {
                    cx.notify();
                }
                applied
            });
            if applied && !failed {
                entities.logs.update(cx, |logs, cx| {
                    logs.push(
                        crate::state::log_state::LogLevel::Info,
                        format!("Loaded page {page} ({rows} rows)"),
                        chrono::Local::now(),
                    );
                    cx.notify();
                });
            }
        }
        AppEvent::SelectionFinished {
            table,
            generation,
            outcome,
        } => {
            entities.table(table).update(cx, |state, cx| {
                if state.finish_eager(generation, outcome) {
                    cx.notify();
                }
            });
        }
    }
}
