//! ServiceHub - Catalog Work Dispatch
//!
//! Receives fetch and selection commands from the UI, runs them on the tokio
//! runtime and reports results as [`AppEvent`]s. Each table has at most one page
//! fetch and one eager selection in flight; a newer command aborts the older one.

use std::collections::HashMap;
use std::sync::Arc;

use gpui::Global;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::services::catalog::{load_page, CatalogSource, HttpCatalog};
use crate::services::eager_select::{select_across_pages, EagerStop};
use crate::services::runtime::{spawn_in_tokio, spawn_named_in_tokio};
use crate::state::table_state::TableKind;

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Load one page for a table
    FetchPage { table: TableKind, page: u32 },
    /// Select `count` rows from `start_page` onward, fetching pages up front
    SelectAcross {
        table: TableKind,
        start_page: u32,
        count: usize,
        generation: u64,
    },
    /// Abort a table's in-flight selection
    CancelSelection { table: TableKind },
}

/// In-flight task handles, per table
#[derive(Default)]
struct TaskSlots {
    pages: HashMap<TableKind, JoinHandle<()>>,
    selections: HashMap<TableKind, JoinHandle<()>>,
}

/// ServiceHub dispatches catalog work off the UI thread
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to services
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a hub talking to the configured HTTP catalog
    pub fn new(config: AppConfig, event_tx: flume::Sender<AppEvent>) -> Result<Self> {
        let catalog = Arc::new(HttpCatalog::new(&config.catalog)?);
        tracing::info!(base_url = %config.catalog.base_url, "Catalog client ready");
        Ok(Self::with_catalog(catalog, config, event_tx))
    }

    /// Create a hub over any catalog source
    pub fn with_catalog<S: CatalogSource>(
        catalog: Arc<S>,
        config: AppConfig,
        event_tx: flume::Sender<AppEvent>,
    ) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();
        let tasks = Arc::new(Mutex::new(TaskSlots::default()));

        spawn_named_in_tokio(
            "service-hub",
            Self::command_loop(
                command_rx,
                catalog,
                config.selection.concurrency,
                tasks,
                event_tx.clone(),
            ),
        );

        Self {
            event_tx,
            command_tx,
        }
    }

    async fn command_loop<S: CatalogSource>(
        command_rx: flume::Receiver<ServiceCommand>,
        catalog: Arc<S>,
        concurrency: usize,
        tasks: Arc<Mutex<TaskSlots>>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        while let Ok(cmd) = command_rx.recv_async().await {
            match cmd {
                ServiceCommand::FetchPage { table, page } => {
                    let catalog = catalog.clone();
                    let event_tx = event_tx.clone();
                    let handle = spawn_in_tokio(async move {
                        let load = load_page(catalog.as_ref(), page).await;
                        if let Some(error) = &load.error {
                            let _ = event_tx.send(AppEvent::error(format!(
                                "Error fetching page {page}: {error}"
                            )));
                        }
                        let _ = event_tx.send(AppEvent::PageLoaded { table, load });
                    });

                    if let Some(previous) = tasks.lock().pages.insert(table, handle) {
                        previous.abort();
                    }
                }
                ServiceCommand::SelectAcross {
                    table,
                    start_page,
                    count,
                    generation,
                } => {
                    let _ = event_tx.send(AppEvent::info(format!(
                        "Selecting {count} rows from page {start_page}"
                    )));

                    let catalog = catalog.clone();
                    let event_tx = event_tx.clone();
                    let handle = spawn_in_tokio(async move {
                        let outcome =
                            select_across_pages(catalog, start_page, count, concurrency).await;

                        let summary = match &outcome.stop {
                            EagerStop::Satisfied => AppEvent::info(format!(
                                "Selected {} rows",
                                outcome.selected
                            )),
                            EagerStop::Exhausted => AppEvent::warn(format!(
                                "Catalog ended after {} of {} rows",
                                outcome.selected, outcome.requested
                            )),
                            EagerStop::Failed { page, error } => AppEvent::error(format!(
                                "Selection stopped at page {page} after {} rows: {error}",
                                outcome.selected
                            )),
                        };
                        let _ = event_tx.send(summary);
                        let _ = event_tx.send(AppEvent::SelectionFinished {
                            table,
                            generation,
                            outcome,
                        });
                    });

                    if let Some(previous) = tasks.lock().selections.insert(table, handle) {
                        if !previous.is_finished() {
                            tracing::info!(?table, "Superseding in-flight selection");
                        }
                        previous.abort();
                    }
                }
                ServiceCommand::CancelSelection { table } => {
                    if let Some(handle) = tasks.lock().selections.remove(&table) {
                        if !handle.is_finished() {
                            handle.abort();
                            let _ = event_tx.send(AppEvent::warn("Selection cancelled"));
                        }
                    }
                }
            }
        }
        tracing::debug!("Service command channel closed");
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Load a page for a table
    pub fn fetch_page(&self, table: TableKind, page: u32) {
        self.send(ServiceCommand::FetchPage { table, page });
    }

    /// Start an eager selection
    pub fn select_across(&self, table: TableKind, start_page: u32, count: usize, generation: u64) {
        self.send(ServiceCommand::SelectAcross {
            table,
            start_page,
            count,
            generation,
        });
    }

    /// Abort a table's in-flight eager selection
    pub fn cancel_selection(&self, table: TableKind) {
        self.send(ServiceCommand::CancelSelection { table });
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}
