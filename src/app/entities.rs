//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency so a page load on one table does not
//! re-render the other.

use gpui::{App, AppContext, Entity, Global};

use crate::app::navigation::NavigationState;
use crate::domain::config::AppConfig;
use crate::state::{
    i18n_state::I18nState,
    log_state::LogState,
    table_state::{TableKind, TableState},
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// "Table Component 1": selection continues as pages load
    pub lazy_table: Entity<TableState>,
    /// "Table Component 2": selection fetches pages up front
    pub eager_table: Entity<TableState>,
    pub navigation: Entity<NavigationState>,
    /// Activity log (ring buffer)
    pub logs: Entity<LogState>,
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(config: &AppConfig, cx: &mut App) -> Self {
        Self {
            lazy_table: cx.new(|_| TableState::new(TableKind::Lazy)),
            eager_table: cx.new(|_| TableState::new(TableKind::Eager)),
            navigation: cx.new(|_| NavigationState::default()),
            logs: cx.new(|_| LogState::default()),
            i18n: cx.new(|_| I18nState::from_tag(&config.ui.locale)),
        }
    }

    /// State entity behind a table view
    pub fn table(&self, table: TableKind) -> &Entity<TableState> {
        match table {
            TableKind::Lazy => &self.lazy_table,
            TableKind::Eager => &self.eager_table,
        }
    }
}
