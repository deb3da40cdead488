//! Navigation - Active Table Toggle
//!
//! The header toggle shows one table view at a time. Each view keeps its own
//! state while hidden, so switching back resumes where the user left off.

use std::collections::HashSet;

use crate::state::table_state::TableKind;

/// Which table view is on screen
#[derive(Debug, Clone)]
pub struct NavigationState {
    active: TableKind,
    visited: HashSet<TableKind>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: TableKind::Lazy,
            visited: HashSet::new(),
        }
    }
}

impl NavigationState {
    pub fn active(&self) -> TableKind {
        self.active
    }

    /// Show a table view; returns true the first time that view is shown
    pub fn activate(&mut self, table: TableKind) -> bool {
        self.active = table;
        self.visited.insert(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visit_only_once() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.active(), TableKind::Lazy);
        assert!(nav.activate(TableKind::Lazy));
        assert!(nav.activate(TableKind::Eager));
        assert_eq!(nav.active(), TableKind::Eager);
        assert!(!nav.activate(TableKind::Lazy));
        assert!(!nav.activate(TableKind::Eager));
    }
}
