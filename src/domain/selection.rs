//! Selection - Page-Keyed Row Selection
//!
//! Selected rows are stored per page number and keyed by their position on
//! that page, so two identical rows on one page are still told apart.
//! Automatic selections are always a leading run of positions; manual checkbox
//! edits flip single positions or clear a page.

use std::collections::BTreeMap;

use crate::domain::artwork::Artwork;

/// Mapping from 1-based page number to the selected positions on that page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    pages: BTreeMap<u32, BTreeMap<usize, Artwork>>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select positions `0..count` of `rows` for `page`
    ///
    /// Returns how many rows were actually stored (bounded by `rows.len()`).
    pub fn select_prefix(&mut self, page: u32, rows: &[Artwork], count: usize) -> usize {
        let take = count.min(rows.len());
        let selected = rows.iter().take(take).cloned().enumerate().collect();
        self.pages.insert(page, selected);
        take
    }

    /// Deselect every row of a page
    pub fn clear_page(&mut self, page: u32) {
        self.pages.insert(page, BTreeMap::new());
    }

    /// Flip the checkbox at `index` on a page
    pub fn toggle_row(&mut self, page: u32, page_rows: &[Artwork], index: usize) {
        let Some(row) = page_rows.get(index) else {
            return;
        };

        let selected = self.pages.entry(page).or_default();
        if selected.remove(&index).is_none() {
            selected.insert(index, row.clone());
        }
    }

    /// Page-wise overwrite with another map
    pub fn merge(&mut self, other: SelectionMap) {
        self.pages.extend(other.pages);
    }

    /// Rows selected on a page, in page order
    pub fn selected_on(&self, page: u32) -> Vec<&Artwork> {
        self.pages
            .get(&page)
            .map(|selected| selected.values().collect())
            .unwrap_or_default()
    }

    /// Selected positions on a page, ascending
    pub fn positions(&self, page: u32) -> Vec<usize> {
        self.pages
            .get(&page)
            .map(|selected| selected.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Number of rows selected on a page
    pub fn count_on(&self, page: u32) -> usize {
        self.pages.get(&page).map_or(0, BTreeMap::len)
    }

    /// Whether the row at `index` on a page is selected
    pub fn is_selected(&self, page: u32, index: usize) -> bool {
        self.pages
            .get(&page)
            .is_some_and(|selected| selected.contains_key(&index))
    }

    /// Total selected rows across all pages
    pub fn total(&self) -> usize {
        self.pages.values().map(BTreeMap::len).sum()
    }

    /// Page numbers with an entry, ascending
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}

#[cfg(test)]
pub(crate) fn sample_rows(page: u32, count: usize) -> Vec<Artwork> {
    (0..count)
        .map(|i| Artwork {
            title: format!("Artwork {page}-{i}"),
            place_of_origin: "France".to_string(),
            artist_display: format!("Artist {i}"),
            inscriptions: None,
            date_start: Some(1850 + i as i32),
            date_end: Some(1860 + i as i32),
        })
        .collect()
}
