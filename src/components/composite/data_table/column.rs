//! Column Definition
//!
//! Defines table columns with their header and cell renderers.

use std::rc::Rc;

use gpui::{AnyElement, App, SharedString, Window};

/// Handler attached to a column header
pub type HeaderAction = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier, unique within a table
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    pub width: ColumnWidth,
    /// Optional button rendered beside the label
    pub header_action: Option<HeaderAction>,
    render: Box<dyn Fn(&R) -> AnyElement>,
}

/// Column width
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space, never narrower than `min`
    Flex { grow: f32, min: f32 },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex {
            grow: 1.0,
            min: 100.0,
        }
    }
}

impl<R: 'static> Column<R> {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            header_action: None,
            render: Box::new(render),
        }
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex_width(mut self, grow: f32, min: f32) -> Self {
        self.width = ColumnWidth::Flex { grow, min };
        self
    }

    /// Add a header button, e.g. to open a dialog from the column
    pub fn header_action(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.header_action = Some(Rc::new(handler));
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}
