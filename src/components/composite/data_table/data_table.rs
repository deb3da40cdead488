//! DataTable Component
//!
//! One page of rows with a leading selection column. The table holds no state
//! of its own; selection and loading flags come from the owner each render.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, Div, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::components::primitives::checkbox::{CheckState, Checkbox};
use crate::theme::colors::AppColors;

const SELECT_COLUMN_WIDTH: f32 = 44.0;

type RowToggle = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;
type AllToggle = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// DataTable component
#[derive(IntoElement)]
pub struct DataTable<R: 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    /// Parallel to `rows`
    selected: Vec<bool>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    disabled: bool,
    loading_message: SharedString,
    empty_message: SharedString,
    on_toggle_row: Option<RowToggle>,
    on_toggle_all: Option<AllToggle>,
}

impl<R: 'static> DataTable<R> {
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        let selected = vec![false; rows.len()];
        Self {
            columns,
            rows,
            selected,
            row_height: 40.0,
            header_height: 44.0,
            loading: false,
            disabled: false,
            loading_message: "Loading...".into(),
            empty_message: "No data".into(),
            on_toggle_row: None,
            on_toggle_all: None,
        }
    }

    /// Selection flags, one per row
    pub fn selected(mut self, selected: Vec<bool>) -> Self {
        self.selected = selected;
        self.selected.resize(self.rows.len(), false);
        self
    }

    pub fn loading(mut self, loading: bool, message: impl Into<SharedString>) -> Self {
        self.loading = loading;
        self.loading_message = message.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Ignore checkbox clicks
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_toggle_row(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle_row = Some(Rc::new(handler));
        self
    }

    pub fn on_toggle_all(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle_all = Some(Rc::new(handler));
        self
    }

    fn sized_cell(width: &ColumnWidth) -> Div {
        match *width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex { grow, min } => {
                div().flex_grow().flex_basis(px(min * grow)).min_w(px(min))
            }
        }
    }

    fn render_header(&self) -> impl IntoElement {
        let checked = self.selected.iter().filter(|s| **s).count();
        let state = CheckState::for_group(checked, self.rows.len());
        let on_toggle_all = self.on_toggle_all.clone();

        let select_all = Checkbox::new("select-all")
            .state(state)
            .disabled(self.disabled || self.loading || self.rows.is_empty())
            .when_some(on_toggle_all, |checkbox, handler| {
                checkbox.on_toggle(move |window, cx| handler(window, cx))
            });

        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(AppColors::table_header_bg())
            .border_b_1()
            .border_color(AppColors::border())
            .child(
                div()
                    .w(px(SELECT_COLUMN_WIDTH))
                    .flex_none()
                    .flex()
                    .justify_center()
                    .child(select_all),
            )
            .children(self.columns.iter().map(|col| {
                let action = col.header_action.clone();
                Self::sized_cell(&col.width)
                    .px_3()
                    .flex()
                    .items_center()
                    .gap_1()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(AppColors::text_primary())
                    .child(col.label.clone())
                    .when_some(action, |el, handler| {
                        el.child(
                            div()
                                .id(SharedString::from(format!("header-action-{}", col.id)))
                                .px_1()
                                .rounded_sm()
                                .text_color(AppColors::text_secondary())
                                .cursor_pointer()
                                .hover(|s| s.bg(AppColors::table_row_hover()))
                                .on_click(move |_event, window, cx| handler(window, cx))
                                .child("▾"),
                        )
                    })
            }))
    }

    fn render_row(&self, row: &R, index: usize) -> AnyElement {
        let selected = self.selected.get(index).copied().unwrap_or(false);
        let bg = if selected {
            AppColors::accent_soft()
        } else if index % 2 == 0 {
            AppColors::content_bg()
        } else {
            AppColors::table_row_alt()
        };

        let on_toggle_row = self.on_toggle_row.clone();
        let checkbox = Checkbox::new(("select-row", index))
            .checked(selected)
            .disabled(self.disabled)
            .when_some(on_toggle_row, |checkbox, handler| {
                checkbox.on_toggle(move |window, cx| handler(index, window, cx))
            });

        div()
            .min_h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(AppColors::table_row_hover()))
            .border_b_1()
            .border_color(AppColors::border())
            .child(
                div()
                    .w(px(SELECT_COLUMN_WIDTH))
                    .flex_none()
                    .flex()
                    .justify_center()
                    .child(checkbox),
            )
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(&col.width)
                    .px_3()
                    .py_2()
                    .text_sm()
                    .text_color(AppColors::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }))
            .into_any_element()
    }

    fn render_message(message: SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(AppColors::text_muted())
            .child(message)
    }
}

impl<R: 'static> RenderOnce for DataTable<R> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let body = if self.loading {
            Self::render_message(self.loading_message.clone()).into_any_element()
        } else if self.rows.is_empty() {
            Self::render_message(self.empty_message.clone()).into_any_element()
        } else {
            div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                )
                .into_any_element()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(AppColors::content_bg())
            .border_1()
            .border_color(AppColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header())
            .child(body)
    }
}
