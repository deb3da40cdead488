//! Catalog Table Page
//!
//! One table view: toolbar with the selection summary, error banner, the
//! paged table and the row-count overlay opened from the Title header.

use gpui::{
    div, prelude::*, px, App, Context, FocusHandle, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination};
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::count_input::{CountInput, CountKey};
use crate::domain::artwork::{Artwork, ArtworkField};
use crate::features::catalog_table::controller::CatalogTableController;
use crate::i18n::{t, t_count, Locale};
use crate::state::table_state::{TableKind, TableState};
use crate::theme::colors::AppColors;

/// Page view for one table
pub struct CatalogTablePage {
    entities: AppEntities,
    controller: CatalogTableController,
    count_focus: FocusHandle,
}

impl CatalogTablePage {
    pub fn new(entities: AppEntities, table: TableKind, cx: &mut Context<Self>) -> Self {
        let controller = CatalogTableController::new(entities.clone(), table);

        cx.observe(controller.state(), |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            count_focus: cx.focus_handle(),
        }
    }

    pub fn controller(&self) -> &CatalogTableController {
        &self.controller
    }

    fn columns(&self, locale: Locale) -> Vec<Column<Artwork>> {
        ArtworkField::all()
            .iter()
            .map(|&field| {
                let header = t(locale, field.header_key());
                let column = Column::new(field.field(), header, move |row: &Artwork| {
                    div().child(row.cell(field)).into_any_element()
                });
                match field {
                    ArtworkField::Title => {
                        let controller = self.controller.clone();
                        let focus = self.count_focus.clone();
                        column.flex_width(2.0, 180.0).header_action(move |window, cx| {
                            controller.open_overlay(cx);
                            window.focus(&focus);
                        })
                    }
                    ArtworkField::Inscriptions => column.flex_width(1.5, 140.0),
                    ArtworkField::DateStart | ArtworkField::DateEnd => column.fixed_width(100.0),
                    _ => column,
                }
            })
            .collect()
    }

    fn render_toolbar(&self, state: &TableState, locale: Locale) -> impl IntoElement {
        let cancel = self.controller.clone();
        let open = self.controller.clone();
        let focus = self.count_focus.clone();
        let pending = state.remaining();

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(AppColors::text_primary())
                            .child(t(locale, state.kind.title_key())),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(AppColors::text_secondary())
                            .child(t_count(locale, "select-count", state.selection.total())),
                    )
                    .when(pending > 0, |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(AppColors::accent())
                                .child(t_count(locale, "select-pending", pending)),
                        )
                    }),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .when(state.selecting || pending > 0, |el| {
                        el.child(
                            Button::secondary("cancel-selection", t(locale, "select-cancel"))
                                .size(ButtonSize::Small)
                                .on_click(move |_event, _window, cx| cancel.cancel_selection(cx)),
                        )
                    })
                    .child(
                        Button::primary("open-selection", t(locale, "select-rows"))
                            .size(ButtonSize::Small)
                            .disabled(!state.can_request())
                            .busy(state.selecting, t(locale, "select-running"))
                            .on_click(move |_event, window, cx| {
                                open.open_overlay(cx);
                                window.focus(&focus);
                            }),
                    ),
            )
    }

    fn render_error(message: SharedString) -> impl IntoElement {
        div()
            .w_full()
            .px_4()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(AppColors::danger())
            .bg(AppColors::danger_bg())
            .text_sm()
            .text_color(AppColors::danger())
            .child(message)
    }

    fn render_overlay(&self, state: &TableState, locale: Locale) -> impl IntoElement {
        let close = self.controller.clone();
        let cancel = self.controller.clone();
        let submit = self.controller.clone();
        let keys = self.controller.clone();
        let disabled = !state.can_request();

        let input = CountInput::new("selection-count", self.count_focus.clone())
            .value(state.draft.clone())
            .placeholder(t(locale, "select-rows"))
            .disabled(disabled)
            .on_key(move |key, _window, cx| match key {
                CountKey::Digit(ch) => keys.push_draft_char(ch, cx),
                CountKey::Backspace => keys.pop_draft_char(cx),
                CountKey::Submit => keys.submit_draft(cx),
                CountKey::Dismiss => keys.close_overlay(cx),
            });

        Modal::new(t(locale, "select-title"))
            .on_close(move |_window, cx| close.close_overlay(cx))
            .child(input)
            .footer_child(
                Button::secondary("selection-cancel", t(locale, "select-cancel"))
                    .on_click(move |_event, _window, cx| cancel.close_overlay(cx)),
            )
            .footer_child(
                Button::primary("selection-submit", t(locale, "select-submit"))
                    .disabled(disabled || state.draft_count().is_none())
                    .on_click(move |_event, _window, cx| submit.submit_draft(cx)),
            )
    }
}

impl Render for CatalogTablePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.controller.state().read(cx).clone();

        let failed = state.error.is_some() || state.selection_error().is_some();
        let selected: Vec<bool> = (0..state.rows.len())
            .map(|i| state.is_row_selected(i))
            .collect();

        let toggle_row = self.controller.clone();
        let toggle_all = self.controller.clone();
        let change_page = self.controller.clone();

        let table = DataTable::new(self.columns(locale), state.rows.clone())
            .selected(selected)
            .loading(state.loading, t(locale, "table-loading"))
            .empty_message(t(locale, "table-no-data"))
            .disabled(state.selecting)
            .on_toggle_row(move |index, _window, cx: &mut App| toggle_row.toggle_row(index, cx))
            .on_toggle_all(move |_window, cx: &mut App| toggle_all.toggle_all(cx));

        let pagination =
            Pagination::new(state.current_page, state.total_pages(), state.total_records)
                .items_label(t(locale, "page-items"))
                .disabled(state.selecting)
                .on_page_change(move |page, _window, cx| change_page.change_page(page, cx));

        div()
            .relative()
            .size_full()
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .child(self.render_toolbar(&state, locale))
            .when(failed, |el| el.child(Self::render_error(t(locale, "error-generic"))))
            .child(div().flex_1().min_h_0().child(table))
            .child(pagination)
            .when(state.overlay_open, |el| el.child(self.render_overlay(&state, locale)))
    }
}
