//! Pagination Component
//!
//! Previous/next buttons and a short run of page numbers around the current
//! page. Pages are 1-based.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::AppColors;
use crate::utils::format::format_count;

/// Page numbers shown on either side of the current page
const PAGE_LINK_RADIUS: u32 = 2;

type PageChange = Rc<dyn Fn(u32, &mut Window, &mut App) + 'static>;

/// Page numbers to show as links, at most `2 * radius + 1` of them
pub fn visible_pages(current: u32, total: u32, radius: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let span = 2 * radius + 1;
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(radius).max(1);
    let end = (start + span - 1).min(total);
    // Keep the run full-width near the last page
    start = start.min((end + 1).saturating_sub(span)).max(1);
    (start..=end).collect()
}

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    items_label: SharedString,
    disabled: bool,
    on_page_change: Option<PageChange>,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32, total_items: u64) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_label: "items".into(),
            disabled: false,
            on_page_change: None,
        }
    }

    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the page change handler, called with the requested page
    pub fn on_page_change(
        mut self,
        handler: impl Fn(u32, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        &self,
        id: SharedString,
        label: SharedString,
        target: u32,
        enabled: bool,
        active: bool,
    ) -> impl IntoElement {
        let handler = self.on_page_change.clone().filter(|_| enabled && !self.disabled);
        let clickable = handler.is_some();

        div()
            .id(id)
            .px_2()
            .py_1()
            .min_w(px(24.0))
            .flex()
            .justify_center()
            .rounded_sm()
            .text_sm()
            .when(active, |el| el.bg(AppColors::accent_soft()).text_color(AppColors::accent()))
            .when(!active, |el| {
                el.text_color(if clickable {
                    AppColors::text_primary()
                } else {
                    AppColors::text_muted()
                })
            })
            .when_some(handler, |el, handler| {
                el.cursor_pointer()
                    .hover(|s| s.bg(AppColors::table_row_hover()))
                    .on_click(move |_event: &ClickEvent, window, cx| handler(target, window, cx))
            })
            .child(label)
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let can_prev = current > 1;
        let can_next = current < total;

        let links: Vec<_> = visible_pages(current, total, PAGE_LINK_RADIUS)
            .into_iter()
            .map(|page| {
                self.nav_button(
                    SharedString::from(format!("page-{page}")),
                    SharedString::from(page.to_string()),
                    page,
                    page != current,
                    page == current,
                )
            })
            .collect();

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(AppColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(AppColors::text_secondary())
                    .child(format!("{} {}", format_count(self.total_items), self.items_label)),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.nav_button(
                        "prev-page".into(),
                        "←".into(),
                        current.saturating_sub(1),
                        can_prev,
                        false,
                    ))
                    .children(links)
                    .child(self.nav_button(
                        "next-page".into(),
                        "→".into(),
                        current.saturating_add(1),
                        can_next,
                        false,
                    ))
                    .child(
                        div()
                            .pl_2()
                            .text_sm()
                            .text_color(AppColors::text_secondary())
                            .child(format!("{current} / {total}")),
                    ),
            )
    }
}
