//! Log Panel Component
//!
//! Activity log under the table: page loads, selections and failures.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::state::log_state::{LogEntry, LogLevel};
use crate::theme::colors::AppColors;
use crate::utils::format::format_time_ms;

const PANEL_HEIGHT: f32 = 160.0;
const PANEL_HEADER_HEIGHT: f32 = 32.0;
/// Newest entries rendered while expanded
const VISIBLE_ENTRIES: usize = 100;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
    /// Hide info entries
    problems_only: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
            problems_only: false,
        }
    }

    fn header_button(
        id: &'static str,
        label: impl Into<SharedString>,
        active: bool,
    ) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(if active {
                AppColors::text_light()
            } else {
                AppColors::text_muted()
            })
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
            .child(label.into())
    }

    fn render_entry(entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(AppColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(AppColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let logs = self.entities.logs.read(cx);
        let problems = logs.count_at_least(LogLevel::Warn);
        let problems_only = self.problems_only;

        let entries: Vec<_> = if self.expanded {
            logs.entries()
                .iter()
                .rev()
                .filter(|e| !problems_only || e.level >= LogLevel::Warn)
                .take(VISIBLE_ENTRIES)
                .map(Self::render_entry)
                .collect()
        } else {
            Vec::new()
        };

        let height = if self.expanded {
            PANEL_HEIGHT
        } else {
            PANEL_HEADER_HEIGHT
        };
        let entities = self.entities.clone();

        div()
            .h(px(height))
            .w_full()
            .bg(AppColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(
                div()
                    .h(px(PANEL_HEADER_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(AppColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(t(locale, "log-title")),
                            )
                            .child(
                                div()
                                    .text_color(AppColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({})", logs.len())),
                            )
                            .when(problems > 0, |el| {
                                let label = format!("⚠ {problems}");
                                el.child(
                                    Self::header_button("problems-only", label, problems_only)
                                        .text_color(LogLevel::Warn.color())
                                        .on_click(cx.listener(
                                            |this, _event: &ClickEvent, _window, cx| {
                                                this.problems_only = !this.problems_only;
                                                cx.notify();
                                            },
                                        )),
                                )
                            }),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Self::header_button("clear-logs", t(locale, "log-clear"), false)
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    }),
                            )
                            .child(
                                Self::header_button(
                                    "toggle-logs",
                                    if self.expanded { "▼" } else { "▲" },
                                    false,
                                )
                                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.expanded = !this.expanded;
                                    cx.notify();
                                })),
                            ),
                    ),
            )
            .when(self.expanded, |el| {
                el.child(
                    div()
                        .id("log-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .children(entries),
                )
            })
    }
}
