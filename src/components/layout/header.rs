//! Header Component
//!
//! Application title, the table toggle and the language switcher.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::state::table_state::TableKind;
use crate::theme::colors::AppColors;

/// Header component
pub struct Header {
    entities: AppEntities,
    on_switch: Box<dyn Fn(TableKind, &mut gpui::App) + 'static>,
}

impl Header {
    /// `on_switch` runs when the user picks a table view
    pub fn new(
        entities: AppEntities,
        on_switch: impl Fn(TableKind, &mut gpui::App) + 'static,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            on_switch: Box::new(on_switch),
        }
    }

    fn render_toggle(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active = self.entities.navigation.read(cx).active();

        div()
            .flex()
            .items_center()
            .p_1()
            .gap_1()
            .rounded_md()
            .bg(gpui::rgba(0x00000033))
            .children(TableKind::all().iter().map(|&table| {
                let selected = table == active;
                div()
                    .id(SharedString::from(table.title_key()))
                    .px_3()
                    .py_1()
                    .rounded_sm()
                    .text_size(px(13.0))
                    .text_color(if selected {
                        AppColors::header_bg()
                    } else {
                        AppColors::text_light()
                    })
                    .when(selected, |el| el.bg(AppColors::content_bg()))
                    .when(!selected, |el| {
                        el.cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                (this.on_switch)(table, cx);
                            }))
                    })
                    .child(t(locale, table.title_key()))
            }))
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(AppColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(
                        div()
                            .text_color(AppColors::text_light())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    )
                    .child(self.render_toggle(cx)),
            )
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(AppColors::text_light())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        let tag = entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            cx.notify();
                            i18n.locale.tag()
                        });
                        if let Err(e) = crate::utils::config_store::save_locale(tag) {
                            tracing::warn!(error = %format!("{e:#}"), "Could not save locale");
                        }
                    })
                    .child(lang_label),
            )
    }
}
