//! CountInput Component
//!
//! Single-line field for a non-negative row count. The typed text lives in the
//! owner's state; this component only renders it and translates key presses.

use gpui::{
    div, prelude::*, px, App, ElementId, FocusHandle, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::AppColors;

/// Key presses the count field reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKey {
    Digit(char),
    Backspace,
    Submit,
    Dismiss,
}

impl CountKey {
    /// Map a keystroke's key name and typed character
    pub fn from_keystroke(key: &str, key_char: Option<&str>) -> Option<Self> {
        match key {
            "backspace" => return Some(CountKey::Backspace),
            "enter" => return Some(CountKey::Submit),
            "escape" => return Some(CountKey::Dismiss),
            _ => {}
        }

        let typed = key_char.unwrap_or(key);
        let mut chars = typed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_digit() => Some(CountKey::Digit(ch)),
            _ => None,
        }
    }
}

/// Numeric count input
#[derive(IntoElement)]
pub struct CountInput {
    id: ElementId,
    value: SharedString,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    disabled: bool,
    on_key: Option<Box<dyn Fn(CountKey, &mut Window, &mut App) + 'static>>,
}

impl CountInput {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            placeholder: SharedString::default(),
            focus_handle,
            disabled: false,
            on_key: None,
        }
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_key(mut self, handler: impl Fn(CountKey, &mut Window, &mut App) + 'static) -> Self {
        self.on_key = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for CountInput {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused && !self.disabled {
            AppColors::border_focus()
        } else {
            AppColors::input_border()
        };

        let empty = self.value.is_empty();
        let (display_text, text_color) = if empty {
            (self.placeholder, AppColors::input_placeholder())
        } else {
            (self.value, AppColors::text_primary())
        };

        let focus_handle = self.focus_handle.clone();
        let disabled = self.disabled;
        let on_key = self.on_key;

        div()
            .id(self.id)
            .track_focus(&self.focus_handle)
            .px_3()
            .py_2()
            .bg(AppColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .when(disabled, |el| el.opacity(0.5))
            .when(!disabled, |el| {
                el.cursor_text()
                    .on_click(move |_event, window, _cx| window.focus(&focus_handle))
            })
            .when_some(on_key.filter(|_| !disabled), |el, handler| {
                el.on_key_down(move |event: &KeyDownEvent, window, cx| {
                    let keystroke = &event.keystroke;
                    if let Some(key) =
                        CountKey::from_keystroke(&keystroke.key, keystroke.key_char.as_deref())
                    {
                        handler(key, window, cx);
                        cx.stop_propagation();
                    }
                })
            })
            .child(display_text)
            .when(is_focused && !disabled, |el| {
                el.child(div().w(px(1.0)).h(px(16.0)).bg(AppColors::text_primary()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_editing_keys() {
        assert_eq!(CountKey::from_keystroke("7", Some("7")), Some(CountKey::Digit('7')));
        assert_eq!(CountKey::from_keystroke("backspace", None), Some(CountKey::Backspace));
        assert_eq!(CountKey::from_keystroke("enter", None), Some(CountKey::Submit));
        assert_eq!(CountKey::from_keystroke("escape", None), Some(CountKey::Dismiss));
    }

    #[test]
    fn test_non_digits_ignored() {
        assert_eq!(CountKey::from_keystroke("-", Some("-")), None);
        assert_eq!(CountKey::from_keystroke("a", Some("a")), None);
        assert_eq!(CountKey::from_keystroke("tab", None), None);
        assert_eq!(CountKey::from_keystroke("e", Some("e")), None);
    }
}
