//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::AppColors;

/// Visual state of a checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckState {
    #[default]
    Unchecked,
    /// Some, but not all, of a group is checked
    Partial,
    Checked,
}

impl CheckState {
    /// State of a group where `selected` of `total` items are checked
    pub fn for_group(selected: usize, total: usize) -> Self {
        match selected {
            0 => CheckState::Unchecked,
            n if n >= total => CheckState::Checked,
            _ => CheckState::Partial,
        }
    }

    fn mark(&self) -> &'static str {
        match self {
            CheckState::Unchecked => "",
            CheckState::Partial => "−",
            CheckState::Checked => "✓",
        }
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: CheckState,
    disabled: bool,
    on_toggle: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: CheckState::Unchecked,
            disabled: false,
            on_toggle: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.state = if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        };
        self
    }

    pub fn state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called on click; the owner decides the next state
    pub fn on_toggle(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let filled = self.state != CheckState::Unchecked;

        let (bg, border) = if filled {
            (AppColors::accent(), AppColors::accent())
        } else {
            (AppColors::input_bg(), AppColors::input_border())
        };

        let mut checkbox = div().id(self.id).flex().items_center().child(
            div()
                .size(px(16.0))
                .rounded_sm()
                .border_1()
                .border_color(border)
                .bg(bg)
                .flex()
                .items_center()
                .justify_center()
                .text_color(AppColors::text_light())
                .text_size(px(11.0))
                .child(self.state.mark()),
        );

        if self.disabled {
            checkbox = checkbox.opacity(0.5);
        } else if let Some(handler) = self.on_toggle {
            checkbox = checkbox
                .cursor_pointer()
                .on_click(move |_event, window, cx| handler(window, cx));
        }

        checkbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_state() {
        assert_eq!(CheckState::for_group(0, 12), CheckState::Unchecked);
        assert_eq!(CheckState::for_group(5, 12), CheckState::Partial);
        assert_eq!(CheckState::for_group(12, 12), CheckState::Checked);
        assert_eq!(CheckState::for_group(0, 0), CheckState::Unchecked);
    }
}
