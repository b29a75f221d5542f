use std::rc::Rc;

use gpui::InteractiveElement as _;
use gpui::StatefulInteractiveElement as _;
use gpui::prelude::FluentBuilder as _;
use gpui::{
    App, ClickEvent, ElementId, FontWeight, IntoElement, MouseButton, ParentElement, RenderOnce,
    SharedString, StyleRefinement, Styled, Window, div, px,
};
use gpui_component::ActiveTheme as _;
use gpui_component::Disableable;
use gpui_component::Selectable;
use gpui_component::StyledExt as _;
use gpui_component::tooltip::Tooltip;

/// A compact text button for the formatting toolbar.
///
/// `selected` mirrors the engine's command state, so clicking never moves focus
/// away from the page.
#[derive(IntoElement)]
pub struct ToolbarButton {
    id: ElementId,
    label: SharedString,
    style: StyleRefinement,
    tooltip: Option<SharedString>,
    disabled: bool,
    selected: bool,
    on_click: Option<Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>>,
}

impl ToolbarButton {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            style: StyleRefinement::default(),
            tooltip: None,
            disabled: false,
            selected: false,
            on_click: None,
        }
    }

    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }
}

impl Styled for ToolbarButton {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl Selectable for ToolbarButton {
    fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

impl Disableable for ToolbarButton {
    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for ToolbarButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let disabled = self.disabled;
        let clickable = self.on_click.is_some() && !disabled;

        let mut disabled_fg = theme.muted_foreground;
        disabled_fg.a *= 0.6;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .h(px(28.))
            .min_w(px(28.))
            .px(px(6.))
            .rounded(px(6.))
            .text_size(px(12.))
            .font_weight(FontWeight::MEDIUM)
            .bg(theme.transparent)
            .text_color(if disabled {
                disabled_fg
            } else {
                theme.foreground
            })
            .when(!disabled, |this| {
                this.cursor_pointer()
                    .hover(|this| this.bg(theme.muted).text_color(theme.muted_foreground))
                    .active(|this| this.bg(theme.accent).text_color(theme.accent_foreground))
            })
            .when(self.selected, |this| {
                this.bg(theme.accent).text_color(theme.accent_foreground)
            })
            .refine_style(&self.style)
            .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                if !clickable {
                    cx.stop_propagation();
                    return;
                }
                window.prevent_default();
            })
            .when_some(self.on_click, |this, on_click| {
                this.on_click(move |event, window, cx| {
                    if !clickable {
                        cx.stop_propagation();
                        return;
                    }
                    (on_click)(event, window, cx);
                })
            })
            .child(self.label)
            .when_some(self.tooltip, |this, tooltip| {
                this.tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx))
            })
    }
}

#[derive(IntoElement)]
pub struct ToolbarSeparator;

impl RenderOnce for ToolbarSeparator {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .mx(px(4.))
            .py(px(2.))
            .child(div().h(px(18.)).w(px(1.)).bg(theme.border))
    }
}
