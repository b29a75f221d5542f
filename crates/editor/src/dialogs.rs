use std::rc::Rc;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::button::{Button, ButtonVariant, ButtonVariants as _};
use gpui_component::dialog::DialogButtonProps;
use gpui_component::input::{Input, InputState};
use gpui_component::{ActiveTheme as _, Sizable as _, StyledExt as _, WindowExt as _, h_flex};
use manos_html_core::GuardChoice;

pub type SubmitHandler = Rc<dyn Fn(String, &mut Window, &mut App)>;

/// A text prompt; `on_submit` receives the value when OK is pressed.
pub struct InputDialog {
    pub title: SharedString,
    pub ok_text: SharedString,
    pub input: Entity<InputState>,
    pub height: Option<Pixels>,
}

pub fn open_input(
    window: &mut Window,
    cx: &mut App,
    dialog: InputDialog,
    on_submit: SubmitHandler,
) {
    let InputDialog {
        title,
        ok_text,
        input,
        height,
    } = dialog;
    let focus = input.read(cx).focus_handle(cx);

    window.open_dialog(cx, move |dialog, _window, _cx| {
        let input_for_ok = input.clone();
        let on_submit = on_submit.clone();
        dialog
            .confirm()
            .overlay_closable(false)
            .title(div().text_sm().font_semibold().child(title.clone()))
            .button_props(
                DialogButtonProps::default()
                    .ok_text(ok_text.clone())
                    .cancel_text("Cancel"),
            )
            .child(
                div().p(px(12.)).child(
                    Input::new(&input)
                        .w_full()
                        .when_some(height, |this, height| this.h(height)),
                ),
            )
            .on_ok(move |_, window, cx| {
                let value = input_for_ok.read(cx).value().to_string();
                on_submit(value, window, cx);
                true
            })
    });
    window.focus(&focus);
}

/// A list of labelled choices; picking one closes the dialog.
pub fn open_choices<T>(
    window: &mut Window,
    cx: &mut App,
    title: impl Into<SharedString>,
    choices: Vec<(SharedString, T)>,
    selected: Option<T>,
    on_choose: Rc<dyn Fn(T, &mut Window, &mut App)>,
) where
    T: Copy + PartialEq + 'static,
{
    let title: SharedString = title.into();
    let choices = Rc::new(choices);

    window.open_dialog(cx, move |dialog, _window, cx| {
        let theme = cx.theme();
        let items = choices.iter().enumerate().map(|(ix, (label, value))| {
            let value = *value;
            let on_choose = on_choose.clone();
            div()
                .id(ix)
                .px(px(8.))
                .py(px(4.))
                .rounded(px(4.))
                .text_sm()
                .cursor_pointer()
                .hover(|this| this.bg(theme.accent).text_color(theme.accent_foreground))
                .when(selected == Some(value), |this| {
                    this.bg(theme.accent).text_color(theme.accent_foreground)
                })
                .child(label.clone())
                .on_click(move |_, window, cx| {
                    window.close_dialog(cx);
                    on_choose(value, window, cx);
                })
        });

        dialog
            .title(div().text_sm().font_semibold().child(title.clone()))
            .child(
                div()
                    .id("choices")
                    .flex()
                    .flex_col()
                    .gap(px(2.))
                    .p(px(8.))
                    .max_h(px(360.))
                    .overflow_y_scroll()
                    .children(items),
            )
    });
}

/// Asks what to do with unsaved changes before they would be lost.
pub fn open_unsaved_changes(
    window: &mut Window,
    cx: &mut App,
    document_name: String,
    on_choice: Rc<dyn Fn(GuardChoice, &mut Window, &mut App)>,
) {
    window.open_dialog(cx, move |dialog, _window, cx| {
        let theme = cx.theme();
        let on_save = on_choice.clone();
        let on_cancel = on_choice.clone();
        let on_discard = on_choice.clone();
        dialog
            .confirm()
            .overlay_closable(false)
            .title(div().text_sm().font_semibold().child("Save changes?"))
            .button_props(
                DialogButtonProps::default()
                    .ok_text("Save")
                    .cancel_text("Cancel"),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(8.))
                    .p(px(12.))
                    .child(
                        div()
                            .text_sm()
                            .child(format!("{document_name} has been modified.")),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.muted_foreground)
                            .child("Discarding loses every change since the last save."),
                    )
                    .child(
                        h_flex().justify_end().child(
                            Button::new("discard-changes")
                                .small()
                                .with_variant(ButtonVariant::Danger)
                                .label("Discard")
                                .on_click(move |_, window, cx| {
                                    window.close_dialog(cx);
                                    on_discard(GuardChoice::Discard, window, cx);
                                }),
                        ),
                    ),
            )
            .on_ok(move |_, window, cx| {
                on_save(GuardChoice::Save, window, cx);
                true
            })
            .on_cancel(move |_, window, cx| {
                on_cancel(GuardChoice::Cancel, window, cx);
                true
            })
    });
}
