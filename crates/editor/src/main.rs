use env_logger::Env;
use gpui::*;
use gpui_component::{ActiveTheme as _, Root, v_flex};
use manos_html_core::{APP_NAME, EditorConfig};

mod app_menus;
mod dialogs;
mod editor;
mod engine;
mod toolbar;

use crate::app_menus::Quit;
use crate::editor::HtmlEditor;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = EditorConfig::from_env();
    let app = Application::new();

    app.run(move |cx| {
        gpui_component::init(cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some(APP_NAME.into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let app_menu_bar = app_menus::init(APP_NAME, window, cx);
                    match HtmlEditor::view(config, app_menu_bar, window, cx) {
                        Ok(editor) => {
                            let guard = editor.clone();
                            window.on_window_should_close(cx, move |window, cx| {
                                guard.update(cx, |editor, cx| editor.should_close(window, cx))
                            });
                            route_quit(window.window_handle(), editor.downgrade(), cx);
                            cx.new(|cx| Root::new(editor, window, cx))
                        }
                        Err(err) => {
                            log::error!("{err:#}");
                            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
                            let failure = cx.new(|_| StartupFailure {
                                message: format!("{err:#}").into(),
                            });
                            cx.new(|cx| Root::new(failure, window, cx))
                        }
                    }
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}

/// Exit reaches the editor wherever focus is, so the unsaved-changes prompt
/// is never skipped.
fn route_quit(window: AnyWindowHandle, editor: WeakEntity<HtmlEditor>, cx: &mut App) {
    cx.on_action(move |_: &Quit, cx: &mut App| {
        let Some(editor) = editor.upgrade() else {
            cx.quit();
            return;
        };
        // The window may be mid-dispatch; reach it once it is free again.
        cx.defer(move |cx| {
            let routed = window.update(cx, |_, window, cx| {
                editor.update(cx, |editor, cx| editor.request_quit(window, cx));
            });
            if let Err(err) = routed {
                log::warn!("failed to route exit to the editor: {err}");
            }
        });
    });
}

struct StartupFailure {
    message: SharedString,
}

impl Render for StartupFailure {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap(px(8.))
            .bg(theme.background)
            .text_color(theme.foreground)
            .child(div().text_lg().child("The editor could not start"))
            .child(
                div()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .child(self.message.clone()),
            )
    }
}
