use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context as _;
use futures::StreamExt as _;
use futures::channel::mpsc;
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::input::{Input, InputState};
use gpui_component::menu::AppMenuBar;
use gpui_component::notification::Notification;
use gpui_component::slider::{Slider, SliderEvent, SliderState, SliderValue};
use gpui_component::{
    ActiveTheme as _, Disableable as _, Selectable as _, TitleBar, WindowExt as _, h_flex, v_flex,
};
use gpui_manos_webview::webview::WebView;
use gpui_manos_webview::{Builder, DocumentSource};
use manos_html_core::{
    Alignment, BlockStyle, BuiltinAction, Command, CommandError, EditorConfig, EditorController,
    Effect, EngineEvent, FontSize, Guard, GuardChoice, GuardResolution, HexColor, PendingAction,
    SaveOutcome, StartupDocument, ToggleCommand, ViewTab, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN,
    ZOOM_STEP,
};

use crate::app_menus::{self as menus, CONTEXT};
use crate::dialogs::{self, InputDialog};
use crate::engine::WryEngine;
use crate::toolbar::{ToolbarButton, ToolbarSeparator};

const EXAMPLE_DOCUMENT: &str = include_str!("../assets/example.html");

pub struct HtmlEditor {
    focus_handle: FocusHandle,
    app_menu_bar: Entity<AppMenuBar>,
    controller: EditorController<WryEngine>,
    webview: Entity<WebView>,
    source_input: Entity<InputState>,
    zoom_slider: Entity<SliderState>,
    text_color: HexColor,
    background_color: HexColor,
    font_size: FontSize,
    title: String,
    _subscriptions: Vec<Subscription>,
}

impl HtmlEditor {
    pub fn view(
        config: EditorConfig,
        app_menu_bar: Entity<AppMenuBar>,
        window: &mut Window,
        cx: &mut App,
    ) -> anyhow::Result<Entity<Self>> {
        let (events_tx, events_rx) = mpsc::unbounded();
        let document = DocumentSource::new();
        let page = Builder::new()
            .with_webview_id("html-editor")
            .editable(true)
            .serve_document(document.clone())
            .on_message(WryEngine::bridge_handler(events_tx.clone()))
            .build_as_child(window)
            .context("failed to create the editing view")?;
        let webview = cx.new(|cx| WebView::new(page, window, cx));
        let engine = WryEngine::new(webview.read(cx).inner(), document, events_tx);

        let editor = cx.new(|cx| {
            let mut this = Self::new(config, app_menu_bar, engine, webview, window, cx);
            this.listen(events_rx, window, cx);
            this
        });
        let focus_handle = editor.read(cx).focus_handle.clone();
        window.focus(&focus_handle);
        Ok(editor)
    }

    fn new(
        config: EditorConfig,
        app_menu_bar: Entity<AppMenuBar>,
        engine: WryEngine,
        webview: Entity<WebView>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut controller = EditorController::new(engine);
        match controller.start(&config, Some(EXAMPLE_DOCUMENT.as_bytes())) {
            StartupDocument::File => {}
            StartupDocument::Example => log::info!("showing the bundled example"),
            StartupDocument::Empty => log::info!("starting with an empty document"),
        }

        let source_input = cx.new(|cx| InputState::new(window, cx).code_editor("html"));
        let zoom = controller.zoom().percent();
        let zoom_slider = cx.new(|_| {
            SliderState::new()
                .min(ZOOM_MIN as f32)
                .max(ZOOM_MAX as f32)
                .step(ZOOM_STEP as f32)
                .default_value(zoom as f32)
        });

        let subscriptions = vec![cx.subscribe_in(
            &zoom_slider,
            window,
            |this, _, event: &SliderEvent, _window, cx| {
                let SliderEvent::Change(SliderValue::Single(percent)) = event else {
                    return;
                };
                this.controller.set_zoom(percent.round() as u32);
                cx.notify();
            },
        )];

        let title = controller.session().window_title();
        window.set_window_title(&title);

        Self {
            focus_handle: cx.focus_handle(),
            app_menu_bar,
            controller,
            webview,
            source_input,
            zoom_slider,
            text_color: HexColor::BLACK,
            background_color: HexColor::WHITE,
            font_size: FontSize::default(),
            title,
            _subscriptions: subscriptions,
        }
    }

    fn listen(
        &mut self,
        mut events: mpsc::UnboundedReceiver<EngineEvent>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        cx.spawn_in(window, async move |this, window| {
            while let Some(event) = events.next().await {
                let handled = this.update_in(window, |this, window, cx| {
                    this.handle_engine_event(event, window, cx);
                });
                if handled.is_err() {
                    break;
                }
            }
        })
        .detach();
    }

    /// Asks before closing over unsaved changes.
    pub fn should_close(&mut self, window: &mut Window, cx: &mut Context<Self>) -> bool {
        match self.controller.guard(PendingAction::Close) {
            Guard::Proceed(_) => true,
            Guard::Prompt => {
                self.prompt_unsaved_changes(window, cx);
                false
            }
        }
    }

    /// Exit from a menu or key binding, behind the unsaved-changes prompt.
    pub fn request_quit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.guarded(PendingAction::Close, window, cx);
    }

    fn handle_engine_event(
        &mut self,
        event: EngineEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        for effect in self.controller.handle_event(event) {
            self.apply_effect(effect, window, cx);
        }
        cx.notify();
    }

    fn apply_effect(&mut self, effect: Effect, window: &mut Window, cx: &mut Context<Self>) {
        match effect {
            Effect::SourceText(html) => {
                self.source_input.update(cx, |state, cx| {
                    state.set_value(html, window, cx);
                });
            }
            Effect::Saved(path) => {
                window.push_notification(
                    Notification::new().message(format!("Saved to {}", path.display())),
                    cx,
                );
            }
            Effect::SaveFailed(err) => {
                window.push_notification(
                    Notification::new().message(format!("Failed to save: {err}")),
                    cx,
                );
            }
            Effect::Proceed(action) => self.proceed(action, window, cx),
        }
    }

    fn guarded(&mut self, action: PendingAction, window: &mut Window, cx: &mut Context<Self>) {
        match self.controller.guard(action) {
            Guard::Proceed(action) => self.proceed(action, window, cx),
            Guard::Prompt => self.prompt_unsaved_changes(window, cx),
        }
    }

    fn prompt_unsaved_changes(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let this = cx.entity();
        dialogs::open_unsaved_changes(
            window,
            cx,
            self.controller.session().display_name(),
            Rc::new(move |choice, window, cx| {
                this.update(cx, |this, cx| this.resolve_guard(choice, window, cx));
            }),
        );
    }

    fn resolve_guard(&mut self, choice: GuardChoice, window: &mut Window, cx: &mut Context<Self>) {
        match self.controller.resolve_guard(choice) {
            GuardResolution::Proceed(action) => self.proceed(action, window, cx),
            GuardResolution::Cancelled | GuardResolution::Saving => {}
            GuardResolution::NeedsPath(action) => self.prompt_save_as(Some(action), window, cx),
        }
        cx.notify();
    }

    fn proceed(&mut self, action: PendingAction, window: &mut Window, cx: &mut Context<Self>) {
        match action {
            PendingAction::New => {
                self.show_page_before_load();
                self.controller.new_document();
            }
            PendingAction::Open => self.prompt_open(window, cx),
            PendingAction::Close => cx.quit(),
        }
        cx.notify();
    }

    /// Loads replace the page asynchronously, so the source view is never
    /// refreshed against a page that is still loading.
    fn show_page_before_load(&mut self) {
        self.controller.select_tab(ViewTab::Normal);
    }

    fn prompt_open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let picked = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: Some("Open HTML File".into()),
        });

        cx.spawn_in(window, async move |this, window| {
            let path: PathBuf = picked.await.ok()?.ok()??.into_iter().next()?;
            this.update_in(window, |this, window, cx| this.open_path(&path, window, cx))
                .ok();
            Some(())
        })
        .detach();
    }

    fn open_path(&mut self, path: &Path, window: &mut Window, cx: &mut Context<Self>) {
        self.show_page_before_load();
        if let Err(err) = self.controller.open(path) {
            window.push_notification(
                Notification::new().message(format!("Failed to open: {err}")),
                cx,
            );
        }
        cx.notify();
    }

    fn save(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let SaveOutcome::NeedsPath = self.controller.save() {
            self.prompt_save_as(None, window, cx);
        }
    }

    fn prompt_save_as(
        &mut self,
        then: Option<PendingAction>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let session = self.controller.session();
        let current = session.file_path().filter(|_| !session.is_untitled());
        let directory = current
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let suggested_name = current
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled.htm".to_string());

        let picked = cx.prompt_for_new_path(&directory, Some(&suggested_name));
        cx.spawn_in(window, async move |this, window| {
            let path: PathBuf = picked.await.ok()?.ok()??;
            this.update_in(window, |this, _window, cx| {
                this.controller.save_as_then(&path, then);
                cx.notify();
            })
            .ok();
            Some(())
        })
        .detach();
    }

    fn run(&mut self, command: Command, cx: &mut Context<Self>) {
        self.controller.dispatch(&command);
        self.webview.read(cx).focus_page();
        cx.notify();
    }

    fn run_builtin(&mut self, action: BuiltinAction, cx: &mut Context<Self>) {
        self.run(Command::Builtin(action), cx);
    }

    fn run_checked(&mut self, command: Result<Command, CommandError>, cx: &mut Context<Self>) {
        match command {
            Ok(command) => self.run(command, cx),
            Err(err) => log::debug!("ignoring command: {err}"),
        }
    }

    /// Scripted paste is usually refused by the engine; fall back to
    /// inserting the clipboard text.
    fn paste(&mut self, cx: &mut Context<Self>) {
        if self.controller.toolbar().is_enabled(BuiltinAction::Paste) {
            self.run_builtin(BuiltinAction::Paste, cx);
            return;
        }
        let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) else {
            return;
        };
        if !text.is_empty() {
            self.run(Command::InsertText(text), cx);
        }
    }

    fn select_tab(&mut self, tab: ViewTab, cx: &mut Context<Self>) {
        self.controller.select_tab(tab);
        cx.notify();
    }

    fn apply_source(&mut self, cx: &mut Context<Self>) {
        let html = self.source_input.read(cx).value().to_string();
        self.show_page_before_load();
        self.controller.apply_source(&html);
        cx.notify();
    }

    fn zoom_changed(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let percent = self.controller.zoom().percent();
        self.zoom_slider.update(cx, |state, cx| {
            state.set_value(percent as f32, window, cx);
        });
        cx.notify();
    }

    fn zoom_in(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.controller.zoom_in() {
            self.zoom_changed(window, cx);
        }
    }

    fn zoom_out(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.controller.zoom_out() {
            self.zoom_changed(window, cx);
        }
    }

    fn reset_zoom(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.controller.set_zoom(ZOOM_DEFAULT);
        self.zoom_changed(window, cx);
    }

    fn insert_image(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let picked = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: Some("Insert Image".into()),
        });

        cx.spawn_in(window, async move |this, window| {
            let path: PathBuf = picked.await.ok()?.ok()??.into_iter().next()?;
            this.update_in(window, |this, _window, cx| {
                this.run_checked(Command::insert_image(&path), cx);
            })
            .ok();
            Some(())
        })
        .detach();
    }

    fn open_text_dialog(
        &mut self,
        dialog: InputDialog,
        build: fn(&str) -> Result<Command, CommandError>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let this = cx.entity();
        dialogs::open_input(
            window,
            cx,
            dialog,
            Rc::new(move |value, _window, cx| {
                this.update(cx, |this, cx| {
                    let command = build(&value);
                    if let Ok(Command::TextColor(color)) = &command {
                        this.text_color = *color;
                    }
                    if let Ok(Command::BackgroundColor(color)) = &command {
                        this.background_color = *color;
                    }
                    this.run_checked(command, cx);
                });
            }),
        );
    }

    fn create_link(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let input = cx.new(|cx| InputState::new(window, cx).placeholder("https://example.com"));
        let dialog = InputDialog {
            title: "Create Link".into(),
            ok_text: "Create".into(),
            input,
            height: None,
        };
        self.open_text_dialog(dialog, Command::create_link, window, cx);
    }

    fn insert_html(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let input = cx.new(|cx| InputState::new(window, cx).code_editor("html"));
        let dialog = InputDialog {
            title: "Insert HTML".into(),
            ok_text: "Insert".into(),
            input,
            height: Some(px(240.)),
        };
        self.open_text_dialog(dialog, |html| Command::insert_html(html), window, cx);
    }

    fn choose_text_color(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let current = self.text_color.to_string();
        let input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("#rrggbb")
                .default_value(current)
        });
        let dialog = InputDialog {
            title: "Text Color".into(),
            ok_text: "Apply".into(),
            input,
            height: None,
        };
        self.open_text_dialog(dialog, Command::text_color, window, cx);
    }

    fn choose_background_color(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let current = self.background_color.to_string();
        let input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("#rrggbb")
                .default_value(current)
        });
        let dialog = InputDialog {
            title: "Background Color".into(),
            ok_text: "Apply".into(),
            input,
            height: None,
        };
        self.open_text_dialog(dialog, Command::background_color, window, cx);
    }

    fn choose_font_name(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let mut names = cx.text_system().all_font_names();
        names.sort_by_key(|name| name.to_lowercase());
        names.dedup();
        let choices: Vec<(SharedString, usize)> = names
            .iter()
            .enumerate()
            .map(|(ix, name)| (SharedString::from(name.clone()), ix))
            .collect();

        let this = cx.entity();
        dialogs::open_choices(
            window,
            cx,
            "Font Name",
            choices,
            None,
            Rc::new(move |ix, _window, cx| {
                let Some(name) = names.get(ix) else {
                    return;
                };
                this.update(cx, |this, cx| this.run_checked(Command::font_name(name), cx));
            }),
        );
    }

    fn choose_font_size(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let choices = FontSize::ALL
            .into_iter()
            .map(|size| (SharedString::from(size.label()), size))
            .collect();

        let this = cx.entity();
        dialogs::open_choices(
            window,
            cx,
            "Font Size",
            choices,
            Some(self.font_size),
            Rc::new(move |size, _window, cx| {
                this.update(cx, |this, cx| {
                    this.font_size = size;
                    this.run(Command::FontSize(size), cx);
                });
            }),
        );
    }

    fn choose_block_style(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let choices = BlockStyle::ALL
            .into_iter()
            .map(|style| (SharedString::from(style.label()), style))
            .collect();

        let this = cx.entity();
        dialogs::open_choices(
            window,
            cx,
            "Style",
            choices,
            None,
            Rc::new(move |style, _window, cx| {
                this.update(cx, |this, cx| this.run(Command::BlockStyle(style), cx));
            }),
        );
    }

    fn sync_window(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let title = self.controller.session().window_title();
        if title != self.title {
            window.set_window_title(&title);
            self.title = title;
        }

        // The page is a native view drawn above gpui, so it has to make room
        // for the source editor and for dialogs.
        let page_visible = self.controller.source().active() == ViewTab::Normal
            && !window.has_active_dialog(cx);
        self.webview.update(cx, |webview, _| {
            if page_visible {
                webview.show();
            } else {
                webview.hide();
            }
        });
    }

    fn toggle_button(
        &self,
        id: &'static str,
        label: &'static str,
        tooltip: &'static str,
        toggle: ToggleCommand,
        command: Command,
        cx: &Context<Self>,
    ) -> ToolbarButton {
        ToolbarButton::new(id, label)
            .tooltip(tooltip)
            .selected(self.controller.toolbar().is_checked(toggle))
            .on_click(cx.listener(move |this, _, _window, cx| {
                this.run(command.clone(), cx);
            }))
    }

    fn action_button(
        &self,
        id: &'static str,
        label: &'static str,
        tooltip: &'static str,
        action: BuiltinAction,
        cx: &Context<Self>,
    ) -> ToolbarButton {
        ToolbarButton::new(id, label)
            .tooltip(tooltip)
            .disabled(!self.controller.toolbar().is_enabled(action))
            .on_click(cx.listener(move |this, _, _window, cx| {
                this.run_builtin(action, cx);
            }))
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let can_save = self.controller.session().can_save();

        h_flex()
            .w_full()
            .flex_wrap()
            .items_center()
            .gap(px(2.))
            .px(px(8.))
            .py(px(4.))
            .bg(theme.background)
            .border_b_1()
            .border_color(theme.border)
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .child(
                ToolbarButton::new("new", "New")
                    .tooltip("New document")
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.guarded(PendingAction::New, window, cx);
                    })),
            )
            .child(
                ToolbarButton::new("open", "Open")
                    .tooltip("Open a file")
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.guarded(PendingAction::Open, window, cx);
                    })),
            )
            .child(
                ToolbarButton::new("save", "Save")
                    .tooltip("Save")
                    .disabled(!can_save)
                    .on_click(cx.listener(|this, _, window, cx| this.save(window, cx))),
            )
            .child(
                ToolbarButton::new("save-as", "Save As")
                    .tooltip("Save to a new file")
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.prompt_save_as(None, window, cx);
                    })),
            )
            .child(ToolbarSeparator)
            .child(self.action_button("undo", "↶", "Undo", BuiltinAction::Undo, cx))
            .child(self.action_button("redo", "↷", "Redo", BuiltinAction::Redo, cx))
            .child(ToolbarSeparator)
            .child(self.action_button("cut", "Cut", "Cut", BuiltinAction::Cut, cx))
            .child(self.action_button("copy", "Copy", "Copy", BuiltinAction::Copy, cx))
            .child(
                ToolbarButton::new("paste", "Paste")
                    .tooltip("Paste")
                    .on_click(cx.listener(|this, _, _window, cx| this.paste(cx))),
            )
            .child(ToolbarSeparator)
            .child(
                ToolbarButton::new("style", "Style")
                    .tooltip("Paragraph style")
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.choose_block_style(window, cx);
                    })),
            )
            .child(self.toggle_button(
                "bold",
                "B",
                "Bold",
                ToggleCommand::Bold,
                Command::Builtin(BuiltinAction::ToggleBold),
                cx,
            ))
            .child(self.toggle_button(
                "italic",
                "I",
                "Italic",
                ToggleCommand::Italic,
                Command::Builtin(BuiltinAction::ToggleItalic),
                cx,
            ))
            .child(self.toggle_button(
                "underline",
                "U",
                "Underline",
                ToggleCommand::Underline,
                Command::Builtin(BuiltinAction::ToggleUnderline),
                cx,
            ))
            .child(self.toggle_button(
                "strikethrough",
                "S",
                "Strikethrough",
                ToggleCommand::Strikethrough,
                Command::Strikethrough,
                cx,
            ))
            .child(ToolbarSeparator)
            .child(self.toggle_button(
                "align-left",
                "Left",
                "Align left",
                ToggleCommand::AlignLeft,
                Command::Align(Alignment::Left),
                cx,
            ))
            .child(self.toggle_button(
                "align-center",
                "Center",
                "Center",
                ToggleCommand::AlignCenter,
                Command::Align(Alignment::Center),
                cx,
            ))
            .child(self.toggle_button(
                "align-right",
                "Right",
                "Align right",
                ToggleCommand::AlignRight,
                Command::Align(Alignment::Right),
                cx,
            ))
            .child(self.toggle_button(
                "align-justify",
                "Justify",
                "Justify",
                ToggleCommand::AlignJustify,
                Command::Align(Alignment::Justify),
                cx,
            ))
            .child(ToolbarSeparator)
            .child(
                ToolbarButton::new("outdent", "⇤")
                    .tooltip("Outdent")
                    .on_click(cx.listener(|this, _, _window, cx| this.run(Command::Outdent, cx))),
            )
            .child(
                ToolbarButton::new("indent", "⇥")
                    .tooltip("Indent")
                    .on_click(cx.listener(|this, _, _window, cx| this.run(Command::Indent, cx))),
            )
            .child(self.toggle_button(
                "ordered-list",
                "1.",
                "Numbered list",
                ToggleCommand::OrderedList,
                Command::OrderedList,
                cx,
            ))
            .child(self.toggle_button(
                "unordered-list",
                "•",
                "Bulleted list",
                ToggleCommand::UnorderedList,
                Command::UnorderedList,
                cx,
            ))
            .child(ToolbarSeparator)
            .child(
                ToolbarButton::new("font-name", "Font")
                    .tooltip("Font name")
                    .on_click(cx.listener(|this, _, window, cx| this.choose_font_name(window, cx))),
            )
            .child(
                ToolbarButton::new("font-size", "Size")
                    .tooltip("Font size")
                    .on_click(cx.listener(|this, _, window, cx| this.choose_font_size(window, cx))),
            )
            .child(
                ToolbarButton::new("text-color", "A")
                    .tooltip("Text color")
                    .text_color(rgb_color(self.text_color))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.choose_text_color(window, cx);
                    })),
            )
            .child(
                ToolbarButton::new("background-color", "▮")
                    .tooltip("Background color")
                    .text_color(rgb_color(self.background_color))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.choose_background_color(window, cx);
                    })),
            )
            .child(ToolbarSeparator)
            .child(
                ToolbarButton::new("link", "Link")
                    .tooltip("Create link")
                    .on_click(cx.listener(|this, _, window, cx| this.create_link(window, cx))),
            )
            .child(
                ToolbarButton::new("image", "Image")
                    .tooltip("Insert image")
                    .on_click(cx.listener(|this, _, window, cx| this.insert_image(window, cx))),
            )
            .child(
                ToolbarButton::new("html", "HTML")
                    .tooltip("Insert HTML")
                    .on_click(cx.listener(|this, _, window, cx| this.insert_html(window, cx))),
            )
    }

    fn render_view_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let active = self.controller.source().active();
        let zoom = self.controller.zoom();

        h_flex()
            .w_full()
            .items_center()
            .justify_between()
            .px(px(8.))
            .py(px(4.))
            .bg(theme.background)
            .border_b_1()
            .border_color(theme.border)
            .child(
                h_flex()
                    .gap(px(2.))
                    .child(
                        ToolbarButton::new("tab-normal", "Normal")
                            .selected(active == ViewTab::Normal)
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.select_tab(ViewTab::Normal, cx);
                            })),
                    )
                    .child(
                        ToolbarButton::new("tab-source", "Source")
                            .selected(active == ViewTab::Source)
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.select_tab(ViewTab::Source, cx);
                            })),
                    )
                    .when(active == ViewTab::Source, |this| {
                        this.child(ToolbarSeparator).child(
                            ToolbarButton::new("apply-source", "Apply Source")
                                .tooltip("Replace the document with this source")
                                .on_click(cx.listener(|this, _, _window, cx| {
                                    this.apply_source(cx);
                                })),
                        )
                    }),
            )
            .child(
                h_flex()
                    .gap(px(4.))
                    .items_center()
                    .child(
                        ToolbarButton::new("zoom-out", "−")
                            .tooltip("Zoom out")
                            .disabled(!zoom.can_zoom_out())
                            .on_click(cx.listener(|this, _, window, cx| this.zoom_out(window, cx))),
                    )
                    .child(div().w(px(120.)).child(Slider::new(&self.zoom_slider)))
                    .child(
                        ToolbarButton::new("zoom-in", "+")
                            .tooltip("Zoom in")
                            .disabled(!zoom.can_zoom_in())
                            .on_click(cx.listener(|this, _, window, cx| this.zoom_in(window, cx))),
                    )
                    .child(
                        div()
                            .text_size(px(12.))
                            .text_color(theme.muted_foreground)
                            .child(zoom.label()),
                    ),
            )
    }
}

fn rgb_color(color: HexColor) -> Hsla {
    rgb(color.to_u32()).into()
}

impl Focusable for HtmlEditor {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for HtmlEditor {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_window(window, cx);
        let theme = cx.theme().clone();
        let active = self.controller.source().active();

        v_flex()
            .size_full()
            .bg(theme.muted)
            .key_context(CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &menus::NewDocument, window, cx| {
                this.guarded(PendingAction::New, window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Open, window, cx| {
                this.guarded(PendingAction::Open, window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Save, window, cx| this.save(window, cx)))
            .on_action(cx.listener(|this, _: &menus::SaveAs, window, cx| {
                this.prompt_save_as(None, window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Undo, _, cx| {
                this.run_builtin(BuiltinAction::Undo, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Redo, _, cx| {
                this.run_builtin(BuiltinAction::Redo, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Cut, _, cx| {
                this.run_builtin(BuiltinAction::Cut, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Copy, _, cx| {
                this.run_builtin(BuiltinAction::Copy, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Paste, _, cx| this.paste(cx)))
            .on_action(cx.listener(|this, _: &menus::SelectAll, _, cx| {
                this.run_builtin(BuiltinAction::SelectAll, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Bold, _, cx| {
                this.run_builtin(BuiltinAction::ToggleBold, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Italic, _, cx| {
                this.run_builtin(BuiltinAction::ToggleItalic, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Underline, _, cx| {
                this.run_builtin(BuiltinAction::ToggleUnderline, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Strikethrough, _, cx| {
                this.run(Command::Strikethrough, cx);
            }))
            .on_action(cx.listener(|this, action: &menus::SetBlockStyle, _, cx| {
                this.run(Command::BlockStyle(action.0), cx);
            }))
            .on_action(cx.listener(|this, action: &menus::Align, _, cx| {
                this.run(Command::Align(action.0), cx);
            }))
            .on_action(cx.listener(|this, _: &menus::Indent, _, cx| this.run(Command::Indent, cx)))
            .on_action(cx.listener(|this, _: &menus::Outdent, _, cx| {
                this.run(Command::Outdent, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::OrderedList, _, cx| {
                this.run(Command::OrderedList, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::UnorderedList, _, cx| {
                this.run(Command::UnorderedList, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::InsertImage, window, cx| {
                this.insert_image(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::CreateLink, window, cx| {
                this.create_link(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::InsertHtml, window, cx| {
                this.insert_html(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ChooseFontName, window, cx| {
                this.choose_font_name(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ChooseFontSize, window, cx| {
                this.choose_font_size(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ChooseTextColor, window, cx| {
                this.choose_text_color(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ChooseBackgroundColor, window, cx| {
                this.choose_background_color(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ShowNormal, _, cx| {
                this.select_tab(ViewTab::Normal, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ShowSource, _, cx| {
                this.select_tab(ViewTab::Source, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ApplySource, _, cx| this.apply_source(cx)))
            .on_action(cx.listener(|this, _: &menus::ZoomIn, window, cx| this.zoom_in(window, cx)))
            .on_action(cx.listener(|this, _: &menus::ZoomOut, window, cx| {
                this.zoom_out(window, cx);
            }))
            .on_action(cx.listener(|this, _: &menus::ResetZoom, window, cx| {
                this.reset_zoom(window, cx);
            }))
            .child(
                TitleBar::new().child(div().flex().items_center().child(self.app_menu_bar.clone())),
            )
            .child(self.render_toolbar(cx))
            .child(self.render_view_bar(cx))
            .child(
                div()
                    .flex_1()
                    .min_h(px(0.))
                    .bg(theme.background)
                    .map(|this| match active {
                        ViewTab::Normal => this.child(self.webview.clone()),
                        ViewTab::Source => this.p(px(8.)).child(
                            Input::new(&self.source_input)
                                .h_full()
                                .w_full(),
                        ),
                    }),
            )
    }
}
