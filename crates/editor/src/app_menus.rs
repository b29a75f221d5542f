use gpui::{Action, App, Entity, KeyBinding, Menu, MenuItem, SharedString, Window, actions};
use gpui_component::menu::AppMenuBar;
use manos_html_core::{Alignment, BlockStyle};

pub const CONTEXT: &str = "HtmlEditor";

actions!(
    html_editor,
    [
        NewDocument,
        Open,
        Save,
        SaveAs,
        Quit,
        Undo,
        Redo,
        Cut,
        Copy,
        Paste,
        SelectAll,
        Bold,
        Italic,
        Underline,
        Strikethrough,
        Indent,
        Outdent,
        OrderedList,
        UnorderedList,
        InsertImage,
        CreateLink,
        InsertHtml,
        ChooseFontName,
        ChooseFontSize,
        ChooseTextColor,
        ChooseBackgroundColor,
        ShowNormal,
        ShowSource,
        ApplySource,
        ZoomIn,
        ZoomOut,
        ResetZoom,
    ]
);

#[derive(Action, Clone, PartialEq)]
#[action(namespace = html_editor, no_json)]
pub struct SetBlockStyle(pub BlockStyle);

#[derive(Action, Clone, PartialEq)]
#[action(namespace = html_editor, no_json)]
pub struct Align(pub Alignment);

pub fn init(
    title: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut App,
) -> Entity<AppMenuBar> {
    cx.bind_keys([
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-n", NewDocument, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-n", NewDocument, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-o", Open, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-o", Open, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-s", Save, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-s", Save, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-shift-s", SaveAs, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-shift-s", SaveAs, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-q", Quit, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-q", Quit, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-k", CreateLink, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-k", CreateLink, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-shift-i", InsertImage, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-shift-i", InsertImage, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-=", ZoomIn, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-=", ZoomIn, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd--", ZoomOut, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl--", ZoomOut, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-0", ResetZoom, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-0", ResetZoom, Some(CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-enter", ApplySource, Some(CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-enter", ApplySource, Some(CONTEXT)),
    ]);

    update_app_menu(title.into(), cx);
    AppMenuBar::new(window, cx)
}

fn update_app_menu(title: SharedString, cx: &mut App) {
    cx.set_menus(vec![
        Menu {
            name: title,
            items: vec![
                MenuItem::action("New", NewDocument),
                MenuItem::action("Open...", Open),
                MenuItem::action("Save", Save),
                MenuItem::action("Save As...", SaveAs),
                MenuItem::Separator,
                MenuItem::action("Exit", Quit),
            ],
        },
        Menu {
            name: "Edit".into(),
            items: vec![
                MenuItem::action("Undo", Undo),
                MenuItem::action("Redo", Redo),
                MenuItem::separator(),
                MenuItem::action("Cut", Cut),
                MenuItem::action("Copy", Copy),
                MenuItem::action("Paste", Paste),
                MenuItem::separator(),
                MenuItem::action("Select All", SelectAll),
            ],
        },
        Menu {
            name: "Insert".into(),
            items: vec![
                MenuItem::action("Image...", InsertImage),
                MenuItem::action("Link...", CreateLink),
                MenuItem::action("HTML...", InsertHtml),
            ],
        },
        Menu {
            name: "Format".into(),
            items: vec![
                MenuItem::action("Bold", Bold),
                MenuItem::action("Italic", Italic),
                MenuItem::action("Underline", Underline),
                MenuItem::action("Strikethrough", Strikethrough),
                MenuItem::separator(),
                style_menu(),
                align_menu(),
                MenuItem::separator(),
                MenuItem::action("Indent", Indent),
                MenuItem::action("Outdent", Outdent),
                MenuItem::action("Numbered List", OrderedList),
                MenuItem::action("Bulleted List", UnorderedList),
                MenuItem::separator(),
                MenuItem::action("Font Name...", ChooseFontName),
                MenuItem::action("Font Size...", ChooseFontSize),
                MenuItem::action("Text Color...", ChooseTextColor),
                MenuItem::action("Background Color...", ChooseBackgroundColor),
            ],
        },
        Menu {
            name: "View".into(),
            items: vec![
                MenuItem::action("Normal", ShowNormal),
                MenuItem::action("Source", ShowSource),
                MenuItem::action("Apply Source", ApplySource),
                MenuItem::separator(),
                MenuItem::action("Zoom In", ZoomIn),
                MenuItem::action("Zoom Out", ZoomOut),
                MenuItem::action("Actual Size", ResetZoom),
            ],
        },
    ]);
}

fn style_menu() -> MenuItem {
    MenuItem::Submenu(Menu {
        name: "Style".into(),
        items: BlockStyle::ALL
            .into_iter()
            .map(|style| MenuItem::action(style.label(), SetBlockStyle(style)))
            .collect(),
    })
}

fn align_menu() -> MenuItem {
    MenuItem::Submenu(Menu {
        name: "Align".into(),
        items: vec![
            MenuItem::action("Left", Align(Alignment::Left)),
            MenuItem::action("Center", Align(Alignment::Center)),
            MenuItem::action("Right", Align(Alignment::Right)),
            MenuItem::action("Justify", Align(Alignment::Justify)),
        ],
    })
}
