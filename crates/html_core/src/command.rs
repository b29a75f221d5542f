use std::path::Path;

use url::Url;

use crate::color::HexColor;
use crate::error::CommandError;
use crate::url_guess::guess_url;

/// Editing actions the engine implements natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuiltinAction {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    SelectAll,
}

impl BuiltinAction {
    /// Actions whose enabled state is mirrored onto the toolbar.
    pub const TRACKED: [BuiltinAction; 5] = [
        BuiltinAction::Undo,
        BuiltinAction::Redo,
        BuiltinAction::Cut,
        BuiltinAction::Copy,
        BuiltinAction::Paste,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinAction::Undo => "undo",
            BuiltinAction::Redo => "redo",
            BuiltinAction::Cut => "cut",
            BuiltinAction::Copy => "copy",
            BuiltinAction::Paste => "paste",
            BuiltinAction::ToggleBold => "bold",
            BuiltinAction::ToggleItalic => "italic",
            BuiltinAction::ToggleUnderline => "underline",
            BuiltinAction::SelectAll => "selectAll",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            BuiltinAction::Undo,
            BuiltinAction::Redo,
            BuiltinAction::Cut,
            BuiltinAction::Copy,
            BuiltinAction::Paste,
            BuiltinAction::ToggleBold,
            BuiltinAction::ToggleItalic,
            BuiltinAction::ToggleUnderline,
            BuiltinAction::SelectAll,
        ]
        .into_iter()
        .find(|action| action.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Paragraph,
    Heading(u8),
    Preformatted,
    Address,
}

impl BlockStyle {
    pub const ALL: [BlockStyle; 9] = [
        BlockStyle::Paragraph,
        BlockStyle::Heading(1),
        BlockStyle::Heading(2),
        BlockStyle::Heading(3),
        BlockStyle::Heading(4),
        BlockStyle::Heading(5),
        BlockStyle::Heading(6),
        BlockStyle::Preformatted,
        BlockStyle::Address,
    ];

    pub fn tag(self) -> String {
        match self {
            BlockStyle::Paragraph => "p".to_string(),
            BlockStyle::Heading(level) => format!("h{}", level.clamp(1, 6)),
            BlockStyle::Preformatted => "pre".to_string(),
            BlockStyle::Address => "address".to_string(),
        }
    }

    pub fn label(self) -> String {
        match self {
            BlockStyle::Paragraph => "Paragraph".to_string(),
            BlockStyle::Heading(level) => format!("Heading {}", level.clamp(1, 6)),
            BlockStyle::Preformatted => "Preformatted".to_string(),
            BlockStyle::Address => "Address".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn command_name(self) -> &'static str {
        match self {
            Alignment::Left => "justifyLeft",
            Alignment::Center => "justifyCenter",
            Alignment::Right => "justifyRight",
            Alignment::Justify => "justifyFull",
        }
    }
}

/// The seven legacy HTML font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    XxSmall,
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 7] = [
        FontSize::XxSmall,
        FontSize::XSmall,
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::XLarge,
        FontSize::XxLarge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontSize::XxSmall => "xx-small",
            FontSize::XSmall => "x-small",
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::XLarge => "x-large",
            FontSize::XxLarge => "xx-large",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.label() == label)
    }

    /// The legacy `fontSize` argument, where 3 is the default size.
    ///
    /// The scale has nothing below x-small, so xx-small shares its 1.
    pub fn value(self) -> i64 {
        match self {
            FontSize::XxSmall | FontSize::XSmall => 1,
            FontSize::Small => 2,
            FontSize::Medium => 3,
            FontSize::Large => 4,
            FontSize::XLarge => 5,
            FontSize::XxLarge => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandArg {
    Text(String),
    Number(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    BuiltinAction(BuiltinAction),
    Script,
}

/// What a single dispatch sends to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub kind: CommandKind,
    pub argument: Option<CommandArg>,
}

/// Every toolbar and menu operation that edits the document.
///
/// Variants carrying user input are built through the validating
/// constructors (`Command::create_link`, `Command::text_color`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Builtin(BuiltinAction),
    BlockStyle(BlockStyle),
    Strikethrough,
    Align(Alignment),
    Indent,
    Outdent,
    OrderedList,
    UnorderedList,
    FontName(String),
    FontSize(FontSize),
    TextColor(HexColor),
    BackgroundColor(HexColor),
    InsertImage(Url),
    CreateLink(String),
    InsertHtml(String),
    InsertText(String),
}

impl Command {
    pub fn create_link(input: &str) -> Result<Self, CommandError> {
        if input.trim().is_empty() {
            return Err(CommandError::Empty("link"));
        }
        guess_url(input)
            .into_valid()
            .map(Command::CreateLink)
            .ok_or_else(|| CommandError::InvalidUrl(input.to_string()))
    }

    pub fn insert_image(path: &Path) -> Result<Self, CommandError> {
        if !path.is_file() {
            return Err(CommandError::MissingImage(path.to_path_buf()));
        }
        let absolute = std::path::absolute(path)
            .map_err(|_| CommandError::MissingImage(path.to_path_buf()))?;
        Url::from_file_path(&absolute)
            .map(Command::InsertImage)
            .map_err(|_| CommandError::InvalidUrl(absolute.display().to_string()))
    }

    pub fn insert_html(html: impl Into<String>) -> Result<Self, CommandError> {
        let html = html.into();
        if html.trim().is_empty() {
            return Err(CommandError::Empty("HTML snippet"));
        }
        Ok(Command::InsertHtml(html))
    }

    pub fn font_name(family: &str) -> Result<Self, CommandError> {
        let family = family.trim();
        if family.is_empty() {
            return Err(CommandError::Empty("font name"));
        }
        Ok(Command::FontName(family.to_string()))
    }

    pub fn text_color(input: &str) -> Result<Self, CommandError> {
        HexColor::parse(input).map(Command::TextColor)
    }

    pub fn background_color(input: &str) -> Result<Self, CommandError> {
        HexColor::parse(input).map(Command::BackgroundColor)
    }

    pub fn descriptor(&self) -> CommandDescriptor {
        let script = |name: &'static str, argument: Option<CommandArg>| CommandDescriptor {
            name,
            kind: CommandKind::Script,
            argument,
        };
        let text = |value: String| Some(CommandArg::Text(value));

        match self {
            Command::Builtin(action) => CommandDescriptor {
                name: action.name(),
                kind: CommandKind::BuiltinAction(*action),
                argument: None,
            },
            Command::BlockStyle(style) => script("formatBlock", text(style.tag())),
            Command::Strikethrough => script("strikeThrough", None),
            Command::Align(alignment) => script(alignment.command_name(), None),
            Command::Indent => script("indent", None),
            Command::Outdent => script("outdent", None),
            Command::OrderedList => script("insertOrderedList", None),
            Command::UnorderedList => script("insertUnorderedList", None),
            Command::FontName(family) => script("fontName", text(family.clone())),
            Command::FontSize(size) => script("fontSize", Some(CommandArg::Number(size.value()))),
            Command::TextColor(color) => script("foreColor", text(color.to_string())),
            Command::BackgroundColor(color) => script("hiliteColor", text(color.to_string())),
            Command::InsertImage(url) => script("insertImage", text(url.to_string())),
            Command::CreateLink(url) => script("createLink", text(url.clone())),
            Command::InsertHtml(html) => script("insertHTML", text(html.clone())),
            Command::InsertText(value) => script("insertText", text(value.clone())),
        }
    }
}
