//! Capability traits abstracting the hosting editor.
//!
//! The core never owns editor state: the buffer, the selection, and the
//! decoration store all live in the host (Monaco in the shipped product).
//! Everything the core needs from it is captured by two narrow traits so
//! the whole crate runs against an in-memory mock in tests:
//!
//! - [`HostEditor`] — per-invocation access to one editor instance
//!   (buffer/selection reads, atomic range replacement, decoration
//!   query/remove/apply, artifact download).
//! - [`EditorPlatform`] — one-time registration surface used at session
//!   start (tokenizer, completion provider, key bindings).
//!
//! Lines and columns are 1-based throughout, matching the host's
//! addressing.

use crate::completion::Suggestion;
use crate::lexer::Lexeme;

use thiserror::Error;

/// The single fatal failure mode of the host boundary: an editor with no
/// attached text model. There is no meaningful recovery, so it propagates.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    #[error("editor has no active text model")]
    MissingModel,
}

/// A cursor position, 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A selection range, closed over lines, 1-based, end-exclusive in columns
/// the same way the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Selection {
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A caret with no extent selects nothing.
    pub fn is_empty(&self) -> bool {
        self.start_line == self.end_line && self.start_column == self.end_column
    }
}

/// Handle to one applied decoration, issued by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecorationId(pub String);

/// A visual marker overlaid on editor content, addressed by style class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub line: u32,
    /// Whole-line highlight rather than a column span.
    pub whole_line: bool,
    pub class_name: String,
    /// Optional margin-glyph style class shown next to the line.
    pub glyph_class_name: Option<String>,
}

/// Per-invocation capabilities of one hosted editor instance.
pub trait HostEditor {
    /// Full buffer text, or `None` when no model is attached.
    fn buffer(&self) -> Option<String>;

    /// Current selection, or `None` when no model is attached.
    fn selection(&self) -> Option<Selection>;

    /// Highest valid column on `line` (one past the last character).
    fn line_max_column(&self, line: u32) -> Result<u32, HostError>;

    /// Text spanned by `range`.
    fn read_range(&self, range: &Selection) -> Result<String, HostError>;

    /// Replace `range` with `text` in one atomic edit.
    fn replace_range(&mut self, range: &Selection, text: &str) -> Result<(), HostError>;

    /// Ids of every active decoration carrying `class_name`.
    fn decorations_with_class(&self, class_name: &str) -> Result<Vec<DecorationId>, HostError>;

    /// Remove the given decorations. Unknown ids are ignored.
    fn remove_decorations(&mut self, ids: &[DecorationId]) -> Result<(), HostError>;

    /// Apply one decoration and return its handle.
    fn add_decoration(&mut self, decoration: Decoration) -> Result<DecorationId, HostError>;

    /// Offer `content` to the user as a downloadable file named `file_name`.
    fn save_artifact(&mut self, file_name: &str, content: &str);
}

/// Tokenizer callback registered for a language id.
pub type Tokenizer = Box<dyn for<'a> Fn(&'a str) -> Vec<Lexeme<'a>> + Send + Sync>;

/// Completion callback: full buffer text plus cursor position.
pub type CompletionCallback = Box<dyn Fn(&str, Position) -> Vec<Suggestion> + Send + Sync>;

/// Key-chord callback, handed the invoking editor by the host.
pub type KeyCommand = Box<dyn Fn(&mut dyn HostEditor) -> Result<(), HostError> + Send + Sync>;

/// The keys the core binds commands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    KeyS,
    Slash,
}

/// A key chord, Ctrl on Linux/Windows hosts and Cmd on macOS hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl_cmd: bool,
    pub key: Key,
}

impl KeyChord {
    /// Ctrl/Cmd+S — conditional export.
    pub const SAVE: KeyChord = KeyChord {
        ctrl_cmd: true,
        key: Key::KeyS,
    };

    /// Ctrl/Cmd+/ — comment the selection.
    pub const COMMENT: KeyChord = KeyChord {
        ctrl_cmd: true,
        key: Key::Slash,
    };
}

/// Session-start registration surface of the hosting editor.
pub trait EditorPlatform {
    fn register_tokenizer(&mut self, language_id: &str, tokenizer: Tokenizer);

    fn register_completion_provider(&mut self, language_id: &str, provider: CompletionCallback);

    fn bind_key(&mut self, chord: KeyChord, command: KeyCommand);
}
