pub mod commands;
pub mod completion;
pub mod config;
pub mod decorations;
pub mod host;
pub mod keywords;
pub mod lexer;
pub mod logging;
pub mod session;

pub use commands::{CommandLayer, SaveOutcome};
pub use completion::{Suggestion, SuggestionKind, suggest, suggest_line};
pub use config::EditorConfig;
pub use decorations::ErrorDecorationManager;
pub use host::{
    Decoration, DecorationId, EditorPlatform, HostEditor, HostError, Key, KeyChord, Position,
    Selection,
};
pub use keywords::{KEYWORDS, is_keyword};
pub use lexer::{Lexeme, StyleTag, classify};
pub use session::EditorSession;
