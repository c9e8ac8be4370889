//! Session context tying the components together.
//!
//! [`EditorSession`] is the single explicitly owned instance behind which
//! all process-wide editor state lives: the export snapshot (inside the
//! command layer) and the active error marker (inside the decoration
//! manager). It is created once at session start, wired into the host
//! through [`EditorPlatform`], and never reset.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::commands::{CommandLayer, SaveOutcome};
use crate::completion::suggest;
use crate::config::EditorConfig;
use crate::decorations::ErrorDecorationManager;
use crate::host::{EditorPlatform, HostEditor, HostError, KeyChord};
use crate::lexer::{Lexeme, classify};

pub struct EditorSession {
    config: EditorConfig,
    commands: CommandLayer,
    errors: Mutex<ErrorDecorationManager>,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Arc<Self> {
        let commands = CommandLayer::new(
            config.download_file_name.clone(),
            config.comment_prefix.clone(),
        );
        let errors = Mutex::new(ErrorDecorationManager::new(
            config.error_class_name.clone(),
            config.error_glyph_class_name.clone(),
        ));
        Arc::new(Self {
            config,
            commands,
            errors,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Wire the tokenizer, the completion provider, and both key chords
    /// into the hosting editor. Called once at session start.
    pub fn register<P: EditorPlatform>(self: &Arc<Self>, platform: &mut P) {
        let language_id = &self.config.language_id;

        fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
            classify(source).collect()
        }
        platform.register_tokenizer(language_id, Box::new(tokenize));

        platform.register_completion_provider(language_id, Box::new(suggest));

        let session = Arc::clone(self);
        platform.bind_key(
            KeyChord::SAVE,
            Box::new(move |host| session.save(host).map(|_| ())),
        );

        let session = Arc::clone(self);
        platform.bind_key(
            KeyChord::COMMENT,
            Box::new(move |host| session.toggle_comment(host)),
        );

        info!(language = %language_id, "editor session registered");
    }

    /// Conditional export-on-save (Ctrl/Cmd+S).
    pub fn save(&self, host: &mut dyn HostEditor) -> Result<SaveOutcome, HostError> {
        self.commands.save(host)
    }

    /// Comment the selection (Ctrl/Cmd+/).
    pub fn toggle_comment(&self, host: &mut dyn HostEditor) -> Result<(), HostError> {
        self.commands.toggle_comment(host)
    }

    /// Show the simulator-reported error site, superseding any prior one.
    pub fn show_error(
        &self,
        host: &mut dyn HostEditor,
        line: u32,
        column: u32,
    ) -> Result<(), HostError> {
        self.errors.lock().show_error(host, line, column)
    }

    /// Drop the error marker, if any.
    pub fn clear_error(&self, host: &mut dyn HostEditor) -> Result<(), HostError> {
        self.errors.lock().clear_error(host)
    }

    /// Line of the currently shown error, if any.
    pub fn active_error_line(&self) -> Option<u32> {
        self.errors.lock().active_line()
    }
}
