//! In-memory mock of the hosting editor, shared by the integration suites.
//!
//! `MockEditor` implements the `HostEditor` capability trait over a plain
//! string buffer and records decorations, edits, and downloads so tests can
//! observe every side effect. `MockPlatform` implements `EditorPlatform`
//! and replays registered key chords against an editor.

#![allow(dead_code)]

use ram_editor_core::completion::Suggestion;
use ram_editor_core::host::{
    CompletionCallback, Decoration, DecorationId, EditorPlatform, HostEditor, HostError,
    KeyChord, KeyCommand, Position, Selection, Tokenizer,
};
use ram_editor_core::lexer::Lexeme;

struct MockModel {
    text: String,
    selection: Option<Selection>,
}

pub struct MockEditor {
    model: Option<MockModel>,
    decorations: Vec<(DecorationId, Decoration)>,
    next_decoration: u64,
    pub downloads: Vec<(String, String)>,
    pub edit_count: usize,
}

impl MockEditor {
    pub fn new(text: &str) -> Self {
        Self {
            model: Some(MockModel {
                text: text.to_owned(),
                selection: None,
            }),
            decorations: Vec::new(),
            next_decoration: 0,
            downloads: Vec::new(),
            edit_count: 0,
        }
    }

    /// An editor whose text model was never attached.
    pub fn detached() -> Self {
        Self {
            model: None,
            decorations: Vec::new(),
            next_decoration: 0,
            downloads: Vec::new(),
            edit_count: 0,
        }
    }

    pub fn select(&mut self, selection: Selection) {
        if let Some(model) = self.model.as_mut() {
            model.selection = Some(selection);
        }
    }

    /// Place a caret (empty selection) at `line`:`column`.
    pub fn place_caret(&mut self, line: u32, column: u32) {
        self.select(Selection::new(line, column, line, column));
    }

    pub fn text(&self) -> &str {
        self.model.as_ref().map(|m| m.text.as_str()).unwrap_or("")
    }

    pub fn set_text(&mut self, text: &str) {
        if let Some(model) = self.model.as_mut() {
            model.text = text.to_owned();
        }
    }

    pub fn decorations(&self) -> &[(DecorationId, Decoration)] {
        &self.decorations
    }

    fn model(&self) -> Result<&MockModel, HostError> {
        self.model.as_ref().ok_or(HostError::MissingModel)
    }

    /// Byte offset of a 1-based line/column address.
    fn offset_of(text: &str, line: u32, column: u32) -> usize {
        let mut offset = 0;
        for (idx, l) in text.split('\n').enumerate() {
            if idx + 1 == line as usize {
                let col = column.saturating_sub(1) as usize;
                let byte = l
                    .char_indices()
                    .nth(col)
                    .map(|(b, _)| b)
                    .unwrap_or(l.len());
                return offset + byte;
            }
            offset += l.len() + 1;
        }
        text.len()
    }
}

impl HostEditor for MockEditor {
    fn buffer(&self) -> Option<String> {
        self.model.as_ref().map(|m| m.text.clone())
    }

    fn selection(&self) -> Option<Selection> {
        self.model.as_ref().and_then(|m| m.selection)
    }

    fn line_max_column(&self, line: u32) -> Result<u32, HostError> {
        let model = self.model()?;
        let length = model
            .text
            .split('\n')
            .nth(line.saturating_sub(1) as usize)
            .map(|l| l.chars().count())
            .unwrap_or(0);
        Ok(length as u32 + 1)
    }

    fn read_range(&self, range: &Selection) -> Result<String, HostError> {
        let model = self.model()?;
        let start = Self::offset_of(&model.text, range.start_line, range.start_column);
        let end = Self::offset_of(&model.text, range.end_line, range.end_column);
        Ok(model.text[start..end].to_owned())
    }

    fn replace_range(&mut self, range: &Selection, text: &str) -> Result<(), HostError> {
        let model = self.model.as_mut().ok_or(HostError::MissingModel)?;
        let start = Self::offset_of(&model.text, range.start_line, range.start_column);
        let end = Self::offset_of(&model.text, range.end_line, range.end_column);
        model.text.replace_range(start..end, text);
        self.edit_count += 1;
        Ok(())
    }

    fn decorations_with_class(&self, class_name: &str) -> Result<Vec<DecorationId>, HostError> {
        self.model()?;
        Ok(self
            .decorations
            .iter()
            .filter(|(_, d)| d.class_name == class_name)
            .map(|(id, _)| id.clone())
            .collect())
    }

    fn remove_decorations(&mut self, ids: &[DecorationId]) -> Result<(), HostError> {
        self.model()?;
        self.decorations.retain(|(id, _)| !ids.contains(id));
        Ok(())
    }

    fn add_decoration(&mut self, decoration: Decoration) -> Result<DecorationId, HostError> {
        self.model()?;
        let id = DecorationId(format!("deco-{}", self.next_decoration));
        self.next_decoration += 1;
        self.decorations.push((id.clone(), decoration));
        Ok(id)
    }

    fn save_artifact(&mut self, file_name: &str, content: &str) {
        self.downloads.push((file_name.to_owned(), content.to_owned()));
    }
}

#[derive(Default)]
pub struct MockPlatform {
    tokenizer: Option<(String, Tokenizer)>,
    completion: Option<(String, CompletionCallback)>,
    keybindings: Vec<(KeyChord, KeyCommand)>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokenizer_language(&self) -> Option<&str> {
        self.tokenizer.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn completion_language(&self) -> Option<&str> {
        self.completion.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn bound_chords(&self) -> Vec<KeyChord> {
        self.keybindings.iter().map(|(chord, _)| *chord).collect()
    }

    /// Run the registered tokenizer over `source`.
    pub fn tokenize<'a>(&self, source: &'a str) -> Vec<Lexeme<'a>> {
        let (_, tokenizer) = self.tokenizer.as_ref().expect("no tokenizer registered");
        tokenizer(source)
    }

    /// Run the registered completion provider.
    pub fn complete(&self, buffer: &str, position: Position) -> Vec<Suggestion> {
        let (_, provider) = self.completion.as_ref().expect("no provider registered");
        provider(buffer, position)
    }

    /// Replay a key chord against `host`, as the real editor would.
    pub fn press(&self, chord: KeyChord, host: &mut dyn HostEditor) -> Result<(), HostError> {
        let (_, command) = self
            .keybindings
            .iter()
            .find(|(bound, _)| *bound == chord)
            .expect("chord not bound");
        command(host)
    }
}

impl EditorPlatform for MockPlatform {
    fn register_tokenizer(&mut self, language_id: &str, tokenizer: Tokenizer) {
        self.tokenizer = Some((language_id.to_owned(), tokenizer));
    }

    fn register_completion_provider(&mut self, language_id: &str, provider: CompletionCallback) {
        self.completion = Some((language_id.to_owned(), provider));
    }

    fn bind_key(&mut self, chord: KeyChord, command: KeyCommand) {
        self.keybindings.push((chord, command));
    }
}
