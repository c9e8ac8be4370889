//! Context-sensitive keyword completion.
//!
//! The suggestion set is always the full keyword list; the only context
//! consulted is the single character behind the cursor, which decides the
//! casing of the suggestions. Completion is offered unconditionally — no
//! partial-word matching, no comment or string detection.

use crate::host::Position;
use crate::keywords::KEYWORDS;

/// Category reported to the host for every suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Keyword,
}

/// One ranked completion entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub kind: SuggestionKind,
    /// Text inserted on accept; always equals the label.
    pub insert_text: String,
}

impl Suggestion {
    fn keyword(label: String) -> Self {
        Self {
            insert_text: label.clone(),
            label,
            kind: SuggestionKind::Keyword,
        }
    }
}

/// Suggestions for a cursor in `buffer` at `position` (1-based).
///
/// This is the shape the host's completion callback receives: the full
/// buffer text plus the cursor. A position past the end of the buffer is
/// not an error; the probe simply misses and the default casing applies.
pub fn suggest(buffer: &str, position: Position) -> Vec<Suggestion> {
    let line = position
        .line
        .checked_sub(1)
        .and_then(|idx| buffer.split('\n').nth(idx as usize))
        .unwrap_or("");
    suggest_line(line, position.column)
}

/// Suggestions for a cursor at 1-based `column` within one buffer line.
///
/// The probed character sits two positions behind the reported column,
/// because the column already points past the just-typed character. A
/// lowercase ASCII probe lowers the whole list; anything else — including
/// an out-of-bounds probe at the start of a line — yields the canonical
/// uppercase list.
pub fn suggest_line(line: &str, column: u32) -> Vec<Suggestion> {
    let lowercase = column
        .checked_sub(2)
        .and_then(|idx| line.chars().nth(idx as usize))
        .is_some_and(|c| c.is_ascii_lowercase());

    KEYWORDS
        .iter()
        .map(|kw| {
            let label = if lowercase {
                kw.to_ascii_lowercase()
            } else {
                (*kw).to_owned()
            };
            Suggestion::keyword(label)
        })
        .collect()
}
