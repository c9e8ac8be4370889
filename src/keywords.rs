//! The RAM instruction set used for highlighting and completion.
//!
//! The list is a process-wide constant: matching is case-insensitive, but
//! the canonical (display) spelling is upper case. Several mnemonics are
//! aliases for the same instruction (`JMP`/`JUMP`, `JZ`/`JZERO`,
//! `JGZ`/`JGTZ`, `READ`/`INPUT`, `WRITE`/`OUTPUT`); the editor layer does
//! not care, it only classifies and suggests.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Every opcode of the RAM assembly dialect, in canonical order.
pub const KEYWORDS: [&str; 17] = [
    "ADD", "SUB", "MUL", "DIV", "JUMP", "JMP", "JZ", "JZERO", "JGZ", "JGTZ", "LOAD", "STORE",
    "INPUT", "READ", "WRITE", "OUTPUT", "HALT",
];

static KEYWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Case-insensitive membership test against [`KEYWORDS`].
///
/// The whole word must match; a keyword with a label sigil or any other
/// adornment attached is not a keyword.
pub fn is_keyword(word: &str) -> bool {
    // Cheap length gate before allocating the uppercase copy.
    if word.is_empty() || word.len() > 6 {
        return false;
    }
    KEYWORD_SET.contains(word.to_ascii_uppercase().as_str())
}
