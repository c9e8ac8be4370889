//! Lexical classifier driving syntax highlighting.
//!
//! The classifier is a stateless, single-pass scanner: at each position it
//! tries an ordered list of match rules and emits one [`Lexeme`] for the
//! first rule that claims a prefix. Rule order is a correctness requirement,
//! not a tuning knob — the immediate-literal rule has to run before the
//! plain-number rule or `=42` would be split at the `=`.
//!
//! Characters no rule claims (whitespace, stray punctuation) are skipped
//! without producing a lexeme, so the scan is total: there is no "invalid
//! token" outcome.

use crate::keywords::is_keyword;

/// Style tag attached to a classified span, consumed by the host theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Keyword,
    Identifier,
    Number,
    Pointer,
    Comment,
}

/// A classified, contiguous span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// Byte offset of the span within the scanned text.
    pub start: usize,
    pub text: &'a str,
    pub tag: StyleTag,
}

/// One entry of the ordered rule table: given the unscanned remainder,
/// either claim a prefix (byte length plus tag) or decline.
type Rule = fn(&str) -> Option<(usize, StyleTag)>;

/// The rule table, in match-precedence order.
const RULES: [Rule; 6] = [
    match_word,
    match_immediate,
    match_number,
    match_star,
    match_comment,
    match_colon,
];

/// Lazily classify `source` into non-overlapping lexemes, left to right.
pub fn classify(source: &str) -> Classify<'_> {
    Classify { source, pos: 0 }
}

/// Iterator returned by [`classify`].
#[derive(Debug, Clone)]
pub struct Classify<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for Classify<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Lexeme<'a>> {
        while self.pos < self.source.len() {
            let rest = &self.source[self.pos..];
            if let Some((len, tag)) = RULES.iter().find_map(|rule| rule(rest)) {
                let lexeme = Lexeme {
                    start: self.pos,
                    text: &rest[..len],
                    tag,
                };
                self.pos += len;
                return Some(lexeme);
            }
            // Unclaimed character: advance past it without tagging.
            let width = rest.chars().next().map_or(1, char::len_utf8);
            self.pos += width;
        }
        None
    }
}

/// `@?[A-Za-z][A-Za-z0-9_$]*` — keyword or identifier, resolved by
/// case-insensitive membership in the keyword set. The optional `@` sigil
/// is part of the lexeme and keeps it out of the keyword set.
fn match_word(rest: &str) -> Option<(usize, StyleTag)> {
    let bytes = rest.as_bytes();
    let mut len = 0;
    if bytes.first() == Some(&b'@') {
        len += 1;
    }
    if !bytes.get(len).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    len += 1;
    while bytes
        .get(len)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'$')
    {
        len += 1;
    }
    let tag = if is_keyword(&rest[..len]) {
        StyleTag::Keyword
    } else {
        StyleTag::Identifier
    };
    Some((len, tag))
}

/// `=[0-9]+` — immediate numeric literal; the `=` belongs to the lexeme.
fn match_immediate(rest: &str) -> Option<(usize, StyleTag)> {
    let digits = rest.strip_prefix('=')?;
    let (len, _) = match_number(digits)?;
    Some((1 + len, StyleTag::Number))
}

/// `[0-9]+` — plain numeric literal.
fn match_number(rest: &str) -> Option<(usize, StyleTag)> {
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    (len > 0).then_some((len, StyleTag::Number))
}

/// `*` — indirection sigil.
fn match_star(rest: &str) -> Option<(usize, StyleTag)> {
    rest.starts_with('*').then_some((1, StyleTag::Pointer))
}

/// `#` through end of line, newline exclusive.
fn match_comment(rest: &str) -> Option<(usize, StyleTag)> {
    if !rest.starts_with('#') {
        return None;
    }
    let len = rest.find('\n').unwrap_or(rest.len());
    Some((len, StyleTag::Comment))
}

/// `:` — label terminator, styled like the indirection sigil.
fn match_colon(rest: &str) -> Option<(usize, StyleTag)> {
    rest.starts_with(':').then_some((1, StyleTag::Pointer))
}
