//! Splits a raw input line into words, resolving quotes and backslashes.
//!
//! The rules follow the POSIX shell for the common cases:
//!
//! * outside quotes a backslash makes the next character literal;
//! * inside single quotes every character is literal, backslash included;
//! * inside double quotes a backslash only disappears before a blank, a quote
//!   or another backslash, and is kept before anything else.
//!
//! Unbalanced quotes are not an error: whatever was collected is emitted.

use std::borrow::Cow;

/// Which kind of quoting the tokenizer is currently inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteState {
    #[default]
    Unquoted,
    SingleQuoted,
    DoubleQuoted,
}

/// Character-at-a-time tokenizer.
///
/// Feed it with [`Tokenizer::feed`] and collect the words with
/// [`Tokenizer::finish`]; [`tokenize`] does both for a whole line.
#[derive(Debug, Default)]
pub struct Tokenizer {
    state: QuoteState,
    escaped: bool,
    buffer: String,
    tokens: Vec<String>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QuoteState {
        self.state
    }

    /// True when the previous character was an escaping backslash.
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    pub fn feed(&mut self, c: char) {
        if self.escaped {
            self.escaped = false;
            if self.state == QuoteState::DoubleQuoted && !escapable_in_double_quotes(c) {
                self.buffer.push('\\');
            }
            self.buffer.push(c);
            return;
        }

        match (self.state, c) {
            (QuoteState::SingleQuoted, '\'') => self.state = QuoteState::Unquoted,
            (QuoteState::SingleQuoted, _) => self.buffer.push(c),

            (QuoteState::DoubleQuoted, '"') => self.state = QuoteState::Unquoted,
            (QuoteState::DoubleQuoted, '\\') => self.escaped = true,
            (QuoteState::DoubleQuoted, _) => self.buffer.push(c),

            (QuoteState::Unquoted, '\\') => self.escaped = true,
            (QuoteState::Unquoted, '\'') => self.state = QuoteState::SingleQuoted,
            (QuoteState::Unquoted, '"') => self.state = QuoteState::DoubleQuoted,
            (QuoteState::Unquoted, c) if is_blank(c) => self.flush(),
            (QuoteState::Unquoted, _) => self.buffer.push(c),
        }
    }

    /// Emit the last word, whatever quote state the line ended in.
    /// A dangling backslash is dropped.
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.tokens
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.tokens.push(std::mem::take(&mut self.buffer));
        }
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn escapable_in_double_quotes(c: char) -> bool {
    is_blank(c) || matches!(c, '\'' | '"' | '\\')
}

/// Split `line` into words. Empty and blank lines give no words.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::new();
    for c in line.chars() {
        tokenizer.feed(c);
    }
    tokenizer.finish()
}

/// Render a word so that [`tokenize`] reads it back unchanged.
pub fn quote(token: &str) -> Cow<'_, str> {
    let plain = !token.is_empty()
        && !token
            .chars()
            .any(|c| is_blank(c) || matches!(c, '\'' | '"' | '\\'));
    if plain {
        return Cow::Borrowed(token);
    }

    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('\'');
    for c in token.chars() {
        if c == '\'' {
            // close, escaped quote, reopen
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Quote every word and join them with single spaces.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
