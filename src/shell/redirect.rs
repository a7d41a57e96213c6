use std::path::PathBuf;

use thiserror::Error;
use tracing::trace;

/// Which output of a command a redirection captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Truncate,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub stream: Stream,
    pub mode: Mode,
    pub target: PathBuf,
}

impl Redirection {
    /// Recognize a redirection operator word.
    pub fn operator(token: &str) -> Option<(Stream, Mode)> {
        match token {
            ">" | "1>" => Some((Stream::Stdout, Mode::Truncate)),
            ">>" | "1>>" => Some((Stream::Stdout, Mode::Append)),
            "2>" => Some((Stream::Stderr, Mode::Truncate)),
            "2>>" => Some((Stream::Stderr, Mode::Append)),
            _ => None,
        }
    }
}

/// A tokenized line with its redirection taken off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    pub argv: Vec<String>,
    pub redirection: Option<Redirection>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedirectError {
    #[error("syntax error near unexpected token `newline'")]
    MissingTarget(String),
}

/// Separate the command words from a trailing redirection.
///
/// Operators are only looked for from the second word on. Every operator found
/// cuts `argv` right before itself and replaces any earlier redirection, so
/// with several operators the last one is the only one applied and the words
/// of the earlier ones stay in `argv`.
pub fn split(tokens: Vec<String>) -> Result<SplitLine, RedirectError> {
    let mut end = tokens.len();
    let mut redirection = None;

    for (index, token) in tokens.iter().enumerate().skip(1) {
        let Some((stream, mode)) = Redirection::operator(token) else {
            continue;
        };
        let target = tokens
            .get(index + 1)
            .ok_or_else(|| RedirectError::MissingTarget(token.clone()))?;

        if let Some(previous) = redirection.replace(Redirection {
            stream,
            mode,
            target: PathBuf::from(target),
        }) {
            trace!(?previous, "earlier redirection replaced");
        }
        end = index;
    }

    let mut argv = tokens;
    argv.truncate(end);
    Ok(SplitLine { argv, redirection })
}
