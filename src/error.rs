use thiserror::Error;

/// Errors that end the shell process.
///
/// Everything a single command can get wrong is turned into text on the
/// terminal instead; only failing to read input (or to set up the line
/// editor) reaches this type.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
