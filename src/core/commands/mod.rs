use std::fmt;

use thiserror::Error;
use tracing::debug;

mod cd;
mod echo;
mod exit;
mod pwd;
mod type_cmd;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_cmd::TypeCommand;

use crate::core::ShellState;
use crate::process::{ProcessError, ProcessExecutor};
use crate::shell::tokenizer;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cd: invalid home")]
    InvalidHome,
    #[error("cd: {0}: No such file or directory")]
    NoSuchDirectory(String),
    #[error("cd: {0}: Not a directory")]
    NotADirectory(String),
    #[error("cd: {0}: Permission denied")]
    PermissionDenied(String),
    #[error("{0}: not found")]
    NotFound(String),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// What one dispatched line produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    /// Set by `exit`: the shell should stop after routing this result.
    pub terminate: bool,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single line of output, newline-terminated exactly once.
    pub fn line(text: impl AsRef<str>) -> Self {
        Self {
            stdout: format!("{}\n", text.as_ref().trim_end_matches('\n')),
            ..Self::default()
        }
    }

    pub fn error(err: impl fmt::Display) -> Self {
        Self {
            stderr: format!("{}\n", err.to_string().trim_end_matches('\n')),
            ..Self::default()
        }
    }

    pub fn terminate() -> Self {
        Self {
            terminate: true,
            ..Self::default()
        }
    }
}

/// Give non-empty text exactly one trailing newline. Empty text stays empty.
pub fn normalize_output(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{}\n", text.trim_end_matches('\n'))
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandResult, CommandError>;
}

/// Commands the shell implements itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Echo,
    Type,
    Pwd,
    Cd,
}

impl Builtin {
    /// Case-insensitive: `ECHO` and `Echo` are the echo builtin.
    pub fn lookup(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "EXIT" => Some(Builtin::Exit),
            "ECHO" => Some(Builtin::Echo),
            "TYPE" => Some(Builtin::Type),
            "PWD" => Some(Builtin::Pwd),
            "CD" => Some(Builtin::Cd),
            _ => None,
        }
    }
}

impl Command for Builtin {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Builtin::Exit => ExitCommand.execute(args, state),
            Builtin::Echo => EchoCommand.execute(args, state),
            Builtin::Type => TypeCommand.execute(args, state),
            Builtin::Pwd => PwdCommand.execute(args, state),
            Builtin::Cd => CdCommand.execute(args, state),
        }
    }
}

/// The first word of a line, classified once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Builtin(Builtin),
    External(String),
}

impl Invocation {
    pub fn resolve(name: &str) -> Self {
        match Builtin::lookup(name) {
            Some(builtin) => Invocation::Builtin(builtin),
            None => Invocation::External(name.to_string()),
        }
    }
}

/// Resolves a command line and runs it, turning every failure into text.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(&self, argv: &[String], state: &mut ShellState) -> CommandResult {
        let Some((name, args)) = argv.split_first() else {
            return CommandResult::empty();
        };

        let invocation = Invocation::resolve(name);
        debug!(?invocation, argv = %tokenizer::join(argv), "executing");

        let result = match invocation {
            Invocation::Builtin(builtin) => builtin.execute(args, state),
            Invocation::External(name) => self
                .process_executor
                .run(&name, args, state)
                .map_err(CommandError::from),
        };

        result.unwrap_or_else(|err| {
            debug!(%err, "command failed");
            CommandResult::error(err)
        })
    }
}
