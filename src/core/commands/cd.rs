use std::fs;
use std::io;

use tracing::debug;

use super::{Command, CommandError, CommandResult};
use crate::core::ShellState;
use crate::path::{normalize, PathExpander};

/// `cd [path]`: with no argument, go home.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandResult, CommandError> {
        let path_str = args.first().map(|s| s.as_str()).unwrap_or("~");
        let expanded_path = PathExpander::new(state.home())
            .expand(path_str)
            .map_err(|_| CommandError::InvalidHome)?;

        let target = normalize(&state.resolve(expanded_path));
        match fs::metadata(&target) {
            Ok(metadata) if metadata.is_dir() => {
                debug!(from = %state.cwd().display(), to = %target.display(), "cd");
                state.set_cwd(target);
                Ok(CommandResult::empty())
            }
            Ok(_) => Err(CommandError::NotADirectory(path_str.to_string())),
            Err(err) => Err(lookup_error(path_str, &err)),
        }
    }
}

fn lookup_error(path: &str, err: &io::Error) -> CommandError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => CommandError::PermissionDenied(path.to_string()),
        _ => CommandError::NoSuchDirectory(path.to_string()),
    }
}
