use super::{Command, CommandError, CommandResult};
use crate::core::ShellState;

/// `exit`: arguments are ignored and the shell always leaves with status 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut ShellState,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::terminate())
    }
}
