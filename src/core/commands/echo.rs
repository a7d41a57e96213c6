use super::{Command, CommandError, CommandResult};
use crate::core::ShellState;

/// `echo [words...]`: the words joined by single spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::line(args.join(" ")))
    }
}
