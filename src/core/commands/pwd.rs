use super::{Command, CommandError, CommandResult};
use crate::core::ShellState;

#[derive(Debug, Clone, Copy, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::line(state.cwd().display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwd() {
        let mut state = ShellState::new("/usr/local", None, None);
        let result = PwdCommand.execute(&[], &mut state).unwrap();
        assert_eq!(result.stdout, "/usr/local\n");
    }
}
