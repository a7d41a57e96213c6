use super::{Builtin, Command, CommandError, CommandResult};
use crate::core::ShellState;
use crate::path::find_executable;

/// `type name...`: say how each name would be run.
///
/// Found names are reported on stdout and misses on stderr, one line each,
/// in argument order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCommand;

impl TypeCommand {
    fn describe(name: &str, state: &ShellState) -> Result<String, CommandError> {
        if Builtin::lookup(name).is_some() {
            return Ok(format!("{} is a shell builtin", name));
        }
        match find_executable(name, state) {
            Some(path) => Ok(format!("{} is {}", name, path.display())),
            None => Err(CommandError::NotFound(name.to_string())),
        }
    }
}

impl Command for TypeCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandResult, CommandError> {
        let mut result = CommandResult::empty();
        for name in args {
            match Self::describe(name, state) {
                Ok(line) => result.stdout.push_str(&CommandResult::line(line).stdout),
                Err(err) => result.stderr.push_str(&CommandResult::error(err).stderr),
            }
        }
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn type_of(state: &mut ShellState, names: &[&str]) -> CommandResult {
        let args: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        TypeCommand.execute(&args, state).unwrap()
    }

    fn state_with_tool() -> (ShellState, TempDir) {
        let bin = TempDir::new().unwrap();
        let tool = bin.path().join("mytool");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        let state = ShellState::new(bin.path(), Some(bin.path().as_os_str().to_owned()), None);
        (state, bin)
    }

    #[test]
    fn test_type_builtin() {
        let (mut state, _bin) = state_with_tool();
        assert_eq!(type_of(&mut state, &["exit"]).stdout, "exit is a shell builtin\n");
        assert_eq!(type_of(&mut state, &["TYPE"]).stdout, "TYPE is a shell builtin\n");
    }

    #[test]
    fn test_type_external() {
        let (mut state, bin) = state_with_tool();
        let result = type_of(&mut state, &["mytool"]);
        assert_eq!(
            result.stdout,
            format!("mytool is {}\n", bin.path().join("mytool").display())
        );
        assert_eq!(result.stderr, "");
    }

    #[test]
    fn test_type_not_found() {
        let (mut state, _bin) = state_with_tool();
        let result = type_of(&mut state, &["doesnotexist123"]);
        assert_eq!(result.stdout, "");
        assert_eq!(result.stderr, "doesnotexist123: not found\n");
    }

    #[test]
    fn test_type_several_names() {
        let (mut state, _bin) = state_with_tool();
        let result = type_of(&mut state, &["echo", "nope", "cd"]);
        assert_eq!(result.stdout, "echo is a shell builtin\ncd is a shell builtin\n");
        assert_eq!(result.stderr, "nope: not found\n");

        assert_eq!(type_of(&mut state, &[]), CommandResult::empty());
    }
}
