use std::process::{Command, Output, Stdio};

use tracing::debug;

use super::ProcessError;
use crate::core::commands::{normalize_output, CommandResult};
use crate::core::ShellState;
use crate::path::find_executable;

/// Runs programs found on `PATH` and captures what they print.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Resolve and run `name`, blocking until it exits.
    ///
    /// A name that cannot be resolved is not an error: the result carries
    /// `<name>: command not found` on stdout.
    pub fn run(
        &self,
        name: &str,
        args: &[String],
        state: &ShellState,
    ) -> Result<CommandResult, ProcessError> {
        let Some(program) = find_executable(name, state) else {
            debug!(name, "command not found");
            return Ok(CommandResult::line(format!("{}: command not found", name)));
        };

        debug!(name, program = %program.display(), ?args, "spawning");
        let mut command = Command::new(&program);
        command
            .args(args)
            .current_dir(state.cwd())
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(name);
        }

        let output = command.output().map_err(|source| ProcessError::Spawn {
            name: name.to_string(),
            source,
        })?;
        debug!(name, status = %output.status, "process exited");

        Ok(Self::collect(name, output))
    }

    fn collect(name: &str, output: Output) -> CommandResult {
        let stdout = normalize_output(&String::from_utf8_lossy(&output.stdout));
        let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() && stderr.is_empty() {
            let err = ProcessError::Exited {
                name: name.to_string(),
                status: output.status,
            };
            stderr = normalize_output(&err.to_string());
        }

        CommandResult {
            stdout,
            stderr,
            terminate: false,
        }
    }
}
