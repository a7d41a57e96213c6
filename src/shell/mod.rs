use std::io::{self, IsTerminal, Write};
use std::ops::ControlFlow;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

mod executor;
pub mod output;
pub mod redirect;
pub mod tokenizer;

pub use executor::LineDispatcher;
pub use output::OutputRouter;

use crate::{core::ShellState, error::ShellError};

pub const PROMPT: &str = "$ ";

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> ControlFlow<()>;
}

pub struct Shell {
    dispatcher: LineDispatcher,
}

impl Shell {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self::with_state(ShellState::from_env()?))
    }

    pub fn with_state(state: ShellState) -> Self {
        Shell {
            dispatcher: LineDispatcher::new(state),
        }
    }

    /// Read and run lines until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut editor = DefaultEditor::new()?;
        let interactive = io::stdin().is_terminal();

        loop {
            // rustyline stays silent when reading from a pipe
            if !interactive {
                let mut stdout = io::stdout().lock();
                stdout.write_all(PROMPT.as_bytes())?;
                stdout.flush()?;
            }

            match editor.readline(PROMPT) {
                Ok(line) => {
                    if self.execute_command(&line).is_break() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    debug!("end of input");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Run a single line, as given with `--command`.
    pub fn run_line(&mut self, line: &str) {
        let _ = self.execute_command(line);
    }
}

impl CommandHandler for Shell {
    fn execute_command(&mut self, line: &str) -> ControlFlow<()> {
        let mut router = OutputRouter::new(io::stdout().lock(), io::stderr().lock());
        self.dispatcher.dispatch(line, &mut router)
    }
}
