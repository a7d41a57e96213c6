use std::io::Write;
use std::ops::ControlFlow;

use tracing::{debug, warn};

use super::output::OutputRouter;
use super::redirect::{self, SplitLine};
use super::tokenizer;
use crate::core::{CommandExecutor, CommandResult, ShellState};

/// Runs one input line at a time: tokenize, split off the redirection,
/// execute, route the output.
#[derive(Debug, Clone)]
pub struct LineDispatcher {
    state: ShellState,
    executor: CommandExecutor,
}

impl LineDispatcher {
    pub fn new(state: ShellState) -> Self {
        Self {
            state,
            executor: CommandExecutor::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Returns `Break` once the line asked the shell to exit.
    pub fn dispatch<O: Write, E: Write>(
        &mut self,
        line: &str,
        router: &mut OutputRouter<O, E>,
    ) -> ControlFlow<()> {
        let tokens = tokenizer::tokenize(line);
        if tokens.is_empty() {
            return ControlFlow::Continue(());
        }

        let SplitLine { argv, redirection } = match redirect::split(tokens) {
            Ok(split) => split,
            Err(err) => {
                debug!(%err, "line rejected");
                let result = CommandResult::error(err);
                if let Err(err) = router.err().write_all(result.stderr.as_bytes()) {
                    warn!(%err, "failed to write to terminal");
                }
                return ControlFlow::Continue(());
            }
        };

        let result = self.executor.execute(&argv, &mut self.state);

        if let Err(err) = router.route(&result, redirection.as_ref(), &self.state) {
            warn!(%err, "failed to write command output");
        }

        if result.terminate {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
