pub mod commands;
pub mod state;

pub use commands::{Builtin, CommandExecutor, CommandResult, Invocation};
pub use state::ShellState;
