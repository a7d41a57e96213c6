use std::process::ExitStatus;

use thiserror::Error;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
    /// Nonzero exit that left nothing on stderr to show instead.
    #[error("{name}: {status}")]
    Exited { name: String, status: ExitStatus },
}
