mod expander;
mod search;

pub use expander::{normalize, PathExpander};
pub use search::{find_executable, is_executable};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("home directory not found")]
    HomeDirNotFound,
}
