use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Process-wide shell state that survives from one line to the next.
///
/// The working directory lives here instead of in the OS process, so `cd`
/// only ever touches this value and every command that needs a directory
/// (external programs, redirection targets, PATH entries) reads it from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    cwd: PathBuf,
    path_var: Option<OsString>,
    home: Option<PathBuf>,
}

impl ShellState {
    pub fn new(cwd: impl Into<PathBuf>, path_var: Option<OsString>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            path_var,
            home,
        }
    }

    /// Snapshot the current process: working directory, `PATH` and home.
    pub fn from_env() -> Result<Self, std::io::Error> {
        let cwd = env::current_dir()?;
        Ok(Self::new(cwd, env::var_os("PATH"), dirs::home_dir()))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn path_var(&self) -> Option<&OsStr> {
        self.path_var.as_deref()
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Anchor `path` at the working directory. Absolute paths pass through.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(path)
    }

    pub(crate) fn set_cwd(&mut self, cwd: PathBuf) {
        self.cwd = cwd;
    }
}
