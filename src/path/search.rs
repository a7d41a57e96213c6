use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::normalize;
use crate::core::ShellState;

/// Locate the program `name` would run.
///
/// Names containing a `/` are taken as paths relative to the working directory
/// and never searched. Everything else is looked up in each `PATH` entry in
/// order; an empty entry stands for the working directory.
pub fn find_executable(name: &str, state: &ShellState) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if name.contains('/') {
        let candidate = normalize(&state.resolve(name));
        return is_executable(&candidate).then_some(candidate);
    }

    let path_var = state.path_var()?;
    let found = env::split_paths(path_var)
        .map(|dir| state.resolve(dir.join(name)))
        .find(|candidate| is_executable(candidate));

    trace!(name, found = ?found, "PATH search");
    found
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn touch(path: &Path, mode: u32) {
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    fn state_with_path(cwd: &Path, dirs: &[&Path]) -> ShellState {
        let path_var = env::join_paths(dirs).unwrap();
        ShellState::new(cwd, Some(path_var), None)
    }

    #[test]
    fn test_finds_first_executable_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        touch(&first.path().join("tool"), 0o644);
        touch(&second.path().join("tool"), 0o755);

        let state = state_with_path(first.path(), &[first.path(), second.path()]);
        assert_eq!(
            find_executable("tool", &state),
            Some(second.path().join("tool"))
        );

        touch(&first.path().join("tool"), 0o700);
        assert_eq!(
            find_executable("tool", &state),
            Some(first.path().join("tool"))
        );
    }

    #[test]
    fn test_directories_are_not_executables() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("tool")).unwrap();

        let state = state_with_path(dir.path(), &[dir.path()]);
        assert_eq!(find_executable("tool", &state), None);
    }

    #[test]
    fn test_missing_path_finds_nothing() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("tool"), 0o755);

        let state = ShellState::new(dir.path(), None, None);
        assert_eq!(find_executable("tool", &state), None);

        let state = ShellState::new(dir.path(), Some(OsString::new()), None);
        assert_eq!(find_executable("doesnotexist123", &state), None);
    }

    #[test]
    fn test_slash_names_resolve_against_cwd() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        touch(&dir.path().join("bin/run"), 0o755);

        // not on PATH, reachable only by path
        let state = ShellState::new(dir.path(), None, None);
        assert_eq!(
            find_executable("./bin/run", &state),
            Some(dir.path().join("bin/run"))
        );
        assert_eq!(find_executable("run", &state), None);
    }
}
