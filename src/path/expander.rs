use super::PathError;
use std::path::{Component, Path, PathBuf};

/// Expands a leading `~` against a known home directory.
#[derive(Debug, Clone, Copy)]
pub struct PathExpander<'a> {
    home: Option<&'a Path>,
}

impl<'a> PathExpander<'a> {
    pub fn new(home: Option<&'a Path>) -> Self {
        Self { home }
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, PathError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(PathBuf::from(path))
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, PathError> {
        if path.len() == 1 {
            return self.home_dir();
        }

        match path[1..].strip_prefix('/') {
            Some(stripped) => {
                let mut home_path = self.home_dir()?;
                for part in stripped.split('/') {
                    if !part.is_empty() {
                        home_path.push(part);
                    }
                }
                Ok(home_path)
            }
            // "~user" is left alone
            None => Ok(PathBuf::from(path)),
        }
    }

    pub fn home_dir(&self) -> Result<PathBuf, PathError> {
        self.home
            .map(Path::to_path_buf)
            .ok_or(PathError::HomeDirNotFound)
    }
}

/// Lexically clean a path: drop `.` components and let `..` remove its parent.
///
/// Symlinks are not resolved, so the result is the logical path a user typed
/// their way into. `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
