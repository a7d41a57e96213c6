use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::redirect::{Mode, Redirection, Stream};
use crate::core::{CommandResult, ShellState};

/// Sends a command's two output streams to the terminal or a file.
///
/// `out` and `err` stand for the terminal; the shell hands in the real
/// stdout/stderr, tests hand in buffers.
pub struct OutputRouter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> OutputRouter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Write `result` out. A redirection only takes one stream; the other
    /// still reaches the terminal. A file that cannot be written is reported
    /// on terminal stdout and is not an error. Errors returned here come from
    /// the terminal streams themselves.
    pub fn route(
        &mut self,
        result: &CommandResult,
        redirection: Option<&Redirection>,
        state: &ShellState,
    ) -> io::Result<()> {
        match redirection {
            None => {
                write_nonempty(&mut self.out, &result.stdout)?;
                write_nonempty(&mut self.err, &result.stderr)?;
            }
            Some(redirection) => {
                let (payload, passthrough) = match redirection.stream {
                    Stream::Stdout => (&result.stdout, &result.stderr),
                    Stream::Stderr => (&result.stderr, &result.stdout),
                };

                let path = state.resolve(&redirection.target);
                debug!(
                    path = %path.display(),
                    mode = ?redirection.mode,
                    stream = ?redirection.stream,
                    "redirecting"
                );
                if let Err(err) = write_file(&path, redirection.mode, payload) {
                    warn!(path = %path.display(), %err, "redirection failed");
                    writeln!(self.out, "{}: {}", redirection.target.display(), err)?;
                }

                match redirection.stream {
                    Stream::Stdout => write_nonempty(&mut self.err, passthrough)?,
                    Stream::Stderr => write_nonempty(&mut self.out, passthrough)?,
                }
            }
        }

        self.out.flush()?;
        self.err.flush()
    }

    pub(crate) fn err(&mut self) -> &mut E {
        &mut self.err
    }
}

fn write_nonempty(sink: &mut impl Write, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    sink.write_all(text.as_bytes())
}

/// The file is created even when `payload` is empty.
fn write_file(path: &Path, mode: Mode, payload: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        Mode::Truncate => {
            options.write(true).truncate(true);
        }
        Mode::Append => {
            options.append(true);
        }
    }

    let mut file = options.open(path)?;
    file.write_all(payload.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    type BufferRouter = OutputRouter<Vec<u8>, Vec<u8>>;

    fn router() -> BufferRouter {
        OutputRouter::new(Vec::new(), Vec::new())
    }

    fn terminal(router: BufferRouter) -> (String, String) {
        let (out, err) = router.into_inner();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    fn result(stdout: &str, stderr: &str) -> CommandResult {
        CommandResult {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            terminate: false,
        }
    }

    fn redirect(stream: Stream, mode: Mode, target: &str) -> Redirection {
        Redirection {
            stream,
            mode,
            target: PathBuf::from(target),
        }
    }

    #[test]
    fn test_no_redirection() {
        let dir = TempDir::new().unwrap();
        let state = ShellState::new(dir.path(), None, None);
        let mut router = router();

        router.route(&result("out\n", "err\n"), None, &state).unwrap();
        assert_eq!(terminal(router), ("out\n".to_string(), "err\n".to_string()));
    }

    #[test]
    fn test_stdout_to_file() {
        let dir = TempDir::new().unwrap();
        let state = ShellState::new(dir.path(), None, None);
        let mut router = router();
        let target = redirect(Stream::Stdout, Mode::Truncate, "out.txt");

        router.route(&result("hi\n", "warn\n"), Some(&target), &state).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "hi\n");
        assert_eq!(terminal(router), (String::new(), "warn\n".to_string()));
    }

    #[test]
    fn test_truncate_replaces_content() {
        let dir = TempDir::new().unwrap();
        let state = ShellState::new(dir.path(), None, None);
        fs::write(dir.path().join("out.txt"), "old content that is long\n").unwrap();
        let target = redirect(Stream::Stdout, Mode::Truncate, "out.txt");

        router().route(&result("new\n", ""), Some(&target), &state).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "new\n");
    }

    #[test]
    fn test_append_twice() {
        let dir = TempDir::new().unwrap();
        let state = ShellState::new(dir.path(), None, None);
        let target = redirect(Stream::Stdout, Mode::Append, "out.txt");

        router().route(&result("a\n", ""), Some(&target), &state).unwrap();
        router().route(&result("a\n", ""), Some(&target), &state).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "a\na\n");
    }

    #[test]
    fn test_stderr_to_file() {
        let dir = TempDir::new().unwrap();
        let state = ShellState::new(dir.path(), None, None);
        let mut router = router();
        let target = redirect(Stream::Stderr, Mode::Truncate, "err.txt");

        router.route(&result("shown\n", "hidden\n"), Some(&target), &state).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("err.txt")).unwrap(), "hidden\n");
        assert_eq!(terminal(router), ("shown\n".to_string(), String::new()));
    }

    #[test]
    fn test_empty_payload_still_creates_file() {
        let dir = TempDir::new().unwrap();
        let state = ShellState::new(dir.path(), None, None);
        let target = redirect(Stream::Stderr, Mode::Append, "err.txt");

        router().route(&result("x\n", ""), Some(&target), &state).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("err.txt")).unwrap(), "");
    }

    #[test]
    fn test_unwritable_target_is_reported_on_stdout() {
        let dir = TempDir::new().unwrap();
        let state = ShellState::new(dir.path(), None, None);
        let mut router = router();
        let target = redirect(Stream::Stdout, Mode::Truncate, "missing/dir/out.txt");

        router.route(&result("lost\n", "err\n"), Some(&target), &state).unwrap();

        let (out, err) = terminal(router);
        assert!(out.starts_with("missing/dir/out.txt: "));
        assert!(out.ends_with('\n'));
        assert_eq!(err, "err\n");
    }
}
