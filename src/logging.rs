use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::flags::Flags;

/// Environment variable holding a `tracing` filter directive. Overrides the flags.
pub const LOG_ENV: &str = "MINSH_LOG";

/// Silent unless `--debug` asks for it. Command diagnostics are shell output,
/// not log events, so stderr carries nothing else by default.
pub fn default_directive(flags: &Flags) -> &'static str {
    if flags.debug && !flags.quiet {
        "minsh=debug"
    } else {
        "off"
    }
}

/// Install the global subscriber. Logs always go to stderr so they never mix
/// with command output that may be redirected.
pub fn init(flags: &Flags) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(flags)));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
