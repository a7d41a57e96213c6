use clap::Parser;

/// Command-line flags accepted by the `minsh` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "minsh", version, about = "A small interactive command-line shell")]
pub struct Flags {
    /// Suppress diagnostics, including fatal error messages
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,

    /// Print debug logging to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Run a single command line and exit
    #[arg(short, long, value_name = "LINE")]
    pub command: Option<String>,
}
