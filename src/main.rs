use std::process::ExitCode;

use clap::Parser;
use minsh::error::ShellError;
use minsh::flags::Flags;
use minsh::logging;
use minsh::shell::Shell;

fn main() -> ExitCode {
    let flags = Flags::parse();
    logging::init(&flags);

    match run(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !flags.quiet {
                eprintln!("minsh: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(flags: &Flags) -> Result<(), ShellError> {
    let mut shell = Shell::new()?;
    match flags.command.as_deref() {
        Some(line) => shell.run_line(line),
        None => shell.run()?,
    }
    Ok(())
}
