//! `fuxx` command-line entry point.
//!
//! Set `RUST_LOG=debug` to see allocation and timing diagnostics on stderr.

use std::io::Write;
use std::process::ExitCode;

use fuxx_rs::{Command, USAGE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Printed unconditionally; the log filter may be off.
            eprintln!("fuxx: {err}");
            log::debug!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> fuxx_rs::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match Command::parse(std::env::args().skip(1))? {
        Command::Usage => {
            writeln!(out, "{USAGE}")?;
            out.flush()?;
        }
        Command::Run(config) => {
            fuxx_rs::run(&config, &mut out)?;
        }
    }
    Ok(())
}
