//! Command-line parsing.
//!
//! Supports: `fuxx <memUsageMiB> <diskUsageMiB> [<timeFactor>]`. Fewer than two
//! arguments is not an error; the caller prints [`USAGE`] and exits cleanly.

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};

/// Usage banner printed when too few arguments are given.
pub const USAGE: &str = "
Usage: fuxx <memUsageMiB> <diskUsageMiB> [<timeFactor>]
       where <memUsage> and <diskUsage> are in Mebibytes
       and timeFactor is in percent of the normal runtime.
";

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print [`USAGE`] and exit successfully.
    Usage,
    /// Run both benchmarks with the given configuration.
    Run(Config),
}

impl Command {
    /// Parse the argument list, excluding the program name.
    ///
    /// Arguments past the third are ignored.
    pub fn parse<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() < 2 {
            return Ok(Command::Usage);
        }

        let mem = parse_u64(args[0].as_ref(), "memUsageMiB")?;
        let disk = parse_u64(args[1].as_ref(), "diskUsageMiB")?;
        let time_factor = args
            .get(2)
            .map(|s| parse_u64(s.as_ref(), "timeFactor"))
            .transpose()?;

        Ok(Command::Run(Config::new(mem, disk, time_factor)))
    }
}

/// Parse a plain unsigned decimal, optionally with a leading `+`.
///
/// Unlike C's `strtoul`, trailing characters and a leading `-` are rejected.
fn parse_u64(val: &str, name: &'static str) -> Result<u64> {
    val.trim().parse::<u64>().map_err(|e| {
        Error::new(
            ErrorKind::ConfigInvalid,
            format!("invalid value for {name}: {val:?}"),
        )
        .with_operation("Command::parse")
        .with_context("argument", name)
        .set_source(e)
    })
}
