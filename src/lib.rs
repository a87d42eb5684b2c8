//! Deterministic stand-ins for platform capabilities.
//!
//! Code that reads the clock, fetches over the network, exits the process or
//! schedules callbacks can take the corresponding port trait instead of
//! calling the platform directly. Production wires in the live adapters;
//! tests wire in the doubles from [`adapters::fixed`].

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod consumers;
pub mod context;
pub mod error;
pub mod http;
pub mod ports;
pub mod profile;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
