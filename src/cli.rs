//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::adapters::fixed::Scenario;
use crate::consumers::DEFAULT_BASE_URL;

/// Top-level CLI parser for `standin`.
#[derive(Debug, Parser)]
#[command(name = "standin", version, about = "Exercise capability doubles from the command line")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current time, or a fixed instant.
    Now {
        /// Freeze the clock at this instant instead of reading the system time.
        #[arg(long, value_name = "INSTANT")]
        fixed: Option<String>,
    },
    /// Look up a user by id.
    User {
        /// The user id.
        id: String,
        /// Where the response comes from.
        #[command(flatten)]
        source: FetchSource,
    },
    /// Fetch the JSON message.
    Message {
        /// Where the response comes from.
        #[command(flatten)]
        source: FetchSource,
    },
    /// List the canned fetch scenarios.
    Scenarios,
}

/// Selects the fetch implementation used by a command.
#[derive(Debug, Clone, Args)]
pub struct FetchSource {
    /// Answer with a canned scenario instead of a real request.
    #[arg(long, value_enum, conflicts_with = "profile")]
    pub scenario: Option<Scenario>,
    /// Load capabilities from a YAML profile.
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
    /// Base URL of the service.
    #[arg(long, env = "STANDIN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
