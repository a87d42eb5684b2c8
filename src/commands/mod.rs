//! Command dispatch and handlers.

pub mod message;
pub mod now;
pub mod scenarios;
pub mod user;

use std::future::Future;

use crate::cli::{Command, FetchSource};
use crate::context::Capabilities;
use crate::profile::Profile;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Now { fixed } => now::run(fixed.as_deref()),
        Command::User { id, source } => user::run(id, source),
        Command::Message { source } => message::run(source),
        Command::Scenarios => scenarios::run(),
    }
}

/// Build the capability bundle a fetch-based command runs against.
fn capabilities_for(source: &FetchSource) -> Result<Capabilities, String> {
    if let Some(scenario) = source.scenario {
        return Ok(Capabilities::live().with_boxed_fetch(scenario.fetch()));
    }
    match &source.profile {
        Some(path) => {
            let profile = Profile::load(path).map_err(|e| e.to_string())?;
            Capabilities::from_profile(&profile).map_err(|e| e.to_string())
        }
        None => Ok(Capabilities::live()),
    }
}

/// Drive `future` to completion on a single-threaded runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    Ok(runtime.block_on(future))
}
