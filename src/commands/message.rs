//! Handler for `standin message`.

use super::{block_on, capabilities_for};
use crate::cli::FetchSource;
use crate::consumers::get_json_message;

/// Fetch the message and print its envelope as JSON.
///
/// # Errors
///
/// Returns an error if the capabilities cannot be built, the runtime fails to
/// start, or the envelope cannot be serialized.
pub fn run(source: &FetchSource) -> Result<(), String> {
    let caps = capabilities_for(source)?;
    let envelope = block_on(get_json_message(caps.fetch.as_ref(), &source.base_url))?;
    let json = serde_json::to_string(&envelope).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
