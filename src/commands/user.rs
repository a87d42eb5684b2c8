//! Handler for `standin user`.

use super::{block_on, capabilities_for};
use crate::cli::FetchSource;
use crate::consumers::get_user_by_id;

/// Look up user `id` and print the outcome line.
///
/// # Errors
///
/// Returns an error if the capabilities cannot be built or the runtime fails to start.
pub fn run(id: &str, source: &FetchSource) -> Result<(), String> {
    let caps = capabilities_for(source)?;
    let line = block_on(get_user_by_id(caps.fetch.as_ref(), &source.base_url, id))?;
    println!("{line}");
    Ok(())
}
