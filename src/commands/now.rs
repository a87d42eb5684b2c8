//! Handler for `standin now`.

use crate::adapters::fixed::FixedClock;
use crate::adapters::live::LiveClock;
use crate::ports::clock::{Clock, Timestamp};

/// Print the current time, or the fixed instant when one is given.
///
/// # Errors
///
/// Returns an error if the fixed instant cannot be parsed.
pub fn run(fixed: Option<&str>) -> Result<(), String> {
    let now = current(fixed)?;
    println!("{now}");
    Ok(())
}

fn current(fixed: Option<&str>) -> Result<Timestamp, String> {
    let clock: Box<dyn Clock> = match fixed {
        Some(text) => Box::new(FixedClock::parse(text)),
        None => Box::new(LiveClock),
    };
    let now = clock.now();
    if now.is_valid() {
        Ok(now)
    } else {
        Err(format!("Invalid instant: {}", fixed.unwrap_or_default()))
    }
}
