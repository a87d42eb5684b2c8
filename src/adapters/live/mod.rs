//! Live adapters for real platform capabilities.

pub mod clock;
pub mod exit;
pub mod fetch;
pub mod timeout;

pub use clock::{now_clock, LiveClock};
pub use exit::ProcessExit;
pub use fetch::LiveFetch;
pub use timeout::ThreadTimeout;
