//! Port traits defining the capability boundaries.
//!
//! Each trait stands in for one platform facility (time, network, process
//! exit, deferred callbacks). Implementations live in `src/adapters/`.

pub mod clock;
pub mod exit;
pub mod fetch;
pub mod timeout;

pub use clock::{Clock, Timestamp};
pub use exit::Exit;
pub use fetch::{Fetch, FetchFuture};
pub use timeout::{TimeoutId, Timeout, TimerCallback};
