//! Example consumers that reach the platform only through the ports.

pub mod logger;
pub mod messages;
pub mod users;

pub use logger::Logger;
pub use messages::{get_json_message, MessageData, MessageEnvelope};
pub use users::get_user_by_id;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost:3000";
