//! Request and response types shared by every [`Fetch`](crate::ports::Fetch) implementation.
//!
//! Header and method types come from `reqwest` so that the live adapter can
//! hand them to the HTTP client unchanged.

pub mod request;
pub mod response;

pub use request::{Body, Request, RequestInit, Target};
pub use response::{Response, ResponseInit};
