//! Shared types for the Courier Console
//!
//! Data models, the API response envelope and request DTOs used by both the
//! client crate and the console binary. Everything in this crate is pure:
//! no I/O, no network, no clock access.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use response::ApiEnvelope;
pub use serde::{Deserialize, Serialize};
