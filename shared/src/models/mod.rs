//! Data models
//!
//! Read-projections of backend state. Records are never created or destroyed
//! client-side; local edits are transient until acknowledged upstream.

pub mod merchant;
pub mod order;
pub mod plan;
pub mod raw;
pub mod token;

// Re-exports
pub use merchant::*;
pub use order::*;
pub use plan::*;
pub use raw::*;
pub use token::*;
