//! Shared types for the weather MCP service
//!
//! Provider data models, response envelopes and input validation used by
//! the backend and by anything embedding the weather function directly.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
