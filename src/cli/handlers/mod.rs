//! Command handlers for CLI operations
//!
//! Execution logic lives here, apart from parsing and validation.

pub mod cache;
pub mod check;

pub use cache::CacheCommandHandler;
pub use check::CheckCommandHandler;
