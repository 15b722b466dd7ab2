//! Shared utilities: constants, the unified error type, and time formatting.

pub mod constants;
pub mod error;
pub mod time;
