/// Shared utilities used across layers: error taxonomy, result alias, file safety checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
