/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures from [`crate::shared::error::GraphError`] are converted into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
