/// Type alias for Result with anyhow::Error as the error type.
/// Typed errors (`DepsError`) are wrapped into it at the application boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
