/// Shared kernel: error types, the crate-wide `Result` alias and filesystem guards
pub mod error;
pub mod fs_guard;
pub mod result;

pub use result::Result;
