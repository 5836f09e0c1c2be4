/// Outbound adapters (Driven adapters) - Infrastructure implementations
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod process;
