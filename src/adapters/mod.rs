/// Adapters module containing concrete implementations of ports
///
/// Only outbound adapters exist; the CLI in `main.rs` drives the use case
/// directly.
pub mod outbound;
