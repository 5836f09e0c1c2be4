/// Process adapters for invoking external package-manager commands
mod pipenv_command;

pub use pipenv_command::{PipenvCommand, DEFAULT_PIPENV};
