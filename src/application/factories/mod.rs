/// Factories for selecting adapters from application-level options
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
