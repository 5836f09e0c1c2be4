/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the dependency-graph domain services and
/// coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
