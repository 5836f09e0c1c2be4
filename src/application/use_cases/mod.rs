/// Use cases module containing application business logic orchestration
mod extract_dependencies;

pub use extract_dependencies::ExtractDependenciesUseCase;
