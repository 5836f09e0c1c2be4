/// Dependency graph bounded context
///
/// Pure domain logic: the typed forest decoded from a `pipenv graph --json-tree`
/// report and the flattened, deduplicated graph built from it. Nothing here
/// performs I/O.
pub mod domain;
pub mod services;
