/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven ports exist: the interfaces the extraction core uses to reach
/// the outside world (the pipenv process, files, the console).
pub mod outbound;
