//! Repositories for trips saved by users.

mod file;
mod memory;

pub use file::JsonFileTripRepository;
pub use memory::InMemoryTripRepository;
