// Adapters layer: concrete implementations of the domain ports.

pub mod file_storage;
pub mod memory;

pub use file_storage::FileStorage;
pub use memory::MemoryStorage;
