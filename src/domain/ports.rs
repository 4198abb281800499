use crate::utils::error::Result;
use std::path::Path;

/// Persistence gateway for the encoded roster.
///
/// Every call acquires and releases the underlying handle itself; nothing
/// is held open between calls.
pub trait Storage {
    /// Returns the persisted text, or an empty string if nothing was saved yet.
    fn load(&self) -> Result<String>;

    fn save(&self, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &Path;
    fn atomic_writes(&self) -> bool;
}
