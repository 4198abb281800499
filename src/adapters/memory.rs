use crate::domain::ports::Storage;
use crate::utils::error::{Result, RosterError};
use std::cell::{Cell, RefCell};

/// Storage kept in memory. Useful for embedding and for tests that should
/// not touch the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: RefCell<String>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(contents.into()),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Makes every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<String> {
        Ok(self.contents())
    }

    fn save(&self, contents: &str) -> Result<()> {
        if self.fail_saves.get() {
            return Err(RosterError::IoError(std::io::Error::other(
                "memory storage is set to fail",
            )));
        }
        *self.contents.borrow_mut() = contents.to_string();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
