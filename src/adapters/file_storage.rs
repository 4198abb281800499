use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the encoded roster in a single file.
///
/// With atomic writes on, saves go to `<file>.tmp` first and are renamed
/// over the data file, so a crash mid-write leaves the previous save intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    atomic_writes: bool,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: true,
        }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(config.data_file()).with_atomic_writes(config.atomic_writes())
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                tracing::debug!("Read {} bytes from {}", contents.len(), self.path.display());
                Ok(contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No data file at {}, starting empty", self.path.display());
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if self.atomic_writes {
            let temp_path = self.temp_path();
            fs::write(&temp_path, contents)?;
            if let Err(e) = fs::rename(&temp_path, &self.path) {
                if let Err(cleanup) = fs::remove_file(&temp_path) {
                    tracing::warn!("Could not remove {}: {}", temp_path.display(), cleanup);
                }
                return Err(e.into());
            }
        } else {
            fs::write(&self.path, contents)?;
        }

        tracing::debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }
}
