//! File-backed key-value connection.
//!
//! Each logical key is stored as `{key}.json` inside a single data
//! directory, so the records stay human-readable and easy to inspect.
//! Writes go through a temp file and rename so a crash mid-write never
//! leaves a half-written record.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Connection to the on-disk key-value store.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Open (and create if needed) the data directory.
    pub fn new(base_directory: impl Into<PathBuf>) -> Result<Self> {
        let base_directory = base_directory.into();
        fs::create_dir_all(&base_directory)
            .with_context(|| format!("Failed to create data directory {:?}", base_directory))?;
        info!("Opened mood data directory: {:?}", base_directory);
        Ok(Self { base_directory })
    }

    /// Per-user default data directory, falling back to the system temp
    /// directory when the platform has no data dir.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("mood-mirror")
    }

    /// The directory holding all key files.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file backing a logical key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{key}.json"))
    }

    /// Read the raw contents stored under a key, `None` if absent.
    pub fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            debug!("Key '{}' not present at {:?}", key, path);
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read key '{}' from {:?}", key, path))?;
        Ok(Some(contents))
    }

    /// Store raw contents under a key, atomically (temp file + rename).
    pub fn write_key(&self, key: &str, contents: &str) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write key '{}' to {:?}", key, temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to move key '{}' into place at {:?}", key, path))?;
        debug!("Wrote key '{}' to {:?}", key, path);
        Ok(())
    }

    /// Remove a key. Removing an absent key succeeds.
    pub fn remove_key(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed key '{}' at {:?}", key, path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove key '{}' at {:?}", key, path)),
        }
    }
}
