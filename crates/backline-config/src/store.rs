//! Document persistence seam.
//!
//! The storage system behind an installation (CMS, database, plain files)
//! is an external contract. Editors and the CLI talk to these traits; the
//! file-backed implementation serializes by extension, and `MemoryStore`
//! backs tests.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::ConfigError;
use crate::product::ProductConfig;

/// Loads a product document.
pub trait Loader {
    fn load(&self) -> impl Future<Output = Result<ProductConfig, ConfigError>> + Send;
}

/// Saves a product document.
pub trait Saver {
    fn save(&self, config: &ProductConfig) -> impl Future<Output = Result<(), ConfigError>> + Send;
}

/// File-backed store. The extension picks the format: `.json` or `.toml`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Result<&str, ConfigError> {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ConfigError::UnsupportedFormat(self.path.display().to_string()))
    }
}

impl Loader for FileStore {
    async fn load(&self) -> Result<ProductConfig, ConfigError> {
        let ext = self.extension()?;
        let contents = tokio::fs::read_to_string(&self.path).await?;
        tracing::debug!(path = %self.path.display(), "loaded product document");
        match ext {
            "json" => Ok(serde_json::from_str(&contents)?),
            "toml" => Ok(toml::from_str(&contents)?),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Saver for FileStore {
    async fn save(&self, config: &ProductConfig) -> Result<(), ConfigError> {
        let contents = match self.extension()? {
            "json" => serde_json::to_string_pretty(config)?,
            "toml" => toml::to_string_pretty(config)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        tokio::fs::write(&self.path, contents).await?;
        tracing::debug!(path = %self.path.display(), "saved product document");
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<ProductConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(config: ProductConfig) -> Self {
        Self {
            slot: Mutex::new(Some(config)),
        }
    }
}

impl Loader for MemoryStore {
    async fn load(&self) -> Result<ProductConfig, ConfigError> {
        self.slot
            .lock()
            .expect("store mutex poisoned")
            .clone()
            .ok_or_else(|| {
                ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no document stored",
                ))
            })
    }
}

impl Saver for MemoryStore {
    async fn save(&self, config: &ProductConfig) -> Result<(), ConfigError> {
        *self.slot.lock().expect("store mutex poisoned") = Some(config.clone());
        Ok(())
    }
}
