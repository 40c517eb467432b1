use crate::core::codec;
use crate::domain::model::Triangle;
use crate::domain::ports::TriangleStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores a single triangle as an indented JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TriangleStore for JsonFileStore {
    fn save(&self, triangle: &Triangle) -> Result<()> {
        let content = codec::to_json_string(triangle)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, content)?;
        tracing::debug!("Saved triangle to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Triangle> {
        let content = fs::read_to_string(&self.path)?;
        let triangle = codec::from_json_str(&content)?;
        tracing::debug!("Loaded triangle from {}", self.path.display());
        Ok(triangle)
    }
}

impl Triangle {
    /// Writes the triangle to `path`, replacing any existing file.
    pub fn save_to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        JsonFileStore::new(path.as_ref()).save(self)
    }

    pub fn load_from_json(path: impl AsRef<Path>) -> Result<Triangle> {
        JsonFileStore::new(path.as_ref()).load()
    }
}
