//! Managed image storage
//!
//! Images attached to user notes are copied into an application-owned
//! directory; the note row stores the resulting paths. The store is
//! path-addressed: file names carry the import timestamp so imports of
//! identically named files do not collide.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;

use crate::error::{AppError, Result};

/// Image store rooted at the managed image directory
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Create an image store at the given root directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the managed directory if needed
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Image store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Copy an image file into the managed directory and return the
    /// stored path. The name is `{timestamp}_{original_filename}`;
    /// same-second imports get a numeric infix.
    pub async fn import(&self, source: &Path) -> Result<PathBuf> {
        let filename = source
            .file_name()
            .ok_or_else(|| AppError::Generic(format!("Not a file path: {:?}", source)))?
            .to_string_lossy()
            .into_owned();

        let timestamp = Utc::now().timestamp();
        let mut dest = self.root.join(format!("{}_{}", timestamp, filename));
        let mut attempt = 1;
        while dest.exists() {
            dest = self
                .root
                .join(format!("{}_{}_{}", timestamp, attempt, filename));
            attempt += 1;
        }

        fs::copy(source, &dest).await?;

        tracing::debug!("Imported image {:?} as {:?}", source, dest);
        Ok(dest)
    }

    /// Remove a previously imported image. Already-missing files are
    /// not an error.
    pub async fn remove(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(path).await?;

        tracing::debug!("Removed image {:?}", path);
        Ok(())
    }

    /// Managed directory root
    pub fn root(&self) -> &Path {
        &self.root
    }
}
