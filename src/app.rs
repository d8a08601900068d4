//! Application state and initialization
//!
//! Central state holding the store handle and services. The presentation
//! shell calls [`setup`] once at startup and [`AppState::shutdown`] once
//! on exit; nothing here is ambient or global.

use std::path::{Path, PathBuf};

use crate::config::{BACKUPS_DIR, DATABASE_FILE, EXPORTS_DIR, USER_IMAGES_DIR};
use crate::database::{create_pool, seed_reference_data, Repository};
use crate::error::Result;
use crate::services::{ImageStore, NotesService};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub repository: Repository,
    pub notes: NotesService,
    pub images: ImageStore,
}

/// Application setup - called once on startup
pub async fn setup(data_dir: &Path) -> Result<AppState> {
    tracing::info!("Initializing application at {:?}", data_dir);

    std::fs::create_dir_all(data_dir)?;
    std::fs::create_dir_all(data_dir.join(EXPORTS_DIR))?;
    std::fs::create_dir_all(data_dir.join(BACKUPS_DIR))?;

    let pool = create_pool(&data_dir.join(DATABASE_FILE)).await?;
    seed_reference_data(&pool).await?;

    let repository = Repository::new(pool);

    let images = ImageStore::new(data_dir.join(USER_IMAGES_DIR));
    images.initialize().await?;

    let state = AppState {
        data_dir: data_dir.to_path_buf(),
        notes: NotesService::new(repository.clone()),
        images,
        repository,
    };

    tracing::info!("Application initialized successfully");
    Ok(state)
}

impl AppState {
    /// Release the store connection. Called exactly once at controlled
    /// shutdown; no store call may follow.
    pub async fn shutdown(self) {
        tracing::info!("Shutting down");
        self.repository.close().await;
    }
}
