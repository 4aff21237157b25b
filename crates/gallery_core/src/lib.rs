//! Core state layer for the project gallery.
//! Owns the persisted project list, hero config and theme; UI shells only
//! render what this crate exposes and call its mutation APIs.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::app_config::{AppConfig, HeroField};
pub use model::project::{Project, ProjectId};
pub use model::theme::Theme;
pub use repo::storage_repo::{
    MemoryStorageRepository, RepoError, RepoResult, SqliteStorageRepository, StorageRepository,
};
pub use service::gallery_store::{
    GalleryStore, StorageKeys, StoreError, StoreResult, ThemeListener,
    DEFAULT_STORAGE_NAMESPACE,
};
pub use service::project_form::{
    card_image_url, parse_tags, ProjectDraft, ProjectDraftError,
};
pub use service::seed::seed_projects;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
