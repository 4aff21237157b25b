//! Persistent state store for the gallery.
//!
//! # Responsibility
//! - Own the in-memory project list, hero config and theme for one session.
//! - Load each record once from durable storage, falling back independently
//!   to seed/default values.
//! - Write the whole affected record back after every mutation.
//!
//! # Invariants
//! - Nothing is written to storage before `initialize` completes.
//! - Malformed persisted records never fail initialization; they are logged
//!   and replaced by defaults.
//! - Once loaded, any record that fell back to seed/default values is written
//!   back so storage matches memory (seed `createdAt` stays stable).
//! - Mutations replace records wholesale; projects are never edited in place.

use crate::model::app_config::AppConfig;
use crate::model::clock::now_epoch_ms;
use crate::model::project::Project;
use crate::model::theme::Theme;
use crate::repo::storage_repo::{RepoError, StorageRepository};
use crate::service::seed::seed_projects;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_STORAGE_NAMESPACE: &str = "stanismar-apps";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage failure surfaced by the store.
///
/// Malformed persisted data is not an error here; see `initialize`.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Storage keys for the three persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub projects: String,
    pub config: String,
    pub theme: String,
}

impl StorageKeys {
    /// Derives `<namespace>-data`, `<namespace>-config` and `<namespace>-theme`.
    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            projects: format!("{namespace}-data"),
            config: format!("{namespace}-config"),
            theme: format!("{namespace}-theme"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_namespace(DEFAULT_STORAGE_NAMESPACE)
    }
}

/// Port through which the store asks the presentation layer to switch
/// visual mode.
pub trait ThemeListener {
    fn on_theme_changed(&mut self, theme: Theme);
}

impl<F: FnMut(Theme)> ThemeListener for F {
    fn on_theme_changed(&mut self, theme: Theme) {
        self(theme)
    }
}

enum LoadOutcome<T> {
    Loaded(T),
    Missing,
    Malformed(String),
}

/// Owned state container injected into the presentation layer.
pub struct GalleryStore<R: StorageRepository> {
    repo: R,
    keys: StorageKeys,
    projects: Vec<Project>,
    config: AppConfig,
    theme: Theme,
    initialized: bool,
    theme_listener: Option<Box<dyn ThemeListener>>,
}

impl<R: StorageRepository> GalleryStore<R> {
    /// Creates an uninitialized store over the default storage keys.
    pub fn new(repo: R) -> Self {
        Self::with_keys(repo, StorageKeys::default())
    }

    /// Creates an uninitialized store over custom storage keys.
    pub fn with_keys(repo: R, keys: StorageKeys) -> Self {
        Self {
            repo,
            keys,
            projects: Vec::new(),
            config: AppConfig::default(),
            theme: Theme::default(),
            initialized: false,
            theme_listener: None,
        }
    }

    /// Registers the presentation-layer hook notified by `set_theme`.
    pub fn set_theme_listener(&mut self, listener: impl ThemeListener + 'static) {
        self.theme_listener = Some(Box::new(listener));
    }

    /// Loads all three records from storage, enables write-back and flushes
    /// every record that fell back to seed/default values.
    ///
    /// Only storage transport failures are returned. Calling this again on
    /// an initialized store is a no-op.
    pub fn initialize(&mut self) -> StoreResult<()> {
        self.initialize_at(now_epoch_ms())
    }

    /// Same as `initialize`, stamping seed projects relative to `now_epoch_ms`.
    pub fn initialize_at(&mut self, now_epoch_ms: i64) -> StoreResult<()> {
        if self.initialized {
            debug!("event=store_init module=store status=skipped reason=already_initialized");
            return Ok(());
        }

        let projects_key = self.keys.projects.clone();
        let mut projects_fell_back = true;
        self.projects = match self.load_record::<Vec<Project>>(&projects_key)? {
            LoadOutcome::Loaded(projects) => {
                info!(
                    "event=store_load module=store status=ok record=projects key={projects_key} count={}",
                    projects.len()
                );
                projects_fell_back = false;
                projects
            }
            LoadOutcome::Missing => {
                info!(
                    "event=store_load module=store status=missing record=projects key={projects_key} fallback=seed"
                );
                seed_projects(now_epoch_ms)
            }
            LoadOutcome::Malformed(reason) => {
                warn!(
                    "event=store_load module=store status=malformed record=projects key={projects_key} fallback=seed error={reason}"
                );
                seed_projects(now_epoch_ms)
            }
        };

        let config_key = self.keys.config.clone();
        let mut config_fell_back = true;
        self.config = match self.load_record::<AppConfig>(&config_key)? {
            LoadOutcome::Loaded(config) => {
                info!("event=store_load module=store status=ok record=config key={config_key}");
                config_fell_back = false;
                config
            }
            LoadOutcome::Missing => {
                info!(
                    "event=store_load module=store status=missing record=config key={config_key} fallback=default"
                );
                AppConfig::default()
            }
            LoadOutcome::Malformed(reason) => {
                warn!(
                    "event=store_load module=store status=malformed record=config key={config_key} fallback=default error={reason}"
                );
                AppConfig::default()
            }
        };

        let theme_key = self.keys.theme.clone();
        let mut theme_fell_back = true;
        self.theme = match self.load_theme(&theme_key)? {
            LoadOutcome::Loaded(theme) => {
                info!(
                    "event=store_load module=store status=ok record=theme key={theme_key} theme={theme}"
                );
                theme_fell_back = false;
                theme
            }
            LoadOutcome::Missing => {
                info!(
                    "event=store_load module=store status=missing record=theme key={theme_key} fallback=light"
                );
                Theme::default()
            }
            LoadOutcome::Malformed(reason) => {
                warn!(
                    "event=store_load module=store status=malformed record=theme key={theme_key} fallback=light error={reason}"
                );
                Theme::default()
            }
        };

        self.initialized = true;

        if projects_fell_back {
            self.persist_projects()?;
        }
        if config_fell_back {
            self.persist(&config_key, "config", &self.config)?;
        }
        if theme_fell_back {
            self.persist(&theme_key, "theme", &self.theme)?;
        }

        info!(
            "event=store_init module=store status=ok projects={} theme={}",
            self.projects.len(),
            self.theme
        );
        Ok(())
    }

    /// Whether initial load has completed and writes reach storage.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current project list, newest first.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// First project carrying `id`, if any.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.has_id(id))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Prepends `project` and persists the full list.
    ///
    /// Id uniqueness is the caller's responsibility.
    pub fn add_project(&mut self, project: Project) -> StoreResult<()> {
        debug!(
            "event=project_add module=store status=start project_id={}",
            project.id
        );
        self.projects.insert(0, project);
        self.persist_projects()
    }

    /// Removes every project with `id`, persists the list and returns how
    /// many were removed. Removing an unknown id still rewrites the list.
    pub fn delete_project(&mut self, id: &str) -> StoreResult<usize> {
        let before = self.projects.len();
        self.projects.retain(|project| !project.has_id(id));
        let removed = before - self.projects.len();
        debug!("event=project_delete module=store status=start project_id={id} removed={removed}");
        self.persist_projects()?;
        Ok(removed)
    }

    /// Replaces the whole hero config and persists it. No field merging.
    pub fn update_config(&mut self, config: AppConfig) -> StoreResult<()> {
        self.config = config;
        let key = self.keys.config.clone();
        self.persist(&key, "config", &self.config)
    }

    /// Replaces the theme, persists it and notifies the theme listener.
    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.theme = theme;
        let key = self.keys.theme.clone();
        self.persist(&key, "theme", &self.theme)?;
        if let Some(listener) = self.theme_listener.as_mut() {
            listener.on_theme_changed(theme);
        }
        Ok(())
    }

    /// Consumes the store and returns the underlying storage.
    pub fn into_inner(self) -> R {
        self.repo
    }

    fn persist_projects(&self) -> StoreResult<()> {
        self.persist(&self.keys.projects, "projects", &self.projects)
    }

    fn persist<T: Serialize + ?Sized>(
        &self,
        key: &str,
        record: &'static str,
        value: &T,
    ) -> StoreResult<()> {
        if !self.initialized {
            debug!(
                "event=store_persist module=store status=suppressed record={record} reason=not_initialized"
            );
            return Ok(());
        }

        let raw = serde_json::to_string(value)?;
        self.repo.set_item(key, &raw)?;
        debug!(
            "event=store_persist module=store status=ok record={record} key={key} bytes={}",
            raw.len()
        );
        Ok(())
    }

    fn load_record<T: DeserializeOwned>(&self, key: &str) -> StoreResult<LoadOutcome<T>> {
        let Some(raw) = self.repo.get_item(key)? else {
            return Ok(LoadOutcome::Missing);
        };
        Ok(match serde_json::from_str::<T>(&raw) {
            Ok(value) => LoadOutcome::Loaded(value),
            Err(err) => LoadOutcome::Malformed(err.to_string()),
        })
    }

    fn load_theme(&self, key: &str) -> StoreResult<LoadOutcome<Theme>> {
        let Some(raw) = self.repo.get_item(key)? else {
            return Ok(LoadOutcome::Missing);
        };
        // Accept both the JSON-encoded string and a bare token.
        let token = serde_json::from_str::<String>(&raw).unwrap_or_else(|_| raw.trim().to_string());
        Ok(match Theme::parse(&token) {
            Some(theme) => LoadOutcome::Loaded(theme),
            None => LoadOutcome::Malformed(format!("unsupported theme value `{token}`")),
        })
    }
}
