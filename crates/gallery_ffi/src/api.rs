//! FFI use-case API for the gallery UI shell.
//!
//! # Responsibility
//! - Expose the store's read model and mutations to Dart via FRB.
//! - Resolve display-only values (placeholder cover images) at this boundary.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each call opens the store, initializes it and applies at most one
//!   mutation while holding the process-wide session lock.

use gallery_core::db::open_db;
use gallery_core::{
    card_image_url, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, AppConfig, GalleryStore, HeroField, Project, ProjectDraft,
    SqliteStorageRepository, Theme,
};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const GALLERY_DB_FILE_NAME: &str = "gallery_store.sqlite3";
static GALLERY_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Repeating the same `level + log_dir` is idempotent.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Card-ready projection of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Stored cover image, `None` when the user left it blank.
    pub image_url: Option<String>,
    /// Cover to render; falls back to a placeholder seeded by `id`.
    pub display_image_url: String,
    pub tags: Vec<String>,
    pub created_at: i64,
}

/// Hero section text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroConfig {
    pub hero_title: String,
    pub hero_highlight: String,
    pub hero_description: String,
}

/// Full read model for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySnapshot {
    pub ok: bool,
    pub projects: Vec<ProjectItem>,
    pub config: HeroConfig,
    /// `light` or `dark`.
    pub theme: String,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryActionResponse {
    pub ok: bool,
    /// Created project id for `gallery_add_project`.
    pub project_id: Option<String>,
    /// Theme to apply after `gallery_set_theme`.
    pub theme: Option<String>,
    pub message: String,
}

impl GalleryActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            project_id: None,
            theme: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            theme: None,
            message: message.into(),
        }
    }
}

/// Loads the current gallery state.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_snapshot() -> GallerySnapshot {
    match with_store(|store| Ok(snapshot_of(store))) {
        Ok(snapshot) => snapshot,
        Err(err) => GallerySnapshot {
            ok: false,
            projects: Vec::new(),
            config: hero_config(&AppConfig::default()),
            theme: Theme::default().as_str().to_string(),
            message: format!("gallery_snapshot failed: {err}"),
        },
    }
}

/// Creates a project from admin form values and prepends it to the gallery.
///
/// `tags` is the raw comma-separated input. Blank `title`/`url` are rejected;
/// otherwise values are stored as entered.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_add_project(
    title: String,
    description: String,
    url: String,
    image_url: Option<String>,
    tags: String,
) -> GalleryActionResponse {
    let draft = ProjectDraft {
        title,
        description,
        url,
        image_url: image_url.unwrap_or_default(),
        tags,
    };
    let project = match draft.into_project() {
        Ok(project) => project,
        Err(err) => {
            return GalleryActionResponse::failure(format!("gallery_add_project failed: {err}"))
        }
    };
    let project_id = project.id.clone();

    match with_store(|store| store.add_project(project).map_err(|err| err.to_string())) {
        Ok(()) => GalleryActionResponse {
            project_id: Some(project_id),
            ..GalleryActionResponse::success("Project added.")
        },
        Err(err) => GalleryActionResponse::failure(format!("gallery_add_project failed: {err}")),
    }
}

/// Deletes every project with `id`. Confirmation is the caller's job.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_delete_project(id: String) -> GalleryActionResponse {
    match with_store(|store| store.delete_project(&id).map_err(|err| err.to_string())) {
        Ok(0) => GalleryActionResponse::success("No project matched."),
        Ok(removed) => GalleryActionResponse::success(format!("Removed {removed} project(s).")),
        Err(err) => {
            GalleryActionResponse::failure(format!("gallery_delete_project failed: {err}"))
        }
    }
}

/// Replaces all three hero fields.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_update_config(
    hero_title: String,
    hero_highlight: String,
    hero_description: String,
) -> GalleryActionResponse {
    let config = AppConfig {
        hero_title,
        hero_highlight,
        hero_description,
    };
    match with_store(|store| store.update_config(config).map_err(|err| err.to_string())) {
        Ok(()) => GalleryActionResponse::success("Config updated."),
        Err(err) => GalleryActionResponse::failure(format!("gallery_update_config failed: {err}")),
    }
}

/// Replaces one hero field (`heroTitle|heroHighlight|heroDescription`),
/// keeping the other two as currently stored.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_update_config_field(field: String, value: String) -> GalleryActionResponse {
    let Some(field) = HeroField::parse(field.trim()) else {
        return GalleryActionResponse::failure(format!(
            "gallery_update_config_field failed: unknown field `{field}`"
        ));
    };
    let result = with_store(|store| {
        let next = store.config().with_field(field, value);
        store.update_config(next).map_err(|err| err.to_string())
    });
    match result {
        Ok(()) => GalleryActionResponse::success(format!("{} updated.", field.as_str())),
        Err(err) => GalleryActionResponse::failure(format!(
            "gallery_update_config_field failed: {err}"
        )),
    }
}

/// Persists the theme preference and echoes the mode the UI should apply.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_set_theme(theme: String) -> GalleryActionResponse {
    let Some(theme) = Theme::parse(theme.trim()) else {
        return GalleryActionResponse::failure(format!(
            "gallery_set_theme failed: unsupported theme `{theme}`"
        ));
    };
    let result = with_store(|store| {
        store.set_theme_listener(|applied: Theme| {
            info!("event=theme_applied module=ffi status=ok theme={applied}");
        });
        store.set_theme(theme).map_err(|err| err.to_string())
    });
    match result {
        Ok(()) => GalleryActionResponse {
            theme: Some(theme.as_str().to_string()),
            ..GalleryActionResponse::success("Theme updated.")
        },
        Err(err) => GalleryActionResponse::failure(format!("gallery_set_theme failed: {err}")),
    }
}

fn resolve_gallery_db_path() -> PathBuf {
    GALLERY_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("GALLERY_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(GALLERY_DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&mut GalleryStore<SqliteStorageRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    // A poisoned lock only means an earlier call panicked; the DB is still consistent.
    let _guard = SESSION_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let db_path = resolve_gallery_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("gallery DB open failed: {err}"))?;
    let repo = SqliteStorageRepository::try_new(&conn)
        .map_err(|err| format!("gallery storage init failed: {err}"))?;
    let mut store = GalleryStore::new(repo);
    store.initialize().map_err(|err| {
        warn!("event=store_init module=ffi status=error error={err}");
        format!("gallery store init failed: {err}")
    })?;
    f(&mut store)
}

fn snapshot_of(store: &GalleryStore<SqliteStorageRepository<'_>>) -> GallerySnapshot {
    GallerySnapshot {
        ok: true,
        projects: store.projects().iter().map(to_project_item).collect(),
        config: hero_config(store.config()),
        theme: store.theme().as_str().to_string(),
        message: format!("Loaded {} project(s).", store.projects().len()),
    }
}

fn to_project_item(project: &Project) -> ProjectItem {
    ProjectItem {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        url: project.url.clone(),
        image_url: project.image_url.clone(),
        display_image_url: card_image_url(project),
        tags: project.tags.clone(),
        created_at: project.created_at,
    }
}

fn hero_config(config: &AppConfig) -> HeroConfig {
    HeroConfig {
        hero_title: config.hero_title.clone(),
        hero_highlight: config.hero_highlight.clone(),
        hero_description: config.hero_description.clone(),
    }
}
