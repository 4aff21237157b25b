//! Project creation contract between the admin form and the store.
//!
//! # Responsibility
//! - Turn raw form values into a `Project` with presence checks only.
//! - Own the comma-separated tag splitting rule.
//! - Resolve the placeholder cover image at display time.
//!
//! # Invariants
//! - Every created project gets a fresh UUID v4 id.
//! - Tag order follows input order; empty trimmed segments are dropped.

use crate::model::clock::now_epoch_ms;
use crate::model::project::Project;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Raw admin form values for one new project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Blank means "no image".
    pub image_url: String,
    /// Comma-separated tag list as typed by the user.
    pub tags: String,
}

/// Presence-check failures for a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDraftError {
    MissingTitle,
    MissingUrl,
}

impl Display for ProjectDraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "project title is required"),
            Self::MissingUrl => write!(f, "project url is required"),
        }
    }
}

impl Error for ProjectDraftError {}

impl ProjectDraft {
    /// Validates the draft and stamps it with a fresh id and the current time.
    ///
    /// Trimming only applies to the presence checks; entered text is stored
    /// as typed.
    pub fn into_project(self) -> Result<Project, ProjectDraftError> {
        self.into_project_at(now_epoch_ms())
    }

    /// Same as `into_project` with a caller-provided creation timestamp.
    pub fn into_project_at(self, created_at: i64) -> Result<Project, ProjectDraftError> {
        if self.title.trim().is_empty() {
            return Err(ProjectDraftError::MissingTitle);
        }
        if self.url.trim().is_empty() {
            return Err(ProjectDraftError::MissingUrl);
        }

        let image_url = if self.image_url.trim().is_empty() {
            None
        } else {
            Some(self.image_url)
        };

        Ok(Project {
            id: Uuid::new_v4().to_string(),
            tags: parse_tags(&self.tags),
            title: self.title,
            description: self.description,
            url: self.url,
            image_url,
            created_at,
        })
    }
}

/// Splits comma-separated input into trimmed, non-empty tags.
///
/// Duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cover image to display for a project card.
pub fn card_image_url(project: &Project) -> String {
    match project.image_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!("https://picsum.photos/seed/{}/800/600", project.id),
    }
}
