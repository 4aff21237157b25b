//! Project domain model.
//!
//! # Responsibility
//! - Define the gallery entry record and its serialized shape.
//!
//! # Invariants
//! - `id` is opaque and never reused for another project.
//! - `created_at` is assigned once at creation and never re-derived.
//! - `image_url = None` is serialized by omitting `imageUrl`.

use serde::{Deserialize, Serialize};

/// Opaque project identifier.
///
/// New projects get a UUID v4 string; seed projects use short numeric ids.
pub type ProjectId = String;

/// One gallery entry representing a linked application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Cover image. The placeholder fallback is resolved at display time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display order is significant; duplicates are allowed.
    pub tags: Vec<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Project {
    /// Returns whether this project carries the given id.
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }
}
