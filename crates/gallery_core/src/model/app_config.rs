//! Site-wide hero configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HERO_TITLE: &str = "Hub de Inovação";
pub const DEFAULT_HERO_HIGHLIGHT: &str = "Stanismar";
pub const DEFAULT_HERO_DESCRIPTION: &str = "Explore uma coleção curada de aplicações inteligentes e experimentos criativos desenvolvidos com a tecnologia Google AI Studio.";

/// Hero section text shown above the gallery grid.
///
/// All three fields are free text with no length or content constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub hero_title: String,
    pub hero_highlight: String,
    pub hero_description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hero_title: DEFAULT_HERO_TITLE.to_string(),
            hero_highlight: DEFAULT_HERO_HIGHLIGHT.to_string(),
            hero_description: DEFAULT_HERO_DESCRIPTION.to_string(),
        }
    }
}

/// Addresses one editable hero field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroField {
    Title,
    Highlight,
    Description,
}

impl HeroField {
    /// Parses the wire name used by the admin form (`heroTitle`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "heroTitle" => Some(Self::Title),
            "heroHighlight" => Some(Self::Highlight),
            "heroDescription" => Some(Self::Description),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "heroTitle",
            Self::Highlight => "heroHighlight",
            Self::Description => "heroDescription",
        }
    }
}

impl AppConfig {
    /// Returns a full copy of this config with one field replaced.
    ///
    /// The store replaces configs wholesale, so per-field edits are merged
    /// here by the caller before `update_config`.
    pub fn with_field(&self, field: HeroField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            HeroField::Title => next.hero_title = value,
            HeroField::Highlight => next.hero_highlight = value,
            HeroField::Description => next.hero_description = value,
        }
        next
    }
}
