//! Gallery domain model.
//!
//! # Responsibility
//! - Define the three persisted records: project list entries, hero config
//!   and theme preference.
//! - Own their wire shape (camelCase JSON, optional-field omission).
//!
//! # Invariants
//! - Every `Project` in a list has a unique `id`.
//! - Records are replaced wholesale, never patched in place.

pub mod app_config;
pub mod clock;
pub mod project;
pub mod theme;
