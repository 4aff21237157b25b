//! Core use-case services.
//!
//! # Responsibility
//! - Own session state and its synchronization with durable storage.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod gallery_store;
pub mod project_form;
pub mod seed;
