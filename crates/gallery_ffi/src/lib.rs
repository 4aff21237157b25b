//! Flutter-facing bindings for the gallery core.

pub mod api;
