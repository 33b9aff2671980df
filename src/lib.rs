//! Purpose: Library crate behind the `jsontree` CLI: load, merge, and convert JSON trees.
//! Exports: `api` (documents, loaders, merge, geometry, errors) and `core` (pure algorithms).
//! Role: Thin layer over `serde_json::Value`; parsing and value storage stay in serde_json.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
//! Invariants: Only `api` performs I/O; `core` is pure in-memory transformation.
pub mod api;
pub mod core;
pub(crate) mod json;
pub mod render;
