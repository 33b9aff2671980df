//! Purpose: Define the stable public Rust API boundary for jsontree.
//! Exports: Document loading/saving, merge, geometry conversions, kinds, errors, and config.
//! Role: Public, additive-only surface; hides internal parse and transport modules.
//! Invariants: This module is the only public path to document I/O.
//! Invariants: Internal modules remain private and are not directly exposed.

mod config;
mod document;
mod remote;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::geometry::{FromJson, Point, Rect, ToJson, Vec2, decode, encode};
pub use crate::core::kind::ValueKind;
pub use crate::core::merge::{merge, merge_all, merge_maps, merged};
pub use config::{LoadOptions, TIMEOUT_ENV, USER_AGENT_ENV, WriteStyle};
pub use document::{Document, Loader};
