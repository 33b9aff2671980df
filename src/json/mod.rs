//! Purpose: Internal JSON parsing boundary shared by document loaders.
//! Exports: `parse` module with decode helpers and failure diagnostics.
//! Role: Single seam for parser use so callsites avoid ad hoc decode logic.
//! Invariants: Text decoding for documents goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
