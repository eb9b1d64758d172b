//! Workspace facade, re-exporting `geomatch-core` for the demos.
pub use geomatch_core::*;
