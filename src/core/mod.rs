//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `context`: `CheckContext`, lazy parse and check of the whole project
//! - `file_scanner`: source file discovery (includes, ignores, test files)
//! - `parsers`: swc parsing of TS/TSX/JS/JSX sources
//! - `collect`: per-file imports and suppression directives
//! - `data`: source location types
//! - `resolve`: import source to target file path
//! - `exports`: "does this file export type X" lookups

pub mod collect;
pub mod context;
pub mod data;
pub mod exports;
pub mod file_scanner;
pub mod parsers;
pub mod resolve;

pub use context::{CheckContext, Findings};
pub use data::{SourceContext, SourceLocation};
