//! Per-file collection that runs before the rule visitor.
//!
//! - `imports`: top-level named imports (used to resolve result types)
//! - `directives`: `gqlvars-disable*` suppression comments

pub mod directives;
pub mod imports;

pub use directives::{Directive, Suppressions};
pub use imports::{FileImports, ImportInfo, collect_imports, find_import};
