//! Hook calls whose variables type argument is missing or wrong.
//!
//! ```typescript
//! import { RunsQuery } from "./types/RunsQuery";
//!
//! useQuery<RunsQuery>(RUNS_QUERY);                       // error (when ./types/RunsQuery.ts
//!                                                        //        exports RunsQueryVariables)
//! useQuery<RunsQuery, RunsQueryVariables>(RUNS_QUERY);   // ok
//! useQuery<RunsQuery, JobsQueryVariables>(RUNS_QUERY);   // error
//! ```
//!
//! Call sites whose result type cannot be traced to a readable file are
//! skipped and recorded as [`ResolutionWarning`]s.

mod checker;

pub use checker::{MissingVariablesTypeChecker, hook_name, simple_type_name};

use swc_ecma_visit::Visit;

use crate::{
    config::Config,
    core::{
        collect::{Suppressions, collect_imports},
        exports::ExportLookup,
        parsers::tsx::ParsedSource,
    },
    issues::{MissingVariablesTypeIssue, ResolutionWarning},
};

/// Findings for a single file.
#[derive(Debug, Default)]
pub struct FileCheckResult {
    pub issues: Vec<MissingVariablesTypeIssue>,
    pub warnings: Vec<ResolutionWarning>,
}

/// Run the checker over one parsed file, dropping findings on lines
/// silenced by suppression directives.
pub fn check_file(
    file_path: &str,
    parsed: &ParsedSource,
    config: &Config,
    export_lookup: &dyn ExportLookup,
) -> FileCheckResult {
    let imports = collect_imports(&parsed.module);
    let suppressions = Suppressions::collect(&parsed.comments, &parsed.source_map);

    let mut checker = MissingVariablesTypeChecker::new(
        file_path,
        &parsed.source_map,
        &imports,
        config,
        export_lookup,
    );
    checker.visit_module(&parsed.module);

    let MissingVariablesTypeChecker {
        issues, warnings, ..
    } = checker;

    FileCheckResult {
        issues: issues
            .into_iter()
            .filter(|issue| !suppressions.is_suppressed(issue.context.line()))
            .collect(),
        warnings: warnings
            .into_iter()
            .filter(|warning| !suppressions.is_suppressed(warning.context.line()))
            .collect(),
    }
}
