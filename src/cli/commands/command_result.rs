use crate::issues::{Issue, ResolutionWarning};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running gqlvars commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues found, plus one when `init` failed.
    pub error_count: usize,
    /// All issues found during the check, sorted.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Call sites skipped because their types could not be resolved.
    /// Never counted as errors.
    pub resolution_warnings: Vec<ResolutionWarning>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
}
