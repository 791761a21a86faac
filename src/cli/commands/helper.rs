use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, ResolutionWarning};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    mut resolution_warnings: Vec<ResolutionWarning>,
    source_files_checked: usize,
) -> CommandResult {
    issues.sort();
    resolution_warnings.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues.len();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        issues,
        resolution_warnings,
        parse_error_count,
        source_files_checked,
    }
}
