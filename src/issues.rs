//! Issue types for analysis results.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it. Resolution warnings are kept apart from issues: they
//! describe call sites the rule could not evaluate, not convention violations.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;

/// Name of the rule, as used in reports and suppression directives.
pub const RULE_NAME: &str = "missing-graphql-variables-type";

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingVariablesType,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingVariablesType => write!(f, "{}", RULE_NAME),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A hook call whose variables type argument is missing or wrong.
///
/// ```typescript
/// import { RunsQuery } from "./types/RunsQuery"; // exports RunsQueryVariables
/// useQuery<RunsQuery>(RUNS_QUERY);               // <- reported
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVariablesTypeIssue {
    pub context: SourceContext,
    /// Callee name of the hook (e.g., "useQuery").
    pub hook: String,
    /// First type argument (e.g., "RunsQuery").
    pub result_type: String,
    /// Expected second type argument (e.g., "RunsQueryVariables").
    pub variables_type: String,
    /// Second type argument actually written, when it names another type.
    pub found: Option<String>,
    /// File that declares `variables_type`.
    pub target_path: String,
}

impl MissingVariablesTypeIssue {
    pub fn rule() -> Rule {
        Rule::MissingVariablesType
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during analysis. Every issue is an error.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingVariablesType(MissingVariablesTypeIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingVariablesType(_) => MissingVariablesTypeIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    /// File the issue points into.
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Common reporting interface over all issue types.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for the "= hint:" line.
    fn hint(&self) -> Option<String> {
        None
    }
}

impl Report for MissingVariablesTypeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "`{hook}<{result}>(...)` should be `{hook}<{result}, {variables}>(...)`",
            hook = self.hook,
            result = self.result_type,
            variables = self.variables_type,
        )
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} is exported from {}",
            self.variables_type, self.target_path
        ))
    }

    fn hint(&self) -> Option<String> {
        self.found.as_ref().map(|found| {
            format!(
                "second type argument is `{}`, expected `{}`",
                found, self.variables_type
            )
        })
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.col(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // file_path, line, col, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Resolution Warnings
// ============================================================

/// Why a hook call could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// No top-level named import binds the result type.
    MissingImport { type_name: String },
    /// The result type comes from a bare module specifier.
    NonRelativeImport {
        type_name: String,
        /// Name exported by the module, differs from `type_name` for renamed imports.
        imported_name: String,
        module_path: String,
    },
    /// The resolved target file could not be read (or parsed).
    UnreadableTarget { path: String, error: String },
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionFailure::MissingImport { type_name } => {
                write!(f, "no named import binds `{}`", type_name)
            }
            ResolutionFailure::NonRelativeImport {
                type_name,
                imported_name,
                module_path,
            } if imported_name != type_name => write!(
                f,
                "`{} as {}` is imported from non-relative module \"{}\"",
                imported_name, type_name, module_path
            ),
            ResolutionFailure::NonRelativeImport {
                type_name,
                module_path,
                ..
            } => write!(
                f,
                "`{}` is imported from non-relative module \"{}\"",
                type_name, module_path
            ),
            ResolutionFailure::UnreadableTarget { path, error } => {
                write!(f, "cannot read {}: {}", path, error)
            }
        }
    }
}

/// A hook call that was skipped because its types could not be resolved.
///
/// Never a lint finding: it does not count towards errors or the exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionWarning {
    pub context: SourceContext,
    pub failure: ResolutionFailure,
}

impl Ord for ResolutionWarning {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.context
            .location
            .cmp(&other.context.location)
            .then_with(|| self.failure.to_string().cmp(&other.failure.to_string()))
    }
}

impl PartialOrd for ResolutionWarning {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
