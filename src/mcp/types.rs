use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ExportLookupKind};
use crate::issues::{MissingVariablesTypeIssue, ParseErrorIssue, ResolutionFailure, ResolutionWarning};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub ignore_test_files: bool,
    pub hooks: Vec<String>,
    pub result_suffix: String,
    pub variables_suffix: String,
    pub target_extension: String,
    pub export_lookup: String,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            ignores: c.ignores,
            includes: c.includes,
            ignore_test_files: c.ignore_test_files,
            hooks: c.hooks,
            result_suffix: c.result_suffix,
            variables_suffix: c.variables_suffix,
            target_extension: c.target_extension,
            export_lookup: match c.export_lookup {
                ExportLookupKind::Textual => "textual",
                ExportLookupKind::Structural => "structural",
            }
            .to_string(),
        }
    }
}

// ============================================================
// Scan Types (scan_variables_types)
// ============================================================

/// One hook call missing its variables type.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingVariablesTypeItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub source_line: String,
    pub hook: String,
    pub result_type: String,
    pub expected_variables_type: String,
    /// Second type argument as written, when present but wrong
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_variables_type: Option<String>,
    /// File that declares the expected variables type
    pub target_path: String,
}

impl From<&MissingVariablesTypeIssue> for MissingVariablesTypeItem {
    fn from(issue: &MissingVariablesTypeIssue) -> Self {
        Self {
            file_path: issue.context.file_path().to_string(),
            line: issue.context.line(),
            col: issue.context.col(),
            source_line: issue.context.source_line.clone(),
            hook: issue.hook.clone(),
            result_type: issue.result_type.clone(),
            expected_variables_type: issue.variables_type.clone(),
            found_variables_type: issue.found.clone(),
            target_path: issue.target_path.clone(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

impl From<&ParseErrorIssue> for ParseErrorItem {
    fn from(issue: &ParseErrorIssue) -> Self {
        Self {
            file_path: issue.file_path.clone(),
            error: issue.error.clone(),
        }
    }
}

/// Result of scan_variables_types
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariablesTypeScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub source_files_checked: usize,
    /// Call sites skipped because their types could not be resolved
    pub unresolved_count: usize,
    pub items: Vec<MissingVariablesTypeItem>,
    pub parse_errors: Vec<ParseErrorItem>,
    pub pagination: Pagination,
}

// ============================================================
// Unresolved Types (scan_unresolved)
// ============================================================

/// A hook call that was skipped.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub source_line: String,
    /// One of "missingImport", "nonRelativeImport", "unreadableTarget"
    pub reason: String,
    pub message: String,
}

impl From<&ResolutionWarning> for UnresolvedItem {
    fn from(warning: &ResolutionWarning) -> Self {
        let reason = match warning.failure {
            ResolutionFailure::MissingImport { .. } => "missingImport",
            ResolutionFailure::NonRelativeImport { .. } => "nonRelativeImport",
            ResolutionFailure::UnreadableTarget { .. } => "unreadableTarget",
        };
        Self {
            file_path: warning.context.file_path().to_string(),
            line: warning.context.line(),
            col: warning.context.col(),
            source_line: warning.context.source_line.clone(),
            reason: reason.to_string(),
            message: warning.failure.to_string(),
        }
    }
}

/// Result of scan_unresolved
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedScanResult {
    pub total_count: usize,
    pub items: Vec<UnresolvedItem>,
    pub pagination: Pagination,
}

// ============================================================
// Shared Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
