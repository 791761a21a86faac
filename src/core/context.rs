use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        exports::{ExportLookup, export_lookup_for},
        file_scanner::{ScanOptions, scan_files},
        parsers::tsx::{ParsedSource, parse_source},
    },
    issues::{Issue, ParseErrorIssue, ResolutionWarning},
    rules::{FileCheckResult, check_file},
};

/// Sorted output of running the rule over every parsed file.
#[derive(Debug, Default)]
pub struct Findings {
    pub issues: Vec<Issue>,
    pub warnings: Vec<ResolutionWarning>,
}

/// Analysis context for one run.
///
/// Holds the merged configuration and the scanned file list. Parsing and
/// checking happen lazily on first access and are cached afterwards.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--source-root`)
/// 2. `.gqlvarsrc.json` found from the source root upwards
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// All source files to analyze (TSX/JSX/TS/JS), in path order.
    pub files: BTreeSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parsed AST for each source file.
    parsed_files: OnceCell<BTreeMap<String, ParsedSource>>,

    /// Files that could not be read or parsed.
    parsed_files_errors: OnceCell<Vec<ParseErrorIssue>>,

    findings: OnceCell<Findings>,
}

impl CheckContext {
    /// Load configuration and scan source files.
    ///
    /// # Errors
    ///
    /// Returns error if the source root is not valid UTF-8 or the config
    /// file is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let scan_result = scan_files(path, ScanOptions::from_config(&config, verbose));
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            parsed_files: OnceCell::new(),
            parsed_files_errors: OnceCell::new(),
            findings: OnceCell::new(),
        })
    }

    /// Get parsed AST for all source files (lazy initialization).
    ///
    /// Files are read and parsed in parallel, each with its own `SourceMap`.
    /// Failures are collected separately, see [`Self::parsed_files_errors`].
    pub fn parsed_files(&self) -> &BTreeMap<String, ParsedSource> {
        self.parsed_files.get_or_init(|| {
            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let parse_result = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| {
                            parse_source(code, file_path, Arc::new(SourceMap::default()))
                        });
                    (file_path.clone(), parse_result)
                })
                .collect();

            let mut parsed = BTreeMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in parse_results {
                match result {
                    Ok(p) => {
                        parsed.insert(file_path, p);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parsed_files_errors.set(errors);
            parsed
        })
    }

    /// Files that failed to read or parse. Populated by [`Self::parsed_files`].
    pub fn parsed_files_errors(&self) -> &Vec<ParseErrorIssue> {
        self.parsed_files();
        self.parsed_files_errors.get_or_init(Vec::new)
    }

    /// Run the rule over every parsed file (lazy initialization).
    ///
    /// Parse errors are included as [`Issue::ParseError`]. Issues and
    /// warnings are sorted by file, line, column and message.
    pub fn findings(&self) -> &Findings {
        self.findings.get_or_init(|| {
            let export_lookup = export_lookup_for(self.config.export_lookup);
            let mut findings =
                check_parsed_files(self.parsed_files(), &self.config, export_lookup.as_ref());
            findings.issues.extend(
                self.parsed_files_errors()
                    .iter()
                    .cloned()
                    .map(Issue::ParseError),
            );

            findings.issues.sort();
            findings.warnings.sort();
            findings
        })
    }
}

/// Run the rule over all parsed files in parallel, then merge sequentially.
fn check_parsed_files(
    parsed_files: &BTreeMap<String, ParsedSource>,
    config: &Config,
    export_lookup: &dyn ExportLookup,
) -> Findings {
    let results: Vec<FileCheckResult> = parsed_files
        .par_iter()
        .map(|(file_path, parsed)| check_file(file_path, parsed, config, export_lookup))
        .collect();

    let mut findings = Findings::default();
    for result in results {
        findings
            .issues
            .extend(result.issues.into_iter().map(Issue::MissingVariablesType));
        findings.warnings.extend(result.warnings);
    }
    findings
}
