//! Source file discovery.
//!
//! Walks each include root (or the base directory) and keeps `.ts`, `.tsx`,
//! `.js` and `.jsx` files that no ignore rule matches. Ignored directories are
//! pruned instead of walked.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{Config, TEST_FILE_PATTERNS};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Which files to pick up below a base directory.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub verbose: bool,
}

impl<'a> ScanOptions<'a> {
    pub fn from_config(config: &'a Config, verbose: bool) -> Self {
        Self {
            includes: &config.includes,
            ignores: &config.ignores,
            ignore_test_files: config.ignore_test_files,
            verbose,
        }
    }
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files in path order.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

fn warn(verbose: bool, message: impl std::fmt::Display) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// Compiled ignore rules: literal path prefixes and glob patterns.
#[derive(Debug, Default)]
struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, options: &ScanOptions<'_>) -> Self {
        let mut set = Self::default();

        for raw in options.ignores {
            if !is_glob_pattern(raw) {
                set.prefixes.push(base_dir.join(raw));
                continue;
            }
            match Pattern::new(raw) {
                Ok(pattern) => set.patterns.push(pattern),
                Err(e) => warn(
                    options.verbose,
                    format!("Invalid ignore pattern '{}': {}", raw, e),
                ),
            }
        }

        if options.ignore_test_files {
            set.patterns
                .extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        set
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self
                .patterns
                .iter()
                .any(|pattern| pattern.matches(&path.to_string_lossy()))
    }
}

/// Directories to walk: the base directory, or every existing include.
/// Glob includes expand to the directories they match.
fn scan_roots(base_dir: &Path, options: &ScanOptions<'_>) -> Vec<PathBuf> {
    if options.includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in options.includes {
        let path = base_dir.join(inc);
        if is_glob_pattern(inc) {
            match glob(&path.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten().filter(|e| e.is_dir())),
                Err(e) => warn(
                    options.verbose,
                    format!("Invalid glob pattern '{}': {}", inc, e),
                ),
            }
        } else if path.exists() {
            roots.push(path);
        } else {
            warn(
                options.verbose,
                format!("Include path does not exist: {}", path.display()),
            );
        }
    }
    roots
}

pub fn scan_files(base_dir: &str, options: ScanOptions<'_>) -> ScanResult {
    let base = Path::new(base_dir);
    let ignores = IgnoreSet::new(base, &options);

    let mut result = ScanResult {
        files: BTreeSet::new(),
        skipped_count: 0,
    };

    for root in scan_roots(base, &options) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignores.is_ignored(entry.path()));

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_scannable_file(entry.path()) => {
                    result
                        .files
                        .insert(entry.path().to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(e) => {
                    result.skipped_count += 1;
                    warn(options.verbose, format!("Cannot access path: {}", e));
                }
            }
        }
    }

    result
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
