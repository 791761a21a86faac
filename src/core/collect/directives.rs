//! Suppression directives.
//!
//! - `gqlvars-disable-next-line` silences the next non-comment line
//! - `gqlvars-disable` / `gqlvars-enable` silence the enclosed range
//!
//! A directive may name rules after the keyword. It applies when no rule is
//! named or when [`RULE_NAME`] is among them; a directive naming only other
//! rules is ignored. JSX comments (`{/* ... */}`) work the same way since swc
//! hands us the comment body without delimiters.
//!
//! When directives sit on consecutive lines they all apply to the first code
//! line below them. A blank line breaks the chain.

use std::collections::HashSet;

use swc_common::SourceMap;

use crate::core::parsers::tsx::ExtractedComments;
use crate::issues::RULE_NAME;

/// Maximum number of consecutive comment lines to skip when looking for
/// the line a `disable-next-line` directive targets.
pub const MAX_COMMENT_CHAIN_LINES: usize = 10;

const DISABLE_NEXT_LINE: &str = "gqlvars-disable-next-line";
const DISABLE: &str = "gqlvars-disable";
const ENABLE: &str = "gqlvars-enable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Disable,
    Enable,
    DisableNextLine,
}

impl Directive {
    /// Parse a directive from comment text (swc has already stripped `//` and `/* */`).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Longest prefix first
        let (directive, rest) = if let Some(rest) = strip_directive_prefix(text, DISABLE_NEXT_LINE)
        {
            (Self::DisableNextLine, rest)
        } else if let Some(rest) = strip_directive_prefix(text, DISABLE) {
            (Self::Disable, rest)
        } else if let Some(rest) = strip_directive_prefix(text, ENABLE) {
            (Self::Enable, rest)
        } else {
            return None;
        };

        names_this_rule(rest).then_some(directive)
    }
}

/// Match a directive keyword, requiring whitespace or end after it.
fn strip_directive_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

fn names_this_rule(rest: &str) -> bool {
    let mut names = rest
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .peekable();
    names.peek().is_none() || names.any(|name| name == RULE_NAME)
}

/// Inclusive line range, `end == usize::MAX` when never re-enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabledRange {
    pub start: usize,
    pub end: usize,
}

/// Suppressed lines for a single file.
#[derive(Debug, Default)]
pub struct Suppressions {
    pub disabled_lines: HashSet<usize>,
    pub disabled_ranges: Vec<DisabledRange>,
}

impl Suppressions {
    /// Collect all directives of a file in a single pass over its comments.
    pub fn collect(comments: &ExtractedComments, source_map: &SourceMap) -> Self {
        let mut suppressions = Self::default();

        let mut comments_with_lines: Vec<_> = comments
            .iter()
            .map(|cmt| {
                let loc = source_map.lookup_char_pos(cmt.span.lo);
                let leads_line = loc
                    .file
                    .get_line(loc.line.saturating_sub(1))
                    .is_some_and(|text| starts_line(&text, loc.col.0));
                (loc.line, leads_line, cmt)
            })
            .collect();
        comments_with_lines.sort_by_key(|(line, _, cmt)| (*line, cmt.span.lo));

        // Only comment-only lines extend a disable-next-line chain; a trailing
        // comment after code leaves its line a code line.
        let comment_lines: HashSet<usize> = comments_with_lines
            .iter()
            .filter(|(_, leads_line, _)| *leads_line)
            .map(|(line, _, _)| *line)
            .collect();

        let mut open_range: Option<usize> = None;

        for (line, _, cmt) in comments_with_lines {
            match Directive::parse(&cmt.text) {
                Some(Directive::Disable) => {
                    open_range.get_or_insert(line);
                }
                Some(Directive::Enable) => {
                    if let Some(start) = open_range.take() {
                        suppressions.disabled_ranges.push(DisabledRange {
                            start,
                            end: line.saturating_sub(1),
                        });
                    }
                }
                Some(Directive::DisableNextLine) => {
                    suppressions
                        .disabled_lines
                        .insert(find_next_non_comment_line(line, &comment_lines));
                }
                None => {}
            }
        }

        if let Some(start) = open_range {
            suppressions.disabled_ranges.push(DisabledRange {
                start,
                end: usize::MAX,
            });
        }

        suppressions
    }

    pub fn is_suppressed(&self, line: usize) -> bool {
        self.disabled_lines.contains(&line)
            || self
                .disabled_ranges
                .iter()
                .any(|r| line >= r.start && line <= r.end)
    }
}

/// True when only whitespace, or the `{` of a JSX expression container,
/// precedes the comment starting at char column `col`.
fn starts_line(line_text: &str, col: usize) -> bool {
    let prefix: String = line_text.chars().take(col).collect();
    matches!(prefix.trim(), "" | "{")
}

fn find_next_non_comment_line(line: usize, comment_lines: &HashSet<usize>) -> usize {
    let mut next = line + 1;
    let max_line = line + MAX_COMMENT_CHAIN_LINES;
    while comment_lines.contains(&next) && next < max_line {
        next += 1;
    }
    next
}
