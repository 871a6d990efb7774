//! Common types and utilities shared by both summarizer strategies.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

// ============ Threshold Constants ============

/// Share of source bytes inside syntax-error nodes above which a parse is rejected
pub const DEFAULT_MAX_ERROR_RATIO: f64 = 0.25;
/// Continuation lines scanned for the end of a multi-line Objective-C selector
pub const MAX_SIGNATURE_CONTINUATION_LINES: usize = 8;
pub const MAX_DEF_LINE_LEN: usize = 240;

// ============ Output Markers ============

pub const BANNER_TITLE: &str = "// Skeleton Summary";
pub const BANNER_RULE: &str = "// ─────────────────────────────────────────";
pub const BODY_PLACEHOLDER: &str = "{ /* implementation hidden */ }";
pub const HIDDEN_MARKER: &str = "/* hidden */";
const MULTILINE_STRING_DELIMITER: &str = "\"\"\"";

/// Matches a location marker line produced by an earlier run
pub static LOCATION_MARKER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*// Line: \d+[ \t]*\r?$").unwrap());

/// Render the location marker for a 1-based line
pub fn location_marker(line: usize) -> String {
    format!("// Line: {line}")
}

// ============ Line Annotator ============

/// Offset-to-line table for one source text, built once per parse.
///
/// All lookups answer in terms of the unmodified source, so markers never
/// drift when the rendered output has fewer lines than the input.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            starts,
            len: source.len(),
        }
    }

    /// 1-based line containing `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset.min(self.len)) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }

    /// Byte offset of the first character on the line containing `offset`
    pub fn line_start(&self, offset: usize) -> usize {
        self.starts[self.line_of(offset) - 1]
    }

    /// Byte range of a 1-based line, newline included
    pub fn line_span(&self, line: usize) -> Option<(usize, usize)> {
        let start = *self.starts.get(line.checked_sub(1)?)?;
        let end = self.starts.get(line).copied().unwrap_or(self.len);
        Some((start, end))
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

// ============ Output Normalizer ============

/// Strip trailing whitespace, collapse blank-line runs to a single blank line
/// and drop leading/trailing blank lines.
///
/// Lines inside a `"""` multi-line string literal are content, not layout,
/// and are kept byte for byte.
pub fn normalize_output(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut prev_blank = false;
    let mut in_literal = false;

    for line in text.lines() {
        let opens_or_closes = line.matches(MULTILINE_STRING_DELIMITER).count() % 2 == 1;
        if in_literal {
            // The closing line ends in code again.
            lines.push(if opens_or_closes { line.trim_end() } else { line });
            prev_blank = false;
            in_literal = !opens_or_closes;
            continue;
        }
        in_literal = opens_or_closes;

        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            if lines.is_empty() || prev_blank {
                continue;
            }
            prev_blank = true;
        } else {
            prev_blank = false;
        }
        lines.push(trimmed);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

// ============ Text Utilities ============

/// Get text content of a tree-sitter node
pub fn get_node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    let slice = source.get(start..end).unwrap_or(&[]);
    match std::str::from_utf8(slice) {
        Ok(text) => text.trim_end_matches(['\n', '\r']),
        Err(_) => "",
    }
}

/// Leading whitespace between `line_start` and `offset`, or `None` when other
/// text precedes `offset` on that line.
pub fn leading_indent(source: &str, line_start: usize, offset: usize) -> Option<&str> {
    let prefix = source.get(line_start..offset)?;
    prefix
        .chars()
        .all(|c| c == ' ' || c == '\t')
        .then_some(prefix)
}

/// Whitespace prefix of a line
pub fn indent_of(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}

/// Collapse internal whitespace runs to single spaces
pub fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a line to a maximum length, adding "..." if truncated
pub fn truncate_line(line: &str, max_len: usize) -> String {
    let mut out = String::new();
    let mut count = 0;
    let mut truncated = false;
    for ch in line.chars() {
        if count >= max_len {
            truncated = true;
            break;
        }
        out.push(ch);
        count += 1;
    }
    if truncated {
        out.push_str("...");
    }
    out
}
