//! Bullet line structure
//!
//! Depth is derived from the leading-whitespace run every time it is needed and
//! never stored. A top-level bullet (`- ` at column 0) has depth 1; each indent
//! unit (two spaces by default, or one tab) adds a level.

use regex::Regex;
use std::sync::LazyLock;

/// Default number of leading spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Regex for Logseq `key:: value` block-property lines.
/// Matches continuation lines only; a bullet marker never precedes the key.
static BLOCK_PROPERTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Za-z][A-Za-z0-9_.-]*:: ").expect("Invalid block property regex")
});

/// Nesting depth of a line. A top-level bullet is depth 1.
pub fn depth(line: &str, indent_width: usize) -> usize {
    indent_units(line, indent_width) + 1
}

/// Count leading indent units. A tab is one unit; `indent_width` spaces are one
/// unit; a partial trailing run of spaces does not count.
fn indent_units(line: &str, indent_width: usize) -> usize {
    let width = indent_width.max(1);
    let mut units = 0;
    let mut spaces = 0;
    for ch in line.chars() {
        match ch {
            ' ' => {
                spaces += 1;
                if spaces == width {
                    units += 1;
                    spaces = 0;
                }
            }
            '\t' => {
                units += 1;
                spaces = 0;
            }
            _ => break,
        }
    }
    units
}

/// Whether the line opens a bullet node (content after indentation starts with
/// the `-` marker). Anything else is a continuation of the bullet above it.
pub fn is_bullet(line: &str) -> bool {
    let content = line.trim_start();
    content == "-" || content.starts_with("- ")
}

/// Whether the line is a `key:: value` block property.
pub fn is_block_property(line: &str) -> bool {
    BLOCK_PROPERTY_REGEX.is_match(line)
}

/// Split a line into its leading whitespace and the content after it.
pub fn split_indent(line: &str) -> (&str, &str) {
    let content = line.trim_start();
    line.split_at(line.len() - content.len())
}
