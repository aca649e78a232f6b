//! Delimiter resolution and block extraction

use regex::Regex;
use tracing::debug;

use crate::document::Document;
use crate::error::{Error, Result};

/// Where a block boundary comes from: a pattern that must match exactly one
/// line, or the physical edge of the document (consuming no line).
#[derive(Debug, Clone)]
pub enum DelimiterSpec {
    /// Boundary before the first line of the document.
    DocumentStart,
    /// Boundary after the last line of the document.
    DocumentEnd,
    /// Boundary at the unique line matching the pattern.
    Pattern(Regex),
}

impl DelimiterSpec {
    /// Compile a pattern delimiter.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|source| Error::invalid_pattern(pattern, source))?;
        Ok(Self::Pattern(re))
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Pattern(_))
    }
}

/// A located block, with everything needed to reassemble the document losslessly.
///
/// `start_line` and `end_line` hold the matched delimiter lines verbatim; they
/// are `None` for sentinel boundaries and for inclusive extraction (where the
/// delimiter lines are part of `block`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Lines before the start boundary.
    pub prefix: Vec<String>,
    pub start_line: Option<String>,
    /// Lines between the boundaries.
    pub block: Vec<String>,
    pub end_line: Option<String>,
    /// Lines after the end boundary.
    pub suffix: Vec<String>,
}

/// Resolved position of one boundary.
enum Boundary {
    /// Document edge at this line index; no line is consumed.
    Edge(usize),
    /// The matched delimiter line at this index.
    Line(usize),
}

/// Locate the block bounded by `start` and `end` in `document`.
///
/// A non-sentinel delimiter must match exactly one line of its scan range; the
/// end delimiter is scanned only among lines after the resolved start. With
/// `inclusive` set, the matched delimiter lines are folded into `block` instead
/// of being carried separately.
pub fn extract(
    document: &Document,
    start: &DelimiterSpec,
    end: &DelimiterSpec,
    inclusive: bool,
) -> Result<Extraction> {
    let lines = document.lines();

    let start_boundary = resolve(start, lines, 0)?;
    let (block_start, after_start) = match start_boundary {
        Boundary::Edge(at) => (at, at),
        Boundary::Line(at) => {
            if inclusive {
                (at, at + 1)
            } else {
                (at + 1, at + 1)
            }
        }
    };

    let end_boundary = resolve(end, lines, after_start)?;
    let end_index = match end_boundary {
        Boundary::Edge(at) | Boundary::Line(at) => at,
    };
    if end_index < block_start {
        return Err(Error::InvalidRange {
            start: block_start,
            end: end_index,
        });
    }

    let (prefix, start_line) = match start_boundary {
        Boundary::Edge(at) => (lines[..at].to_vec(), None),
        Boundary::Line(at) if inclusive => (lines[..at].to_vec(), None),
        Boundary::Line(at) => (lines[..at].to_vec(), Some(lines[at].clone())),
    };
    let (block_end, end_line, suffix_from) = match end_boundary {
        Boundary::Edge(at) => (at, None, at),
        Boundary::Line(at) if inclusive => (at + 1, None, at + 1),
        Boundary::Line(at) => (at, Some(lines[at].clone()), at + 1),
    };

    debug!(
        block_start,
        block_end,
        lines = block_end - block_start,
        "resolved block boundaries"
    );

    Ok(Extraction {
        prefix,
        start_line,
        block: lines[block_start..block_end].to_vec(),
        end_line,
        suffix: lines[suffix_from..].to_vec(),
    })
}

/// Resolve one boundary, scanning `lines[from..]` for pattern delimiters.
fn resolve(spec: &DelimiterSpec, lines: &[String], from: usize) -> Result<Boundary> {
    match spec {
        DelimiterSpec::DocumentStart => Ok(Boundary::Edge(0)),
        DelimiterSpec::DocumentEnd => Ok(Boundary::Edge(lines.len())),
        DelimiterSpec::Pattern(re) => unique_match(&lines[from..], from, re).map(Boundary::Line),
    }
}

/// Index of the single line matching `re`, or the appropriate error.
fn unique_match(lines: &[String], offset: usize, re: &Regex) -> Result<usize> {
    let mut found = None;
    let mut count = 0;
    for (idx, line) in lines.iter().enumerate() {
        if re.is_match(line) {
            count += 1;
            if found.is_none() {
                found = Some(offset + idx);
            }
        }
    }
    match found {
        Some(at) if count == 1 => Ok(at),
        Some(_) => Err(Error::DelimiterAmbiguous {
            pattern: re.as_str().to_string(),
            count,
        }),
        None => Err(Error::DelimiterNotFound {
            pattern: re.as_str().to_string(),
        }),
    }
}
