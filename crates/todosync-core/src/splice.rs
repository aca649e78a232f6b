//! Document reassembly

use crate::delimiter::Extraction;

/// Rebuild the destination line sequence around a new block:
/// prefix ++ start delimiter ++ block ++ end delimiter ++ suffix.
///
/// Everything outside the delimiters comes from `extraction` untouched, which
/// is what makes the sync byte-preserving for the surrounding document. An
/// empty `new_block` is a valid empty sync.
pub fn splice(extraction: &Extraction, new_block: &[String]) -> Vec<String> {
    let capacity = extraction.prefix.len() + new_block.len() + extraction.suffix.len() + 2;
    let mut out = Vec::with_capacity(capacity);
    out.extend_from_slice(&extraction.prefix);
    if let Some(start) = &extraction.start_line {
        out.push(start.clone());
    }
    out.extend_from_slice(new_block);
    if let Some(end) = &extraction.end_line {
        out.push(end.clone());
    }
    out.extend_from_slice(&extraction.suffix);
    out
}
