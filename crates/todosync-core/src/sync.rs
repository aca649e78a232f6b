//! End-to-end sync orchestration

use tracing::debug;

use crate::config::SyncConfig;
use crate::delimiter::extract;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::filter::filter;
use crate::splice::splice;
use crate::transform::transform;

/// Run the full pipeline: extract the source block, filter and rewrite it,
/// then splice it into the destination block. Returns the new destination
/// text; neither input is modified.
///
/// Pure and idempotent: running again with the returned text as the new
/// destination produces the same result.
pub fn sync(input_text: &str, output_text: &str, config: &SyncConfig) -> Result<String> {
    config.validate()?;

    let source = Document::parse(input_text);
    let extracted = extract(&source, &config.input_start, &config.input_end, false)?;
    debug!(lines = extracted.block.len(), "extracted source block");

    let kept = filter(&extracted.block, &config.filter);
    if config.strict && kept.is_empty() {
        return Err(Error::EmptyResult);
    }

    let block = transform(&kept, &config.transform);
    debug!(lines = block.len(), "transformed block");

    let destination = Document::parse(output_text);
    let target = extract(
        &destination,
        &config.output_start,
        &config.output_end,
        false,
    )?;

    let lines = splice(&target, &block);
    Ok(Document::from_lines(lines, destination.trailing_newline()).render())
}
