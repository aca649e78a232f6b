//! Aggregate configuration for a sync run

use crate::delimiter::DelimiterSpec;
use crate::error::{Error, Result};
use crate::filter::FilterConfig;
use crate::transform::TransformConfig;

/// Everything a single sync run needs, built once and passed by reference to
/// every stage. No stage reads ambient state.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Locates the source block. Either side may be a document-edge sentinel.
    pub input_start: DelimiterSpec,
    pub input_end: DelimiterSpec,
    /// Locates the destination block. Sentinels are rejected here: the
    /// destination must carry literal markers to be reconstructable.
    pub output_start: DelimiterSpec,
    pub output_end: DelimiterSpec,
    pub filter: FilterConfig,
    pub transform: TransformConfig,
    /// Treat a filtered block with zero kept lines as an error instead of a
    /// valid empty sync.
    pub strict: bool,
}

impl SyncConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output_start.is_sentinel() {
            return Err(Error::SentinelNotAllowed {
                side: "output start",
            });
        }
        if self.output_end.is_sentinel() {
            return Err(Error::SentinelNotAllowed { side: "output end" });
        }
        Ok(())
    }
}
