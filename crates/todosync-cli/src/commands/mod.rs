//! Command implementations

mod completions;
mod sync;

pub use completions::run_completions;
pub use sync::{run_check, run_sync};
