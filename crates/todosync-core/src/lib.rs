//! Core sync pipeline for TODO Sync
//!
//! Extracts a delimited block of bullet lines from a source document, filters
//! and rewrites them, and splices the result into a delimited block of a
//! destination document. Pure text-in/text-out; the filesystem and CLI
//! collaborators live in their own crates.

pub mod bullet;
pub mod config;
pub mod delimiter;
pub mod document;
pub mod error;
pub mod filter;
pub mod splice;
pub mod sync;
pub mod transform;

pub use config::SyncConfig;
pub use delimiter::{DelimiterSpec, Extraction, extract};
pub use document::Document;
pub use error::{Error, Result};
pub use filter::{FilterConfig, MatchKind, UNLIMITED_LEVEL, classify, filter};
pub use splice::splice;
pub use sync::sync;
pub use transform::{Substitution, TransformConfig, transform};
