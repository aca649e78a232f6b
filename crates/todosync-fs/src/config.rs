//! Profile loading from `todosync.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, io};

/// A saved sync profile. Every field is optional; command-line flags override
/// whatever the profile supplies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub input_delim_start: Option<String>,
    pub input_delim_end: Option<String>,
    pub output_delim_start: Option<String>,
    pub output_delim_end: Option<String>,
    pub required_pattern: Option<String>,
    pub bulletpoint_max_level: Option<i32>,
    pub indent_width: Option<usize>,
    pub sub_search: Option<String>,
    pub sub_replace: Option<String>,
    pub remove_block_properties: Option<bool>,
    pub keep_new_lines: Option<bool>,
    pub recursive: Option<bool>,
    pub strict: Option<bool>,
}

/// Load a profile from a TOML file.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let content = io::read_text(path)?;
    let profile = toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "loaded profile");
    Ok(profile)
}
