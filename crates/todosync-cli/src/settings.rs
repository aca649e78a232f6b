//! Flag and profile merging
//!
//! Command-line flags win over profile values; boolean flags or with the
//! profile. The merged result builds the core `SyncConfig`, so pattern
//! compilation errors surface as core `InvalidPattern` before any file is
//! touched for writing.

use std::path::{Path, PathBuf};

use regex::Regex;

use todosync_core::{
    DelimiterSpec, Error as CoreError, FilterConfig, Substitution, SyncConfig, TransformConfig,
    UNLIMITED_LEVEL,
};
use todosync_fs::{Profile, load_profile};

use crate::cli::SyncOptions;
use crate::error::{CliError, Result};

/// Profile file picked up from the working directory when `--config` is absent.
const DEFAULT_PROFILE: &str = "todosync.toml";

/// Sentinel tokens accepted where a delimiter pattern is expected.
const BOF: &str = "BOF";
const EOF: &str = "EOF";

/// A fully resolved run: both file paths plus the core configuration.
#[derive(Debug)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sync: SyncConfig,
}

impl Settings {
    pub fn resolve(options: SyncOptions) -> Result<Self> {
        let profile = match &options.config {
            Some(path) => load_profile(path)?,
            None if Path::new(DEFAULT_PROFILE).exists() => {
                load_profile(Path::new(DEFAULT_PROFILE))?
            }
            None => Profile::default(),
        };

        let input = options
            .input
            .or(profile.input)
            .ok_or_else(|| CliError::user("no input file given (use --input or a profile)"))?;
        let output = options
            .output
            .or(profile.output)
            .ok_or_else(|| CliError::user("no output file given (use --output or a profile)"))?;

        let input_start = delimiter(
            options.input_delim_start.or(profile.input_delim_start),
            DelimiterSpec::DocumentStart,
        )?;
        let input_end = delimiter(
            options.input_delim_end.or(profile.input_delim_end),
            DelimiterSpec::DocumentEnd,
        )?;
        let output_start = required_delimiter(
            options.output_delim_start.or(profile.output_delim_start),
            "--output-delim-start",
        )?;
        let output_end = required_delimiter(
            options.output_delim_end.or(profile.output_delim_end),
            "--output-delim-end",
        )?;

        let pattern = options
            .required_pattern
            .or(profile.required_pattern)
            .ok_or_else(|| CliError::user("no required pattern given (use --required-pattern)"))?;
        let required_pattern = compile(&pattern)?;

        let max_level = options
            .max_level
            .or(profile.bulletpoint_max_level)
            .unwrap_or(UNLIMITED_LEVEL);
        if max_level < UNLIMITED_LEVEL {
            return Err(CliError::user(format!(
                "invalid max level {max_level}: must be -1 (unlimited) or greater"
            )));
        }

        let mut filter = FilterConfig::new(required_pattern);
        filter.max_level = max_level;
        filter.recursive = options.recursive || profile.recursive.unwrap_or(false);
        if let Some(width) = options.indent_width.or(profile.indent_width) {
            if width == 0 {
                return Err(CliError::user("indent width must be at least 1"));
            }
            filter.indent_width = width;
        }

        let sub_search = options.sub_search.or(profile.sub_search);
        let sub_replace = options.sub_replace.or(profile.sub_replace);
        let sub_pattern = match (sub_search, sub_replace) {
            (Some(search), Some(replacement)) => Some(Substitution {
                search: compile(&search)?,
                replacement,
            }),
            (None, None) => None,
            _ => {
                return Err(CliError::user(
                    "sub_search and sub_replace must be given together",
                ));
            }
        };

        let transform = TransformConfig {
            sub_pattern,
            remove_block_properties: options.remove_block_properties
                || profile.remove_block_properties.unwrap_or(false),
            keep_new_lines: options.keep_new_lines || profile.keep_new_lines.unwrap_or(false),
        };

        let sync = SyncConfig {
            input_start,
            input_end,
            output_start,
            output_end,
            filter,
            transform,
            strict: options.strict || profile.strict.unwrap_or(false),
        };
        sync.validate()?;

        Ok(Self {
            input,
            output,
            sync,
        })
    }
}

/// Map a flag value to a delimiter spec, recognizing the BOF/EOF sentinels.
fn delimiter(value: Option<String>, default: DelimiterSpec) -> Result<DelimiterSpec> {
    match value.as_deref() {
        None => Ok(default),
        Some(BOF) => Ok(DelimiterSpec::DocumentStart),
        Some(EOF) => Ok(DelimiterSpec::DocumentEnd),
        Some(pattern) => Ok(DelimiterSpec::pattern(pattern)?),
    }
}

fn required_delimiter(value: Option<String>, flag: &str) -> Result<DelimiterSpec> {
    let value = value.ok_or_else(|| CliError::user(format!("no {flag} delimiter given")))?;
    delimiter(Some(value), DelimiterSpec::DocumentStart)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|source| CliError::Core(CoreError::invalid_pattern(pattern, source)))
}
