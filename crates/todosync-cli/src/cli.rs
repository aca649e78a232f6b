//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// TODO Sync - Mirror a filtered outline block into another document
#[derive(Parser, Debug)]
#[command(name = "todosync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synchronize the filtered source block into the destination file
    ///
    /// Extracts the delimited block from the source outline, keeps the lines
    /// matching the required pattern, and rewrites the delimited block of the
    /// destination file. Everything outside the destination delimiters is
    /// preserved byte for byte.
    ///
    /// Examples:
    ///   todosync sync -i journal.md -o README.md \
    ///       --output-delim-start "<!-- sync:start -->" \
    ///       --output-delim-end "<!-- sync:end -->" \
    ///       --required-pattern "TODO|DONE" --recursive
    ///   todosync sync --config todosync.toml --dry-run
    Sync {
        #[command(flatten)]
        options: SyncOptions,

        /// Preview the change as a diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate delimiters and report what a sync would keep
    ///
    /// Resolves both delimiter pairs against both files and prints how many
    /// source lines the filter keeps, without writing anything.
    Check {
        #[command(flatten)]
        options: SyncOptions,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Flags shared by sync and check. Any omitted flag falls back to the profile
/// file; boolean flags combine with the profile by or-ing.
#[derive(Args, Debug, Default)]
pub struct SyncOptions {
    /// Source file (e.g. a Logseq journal page)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination file whose delimited block is rewritten
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Regex locating the source block start, or BOF for the document edge
    #[arg(long, value_name = "PATTERN")]
    pub input_delim_start: Option<String>,

    /// Regex locating the source block end, or EOF for the document edge
    #[arg(long, value_name = "PATTERN")]
    pub input_delim_end: Option<String>,

    /// Regex locating the destination block start (must match exactly one line)
    #[arg(long, value_name = "PATTERN")]
    pub output_delim_start: Option<String>,

    /// Regex locating the destination block end (must match exactly one line)
    #[arg(long, value_name = "PATTERN")]
    pub output_delim_end: Option<String>,

    /// Regex a line must match to be kept
    #[arg(short = 'p', long, value_name = "PATTERN")]
    pub required_pattern: Option<String>,

    /// Maximum bullet depth to keep; -1 for unlimited, 1 keeps top-level only
    #[arg(long, value_name = "LEVEL")]
    pub max_level: Option<i32>,

    /// Leading spaces per nesting level
    #[arg(long, value_name = "SPACES")]
    pub indent_width: Option<usize>,

    /// Search regex applied to each kept line's content
    #[arg(long, value_name = "PATTERN", requires = "sub_replace")]
    pub sub_search: Option<String>,

    /// Replacement template for --sub-search ($1 etc. for captured groups)
    #[arg(long, value_name = "TEMPLATE", requires = "sub_search")]
    pub sub_replace: Option<String>,

    /// Drop Logseq `key:: value` property lines
    #[arg(long)]
    pub remove_block_properties: bool,

    /// Preserve a bullet's continuation lines instead of joining them
    #[arg(long)]
    pub keep_new_lines: bool,

    /// Keep every descendant of a kept line
    #[arg(short, long)]
    pub recursive: bool,

    /// Fail when the filter keeps no lines
    #[arg(long)]
    pub strict: bool,

    /// Profile file supplying defaults for omitted flags
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
