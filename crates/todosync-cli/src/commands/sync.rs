//! Sync and check command implementations

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use todosync_core::{Document, MatchKind, classify, extract, sync};

use crate::cli::SyncOptions;
use crate::error::Result;
use crate::settings::Settings;

/// Run the sync command
///
/// Rewrites the destination's delimited block from the filtered source block.
/// With `dry_run`, prints the change as a line diff instead of writing.
pub fn run_sync(options: SyncOptions, dry_run: bool) -> Result<()> {
    let settings = Settings::resolve(options)?;
    let input_text = todosync_fs::read_text(&settings.input)?;
    let output_text = todosync_fs::read_text(&settings.output)?;

    let updated = sync(&input_text, &output_text, &settings.sync)?;

    if updated == output_text {
        println!(
            "{} {} is already in sync.",
            "OK".green().bold(),
            settings.output.display()
        );
        return Ok(());
    }

    if dry_run {
        println!(
            "{} Would update {}:",
            "=>".blue().bold(),
            settings.output.display()
        );
        print_diff(&output_text, &updated);
        return Ok(());
    }

    todosync_fs::write_atomic(&settings.output, &updated)?;
    println!(
        "{} Updated {}.",
        "OK".green().bold(),
        settings.output.display()
    );
    Ok(())
}

/// Run the check command
///
/// Resolves both delimiter pairs and reports what the filter would keep,
/// without writing anything.
pub fn run_check(options: SyncOptions) -> Result<()> {
    println!("{} Checking sync configuration...", "=>".blue().bold());

    let settings = Settings::resolve(options)?;
    let input_text = todosync_fs::read_text(&settings.input)?;
    let output_text = todosync_fs::read_text(&settings.output)?;

    let source = Document::parse(&input_text);
    let extracted = extract(
        &source,
        &settings.sync.input_start,
        &settings.sync.input_end,
        false,
    )?;
    let kinds = classify(&extracted.block, &settings.sync.filter);
    let direct = kinds
        .iter()
        .filter(|k| **k == MatchKind::DirectMatch)
        .count();
    let inherited = kinds
        .iter()
        .filter(|k| **k == MatchKind::InheritedMatch)
        .count();

    let destination = Document::parse(&output_text);
    let target = extract(
        &destination,
        &settings.sync.output_start,
        &settings.sync.output_end,
        false,
    )?;

    println!(
        "{} Source block: {} lines, {} kept ({} direct, {} inherited).",
        "OK".green().bold(),
        extracted.block.len(),
        direct + inherited,
        direct,
        inherited
    );
    println!(
        "{} Destination block: {} lines.",
        "OK".green().bold(),
        target.block.len()
    );
    if direct + inherited == 0 {
        println!(
            "{} The filter keeps nothing; a sync would write an empty block.",
            "note".yellow().bold()
        );
    }
    Ok(())
}

fn print_diff(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", format!("-{change}").red()),
            ChangeTag::Insert => print!("{}", format!("+{change}").green()),
            ChangeTag::Equal => print!(" {change}"),
        }
    }
}
