//! Line rewriting after filtering

use regex::Regex;

use crate::bullet;

/// A search pattern with its replacement template.
///
/// The template supports `$1`/`${name}` back-references to groups captured by
/// the search pattern.
#[derive(Debug, Clone)]
pub struct Substitution {
    pub search: Regex,
    pub replacement: String,
}

/// Controls how kept lines are rewritten.
#[derive(Debug, Clone, Default)]
pub struct TransformConfig {
    pub sub_pattern: Option<Substitution>,
    /// Drop `key:: value` block-property lines entirely.
    pub remove_block_properties: bool,
    /// Preserve continuation lines instead of joining them onto their bullet.
    pub keep_new_lines: bool,
}

/// Rewrite kept lines. Order is preserved; the output never has more lines
/// than the input (property lines are removed, continuations may be joined).
pub fn transform(lines: &[String], config: &TransformConfig) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines {
        if config.remove_block_properties && bullet::is_block_property(line) {
            continue;
        }

        let rewritten = match &config.sub_pattern {
            Some(sub) => {
                // Substitute on the content only; indentation is re-attached
                // unchanged so depth survives any rewrite.
                let (indent, content) = bullet::split_indent(line);
                let replaced = sub.search.replace_all(content, sub.replacement.as_str());
                format!("{indent}{replaced}")
            }
            None => line.clone(),
        };

        if config.keep_new_lines || bullet::is_bullet(&rewritten) {
            out.push(rewritten);
            continue;
        }
        // A continuation line folds onto its bullet with a single space.
        match out.last_mut() {
            Some(previous) => {
                previous.push(' ');
                previous.push_str(rewritten.trim_start());
            }
            None => out.push(rewritten),
        }
    }

    out
}
