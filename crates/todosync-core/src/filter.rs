//! Depth-aware inclusion filtering

use regex::Regex;
use tracing::debug;

use crate::bullet;

/// Depth ceiling value meaning "no ceiling".
pub const UNLIMITED_LEVEL: i32 = -1;

/// Controls which block lines are kept.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Lines must match this to be kept directly (regex search, not full match).
    pub required_pattern: Regex,
    /// Maximum kept depth; -1 means unlimited. A top-level bullet is depth 1.
    pub max_level: i32,
    /// Keep the whole subtree under a kept line.
    pub recursive: bool,
    /// Leading spaces per nesting level.
    pub indent_width: usize,
}

impl FilterConfig {
    pub fn new(required_pattern: Regex) -> Self {
        Self {
            required_pattern,
            max_level: UNLIMITED_LEVEL,
            recursive: false,
            indent_width: bullet::DEFAULT_INDENT_WIDTH,
        }
    }
}

/// How a line came to be kept, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    NoMatch,
    /// Satisfies the required pattern within the depth ceiling.
    DirectMatch,
    /// Kept only because an ancestor was kept and recursion is enabled,
    /// or because it continues a kept bullet.
    InheritedMatch,
}

impl MatchKind {
    pub fn is_kept(self) -> bool {
        !matches!(self, MatchKind::NoMatch)
    }
}

/// Classify every line of a block in one pass.
///
/// The walk keeps a stack of depths of kept bullets; a bullet of depth `d`
/// closes every stack entry of depth >= `d`, so inheritance stops at the first
/// sibling-or-shallower line. Descendants re-check the ceiling: inheritance
/// extends keeping downward but never past `max_level`. Continuation lines
/// (no bullet marker) share the fate of the bullet above them.
pub fn classify(lines: &[String], config: &FilterConfig) -> Vec<MatchKind> {
    let mut kinds = Vec::with_capacity(lines.len());
    let mut kept_depths: Vec<usize> = Vec::new();
    let mut bullet_kind = MatchKind::NoMatch;

    for line in lines {
        if !bullet::is_bullet(line) {
            kinds.push(if bullet_kind.is_kept() {
                MatchKind::InheritedMatch
            } else {
                MatchKind::NoMatch
            });
            continue;
        }

        let depth = bullet::depth(line, config.indent_width);
        while kept_depths.last().is_some_and(|&kept| depth <= kept) {
            kept_depths.pop();
        }

        let within_ceiling =
            config.max_level == UNLIMITED_LEVEL || depth <= config.max_level as usize;
        let kind = if within_ceiling && config.required_pattern.is_match(line) {
            MatchKind::DirectMatch
        } else if within_ceiling && config.recursive && !kept_depths.is_empty() {
            MatchKind::InheritedMatch
        } else {
            MatchKind::NoMatch
        };

        if kind.is_kept() && config.recursive {
            kept_depths.push(depth);
        }
        bullet_kind = kind;
        kinds.push(kind);
    }

    kinds
}

/// Keep the classified lines, preserving order. An empty result is valid here;
/// strictness is the caller's policy.
pub fn filter(lines: &[String], config: &FilterConfig) -> Vec<String> {
    let kinds = classify(lines, config);
    let kept: Vec<String> = lines
        .iter()
        .zip(&kinds)
        .filter(|(_, kind)| kind.is_kept())
        .map(|(line, _)| line.clone())
        .collect();
    debug!(total = lines.len(), kept = kept.len(), "filtered block");
    kept
}
