//! End-to-end pipeline tests against a README-style destination.

use pretty_assertions::assert_eq;
use regex::Regex;
use todosync_core::{
    DelimiterSpec, Error, FilterConfig, Substitution, SyncConfig, TransformConfig, sync,
};

const OUTLINE: &str = "- BEGIN_TODO\n- TODO a\n  - DONE b\n  - TODO c\n- END_TODO";
const DEST: &str = "# Project\n\nIntro text.\n\n<!-- sync:start -->\n- stale entry\n<!-- sync:end -->\n\nFooter.\n";

fn config(pattern: &str) -> SyncConfig {
    SyncConfig {
        input_start: DelimiterSpec::pattern("BEGIN_TODO").unwrap(),
        input_end: DelimiterSpec::pattern("END_TODO").unwrap(),
        output_start: DelimiterSpec::pattern("<!-- sync:start -->").unwrap(),
        output_end: DelimiterSpec::pattern("<!-- sync:end -->").unwrap(),
        filter: FilterConfig::new(Regex::new(pattern).unwrap()),
        transform: TransformConfig {
            keep_new_lines: true,
            ..TransformConfig::default()
        },
        strict: false,
    }
}

#[test]
fn unlimited_recursive_sync_keeps_the_whole_outline() {
    let mut cfg = config("TODO|DONE");
    cfg.filter.recursive = true;

    let updated = sync(OUTLINE, DEST, &cfg).unwrap();
    assert_eq!(
        updated,
        "# Project\n\nIntro text.\n\n<!-- sync:start -->\n- TODO a\n  - DONE b\n  - TODO c\n<!-- sync:end -->\n\nFooter.\n"
    );
}

#[test]
fn level_ceiling_keeps_only_top_level_bullets() {
    let mut cfg = config("TODO|DONE");
    cfg.filter.recursive = true;
    cfg.filter.max_level = 1;

    let updated = sync(OUTLINE, DEST, &cfg).unwrap();
    assert_eq!(
        updated,
        "# Project\n\nIntro text.\n\n<!-- sync:start -->\n- TODO a\n<!-- sync:end -->\n\nFooter.\n"
    );
}

#[test]
fn unmatched_pattern_produces_an_empty_block_and_untouched_surroundings() {
    let updated = sync(OUTLINE, DEST, &config("NEVER_MATCHES")).unwrap();
    assert_eq!(
        updated,
        "# Project\n\nIntro text.\n\n<!-- sync:start -->\n<!-- sync:end -->\n\nFooter.\n"
    );
}

#[test]
fn substitution_strips_marker_words_on_the_way_out() {
    let mut cfg = config("TODO|DONE");
    cfg.filter.recursive = true;
    cfg.transform.sub_pattern = Some(Substitution {
        search: Regex::new(r"^(\s*)- (TODO|DONE) ").unwrap(),
        replacement: "${1}- ".to_string(),
    });

    let updated = sync("- BEGIN_TODO\n- TODO Review\n- END_TODO", DEST, &cfg).unwrap();
    assert_eq!(
        updated,
        "# Project\n\nIntro text.\n\n<!-- sync:start -->\n- Review\n<!-- sync:end -->\n\nFooter.\n"
    );
}

#[test]
fn sentinel_input_delimiters_take_the_whole_source() {
    let mut cfg = config("TODO");
    cfg.input_start = DelimiterSpec::DocumentStart;
    cfg.input_end = DelimiterSpec::DocumentEnd;

    let updated = sync("- TODO only line", DEST, &cfg).unwrap();
    assert_eq!(
        updated,
        "# Project\n\nIntro text.\n\n<!-- sync:start -->\n- TODO only line\n<!-- sync:end -->\n\nFooter.\n"
    );
}

#[test]
fn sync_is_idempotent_over_its_own_output() {
    let mut cfg = config("TODO|DONE");
    cfg.filter.recursive = true;

    let once = sync(OUTLINE, DEST, &cfg).unwrap();
    let twice = sync(OUTLINE, &once, &cfg).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn ambiguous_destination_delimiter_is_an_error() {
    let dest = "<!-- sync:start -->\n<!-- sync:start -->\n<!-- sync:end -->\n";
    let err = sync(OUTLINE, dest, &config("TODO")).unwrap_err();
    assert!(matches!(err, Error::DelimiterAmbiguous { count: 2, .. }));
}

#[test]
fn missing_destination_delimiter_is_an_error() {
    let err = sync(OUTLINE, "no markers here\n", &config("TODO")).unwrap_err();
    assert!(matches!(err, Error::DelimiterNotFound { .. }));
}

#[test]
fn block_properties_are_stripped_when_configured() {
    let input = "- BEGIN_TODO\n- TODO a\n  id:: 63a4-55b1\n- END_TODO";
    let mut cfg = config("TODO");
    cfg.filter.recursive = true;
    cfg.transform.remove_block_properties = true;

    let updated = sync(input, DEST, &cfg).unwrap();
    assert_eq!(
        updated,
        "# Project\n\nIntro text.\n\n<!-- sync:start -->\n- TODO a\n<!-- sync:end -->\n\nFooter.\n"
    );
}

#[test]
fn continuation_lines_join_when_newlines_are_not_kept() {
    let input = "- BEGIN_TODO\n- TODO write report\n  with more detail\n- END_TODO";
    let mut cfg = config("TODO");
    cfg.filter.recursive = true;
    cfg.transform.keep_new_lines = false;

    let updated = sync(input, DEST, &cfg).unwrap();
    assert_eq!(
        updated,
        "# Project\n\nIntro text.\n\n<!-- sync:start -->\n- TODO write report with more detail\n<!-- sync:end -->\n\nFooter.\n"
    );
}

#[test]
fn destination_without_trailing_newline_stays_that_way() {
    let dest = "<!-- sync:start -->\n<!-- sync:end -->";
    let updated = sync(OUTLINE, dest, &config("TODO")).unwrap();
    assert_eq!(
        updated,
        "<!-- sync:start -->\n- TODO a\n  - TODO c\n<!-- sync:end -->"
    );
}
