//! Tests for MutationEngine

use pretty_assertions::assert_eq;
use sshmkr_content::{
    EditKind, Error, InsertPolicy, LineDocument, Markers, MatchRule, MutationEngine, TrimPolicy,
};

const RENDERED: &str = "\nHost new\n\tHostName n.example\n";

fn engine() -> MutationEngine {
    MutationEngine::default()
}

// ============================================================================
// insert_at
// ============================================================================

#[test]
fn test_insert_three_line_document_replaces_last_line() {
    let doc = LineDocument::parse("#### A\n## B\n");
    assert_eq!(doc.len(), 3);

    let (text, edit) = engine().insert_at(&doc, "#### A", "## B", RENDERED).unwrap();
    assert_eq!(text, "#### A\n## B\n\nHost new\n\tHostName n.example\n");
    assert_eq!(edit.kind, EditKind::Insert);
    assert_eq!(edit.lines, 2..3);
}

/// The line at the insertion point is overwritten even when it holds a host.
#[test]
fn test_insert_replaces_non_blank_last_line() {
    let doc = LineDocument::parse("#### A\n## B\nHost x");
    assert_eq!(doc.len(), 3);

    let (text, edit) = engine().insert_at(&doc, "#### A", "## B", "\nHost new").unwrap();
    assert_eq!(text, "#### A\n## B\n\nHost new");
    assert_eq!(edit.lines, 2..3);
    assert_eq!(edit.old_content, "Host x");
}

#[test]
fn test_insert_keep_non_blank_policy_differs() {
    let doc = LineDocument::parse("#### A\n## B\nHost x");
    let keep = engine().with_insert_policy(InsertPolicy::KeepNonBlank);

    let (replaced, _) = engine().insert_at(&doc, "#### A", "## B", "\nHost new").unwrap();
    let (kept, edit) = keep.insert_at(&doc, "#### A", "## B", "\nHost new").unwrap();
    assert_eq!(replaced, "#### A\n## B\n\nHost new");
    assert_eq!(kept, "#### A\n## B\nHost x\n\nHost new");
    assert_eq!(edit.lines, 3..3);
}

#[test]
fn test_insert_blank_target_same_under_both_policies() {
    let doc = LineDocument::parse("#### A\n## B\nHost x\n\n## C\n");
    let keep = engine().with_insert_policy(InsertPolicy::KeepNonBlank);
    assert_eq!(
        engine().insert_at(&doc, "#### A", "## B", RENDERED).unwrap().0,
        keep.insert_at(&doc, "#### A", "## B", RENDERED).unwrap().0
    );
}

#[test]
fn test_insert_six_line_document_before_next_sub_header() {
    let doc = LineDocument::parse("#### A\n## B\nHost x\n\n## C\nHost y");
    assert_eq!(doc.len(), 6);

    let (text, edit) = engine().insert_at(&doc, "#### A", "## B", RENDERED).unwrap();
    assert_eq!(
        text,
        "#### A\n## B\nHost x\n\nHost new\n\tHostName n.example\n\n## C\nHost y"
    );
    assert_eq!(edit.lines, 3..4);
}

#[test]
fn test_insert_with_headers_further_down() {
    let doc = LineDocument::parse("Host global\n\n#### A\n## B\n\n#### Z");
    assert_eq!(doc.len(), 6);

    let (text, _) = engine().insert_at(&doc, "#### A", "## B", RENDERED).unwrap();
    assert_eq!(
        text,
        "Host global\n\n#### A\n## B\n\nHost new\n\tHostName n.example\n\n#### Z"
    );
}

#[test]
fn test_insert_keeps_existing_hosts_of_the_group() {
    let source = "#### Prod\n## web\n\nHost w1\n\tHostName 1\n\n## db\n\nHost d1\n";
    let doc = LineDocument::parse(source);

    let (text, _) = engine().insert_at(&doc, "#### Prod", "## web", RENDERED).unwrap();
    assert_eq!(
        text,
        "#### Prod\n## web\n\nHost w1\n\tHostName 1\n\nHost new\n\tHostName n.example\n\n## db\n\nHost d1\n"
    );
}

#[test]
fn test_insert_unknown_header_pair_fails() {
    let doc = LineDocument::parse("#### A\n## B\n");
    let err = engine().insert_at(&doc, "#### A", "## nope", RENDERED).unwrap_err();
    assert_eq!(
        err,
        Error::HeaderNotFound {
            main: "#### A".to_string(),
            sub: "## nope".to_string()
        }
    );
}

#[test]
fn test_insert_sub_header_before_main_is_not_matched() {
    let doc = LineDocument::parse("## B\n#### A\n");
    let err = engine().insert_at(&doc, "#### A", "## B", RENDERED).unwrap_err();
    assert!(matches!(err, Error::HeaderNotFound { .. }));
}

// ============================================================================
// delete_block
// ============================================================================

const TWO_HOSTS: &str = "Host a\n\tHostName a.example\n\nHost b\n\tHostName b.example\n";

#[test]
fn test_delete_first_of_two_blocks() {
    let doc = LineDocument::parse(TWO_HOSTS);
    let (text, edit) = engine().delete_block(&doc, "a").unwrap();

    assert_eq!(text, "Host b\n\tHostName b.example\n");
    assert_eq!(edit.kind, EditKind::Delete);
    assert_eq!(edit.old_content, "Host a\n\tHostName a.example\n");
    assert_eq!(
        LineDocument::parse(&text).len(),
        doc.len() - edit.line_count()
    );
}

#[test]
fn test_delete_last_block_runs_to_end() {
    let doc = LineDocument::parse("Host a\n\tUser x\n\nHost b\n\tUser y");
    let (text, edit) = engine().delete_block(&doc, "b").unwrap();
    assert_eq!(text, "Host a\n\tUser x\n");
    assert_eq!(edit.lines, 3..6);
}

#[test]
fn test_delete_keeps_headers() {
    let source = "#### Prod\n## web\n\nHost w1\n\tPort 1\n\n## db\n";
    let doc = LineDocument::parse(source);
    let (text, _) = engine().delete_block(&doc, "w1").unwrap();
    assert_eq!(text, "#### Prod\n## web\n\n## db\n");
}

/// The literal "trim one character per removed line" reading cuts into the
/// surviving text, while the default policy leaves it whole.
#[test]
fn test_delete_trim_policies_differ() {
    let doc = LineDocument::parse(TWO_HOSTS);

    let (preserved, _) = engine().delete_block(&doc, "a").unwrap();
    assert_eq!(preserved, "Host b\n\tHostName b.example\n");

    let literal = engine().with_trim_policy(TrimPolicy::LineCountChars);
    let (trimmed, edit) = literal.delete_block(&doc, "a").unwrap();
    assert_eq!(edit.line_count(), 3);
    assert_eq!(trimmed, "Host b\n\tHostName b.examp");
}

#[test]
fn test_delete_missing_host_fails() {
    let doc = LineDocument::parse(TWO_HOSTS);
    let err = engine().delete_block(&doc, "ghost").unwrap_err();
    assert!(matches!(err, Error::HostNotFound { hostname } if hostname == "ghost"));
    assert_eq!(doc.render(), TWO_HOSTS);
}

#[test]
fn test_delete_empty_hostname_fails() {
    let doc = LineDocument::parse(TWO_HOSTS);
    let err = engine().delete_block(&doc, "").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

// ============================================================================
// toggle_comment
// ============================================================================

#[test]
fn test_toggle_uniform_block_is_idempotent_in_pairs() {
    let doc = LineDocument::parse(TWO_HOSTS);

    let first = engine().toggle_comment(&doc, "a").unwrap();
    assert!(first.did_comment);
    assert_eq!(
        first.text,
        "#Host a\n#\tHostName a.example\n\nHost b\n\tHostName b.example\n"
    );

    let second = engine()
        .toggle_comment(&LineDocument::parse(&first.text), "a")
        .unwrap();
    assert!(!second.did_comment);
    assert_eq!(second.text, TWO_HOSTS);
}

#[test]
fn test_toggle_mixed_block_flips_each_line() {
    let doc = LineDocument::parse("Host a\n#\tPort 22\n\tUser me\n\nHost b\n");
    let toggled = engine().toggle_comment(&doc, "a").unwrap();

    assert_eq!(toggled.text, "#Host a\n\tPort 22\n#\tUser me\n\nHost b\n");
    assert!(toggled.did_comment);
    assert_eq!(
        toggled.edit.kind,
        EditKind::Toggle {
            commented: 2,
            uncommented: 1
        }
    );
}

#[test]
fn test_toggle_mostly_commented_block_still_reports_comment() {
    let doc = LineDocument::parse("#Host a\n#\tPort 22\n\tUser me\n");
    let toggled = engine().toggle_comment(&doc, "a").unwrap();
    assert_eq!(toggled.text, "Host a\n\tPort 22\n#\tUser me\n");
    assert!(toggled.did_comment, "one line gained a marker");
}

#[test]
fn test_toggle_block_at_end_without_newline() {
    let doc = LineDocument::parse("Host a\n\tPort 22");
    let toggled = engine().toggle_comment(&doc, "a").unwrap();
    assert_eq!(toggled.text, "#Host a\n#\tPort 22");
}

#[test]
fn test_toggle_missing_host_fails() {
    let doc = LineDocument::parse(TWO_HOSTS);
    let err = engine().toggle_comment(&doc, "ghost").unwrap_err();
    assert!(matches!(err, Error::HostNotFound { .. }));
    let err = engine().toggle_comment(&doc, "").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_toggle_with_exact_rule_skips_prefix_hosts() {
    let doc = LineDocument::parse("Host webserver\n\tPort 1\n\nHost web\n\tPort 2\n");
    let exact = MutationEngine::new(Markers::default(), MatchRule::ExactField);
    let toggled = exact.toggle_comment(&doc, "web").unwrap();
    assert_eq!(
        toggled.text,
        "Host webserver\n\tPort 1\n\n#Host web\n#\tPort 2\n"
    );

    let back = exact
        .toggle_comment(&LineDocument::parse(&toggled.text), "web")
        .unwrap();
    assert_eq!(back.text, doc.render());
}

// ============================================================================
// replace_block_lines
// ============================================================================

#[test]
fn test_replace_same_length_block() {
    let doc = LineDocument::parse("Host a\n\tHostName old\n\tPort 22\n\nHost b\n");
    let (text, edit) = engine()
        .replace_block(&doc, "Host a", "\nHost a\n\tHostName new\n\tPort 2200\n")
        .unwrap();
    assert_eq!(text, "Host a\n\tHostName new\n\tPort 2200\n\nHost b\n");
    assert_eq!(edit.kind, EditKind::Replace);
    assert_eq!(edit.lines, 0..4);
}

/// A replacement shorter than the original block leaves the extra original
/// lines where they were.
#[test]
fn test_replace_shorter_template_leaves_trailing_lines() {
    let doc = LineDocument::parse("Host a\n\tHostName old\n\tPort 22\n\tUser u\n\nHost b");
    let (text, _) = engine()
        .replace_block(&doc, "Host a", "\nHost a\n\tHostName new\n")
        .unwrap();
    assert_eq!(text, "Host a\n\tHostName new\n\n\tUser u\n\nHost b");
}

#[test]
fn test_replace_past_end_appends() {
    let doc = LineDocument::parse("#### A\nHost a");
    let (text, edit) = engine()
        .replace_block_lines(&doc, "Host a", &["", "Host a", "\tPort 1"])
        .unwrap();
    assert_eq!(text, "#### A\nHost a\n\tPort 1");
    assert_eq!(edit.lines, 1..2);
}

#[test]
fn test_replace_missing_match_fails() {
    let doc = LineDocument::parse("Host a\n");
    let err = engine().replace_block(&doc, "Host zz", "\nHost zz\n").unwrap_err();
    assert!(matches!(err, Error::HostNotFound { .. }));
    let err = engine().replace_block(&doc, "", "\nHost zz\n").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

// ============================================================================
// replace_host_block
// ============================================================================

const PREFIX_HOSTS: &str = "Host webserver\n\tPort 1\n\nHost web\n\tPort 2\n";

#[test]
fn test_replace_host_block_exact_rule_skips_prefix_host() {
    let doc = LineDocument::parse(PREFIX_HOSTS);
    let engine = MutationEngine::new(Markers::default(), MatchRule::ExactField);

    let (text, edit) = engine
        .replace_host_block(&doc, "web", "\nHost web\n\tPort 9\n")
        .unwrap();
    assert_eq!(text, "Host webserver\n\tPort 1\n\nHost web\n\tPort 9\n");
    assert_eq!(edit.lines, 3..6);
}

#[test]
fn test_replace_host_block_substring_rule_takes_first_match() {
    let doc = LineDocument::parse(PREFIX_HOSTS);
    let (text, _) = engine()
        .replace_host_block(&doc, "web", "\nHost web\n\tPort 9\n")
        .unwrap();
    assert_eq!(text, "Host web\n\tPort 9\n\nHost web\n\tPort 2\n");
}

#[test]
fn test_replace_host_block_errors() {
    let doc = LineDocument::parse(PREFIX_HOSTS);
    let engine = MutationEngine::new(Markers::default(), MatchRule::ExactField);
    assert!(matches!(
        engine.replace_host_block(&doc, "ghost", "\nHost ghost\n"),
        Err(Error::HostNotFound { .. })
    ));
    assert!(matches!(
        engine.replace_host_block(&doc, "", "\nHost x\n"),
        Err(Error::InvalidArgument { .. })
    ));
}
