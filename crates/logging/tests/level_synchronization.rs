//! Integration tests for process-wide level synchronization.
//!
//! These tests verify that every handle on a hub observes one shared
//! severity threshold: a change made through any handle is visible on
//! the root, on previously created named handles, and on handles
//! created afterwards.

use std::sync::Arc;

use logging::{Dispatch, LevelHub, LevelStore, Logger, LoggerConfig, MemoryStore, Severity};
use test_support::CaptureSink;

fn hub() -> (Logger, Arc<CaptureSink>) {
    let sink = Arc::new(CaptureSink::new());
    let hub = LevelHub::new(
        Arc::clone(&sink) as Arc<dyn Dispatch>,
        Arc::new(MemoryStore::new()) as Arc<dyn LevelStore>,
        LoggerConfig::default(),
    );
    (Logger::root(hub), sink)
}

// ============================================================================
// Shared Level Propagation
// ============================================================================

/// Verifies a level set on the root is observed by named handles.
#[test]
fn root_level_change_reaches_named_handles() {
    let (root, _) = hub();
    let auth = root.named("auth");
    let api = root.named("api");

    root.set_level_transient(Severity::Debug);

    assert_eq!(root.level(), Severity::Debug);
    assert_eq!(auth.level(), Severity::Debug);
    assert_eq!(api.level(), Severity::Debug);
}

/// Verifies a level set on a named handle is observed everywhere.
#[test]
fn named_level_change_reaches_the_root() {
    let (root, _) = hub();
    let auth = root.named("auth");

    auth.set_level_transient(Severity::Trace);

    assert_eq!(root.level(), Severity::Trace);
    assert_eq!(root.named("api").level(), Severity::Trace);
}

/// Verifies handles created after a level change adopt it immediately.
#[test]
fn late_handles_adopt_the_current_level() {
    let (root, sink) = hub();
    root.set_level_transient(Severity::Warn);

    let late = root.named("late");
    assert_eq!(late.level(), Severity::Warn);

    late.info("dropped");
    late.warn("kept");
    assert_eq!(
        sink.records(),
        vec![(Severity::Warn, "[late] kept".to_string())]
    );
}

/// Verifies repeated lookups of one name share filtering state.
#[test]
fn same_name_shares_one_dispatch() {
    let (root, sink) = hub();
    root.set_level_transient(Severity::Trace);

    let first = root.named("auth");
    let second = root.named("auth");

    first.info("one");
    second.info("two");

    assert_eq!(
        sink.records(),
        vec![
            (Severity::Info, "[auth] one".to_string()),
            (Severity::Info, "[auth] two".to_string()),
        ]
    );
}

// ============================================================================
// Filtering Effect on Output
// ============================================================================

/// Verifies one level change re-filters every handle at once.
#[test]
fn level_change_refilters_all_handles() {
    let (root, sink) = hub();
    let auth = root.named("auth");
    root.set_level_transient(Severity::Trace);

    root.debug("root debug kept");
    auth.debug("auth debug kept");

    root.set_level_transient(Severity::Error);

    root.debug("root debug dropped");
    auth.debug("auth debug dropped");
    auth.error("auth error kept");

    assert_eq!(
        sink.records(),
        vec![
            (Severity::Debug, "root debug kept".to_string()),
            (Severity::Debug, "[auth] auth debug kept".to_string()),
            (Severity::Error, "[auth] auth error kept".to_string()),
        ]
    );
}

/// Verifies SILENT mutes the root and every named handle.
#[test]
fn silent_mutes_every_handle() {
    let (root, sink) = hub();
    let auth = root.named("auth");

    root.set_level_transient(Severity::Silent);

    root.error("dropped");
    auth.error("dropped");
    root.named("other").error("dropped");

    assert!(sink.records().is_empty());
}

// ============================================================================
// Name Composition
// ============================================================================

/// Verifies nested names join with colons and prefix the output.
#[test]
fn nested_names_compose_colon_separated_prefixes() {
    let (root, sink) = hub();
    root.set_level_transient(Severity::Trace);

    let session = root.named("auth").named("session");
    assert_eq!(session.name(), Some("auth:session"));

    session.warn("token expired");
    assert_eq!(
        sink.records(),
        vec![(Severity::Warn, "[auth:session] token expired".to_string())]
    );
}

/// Verifies nested handles track level changes like any other handle.
#[test]
fn nested_handles_follow_the_shared_level() {
    let (root, _) = hub();
    let session = root.named("auth").named("session");

    root.set_level_transient(Severity::Info);
    assert_eq!(session.level(), Severity::Info);

    session.set_level_transient(Severity::Trace);
    assert_eq!(root.level(), Severity::Trace);
}

// ============================================================================
// Lossy String Levels
// ============================================================================

/// Verifies string levels are parsed case-insensitively.
#[test]
fn string_levels_ignore_case() {
    let (root, _) = hub();

    root.set_level_str_transient("DeBuG");
    assert_eq!(root.level(), Severity::Debug);

    root.set_level_str_transient("warn");
    assert_eq!(root.level(), Severity::Warn);
}

/// Verifies an unrecognised string level falls back to ERROR.
#[test]
fn unknown_string_level_falls_back_to_error() {
    let (root, sink) = hub();
    root.set_level_transient(Severity::Trace);

    root.set_level_str_transient("verbose");

    assert_eq!(root.level(), Severity::Error);
    root.warn("dropped");
    root.error("kept");
    assert_eq!(sink.records(), vec![(Severity::Error, "kept".to_string())]);
}
