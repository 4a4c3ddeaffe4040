//! End-to-end formatting scenarios through the engine API.
//!
//! These tests exercise the full path a caller takes: build a
//! configuration, resolve a pattern, transform input, observe the
//! callback.

use impose::{EngineConfig, FlagTable, FormatEngine, Pattern, Registry, transform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

mod common;
use common::*;

#[test]
fn test_builtin_formats_normalize() {
    let engine = builtin_engine();

    for (name, input, expected) in builtin_scenarios() {
        assert_eq!(
            engine.format(input, Some(name)),
            expected,
            "format '{}' on '{}'",
            name,
            input
        );
    }
}

#[test]
fn test_already_canonical_date_is_stable() {
    let engine = builtin_engine();

    // The canonical form still matches the date search, so a second pass
    // reproduces it
    assert_eq!(engine.format("12/31/1969", Some("date")), "12/31/1969");
}

#[test]
fn test_two_digit_year_expansion() {
    let engine = builtin_engine();

    // The template always prefixes "20" and keeps the last four digits,
    // so bare two-digit years land in the 2000s
    assert_eq!(engine.format("1-2-99", Some("date")), "01/02/2099");
    assert_eq!(engine.format("1-2-24", Some("date")), "01/02/2024");
}

#[test]
fn test_time_meridiem_variants() {
    let engine = builtin_engine();

    assert_eq!(engine.format("4:34a", Some("time")), "04:34 AM");
    assert_eq!(engine.format("4:34A", Some("time")), "04:34 AM");
    assert_eq!(engine.format("434p", Some("time")), "04:34 PM");
    assert_eq!(engine.format("11:59 pm", Some("time")), "11:59 PM");
}

#[test]
fn test_custom_replacement_literal() {
    let engine = engine_with_pattern(DATE_SEARCH, "myReplacement");
    assert_eq!(engine.format("12-31-1969", None), "myReplacement");
}

#[test]
fn test_custom_flag_replaces_each_token() {
    let pattern = Pattern::parse(DATE_SEARCH, "[0$1]{-2X}/[0$2]{-2X}/[20$3]{-4X}").unwrap();
    let engine = FormatEngine::new(
        EngineConfig::new()
            .with_pattern(pattern)
            .with_flag('X', |_| "X".to_string()),
    );

    assert_eq!(engine.format("12-31-1969", None), "X/X/X");
}

#[test]
fn test_determinism() {
    let engine = builtin_engine();

    for (name, input, _) in builtin_scenarios() {
        let first = engine.format(input, Some(name));
        let second = engine.format(input, Some(name));
        assert_eq!(first, second);
    }
}

#[test]
fn test_registry_entry_overrides_builtin() {
    // Replace the date format wholesale
    let stamped = Pattern::parse(DATE_SEARCH, "DATE").unwrap();
    let engine = FormatEngine::new(EngineConfig::new().with_pattern_entry("date", stamped));

    assert_eq!(engine.format("12-31-1969", Some("date")), "DATE");

    // The other builtins are untouched
    assert_eq!(engine.format("(513) 555.1234", Some("phone")), "513-555-1234");
}

#[test]
fn test_caller_built_registry() {
    let mut registry = Registry::empty();
    registry.insert(
        "zip",
        Pattern::parse(r"^(\d{5})-?(\d{4})$", "[$1]-[$2]").unwrap(),
    );

    let engine = FormatEngine::new(EngineConfig {
        patterns: registry,
        ..EngineConfig::new()
    });

    assert_eq!(engine.format("452021234", Some("zip")), "45202-1234");
    // Names outside the caller's registry resolve nothing
    assert_eq!(engine.format("12-31-1969", Some("date")), "12-31-1969");
}

#[test]
fn test_callback_receives_transformed_text() {
    let seen: Arc<std::sync::Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&seen);

    let engine = FormatEngine::new(
        EngineConfig::new()
            .with_format("phone")
            .with_callback(move |text| sink.lock().unwrap().push(text.to_string())),
    );

    engine.apply("(513) 555.1234", None);
    engine.apply("not a phone", None);

    assert_eq!(*seen.lock().unwrap(), vec!["513-555-1234".to_string()]);
}

#[test]
fn test_attach_time_pass_disabled() {
    static FIRED: AtomicUsize = AtomicUsize::new(0);

    let engine = FormatEngine::new(
        EngineConfig::new()
            .with_format("date")
            .with_apply_immediately(false)
            .with_callback(|_| {
                FIRED.fetch_add(1, Ordering::SeqCst);
            }),
    );

    // Attach-time pass leaves the value alone and fires nothing
    assert!(engine.apply_initial("12-31-1969", None).is_none());
    assert_eq!(FIRED.load(Ordering::SeqCst), 0);

    // A later explicit pass still works
    assert_eq!(engine.apply("12-31-1969", None).unwrap(), "12/31/1969");
    assert_eq!(FIRED.load(Ordering::SeqCst), 1);
}

#[test]
fn test_free_function_matches_engine() {
    let engine = builtin_engine();
    let pattern = engine.config().patterns.get("date").unwrap();
    let flags = FlagTable::builtin();

    assert_eq!(
        transform("12-31-1969", pattern, &flags),
        engine.format("12-31-1969", Some("date"))
    );
}

#[test]
fn test_delimited_pattern_source() {
    // Case-insensitive matching supplied through /body/flags
    let engine = engine_with_pattern("/^(yes|no)$/i", "[$1]{3U}");

    assert_eq!(engine.format("Yes", None), "YES");
    assert_eq!(engine.format("NO", None), "NO");
    assert_eq!(engine.format("maybe", None), "maybe");
}
