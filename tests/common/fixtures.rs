//! Test fixtures and engine builders.

use impose::{EngineConfig, FormatEngine, Pattern};

/// The default date search, reused by custom-pattern tests.
pub const DATE_SEARCH: &str = r"^(\d|0\d|1[012])[\-/](\d|0\d|[12]\d|3[01])[\-/]((19|20)?\d{2})$";

/// Engine over the built-in registry and flag table.
pub fn builtin_engine() -> FormatEngine {
    FormatEngine::with_builtins()
}

/// Engine with an explicit pattern override.
pub fn engine_with_pattern(search: &str, replacement: &str) -> FormatEngine {
    let pattern = Pattern::parse(search, replacement).expect("valid test pattern");
    FormatEngine::new(EngineConfig::new().with_pattern(pattern))
}

/// The end-to-end scenarios every release must keep passing.
pub fn builtin_scenarios() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("date", "12-31-1969", "12/31/1969"),
        ("time", "4:34a", "04:34 AM"),
        ("creditcard", "1234-5678-9012-3456", "1234567890123456"),
        ("phone", "(513) 555.1234", "513-555-1234"),
    ]
}
