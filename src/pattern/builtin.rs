//! Built-in patterns and flag transforms.
//!
//! Four format families ship with the library: 12-hour times, US dates,
//! 16-digit credit cards, and NANP phone numbers. Each search regex is
//! cached in a static and cloned into the registry (the regex crate
//! shares the compiled program behind a cheap handle).

use super::{FlagTable, Pattern, Registry};
use once_cell::sync::Lazy;
use regex::Regex;

/// 12-hour clock times, e.g. `4:34a` or `12:05 PM`.
fn time_search() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^(0\d|1[0-2]|\d):?([0-5]\d)[ ]*(AM?|PM?)$").expect("Valid time regex")
    });
    &PATTERN
}

/// US month/day/year dates with `-` or `/` separators, 2- or 4-digit year.
fn date_search() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(\d|0\d|1[012])[\-/](\d|0\d|[12]\d|3[01])[\-/]((19|20)?\d{2})$")
            .expect("Valid date regex")
    });
    &PATTERN
}

/// 16-digit card numbers in 4-4-4-4 groups, optionally separated.
fn creditcard_search() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(\d{4})[\- ]?(\d{4})[\- ]?(\d{4})[\- ]?(\d{4})$")
            .expect("Valid credit card regex")
    });
    &PATTERN
}

/// 10-digit NANP phone numbers with common punctuation.
fn phone_search() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\(?(\d{3})[\) \-\.]*(\d{3})[ \-\.]*(\d{4})$").expect("Valid phone regex")
    });
    &PATTERN
}

/// Builds the built-in registry.
///
/// Zero-pads time and date parts and upcases the meridiem; strips all
/// separators from card numbers (the canonical storage form) while
/// phone and date formats insert them.
pub fn builtin_patterns() -> Registry {
    let mut registry = Registry::empty();
    registry.insert(
        "time",
        Pattern::new(time_search().clone(), "[0$1]{-2}:[0$2]{-2} [$3M]{2U}"),
    );
    registry.insert(
        "date",
        Pattern::new(date_search().clone(), "[0$1]{-2}/[0$2]{-2}/[20$3]{-4}"),
    );
    registry.insert(
        "creditcard",
        Pattern::new(creditcard_search().clone(), "[$1][$2][$3][$4]"),
    );
    registry.insert(
        "phone",
        Pattern::new(phone_search().clone(), "[$1]-[$2]-[$3]"),
    );
    registry
}

/// Builds the built-in flag table: `U` uppercases, `L` lowercases.
pub fn builtin_flags() -> FlagTable {
    let mut flags = FlagTable::empty();
    flags.insert('U', |text: &str| text.to_uppercase());
    flags.insert('L', |text: &str| text.to_lowercase());
    flags
}
