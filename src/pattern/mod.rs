//! Patterns, the format registry, and the flag table.
//!
//! A [`Pattern`] pairs a capture-group search regex with a replacement
//! template. Patterns come from the built-in [`Registry`] (dates, times,
//! credit cards, phone numbers) or are supplied by the caller, either as
//! a compiled [`Regex`] or as a pattern source string.

pub mod builtin;

use crate::error::{ImposeError, ImposeResult};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A recognition/reformat rule for one format family.
///
/// The search regex recognizes the raw input and captures its parts; the
/// replacement template assembles the normalized output from those
/// captures (see [`crate::engine::transform`] for the template grammar).
#[derive(Debug, Clone)]
pub struct Pattern {
    search: Regex,
    replacement: String,
}

impl Pattern {
    /// Creates a pattern from a compiled regex and a replacement template.
    pub fn new(search: Regex, replacement: impl Into<String>) -> Self {
        Self {
            search,
            replacement: replacement.into(),
        }
    }

    /// Creates a pattern from a source string and a replacement template.
    ///
    /// `/body/flags` sources are parsed as delimited regexes (see
    /// [`compile_source`]); any other string compiles as a bare regex.
    /// An invalid source is the one hard failure in the library.
    pub fn parse(search: &str, replacement: impl Into<String>) -> ImposeResult<Self> {
        Ok(Self::new(compile_source(search)?, replacement))
    }

    /// The search regex.
    pub fn search(&self) -> &Regex {
        &self.search
    }

    /// The replacement template.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Recognizes `/body/flags` delimited pattern sources.
fn delimited_source() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^/(.+)/([gimy]*)$").expect("Valid delimiter regex"));
    &PATTERN
}

/// Compiles a pattern source string into a regex.
///
/// A `/body/flags` source applies `i` (case-insensitive) and `m`
/// (multi-line) to the body; `g` and `y` are accepted and ignored since
/// they have no counterpart in this matching model. Anything else
/// compiles as a bare regex.
pub fn compile_source(source: &str) -> ImposeResult<Regex> {
    let compiled = match delimited_source().captures(source) {
        Some(caps) => {
            let flags = &caps[2];
            RegexBuilder::new(&caps[1])
                .case_insensitive(flags.contains('i'))
                .multi_line(flags.contains('m'))
                .build()
        }
        None => Regex::new(source),
    };

    compiled.map_err(|err| ImposeError::PatternError {
        pattern: source.to_string(),
        reason: err.to_string(),
    })
}

/// A text transform applied to a token's resolved text.
pub type FlagFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Mapping from single-letter flag names to text transforms.
///
/// The built-in table provides `U` (uppercase) and `L` (lowercase).
/// Caller entries extend or override it. A directive referencing a
/// letter absent from the table is skipped, never an error.
#[derive(Clone, Default)]
pub struct FlagTable {
    entries: HashMap<char, FlagFn>,
}

impl FlagTable {
    /// An empty table with no transforms.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        builtin::builtin_flags()
    }

    /// Adds or replaces the transform for `letter`.
    pub fn insert<F>(&mut self, letter: char, transform: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.entries.insert(letter, Arc::new(transform));
    }

    /// Returns the transform for `letter`, if registered.
    pub fn get(&self, letter: char) -> Option<&FlagFn> {
        self.entries.get(&letter)
    }

    /// Whether `letter` is registered.
    pub fn contains(&self, letter: char) -> bool {
        self.entries.contains_key(&letter)
    }

    /// Number of registered letters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FlagTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<char> = self.entries.keys().copied().collect();
        letters.sort_unstable();
        f.debug_struct("FlagTable").field("letters", &letters).finish()
    }
}

/// Named collection of built-in and caller-supplied patterns.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    patterns: HashMap<String, Pattern>,
}

impl Registry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in registry: `date`, `time`, `creditcard`, `phone`.
    pub fn builtin() -> Self {
        builtin::builtin_patterns()
    }

    /// Adds or replaces a named pattern.
    pub fn insert(&mut self, name: impl Into<String>, pattern: Pattern) {
        self.patterns.insert(name.into(), pattern);
    }

    /// Returns the pattern registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Looks up `name`, reporting the available names on a miss.
    pub fn require(&self, name: &str) -> ImposeResult<&Pattern> {
        self.patterns
            .get(name)
            .ok_or_else(|| ImposeError::UnknownFormat {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.patterns.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
