//! Token scanning and template substitution.
//!
//! A replacement template mixes literal text with substitution tokens of
//! the form `[<prefix>$<index><suffix>]`, each optionally followed by a
//! directive block `{<signedInt>?<flagLetters>?}`. The token resolves to
//! `prefix + capture + suffix`; the directive's signed integer keeps the
//! first `k` characters (or the last `|k|` when negative) and its flag
//! letters name transforms applied left to right.

use crate::pattern::{FlagTable, Pattern};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Grammar for one substitution token and its optional directive.
fn token_grammar() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\[([^\]]*)\$(\d+)([^\]]*)\](\{(-?\d+)?([A-Za-z]*)\})?")
            .expect("Valid token grammar regex")
    });
    &PATTERN
}

/// Rewrites `input` into its canonical form, or returns it unchanged.
///
/// Blank input (nothing but whitespace) and non-matching input both pass
/// through untouched; a non-match is the expected outcome for partially
/// typed text, not an error. This function never fails and never panics.
pub fn transform(input: &str, pattern: &Pattern, flags: &FlagTable) -> String {
    try_transform(input, pattern, flags).unwrap_or_else(|| input.to_string())
}

/// Like [`transform`], but reports pass-through as `None`.
pub fn try_transform(input: &str, pattern: &Pattern, flags: &FlagTable) -> Option<String> {
    if input.chars().all(char::is_whitespace) {
        return None;
    }

    let caps = pattern.search().captures(input)?;
    Some(render(pattern.replacement(), &caps, flags))
}

/// Expands every token in `template` against the matched captures.
///
/// Literal text between tokens is copied verbatim. An absent or
/// out-of-range capture index resolves to the empty string.
fn render(template: &str, caps: &Captures<'_>, flags: &FlagTable) -> String {
    token_grammar()
        .replace_all(template, |token: &Captures<'_>| {
            let prefix = token.get(1).map_or("", |m| m.as_str());
            let suffix = token.get(3).map_or("", |m| m.as_str());
            let capture = token
                .get(2)
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .and_then(|index| caps.get(index))
                .map_or("", |m| m.as_str());

            let mut text = format!("{}{}{}", prefix, capture, suffix);
            if let Some(keep) = token.get(5).and_then(|m| m.as_str().parse::<i64>().ok()) {
                text = slice_chars(&text, keep);
            }
            if let Some(letters) = token.get(6) {
                text = augment(&text, letters.as_str(), flags);
            }
            text
        })
        .into_owned()
}

/// Keeps the first `keep` characters, or the last `|keep|` when negative.
/// Counts characters, not bytes, and clamps to the text length.
fn slice_chars(text: &str, keep: i64) -> String {
    let len = text.chars().count() as i64;
    if keep >= 0 {
        text.chars().take(keep.min(len) as usize).collect()
    } else {
        text.chars().skip((len + keep).max(0) as usize).collect()
    }
}

/// Pipes `text` through the named transforms in order, skipping letters
/// absent from the table.
fn augment(text: &str, letters: &str, flags: &FlagTable) -> String {
    let mut text = text.to_string();
    for letter in letters.chars() {
        if let Some(transform) = flags.get(letter) {
            text = transform(&text);
        }
    }
    text
}
