//! Formatting engine, configuration, and pattern resolution.
//!
//! [`FormatEngine`] decides which [`Pattern`] applies to a piece of input
//! and runs the template substitution from [`template`]. Resolution
//! follows a fixed precedence chain: the explicit pattern override, then
//! a per-field tag looked up in the registry, then the engine-wide
//! default format.

pub mod template;

pub use template::{transform, try_transform};

use crate::pattern::{FlagTable, Pattern, Registry};
use std::fmt;
use std::sync::Arc;

/// Hook invoked with the reformatted text after a substitution is applied.
pub type Callback = Arc<dyn Fn(&str) + Send + Sync>;

/// Immutable engine configuration, built once per instance.
///
/// Defaults merge the built-in registry and flag table; builder methods
/// layer caller overrides on top. The configuration is never mutated
/// after the engine is constructed, so one engine can serve concurrent
/// callers without coordination.
#[derive(Clone)]
pub struct EngineConfig {
    /// Named pattern registry.
    pub patterns: Registry,

    /// Flag-letter transform table.
    pub flags: FlagTable,

    /// Engine-wide default format name.
    pub format: Option<String>,

    /// Explicit pattern override, taking precedence over any name lookup.
    pub pattern: Option<Pattern>,

    /// Whether the attach-time pass runs ([`FormatEngine::apply_initial`]).
    pub apply_immediately: bool,

    /// Post-transform notification hook.
    pub callback: Option<Callback>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            patterns: Registry::builtin(),
            flags: FlagTable::builtin(),
            format: None,
            pattern: None,
            apply_immediately: true,
            callback: None,
        }
    }
}

impl EngineConfig {
    /// Configuration over the built-in registry and flag table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine-wide default format name.
    pub fn with_format(mut self, name: impl Into<String>) -> Self {
        self.format = Some(name.into());
        self
    }

    /// Sets the explicit pattern override.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Adds or replaces a registry entry.
    pub fn with_pattern_entry(mut self, name: impl Into<String>, pattern: Pattern) -> Self {
        self.patterns.insert(name, pattern);
        self
    }

    /// Adds or replaces a flag transform.
    pub fn with_flag<F>(mut self, letter: char, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.flags.insert(letter, transform);
        self
    }

    /// Enables or disables the attach-time pass.
    pub fn with_apply_immediately(mut self, apply: bool) -> Self {
        self.apply_immediately = apply;
        self
    }

    /// Installs the post-transform hook.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("patterns", &self.patterns)
            .field("flags", &self.flags)
            .field("format", &self.format)
            .field("pattern", &self.pattern)
            .field("apply_immediately", &self.apply_immediately)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Formatting engine: pattern resolution plus template substitution.
pub struct FormatEngine {
    config: EngineConfig,
}

impl FormatEngine {
    /// Creates an engine over the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine over the built-in registry and flag table.
    pub fn with_builtins() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves the pattern for a field.
    ///
    /// Precedence: the explicit override, then `tag` looked up in the
    /// registry, then the default format name. A tag missing from the
    /// registry falls through to the default rather than failing.
    pub fn resolve(&self, tag: Option<&str>) -> Option<&Pattern> {
        if let Some(pattern) = &self.config.pattern {
            return Some(pattern);
        }

        if let Some(pattern) = tag.and_then(|name| self.config.patterns.get(name)) {
            return Some(pattern);
        }

        self.config
            .format
            .as_deref()
            .and_then(|name| self.config.patterns.get(name))
    }

    /// Resolves and transforms, reporting pass-through as `None`.
    ///
    /// Pass-through covers an unresolved pattern, blank input, and
    /// non-matching input. The configured callback fires only when a
    /// substitution was applied.
    pub fn apply(&self, input: &str, tag: Option<&str>) -> Option<String> {
        let pattern = self.resolve(tag)?;
        let output = template::try_transform(input, pattern, &self.config.flags)?;

        if let Some(callback) = &self.config.callback {
            callback(&output);
        }

        Some(output)
    }

    /// Resolves and transforms, passing unmatched input through unchanged.
    pub fn format(&self, input: &str, tag: Option<&str>) -> String {
        self.apply(input, tag)
            .unwrap_or_else(|| input.to_string())
    }

    /// The attach-time pass.
    ///
    /// Behaves like [`FormatEngine::apply`] unless the configuration
    /// disables immediate application, in which case the input is left
    /// alone until the embedding layer triggers a later pass.
    pub fn apply_initial(&self, input: &str, tag: Option<&str>) -> Option<String> {
        if !self.config.apply_immediately {
            return None;
        }
        self.apply(input, tag)
    }
}

impl Default for FormatEngine {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_resolve_precedence_override_wins() {
        let inline = Pattern::parse(r"^x$", "matched").unwrap();
        let engine = FormatEngine::new(
            EngineConfig::new()
                .with_pattern(inline)
                .with_format("date"),
        );

        let resolved = engine.resolve(Some("phone")).unwrap();
        assert_eq!(resolved.replacement(), "matched");
    }

    #[test]
    fn test_resolve_tag_beats_default_format() {
        let engine = FormatEngine::new(EngineConfig::new().with_format("phone"));

        let resolved = engine.resolve(Some("date")).unwrap();
        assert_eq!(resolved.replacement(), "[0$1]{-2}/[0$2]{-2}/[20$3]{-4}");
    }

    #[test]
    fn test_resolve_unknown_tag_falls_through() {
        let engine = FormatEngine::new(EngineConfig::new().with_format("date"));

        let resolved = engine.resolve(Some("zipcode")).unwrap();
        assert_eq!(resolved.replacement(), "[0$1]{-2}/[0$2]{-2}/[20$3]{-4}");
    }

    #[test]
    fn test_resolve_nothing_configured() {
        let engine = FormatEngine::with_builtins();
        assert!(engine.resolve(None).is_none());
        assert_eq!(engine.format("12-31-1969", None), "12-31-1969");
    }

    #[test]
    fn test_callback_fires_only_on_substitution() {
        static FIRED: AtomicUsize = AtomicUsize::new(0);

        let engine = FormatEngine::new(
            EngineConfig::new()
                .with_format("date")
                .with_callback(|_| {
                    FIRED.fetch_add(1, Ordering::SeqCst);
                }),
        );

        assert_eq!(engine.apply("12-31-1969", None).unwrap(), "12/31/1969");
        assert_eq!(FIRED.load(Ordering::SeqCst), 1);

        // No match, no callback
        assert!(engine.apply("not a date", None).is_none());
        assert_eq!(FIRED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_apply_initial_respects_configuration() {
        let engine = FormatEngine::new(
            EngineConfig::new()
                .with_format("date")
                .with_apply_immediately(false),
        );
        assert!(engine.apply_initial("12-31-1969", None).is_none());

        let engine = FormatEngine::new(EngineConfig::new().with_format("date"));
        assert_eq!(
            engine.apply_initial("12-31-1969", None).unwrap(),
            "12/31/1969"
        );
    }

    #[test]
    fn test_caller_registry_entry() {
        let zip = Pattern::parse(r"^(\d{5})-?(\d{4})$", "[$1]-[$2]").unwrap();
        let engine = FormatEngine::new(EngineConfig::new().with_pattern_entry("zip", zip));

        assert_eq!(engine.format("452021234", Some("zip")), "45202-1234");
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormatEngine>();
        assert_send_sync::<EngineConfig>();
    }
}
