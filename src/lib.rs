//! Form-input auto-formatting engine.
//!
//! This library rewrites free-form field text into a canonical display
//! format: a capture-group regex recognizes the input, and a replacement
//! template with per-capture directives (character slicing, case
//! transforms) assembles the normalized output. Non-matching input is
//! passed through unchanged, never rejected.
//!
//! # Features
//!
//! - **Built-in formats**: dates, 12-hour times, credit cards, NANP
//!   phone numbers
//! - **Template directives**: per-token slicing and named flag
//!   transforms (`U` uppercase, `L` lowercase, caller extensions)
//! - **Custom patterns**: compiled regexes or `/body/flags` source
//!   strings
//! - **No error surface in transforms**: blank, non-matching, and
//!   degenerate inputs all degrade to a defined result
//!
//! # Architecture
//!
//! - [`pattern`]: patterns, the named registry, and the flag table
//! - [`engine`]: configuration, pattern resolution, template substitution
//! - [`error`]: construction-time error handling
//!
//! # Quick Start
//!
//! ```
//! use impose::FormatEngine;
//!
//! let engine = FormatEngine::with_builtins();
//!
//! assert_eq!(engine.format("12-31-1969", Some("date")), "12/31/1969");
//! assert_eq!(engine.format("4:34a", Some("time")), "04:34 AM");
//! assert_eq!(engine.format("(513) 555.1234", Some("phone")), "513-555-1234");
//! ```
//!
//! # Custom patterns and flags
//!
//! ```
//! use impose::{EngineConfig, FormatEngine, Pattern};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EngineConfig::new()
//!     .with_pattern(Pattern::parse(r"^(\d{5})(\d{4})$", "[$1]-[$2]")?)
//!     .with_flag('R', |text| text.chars().rev().collect());
//!
//! let engine = FormatEngine::new(config);
//! assert_eq!(engine.format("452021234", None), "45202-1234");
//! # Ok(())
//! # }
//! ```

// Public API
pub mod engine;
pub mod error;
pub mod pattern;

// Re-exports for convenient access
pub use engine::{transform, try_transform, Callback, EngineConfig, FormatEngine};
pub use error::{ImposeError, ImposeResult};
pub use pattern::{compile_source, FlagFn, FlagTable, Pattern, Registry};
