//! Compile-time constants and the runtime toggles carried by a
//! [`Registry`](crate::Registry).
//!
//! The constants fix the token grammar (prefix character, reserved help name)
//! and the tuning of the suggestion matcher. [`Settings`] holds the parser
//! switches a host program may flip before parsing.

/// Character that introduces a flag token. One or two of them may prefix a name.
pub const OPTION_PREFIX: char = '-';

/// Separator between a flag name and an inline value (`-n=42`).
pub const VALUE_SEPARATOR: char = '=';

/// Bare token that invokes the help renderer when one is installed.
pub const HELP_FLAG: &str = "help";

/// Minimum Jaro–Winkler score a registered name needs to be suggested.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Jaro–Winkler common-prefix weight.
pub const PREFIX_WEIGHT: f64 = 0.1;

/// Exit code after the help renderer ran.
pub const EXIT_HELP: i32 = 0;

/// Exit code after a fatal parse failure.
pub const EXIT_FAILURE: i32 = 1;

/// Parser switches owned by a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Print the value type (or uppercased flag name) next to value-taking
    /// options in the default help text.
    pub show_types: bool,
    /// Accept grouped single-codepoint flags such as `-abc`.
    pub allow_grouping: bool,
    /// Reject numeric text that is not entirely a number instead of keeping
    /// the partially parsed value.
    pub strict_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_types: true,
            allow_grouping: false,
            strict_numbers: false,
        }
    }
}
