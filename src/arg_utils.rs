//! Low-level token helpers used by the parser engine.

use crate::config::{OPTION_PREFIX, VALUE_SEPARATOR};

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Name used for the program in diagnostics and help.
///
/// With the `short-program-name` feature the directory part of `argv0` is
/// dropped, so a full executable path prints as just its file name.
pub fn program_name(argv0: &str) -> &str {
    if cfg!(feature = "short-program-name") {
        last_name_from_path(argv0)
    } else {
        argv0
    }
}

/// A flag token with its prefix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BareToken<'t> {
    /// Everything after the one or two prefix characters.
    pub text: &'t str,
    /// `true` when the token was written with two prefix characters.
    pub double_dash: bool,
}

impl BareToken<'_> {
    /// Prefix to put back in front of a name when reporting it.
    pub fn dashes(&self) -> &'static str {
        if self.double_dash {
            "--"
        } else {
            "-"
        }
    }
}

/// Strips one or two prefix characters from `arg`.
///
/// Returns `None` when `arg` is not a flag token at all (positional argument).
/// An empty [`BareToken::text`] marks the positional terminator (`-` or `--`).
pub fn strip_prefix(arg: &str) -> Option<BareToken<'_>> {
    let rest = arg.strip_prefix(OPTION_PREFIX)?;
    Some(match rest.strip_prefix(OPTION_PREFIX) {
        Some(text) => BareToken {
            text,
            double_dash: true,
        },
        None => BareToken {
            text: rest,
            double_dash: false,
        },
    })
}

/// Splits a bare token at the first `=` into the flag name and inline value.
///
/// `"n=42"` gives `("n", Some("42"))`, `"n="` gives `("n", Some(""))` and
/// `"n"` gives `("n", None)`.
pub fn split_value(bare: &str) -> (&str, Option<&str>) {
    match bare.split_once(VALUE_SEPARATOR) {
        Some((name, value)) => (name, Some(value)),
        None => (bare, None),
    }
}
