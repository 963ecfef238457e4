//! flag — a small command-line flag parser.
//!
//! Options are registered into an explicit [`Registry`] that borrows the host
//! program's variables, then `argv` is parsed in a single pass. Unknown flags
//! get a "did you mean" suggestion, bad values a diagnostic on stderr.
//!
//! | Module        | Contents |
//! |---------------|----------|
//! | [`convert`]   | text → value conversions, built-in and host-registered |
//! | [`option`]    | one registered flag and its behaviour |
//! | [`alias`]     | alternate flag names |
//! | [`similarity`]| Jaro / Jaro–Winkler scores for suggestions |
//! | [`registry`]  | registration API and settings |
//! | [`parser`]    | the parse loop |
//! | [`diagnostics`]| failure messages and exit codes |
//! | [`help`]      | default help text |
//! | [`arg_utils`] | token splitting helpers |
//! | [`config`]    | constants and [`Settings`] |

pub mod alias;
pub mod arg_utils;
pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod help;
pub mod option;
pub mod parser;
pub mod registry;
pub mod similarity;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use config::Settings;
pub use convert::{Conversion, ConvertError, NumberMode, RangeError, ScalarKind};
pub use diagnostics::{error_out, Diagnostic, ParseError, ParseOutcome};
pub use option::{ArgError, Flag, Rejection};
pub use registry::{RegisterError, Registry};
