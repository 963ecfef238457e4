//! Failure reporting.
//!
//! A failed flag produces one [`Diagnostic`]. Its `Display` output is the text
//! written to standard error before the process exits:
//!
//! ```text
//! prog: unrecognized option ‘--fooo’; did you mean ‘--foo’?
//! <description, when there is one>
//! Try 'prog -help' for more information.
//! ```

use std::fmt;

use thiserror::Error;

use crate::config::{EXIT_FAILURE, EXIT_HELP, HELP_FLAG};
use crate::convert::ConvertError;

/// Result of resolving one flag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    Ok,
    /// No option or alias has that name.
    InvalidOption,
    /// A value-taking option was the last token.
    MissingValue,
    /// `-flag=value` on an option that takes no value.
    UnexpectedValue,
    /// The conversion or callback refused the value.
    InvalidValue,
}

/// Everything needed to report one failed flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub(crate) program: String,
    pub(crate) outcome: ParseOutcome,
    pub(crate) flag: String,
    pub(crate) value: Option<String>,
    pub(crate) double_dash: bool,
    pub(crate) suggestion: Option<String>,
    pub(crate) cause: Option<ConvertError>,
    pub(crate) description: Option<String>,
    pub(crate) help_hint: bool,
}

impl Diagnostic {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn outcome(&self) -> ParseOutcome {
        self.outcome
    }

    /// Offending flag name, without dashes.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Value handed to the flag, when one was found.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Registered name close to an unrecognized one.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Conversion error behind an [`ParseOutcome::InvalidValue`], if any.
    pub fn cause(&self) -> Option<&ConvertError> {
        self.cause.as_ref()
    }

    /// Extra line printed under the message.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn dashes(&self) -> &'static str {
        if self.double_dash {
            "--"
        } else {
            "-"
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dash = self.dashes();
        write!(f, "{}: ", self.program)?;
        match self.outcome {
            ParseOutcome::Ok => {}
            ParseOutcome::InvalidOption => {
                write!(f, "unrecognized option ‘{}{}’", dash, self.flag)?;
                if let Some(suggestion) = &self.suggestion {
                    write!(f, "; did you mean ‘{}{}’?", dash, suggestion)?;
                }
            }
            ParseOutcome::MissingValue => {
                write!(f, "option ‘{}{}’ requires an argument", dash, self.flag)?;
            }
            ParseOutcome::UnexpectedValue => {
                write!(f, "option ‘{}{}’ doesn't allow an argument", dash, self.flag)?;
            }
            ParseOutcome::InvalidValue => {
                write!(
                    f,
                    "invalid argument ‘{}’ for ‘{}{}’",
                    self.value.as_deref().unwrap_or(""),
                    dash,
                    self.flag
                )?;
            }
        }
        if let Some(description) = &self.description {
            write!(f, "\n{}", description)?;
        }
        if self.help_hint {
            write!(
                f,
                "\nTry '{} -{}' for more information.",
                self.program, HELP_FLAG
            )?;
        }
        Ok(())
    }
}

/// Why a parse stopped early.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The help renderer ran; the program should exit successfully.
    #[error("help requested")]
    Help,
    #[error("{0}")]
    Invalid(Box<Diagnostic>),
}

impl ParseError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::Help => EXIT_HELP,
            ParseError::Invalid(_) => EXIT_FAILURE,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ParseError::Help => None,
            ParseError::Invalid(diagnostic) => Some(diagnostic),
        }
    }
}

/// Print `err` to stderr and exit with its code.
pub fn error_out(err: &ParseError) -> ! {
    if let ParseError::Invalid(diagnostic) = err {
        eprintln!("{}", diagnostic);
    }
    std::process::exit(err.exit_code());
}
