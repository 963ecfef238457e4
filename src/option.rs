//! The option model: one registered flag and its behaviour.

use std::fmt;

use crate::convert::{ConvertError, NumberMode, ScalarKind};

/// Why a callback option refused its argument.
///
/// The optional description is printed on its own line under the diagnostic,
/// e.g. to list the accepted values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rejection {
    description: Option<String>,
}

impl Rejection {
    /// A rejection without extra text.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rejection that explains itself.
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Why [`Flag::parse_arg`] did not accept its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    Convert(ConvertError),
    Rejected(Rejection),
}

pub(crate) type Store<'a> = Box<dyn FnMut(&str, NumberMode) -> Result<(), ConvertError> + 'a>;
pub(crate) type Callback<'a> = Box<dyn FnMut(&str) -> Result<(), Rejection> + 'a>;

pub(crate) enum Behavior<'a> {
    /// Converts the argument and writes it to borrowed storage.
    Bound {
        kind: ScalarKind,
        value_name: Option<&'static str>,
        store: Store<'a>,
    },
    /// Sets borrowed storage to the negation of its value at registration.
    Toggle { target: &'a mut bool, on: bool },
    Callback(Callback<'a>),
}

/// One registered flag.
pub struct Flag<'a> {
    name: String,
    help: String,
    behavior: Behavior<'a>,
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let behavior = match &self.behavior {
            Behavior::Bound { kind, .. } => format!("{:?}", kind),
            Behavior::Toggle { on, .. } => format!("Toggle(on={})", on),
            Behavior::Callback(_) => "Callback".to_owned(),
        };
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("behavior", &behavior)
            .finish()
    }
}

impl<'a> Flag<'a> {
    /// Callers check the name is non-empty before building a flag.
    pub(crate) fn new(name: &str, help: &str, behavior: Behavior<'a>) -> Self {
        debug_assert!(!name.is_empty());
        Self {
            name: name.to_owned(),
            help: help.to_owned(),
            behavior,
        }
    }

    pub(crate) fn toggle(name: &str, help: &str, target: &'a mut bool) -> Self {
        let on = !*target;
        Self::new(name, help, Behavior::Toggle { target, on })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Exact, byte-wise name comparison.
    pub fn is_named(&self, candidate: &str) -> bool {
        self.name == candidate
    }

    pub fn takes_value(&self) -> bool {
        !matches!(self.behavior, Behavior::Toggle { .. })
    }

    /// Destination category, `None` for toggles and callbacks.
    pub fn kind(&self) -> Option<ScalarKind> {
        match self.behavior {
            Behavior::Bound { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Type name for help text; `None` means "use the uppercased flag name".
    pub fn value_name(&self) -> Option<&'static str> {
        match self.behavior {
            Behavior::Bound { value_name, .. } => value_name,
            _ => None,
        }
    }

    /// Applies `arg` to the flag.
    ///
    /// Toggles ignore `arg`; everything else expects `Some`, and a missing
    /// value is handed over as the empty string. `mode` only matters for
    /// numeric destinations.
    pub fn parse_arg(&mut self, arg: Option<&str>, mode: NumberMode) -> Result<(), ArgError> {
        match &mut self.behavior {
            Behavior::Bound { store, .. } => {
                store(arg.unwrap_or(""), mode).map_err(ArgError::Convert)
            }
            Behavior::Toggle { target, on } => {
                **target = *on;
                Ok(())
            }
            Behavior::Callback(callback) => {
                callback(arg.unwrap_or("")).map_err(ArgError::Rejected)
            }
        }
    }
}
