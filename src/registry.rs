//! The option registry and its registration API.
//!
//! A [`Registry`] borrows the host program's storage for `'a`. Register
//! everything first, parse once, then drop the registry to read the values:
//!
//! ```
//! let mut n = 5i32;
//! let mut long = false;
//! {
//!     let mut flags = flag::Registry::new();
//!     flags.add(&mut n, "n", "# of iterations").unwrap();
//!     flags.add(&mut long, "l", "long listing").unwrap();
//!     let rest = flags.parse(&["prog", "-n", "42", "-l", "file"]);
//!     assert_eq!(rest, ["file"]);
//! }
//! assert_eq!(n, 42);
//! assert!(long);
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::alias::AliasTable;
use crate::config::Settings;
use crate::convert::{Conversion, ConvertError, Conversions, NumberMode};
use crate::option::{Behavior, Flag, Rejection};

/// A registration call the registry refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("empty flag name")]
    EmptyName,
    #[error("flag ‘{0}’ is already registered")]
    Duplicate(String),
    #[error("no conversion registered for type `{0}`")]
    UnsupportedType(&'static str),
    #[error("flag ‘{0}’: boolean flags take no value and cannot have a conversion")]
    BoolConversion(String),
}

pub(crate) enum HelpRenderer<'a> {
    Default,
    Custom(Box<dyn Fn(&str) + 'a>),
}

/// Registered options, aliases, conversions and parser settings.
pub struct Registry<'a> {
    pub(crate) flags: Vec<Flag<'a>>,
    pub(crate) aliases: AliasTable,
    conversions: Conversions,
    pub(crate) help: Option<HelpRenderer<'a>>,
    pub(crate) description: Option<String>,
    pub(crate) settings: Settings,
}

impl fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("flags", &self.flags)
            .field("aliases", &self.aliases)
            .field("conversions", &self.conversions)
            .field("has_help", &self.help.is_some())
            .field("description", &self.description)
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            flags: Vec::new(),
            aliases: AliasTable::new(),
            conversions: Conversions::builtin(),
            help: None,
            description: None,
            settings,
        }
    }

    // ── Registration ──────────────────────────────────────────────────────────

    /// Binds `target` to the flag `name`.
    ///
    /// `bool` targets become toggles that take no value. Any other type needs a
    /// conversion: the built-in scalars have one, other types must be
    /// registered with [`register_type`](Self::register_type) first.
    pub fn add<T: 'static>(
        &mut self,
        target: &'a mut T,
        name: &str,
        help: &str,
    ) -> Result<(), RegisterError> {
        self.check_name(name)?;
        let flag = if TypeId::of::<T>() == TypeId::of::<bool>() {
            let any: &'a mut dyn Any = target;
            let target = any
                .downcast_mut::<bool>()
                .ok_or(RegisterError::UnsupportedType(type_name::<T>()))?;
            Flag::toggle(name, help, target)
        } else {
            let conversion = self
                .conversions
                .get::<T>()
                .cloned()
                .ok_or(RegisterError::UnsupportedType(type_name::<T>()))?;
            bound(target, name, help, conversion)
        };
        self.push(flag);
        Ok(())
    }

    /// Like [`add`](Self::add) with a conversion used by this flag only.
    pub fn add_with<T, F>(
        &mut self,
        target: &'a mut T,
        name: &str,
        help: &str,
        value_name: Option<&'static str>,
        convert: F,
    ) -> Result<(), RegisterError>
    where
        T: 'static,
        F: Fn(&str) -> Result<T, ConvertError> + 'static,
    {
        self.check_name(name)?;
        if TypeId::of::<T>() == TypeId::of::<bool>() {
            return Err(RegisterError::BoolConversion(name.to_owned()));
        }
        let flag = bound(target, name, help, Conversion::new(value_name, convert));
        self.push(flag);
        Ok(())
    }

    /// Registers a flag whose value is handed to `callback`.
    ///
    /// The callback always takes a value. Returning `Err` fails the parse with
    /// an invalid-argument diagnostic that includes the rejection's description.
    pub fn add_fn<F>(&mut self, name: &str, help: &str, callback: F) -> Result<(), RegisterError>
    where
        F: FnMut(&str) -> Result<(), Rejection> + 'a,
    {
        self.check_name(name)?;
        self.push(Flag::new(name, help, Behavior::Callback(Box::new(callback))));
        Ok(())
    }

    /// Makes `alias` another name for the flag `canonical`.
    ///
    /// The canonical flag does not have to exist yet; an alias to a name that is
    /// never registered simply fails to resolve.
    pub fn alias(&mut self, alias: &str, canonical: &str) -> Result<(), RegisterError> {
        self.check_name(alias)?;
        if canonical.is_empty() {
            return Err(RegisterError::EmptyName);
        }
        debug!(alias, canonical, "registered alias");
        self.aliases.insert(alias, canonical);
        Ok(())
    }

    /// Adds a conversion for `T` so [`add`](Self::add) accepts `&mut T`.
    pub fn register_type<T, F>(&mut self, value_name: Option<&'static str>, convert: F)
    where
        T: 'static,
        F: Fn(&str) -> Result<T, ConvertError> + 'static,
    {
        debug!(ty = type_name::<T>(), "registered conversion");
        self.conversions
            .register::<T>(Conversion::new(value_name, convert));
    }

    fn check_name(&self, name: &str) -> Result<(), RegisterError> {
        if name.is_empty() {
            return Err(RegisterError::EmptyName);
        }
        if self.find(name).is_some() || self.aliases.contains(name) {
            return Err(RegisterError::Duplicate(name.to_owned()));
        }
        Ok(())
    }

    fn push(&mut self, flag: Flag<'a>) {
        debug!(
            flag = flag.name(),
            takes_value = flag.takes_value(),
            "registered option"
        );
        self.flags.push(flag);
    }

    // ── Settings ──────────────────────────────────────────────────────────────

    /// Show value types in the default help text (on by default).
    pub fn show_types(&mut self, show: bool) {
        self.settings.show_types = show;
    }

    /// Accept grouped single-codepoint flags such as `-abc` (off by default).
    pub fn allow_grouping(&mut self, allow: bool) {
        self.settings.allow_grouping = allow;
    }

    /// Reject numeric arguments with trailing garbage or no digits (off by default).
    pub fn strict_numbers(&mut self, strict: bool) {
        self.settings.strict_numbers = strict;
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub(crate) fn number_mode(&self) -> NumberMode {
        if self.settings.strict_numbers {
            NumberMode::Strict
        } else {
            NumberMode::Permissive
        }
    }

    /// Installs a help renderer called with the program name on `-help`.
    pub fn set_help<F>(&mut self, renderer: F)
    where
        F: Fn(&str) + 'a,
    {
        self.help = Some(HelpRenderer::Custom(Box::new(renderer)));
    }

    /// Installs the default help renderer, which prints
    /// [`render_help`](Self::render_help) to standard output.
    pub fn set_default_help(&mut self) {
        self.help = Some(HelpRenderer::Default);
    }

    pub fn has_help(&self) -> bool {
        self.help.is_some()
    }

    /// Text printed under the next failure report, then forgotten.
    ///
    /// A callback's own [`Rejection`] description takes precedence.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    pub fn flags(&self) -> &[Flag<'a>] {
        &self.flags
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Index of the flag registered under exactly `name`.
    pub(crate) fn find(&self, name: &str) -> Option<usize> {
        self.flags.iter().position(|flag| flag.is_named(name))
    }

    /// Index of the flag `name` refers to, directly or through an alias.
    pub(crate) fn resolve(&self, name: &str) -> Option<usize> {
        self.find(name)
            .or_else(|| self.aliases.resolve(name).and_then(|canonical| self.find(canonical)))
    }
}

fn bound<'a, T: 'static>(
    target: &'a mut T,
    name: &str,
    help: &str,
    conversion: Conversion<T>,
) -> Flag<'a> {
    let kind = conversion.kind();
    let value_name = conversion.value_name();
    let store = move |text: &str, mode: NumberMode| -> Result<(), ConvertError> {
        *target = conversion.convert(text, mode)?;
        Ok(())
    };
    Flag::new(
        name,
        help,
        Behavior::Bound {
            kind,
            value_name,
            store: Box::new(store),
        },
    )
}
