//! Type conversion registry.
//!
//! Every non-boolean bound option converts its argument text through a
//! [`Conversion`] looked up by the destination's [`TypeId`]. The table starts
//! with the built-in scalars and hosts can add their own types with
//! [`Conversions::register`] (usually via
//! [`Registry::register_type`](crate::Registry::register_type)).
//!
//! | Type | Value name | Behaviour |
//! |------|------------|-----------|
//! | `i8` … `i64`, `isize` | `int` | `strtoll`-style, radix auto-detected, range checked |
//! | `u8` … `u64`, `usize` | `unsigned` | `strtoull`-style, radix auto-detected, range checked |
//! | `f32`, `f64` | `float` | longest numeric prefix, `0.0` when none |
//! | `String` | `string` | raw text |
//!
//! Numeric text is read permissively by default: trailing garbage is ignored
//! and text without digits reads as zero. [`NumberMode::Strict`] rejects both.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// A numeric argument that does not fit the destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("value too large")]
    TooLarge,
    #[error("value too small")]
    TooSmall,
}

/// Why a conversion rejected its argument text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("{0}")]
    Invalid(String),
}

impl ConvertError {
    /// Convenience constructor for host conversions.
    pub fn invalid(message: impl Into<String>) -> Self {
        ConvertError::Invalid(message.into())
    }
}

/// How strictly numeric text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// Keep whatever prefix parses; no digits at all reads as zero.
    #[default]
    Permissive,
    /// The whole text must be a number.
    Strict,
}

/// Broad category of a bound option's destination, used for help and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Signed,
    Unsigned,
    Float,
    Text,
    Custom,
}

type ConvertFn<T> = Rc<dyn Fn(&str, NumberMode) -> Result<T, ConvertError>>;

/// Value name and conversion function for one destination type.
pub struct Conversion<T> {
    kind: ScalarKind,
    value_name: Option<&'static str>,
    convert: ConvertFn<T>,
}

impl<T> Clone for Conversion<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            value_name: self.value_name,
            convert: Rc::clone(&self.convert),
        }
    }
}

impl<T> fmt::Debug for Conversion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("kind", &self.kind)
            .field("value_name", &self.value_name)
            .finish_non_exhaustive()
    }
}

impl<T> Conversion<T> {
    /// A host-supplied conversion.
    ///
    /// `value_name` is shown in help; `None` falls back to the uppercased
    /// flag name.
    pub fn new<F>(value_name: Option<&'static str>, convert: F) -> Self
    where
        F: Fn(&str) -> Result<T, ConvertError> + 'static,
    {
        Self {
            kind: ScalarKind::Custom,
            value_name,
            convert: Rc::new(move |text: &str, _: NumberMode| convert(text)),
        }
    }

    fn builtin<F>(kind: ScalarKind, value_name: &'static str, convert: F) -> Self
    where
        F: Fn(&str, NumberMode) -> Result<T, ConvertError> + 'static,
    {
        Self {
            kind,
            value_name: Some(value_name),
            convert: Rc::new(convert),
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn value_name(&self) -> Option<&'static str> {
        self.value_name
    }

    pub fn convert(&self, text: &str, mode: NumberMode) -> Result<T, ConvertError> {
        (self.convert)(text, mode)
    }
}

/// Conversion table keyed by destination type.
pub struct Conversions {
    table: HashMap<TypeId, Box<dyn Any>>,
}

impl fmt::Debug for Conversions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversions")
            .field("types", &self.table.len())
            .finish()
    }
}

impl Default for Conversions {
    fn default() -> Self {
        Self::builtin()
    }
}

macro_rules! register_builtin {
    ($table:expr, $kind:expr, $name:expr, $func:ident: $($ty:ty),+) => {
        $( $table.register::<$ty>(Conversion::builtin($kind, $name, $func::<$ty>)); )+
    };
}

impl Conversions {
    /// An empty table, without even the built-in scalars.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// A table holding the built-in scalar conversions.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        register_builtin!(table, ScalarKind::Signed, "int", convert_signed: i8, i16, i32, i64, isize);
        register_builtin!(table, ScalarKind::Unsigned, "unsigned", convert_unsigned: u8, u16, u32, u64, usize);
        register_builtin!(table, ScalarKind::Float, "float", convert_float: f32, f64);
        table.register::<String>(Conversion::builtin(ScalarKind::Text, "string", |text, _| {
            Ok(text.to_owned())
        }));
        table
    }

    /// Adds or replaces the conversion for `T`.
    pub fn register<T: 'static>(&mut self, conversion: Conversion<T>) {
        self.table.insert(TypeId::of::<T>(), Box::new(conversion));
    }

    pub fn get<T: 'static>(&self) -> Option<&Conversion<T>> {
        self.table.get(&TypeId::of::<T>())?.downcast_ref()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.table.contains_key(&TypeId::of::<T>())
    }
}

// ── Numeric scanning ──────────────────────────────────────────────────────────

/// Result of reading an integer the way `strtoull` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScannedInt {
    negative: bool,
    magnitude: u64,
    overflow: bool,
    /// At least one digit was read and nothing followed it.
    complete: bool,
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn scan_integer(text: &str) -> ScannedInt {
    let bytes = text.trim_start_matches(is_c_space).as_bytes();
    let mut i = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let rest = &bytes[i..];
    let radix = if (rest.starts_with(b"0x") || rest.starts_with(b"0X"))
        && rest.get(2).is_some_and(u8::is_ascii_hexdigit)
    {
        i += 2;
        16
    } else if rest.first() == Some(&b'0') {
        8
    } else {
        10
    };

    let start = i;
    let mut magnitude = 0u64;
    let mut overflow = false;
    while let Some(digit) = bytes.get(i).and_then(|&b| (b as char).to_digit(radix)) {
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        i += 1;
    }

    ScannedInt {
        negative,
        magnitude,
        overflow,
        complete: i > start && i == bytes.len(),
    }
}

fn not_a_number(text: &str, what: &str) -> ConvertError {
    ConvertError::Invalid(format!("‘{}’ is not a valid {}", text, what))
}

/// Reads a signed integer and range-checks it against `T`.
pub fn convert_signed<T: TryFrom<i64>>(text: &str, mode: NumberMode) -> Result<T, ConvertError> {
    let scanned = scan_integer(text);
    if mode == NumberMode::Strict && !scanned.complete {
        return Err(not_a_number(text, "integer"));
    }
    // Saturate at the 64-bit limits first, then narrow.
    let wide = if scanned.overflow {
        if scanned.negative {
            i128::from(i64::MIN)
        } else {
            i128::from(i64::MAX)
        }
    } else if scanned.negative {
        -i128::from(scanned.magnitude)
    } else {
        i128::from(scanned.magnitude)
    };
    let value = wide.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
    T::try_from(value).map_err(|_| {
        if value < 0 {
            RangeError::TooSmall.into()
        } else {
            RangeError::TooLarge.into()
        }
    })
}

/// Reads an unsigned integer and range-checks it against `T`.
///
/// A leading `-` negates modulo 2^64, so `-1` is `u64::MAX`.
pub fn convert_unsigned<T: TryFrom<u64>>(
    text: &str,
    mode: NumberMode,
) -> Result<T, ConvertError> {
    let scanned = scan_integer(text);
    if mode == NumberMode::Strict && !scanned.complete {
        return Err(not_a_number(text, "unsigned integer"));
    }
    let value = if scanned.overflow {
        u64::MAX
    } else if scanned.negative {
        scanned.magnitude.wrapping_neg()
    } else {
        scanned.magnitude
    };
    T::try_from(value).map_err(|_| RangeError::TooLarge.into())
}

/// Longest prefix of `text` that reads as a float, and whether it was all of it.
fn scan_float(text: &str) -> (f64, bool) {
    let trimmed = text.trim_start_matches(is_c_space);
    if let Ok(value) = trimmed.parse::<f64>() {
        return (value, true);
    }
    for (end, _) in trimmed.char_indices().rev() {
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            return (value, false);
        }
    }
    (0.0, false)
}

trait FromF64 {
    fn from_f64(value: f64) -> Self;
}

impl FromF64 for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl FromF64 for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

fn convert_float<T: FromF64>(text: &str, mode: NumberMode) -> Result<T, ConvertError> {
    let (value, complete) = scan_float(text);
    if mode == NumberMode::Strict && !complete {
        return Err(not_a_number(text, "number"));
    }
    Ok(T::from_f64(value))
}
