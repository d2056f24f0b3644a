use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::model::ErrorKind;

/// Behaviour to convert an option's value and store it into a caller-owned destination.
///
/// The matcher passes `None` when the option was given without a value, and `Some("")` when the value was explicitly empty (ex: `--name=`).
/// Implementations must leave their destination untouched when returning an error.
pub trait ValueHandler {
    /// Convert and store the value.
    fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind>;

    /// Whether the option consumes a value by default.
    ///
    /// An option that takes a value may read it from the following token (ex: `--name value`).
    /// An option that does not can still receive an inline value (ex: `--flag=0`).
    fn takes_value(&self) -> bool {
        true
    }
}

fn required(value: Option<&str>) -> Result<&str, ErrorKind> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ErrorKind::InsufficientArguments),
    }
}

fn parse_bool(text: &str) -> Result<bool, ErrorKind> {
    match text.parse::<u64>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        _ => Err(ErrorKind::Mismatch),
    }
}

/// A flag handler for `bool`.
///
/// An absent value means `true`.
/// Otherwise, the value must be the integer `0` (`false`) or `1` (`true`).
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::{Bool, ValueHandler};
///
/// let mut verbose = false;
/// Bool::new(&mut verbose).handle(None).unwrap();
/// assert!(verbose);
/// ```
pub struct Bool<'a> {
    variable: &'a mut bool,
}

impl<'a> Bool<'a> {
    /// Create a bool handler.
    pub fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }
}

impl<'a> ValueHandler for Bool<'a> {
    fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        *self.variable = match value {
            Some(text) => parse_bool(text)?,
            None => true,
        };
        Ok(())
    }

    fn takes_value(&self) -> bool {
        false
    }
}

/// A flag handler for `bool` which also accepts the words `true` and `false`.
///
/// Otherwise identical to [`Bool`].
pub struct VerboseBool<'a> {
    variable: &'a mut bool,
}

impl<'a> VerboseBool<'a> {
    /// Create a verbose bool handler.
    pub fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }
}

impl<'a> ValueHandler for VerboseBool<'a> {
    fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        *self.variable = match value {
            Some("true") => true,
            Some("false") => false,
            Some(text) => parse_bool(text)?,
            None => true,
        };
        Ok(())
    }

    fn takes_value(&self) -> bool {
        false
    }
}

/// A value handler for any primitive integer type (signed or unsigned).
///
/// The value is parsed in base 10, with an optional leading `+` (or `-` for signed types).
/// Values outside the range of `T` are reported as [`ErrorKind::Overflow`].
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::{ErrorKind, Integer, ValueHandler};
///
/// let mut count: u8 = 0;
/// let mut handler = Integer::new(&mut count);
/// assert_eq!(handler.handle(Some("300")), Err(ErrorKind::Overflow));
/// handler.handle(Some("+12")).unwrap();
/// assert_eq!(count, 12);
/// ```
pub struct Integer<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Integer<'a, T> {
    /// Create an integer handler.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> ValueHandler for Integer<'a, T>
where
    T: FromStr<Err = ParseIntError>,
{
    fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        let text = required(value)?;
        *self.variable = text.parse::<T>().map_err(|error| match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ErrorKind::Overflow,
            _ => ErrorKind::Mismatch,
        })?;
        Ok(())
    }
}

/// A value handler for `f64`.
///
/// A literal whose magnitude is too large is reported as [`ErrorKind::Overflow`].
/// A non-zero literal whose magnitude is too small to represent is reported as [`ErrorKind::Underflow`] (the destination keeps its value).
/// The words `inf`, `infinity` and `nan` are accepted as-is.
pub struct Double<'a> {
    variable: &'a mut f64,
}

impl<'a> Double<'a> {
    /// Create a double handler.
    pub fn new(variable: &'a mut f64) -> Self {
        Self { variable }
    }
}

impl<'a> ValueHandler for Double<'a> {
    fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        let text = required(value)?;
        let parsed = text.parse::<f64>().map_err(|_| ErrorKind::Mismatch)?;

        if parsed.is_infinite() && !spells_infinity(text) {
            return Err(ErrorKind::Overflow);
        }

        if parsed == 0.0 && has_significant_digit(text) {
            return Err(ErrorKind::Underflow);
        }

        *self.variable = parsed;
        Ok(())
    }
}

fn spells_infinity(text: &str) -> bool {
    text.trim_start_matches(['+', '-'])
        .to_ascii_lowercase()
        .starts_with("inf")
}

fn has_significant_digit(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .map(|mantissa| mantissa.chars().any(|c| ('1'..='9').contains(&c)))
        .unwrap_or(false)
}

/// A value handler for strings.
///
/// Any value is accepted (including the empty string) and copied into the destination.
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::{Text, ValueHandler};
///
/// let mut name: Option<String> = None;
/// Text::new(&mut name).handle(Some("foo=bar")).unwrap();
/// assert_eq!(name.as_deref(), Some("foo=bar"));
/// ```
pub struct Text<'a> {
    variable: &'a mut Option<String>,
}

impl<'a> Text<'a> {
    /// Create a string handler.
    pub fn new(variable: &'a mut Option<String>) -> Self {
        Self { variable }
    }
}

impl<'a> ValueHandler for Text<'a> {
    fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        match value {
            Some(text) => {
                self.variable.replace(text.to_string());
                Ok(())
            }
            None => Err(ErrorKind::InsufficientArguments),
        }
    }
}

/// A value handler backed by a closure, for domain specific conversions.
///
/// The closure may return any [`ErrorKind`], including [`ErrorKind::Custom`].
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::{Custom, ErrorKind, ValueHandler};
///
/// let mut port: u16 = 0;
/// let mut handler = Custom::new(|value: Option<&str>| match value {
///     Some("http") => {
///         port = 80;
///         Ok(())
///     }
///     Some(_) => Err(ErrorKind::Custom(1)),
///     None => Err(ErrorKind::InsufficientArguments),
/// });
/// handler.handle(Some("http")).unwrap();
/// assert_eq!(handler.handle(Some("gopher")), Err(ErrorKind::Custom(1)));
/// drop(handler);
/// assert_eq!(port, 80);
/// ```
pub struct Custom<F> {
    function: F,
    takes_value: bool,
}

impl<F> Custom<F>
where
    F: FnMut(Option<&str>) -> Result<(), ErrorKind>,
{
    /// Create a custom handler for an option that takes a value.
    pub fn new(function: F) -> Self {
        Self {
            function,
            takes_value: true,
        }
    }

    /// Create a custom handler for an option that takes no value (unless given inline via `=`).
    pub fn flag(function: F) -> Self {
        Self {
            function,
            takes_value: false,
        }
    }
}

impl<F> ValueHandler for Custom<F>
where
    F: FnMut(Option<&str>) -> Result<(), ErrorKind>,
{
    fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        (self.function)(value)
    }

    fn takes_value(&self) -> bool {
        self.takes_value
    }
}
