use crate::api::ValueHandler;
use crate::model::Attributes;

/// One row of the option table.
///
/// A row is either an *option* (at least one of a short/long name, plus a handler) or a *section header* (neither names nor handler).
/// Section headers only affect the help message.
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::{Bool, Integer, OptionSpec};
///
/// let mut help = false;
/// let mut count: u32 = 0;
/// let table = vec![
///     OptionSpec::section("Main options:"),
///     OptionSpec::new(Some('h'), Some("help"), Bool::new(&mut help))
///         .description("Shows help.")
///         .halt(),
///     OptionSpec::new(Some('c'), Some("count"), Integer::new(&mut count))
///         .description("How many times.")
///         .argument("value"),
/// ];
/// assert_eq!(table.len(), 3);
/// ```
pub struct OptionSpec<'a> {
    short: Option<char>,
    long: Option<String>,
    description: Option<String>,
    argument: Option<String>,
    handler: Option<Box<dyn ValueHandler + 'a>>,
    requires_value: bool,
    attributes: Attributes,
}

impl<'a> OptionSpec<'a> {
    /// Create an option row.
    ///
    /// Rows without a short and long name are rejected when the [`ParseContext`](./struct.ParseContext.html) is created.
    pub fn new(
        short: Option<char>,
        long: Option<&str>,
        handler: impl ValueHandler + 'a,
    ) -> Self {
        Self {
            short,
            long: long.map(|l| l.to_string()),
            description: None,
            argument: None,
            handler: Some(Box::new(handler)),
            requires_value: false,
            attributes: Attributes::default(),
        }
    }

    /// Create a section header row.
    /// An empty description renders as a blank line in the help message.
    pub fn section(description: impl Into<String>) -> Self {
        Self {
            short: None,
            long: None,
            description: Some(description.into()),
            argument: None,
            handler: None,
            requires_value: false,
            attributes: Attributes::default(),
        }
    }

    /// Create a row with names but no handler.
    ///
    /// Such a row never validates; it exists so that tables assembled dynamically can be checked.
    pub fn unhandled(short: Option<char>, long: Option<&str>) -> Self {
        Self {
            short,
            long: long.map(|l| l.to_string()),
            description: None,
            argument: None,
            handler: None,
            requires_value: false,
            attributes: Attributes::default(),
        }
    }

    /// Document the help message for this option.
    /// If repeated, only the final message will apply.
    ///
    /// Line breaks (`'\n'`) are aligned to the description column.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Document the name of this option's value in the help message (ex: `--count=value`).
    /// Has no effect on parsing.
    pub fn argument(mut self, argument: impl Into<String>) -> Self {
        self.argument.replace(argument.into());
        self
    }

    /// Require a value for this option, even if its handler does not take one by default.
    ///
    /// For example, a [`VerboseBool`](./struct.VerboseBool.html) option written as `-r true`.
    pub fn requires_value(mut self) -> Self {
        self.requires_value = true;
        self
    }

    /// Hide this option from the help message.
    pub fn hidden(mut self) -> Self {
        self.attributes.hidden = true;
        self
    }

    /// Stop parsing once this option is successfully handled (ex: `--help`).
    pub fn halt(mut self) -> Self {
        self.attributes.halt = true;
        self
    }

    /// Allow this option to be given without a value.
    /// Its value is then never read from the following token.
    pub fn optional_value(mut self) -> Self {
        self.attributes.optional_value = true;
        self
    }

    /// The short name of this option.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The long name of this option.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The help message of this row.
    pub fn help(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The help name of this option's value.
    pub fn argument_description(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// The attributes of this row.
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    /// Whether this row is a section header.
    pub fn is_section(&self) -> bool {
        self.short.is_none() && self.long.is_none() && self.handler.is_none()
    }

    pub(crate) fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Whether this option reads a value from the following token.
    pub(crate) fn takes_value(&self) -> bool {
        self.requires_value
            || self
                .handler
                .as_ref()
                .map(|handler| handler.takes_value())
                .unwrap_or(false)
    }

    pub(crate) fn handler_mut(&mut self) -> Option<&mut (dyn ValueHandler + 'a)> {
        self.handler.as_deref_mut()
    }
}

impl<'a> std::fmt::Debug for OptionSpec<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_section() {
            return write!(
                f,
                "Section[{d}]",
                d = self.description.as_deref().unwrap_or_default()
            );
        }

        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let long = match &self.long {
            Some(l) => format!(" --{l},"),
            None => "".to_string(),
        };

        write!(
            f,
            "Option[{short}{long} takes_value={t}, {a:?}]",
            t = self.takes_value(),
            a = self.attributes,
        )
    }
}
