/// The kind of failure reported by a value handler or by the option matcher.
///
/// Success is expressed as `Ok(())`, so there is no "none" kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value was required, but none was available.
    InsufficientArguments,
    /// A value was provided, but it does not fit the handler's grammar.
    Mismatch,
    /// The value parses, but is too large for its destination.
    Overflow,
    /// The value parses, but is too small for its destination.
    Underflow,
    /// The option name is not in the table.
    InvalidOption,
    /// The option table or a handler is set up incorrectly.
    BadConfiguration,
    /// An allocation failed while handling the option.
    InsufficientMemory,
    /// An unexpected internal fault.
    Unknown,
    /// A caller-defined error, for handlers with domain specific validation.
    Custom(u32),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InsufficientArguments => write!(f, "insufficient-arguments"),
            ErrorKind::Mismatch => write!(f, "mismatch"),
            ErrorKind::Overflow => write!(f, "overflow"),
            ErrorKind::Underflow => write!(f, "underflow"),
            ErrorKind::InvalidOption => write!(f, "invalid-option"),
            ErrorKind::BadConfiguration => write!(f, "bad-configuration"),
            ErrorKind::InsufficientMemory => write!(f, "insufficient-memory"),
            ErrorKind::Unknown => write!(f, "unknown"),
            ErrorKind::Custom(code) => write!(f, "custom({code})"),
        }
    }
}

/// The attributes of an option row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Excluded from the help message, but still matchable.
    pub hidden: bool,
    /// Parsing stops immediately after this option is successfully handled.
    pub halt: bool,
    /// The option may be matched with no value at all.
    pub optional_value: bool,
}
