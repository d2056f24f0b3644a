use thiserror::Error;

use crate::model::ErrorKind;

/// The option table is malformed.
/// Reported by [`ParseContext::new`](./struct.ParseContext.html#method.new).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two rows share a short name.
    #[error("Config error: cannot duplicate the short option '-{0}'.")]
    DuplicateShortName(char),

    /// Two rows share a long name.
    #[error("Config error: cannot duplicate the option '--{0}'.")]
    DuplicateLongName(String),

    /// A named row has no handler.
    #[error("Config error: option '{0}' has no handler.")]
    MissingHandler(String),

    /// A row has a handler, but no name to match it by.
    #[error("Config error: row {0} has a handler but neither a short nor a long name.")]
    NamelessOption(usize),

    /// The short name is `=`, which delimits an option's value.
    #[error("Config error: invalid short option '{0}'.")]
    InvalidShortName(char),

    /// The long name contains `=`, which delimits an option's value.
    #[error("Config error: invalid option '--{0}'.")]
    InvalidLongName(String),
}

/// The failure of a [`ParseContext::parse`](./struct.ParseContext.html#method.parse) call.
///
/// Carries the [`ErrorKind`], the offending option as written (ex: `--int` or `-i`), and its value if one was resolved.
/// The `Display` implementation produces the default error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", default_error_message(.kind, .option_name, .option_argument.as_deref()))]
pub struct ParseError {
    kind: ErrorKind,
    option_name: String,
    option_argument: Option<String>,
}

impl ParseError {
    pub(crate) fn new(
        kind: ErrorKind,
        option_name: impl Into<String>,
        option_argument: Option<&str>,
    ) -> Self {
        Self {
            kind,
            option_name: option_name.into(),
            option_argument: option_argument.map(|a| a.to_string()),
        }
    }

    /// The kind of failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending option, including its leading dashes.
    pub fn option_name(&self) -> &str {
        &self.option_name
    }

    /// The value of the offending option, if one was resolved.
    pub fn option_argument(&self) -> Option<&str> {
        self.option_argument.as_deref()
    }
}

/// Format the default message for an error.
///
/// Useful as a fallback from a custom error handler.
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::{default_error_message, ErrorKind};
///
/// assert_eq!(
///     default_error_message(&ErrorKind::Overflow, "--int", Some("3000000000")),
///     "Value too large for option --int: 3000000000"
/// );
/// ```
pub fn default_error_message(
    kind: &ErrorKind,
    option_name: &str,
    option_argument: Option<&str>,
) -> String {
    match (kind, option_argument) {
        (ErrorKind::InsufficientArguments, _) => {
            format!("Value required after option {option_name}.")
        }
        (ErrorKind::Mismatch, Some(argument)) => {
            format!("Invalid value for option {option_name}: {argument}")
        }
        (ErrorKind::Mismatch, None) => format!("Invalid value for option {option_name}."),
        (ErrorKind::Overflow, Some(argument)) => {
            format!("Value too large for option {option_name}: {argument}")
        }
        (ErrorKind::Overflow, None) => format!("Value too large for option {option_name}."),
        (ErrorKind::Underflow, Some(argument)) => {
            format!("Value too small for option {option_name}: {argument}")
        }
        (ErrorKind::Underflow, None) => format!("Value too small for option {option_name}."),
        (ErrorKind::InvalidOption, _) => format!("Invalid option: {option_name}"),
        (ErrorKind::InsufficientMemory, _) => "Insufficient memory.".to_string(),
        (ErrorKind::BadConfiguration, _) => "Invalid option configuration.".to_string(),
        (ErrorKind::Unknown, _) | (ErrorKind::Custom(_), _) => {
            format!("Unknown error handling option {option_name}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::InsufficientArguments, "-s", None, "Value required after option -s.")]
    #[case(ErrorKind::Mismatch, "--int", Some("a"), "Invalid value for option --int: a")]
    #[case(ErrorKind::Mismatch, "-r", None, "Invalid value for option -r.")]
    #[case(ErrorKind::Overflow, "-i", Some("9e9"), "Value too large for option -i: 9e9")]
    #[case(ErrorKind::Underflow, "--d", Some("1e-999"), "Value too small for option --d: 1e-999")]
    #[case(ErrorKind::InvalidOption, "--bogus", None, "Invalid option: --bogus")]
    #[case(ErrorKind::InsufficientMemory, "-x", None, "Insufficient memory.")]
    #[case(ErrorKind::BadConfiguration, "-x", None, "Invalid option configuration.")]
    #[case(ErrorKind::Unknown, "-x", None, "Unknown error handling option -x.")]
    #[case(ErrorKind::Custom(3), "--ip", Some("1.2"), "Unknown error handling option --ip.")]
    fn parse_error_display(
        #[case] kind: ErrorKind,
        #[case] option_name: &str,
        #[case] option_argument: Option<&str>,
        #[case] expected: &str,
    ) {
        // Setup
        let error = ParseError::new(kind, option_name, option_argument);

        // Execute
        let message = error.to_string();

        // Verify
        assert_eq!(message, expected);
        assert_eq!(error.kind(), kind);
        assert_eq!(error.option_name(), option_name);
        assert_eq!(error.option_argument(), option_argument);
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::DuplicateShortName('n').to_string(),
            "Config error: cannot duplicate the short option '-n'."
        );
        assert_eq!(
            ConfigError::DuplicateLongName("help".to_string()).to_string(),
            "Config error: cannot duplicate the option '--help'."
        );
    }
}
