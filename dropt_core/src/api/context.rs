use crate::api::OptionSpec;
use crate::matcher::{exact_match, MatchSettings, NameComparator, OptionTable, TokenMatcher};
use crate::model::ErrorKind;
use crate::parser::{
    default_error_message, ConfigError, HelpParams, ParseError, Printer, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Formats a [`ParseError`] into a user facing message.
pub type ErrorFormatter<'a> = Box<dyn Fn(&ParseError) -> String + 'a>;

/// A parsing session, bound to one option table.
///
/// The table is validated once, on creation.
/// The context may then be used for any number of [`parse`](#method.parse) calls; each one dispatches values to the handlers of the matched options.
/// The handlers borrow their destinations, so drop the context before reading them.
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::{Bool, Integer, OptionSpec, ParseContext};
///
/// let mut verbose = false;
/// let mut count: u32 = 0;
/// let mut context = ParseContext::new(vec![
///     OptionSpec::new(Some('v'), Some("verbose"), Bool::new(&mut verbose)),
///     OptionSpec::new(Some('c'), Some("count"), Integer::new(&mut count)),
/// ])
/// .unwrap();
///
/// let rest = context.parse(["-v", "input.txt", "--count=3"]).unwrap();
/// drop(context);
///
/// assert_eq!(rest, vec!["input.txt".to_string()]);
/// assert!(verbose);
/// assert_eq!(count, 3);
/// ```
pub struct ParseContext<'a> {
    table: OptionTable<'a>,
    comparator: NameComparator<'a>,
    error_formatter: Option<ErrorFormatter<'a>>,
    settings: MatchSettings,
    last_error: Option<ParseError>,
}

impl<'a> std::fmt::Debug for ParseContext<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseContext")
            .field("table", &self.table)
            .field("settings", &self.settings)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl<'a> ParseContext<'a> {
    /// Validate the option table and create a context over it.
    ///
    /// Fails if two rows share a short or long name, if a named row has no handler, if a row with a handler has no name, or if a name contains `=`.
    pub fn new(rows: Vec<OptionSpec<'a>>) -> Result<Self, ConfigError> {
        Ok(Self {
            table: OptionTable::new(rows)?,
            comparator: Box::new(exact_match),
            error_formatter: None,
            settings: MatchSettings::default(),
            last_error: None,
        })
    }

    /// Allow the value of a short option to be concatenated to it (ex: `-sfoo` for `-s foo`).
    /// Off by default, in which case only `-s=foo` and `-s foo` are accepted.
    pub fn allow_concatenated_arguments(&mut self, allow: bool) -> &mut Self {
        self.settings.allow_concatenated = allow;
        self
    }

    /// Stop recognizing options at the first operand (POSIX ordering).
    /// The first operand and every token after it are then returned verbatim.
    ///
    /// Off by default, in which case options may appear anywhere amongst the operands.
    pub fn stop_at_first_operand(&mut self, stop: bool) -> &mut Self {
        self.settings.stop_at_first_operand = stop;
        self
    }

    /// Install a formatter for error messages, replacing the default one.
    ///
    /// ### Example
    /// ```
    /// # use dropt_core as dropt;
    /// use dropt::{Bool, OptionSpec, ParseContext, ParseError};
    ///
    /// let mut flag = false;
    /// let mut context = ParseContext::new(vec![
    ///     OptionSpec::new(Some('f'), None, Bool::new(&mut flag)),
    /// ])
    /// .unwrap();
    /// context.set_error_handler(|error: &ParseError| format!("bad: {}", error.option_name()));
    ///
    /// assert!(context.parse(["-x"]).is_err());
    /// assert_eq!(context.error_message(), Some("bad: -x".to_string()));
    /// ```
    pub fn set_error_handler(
        &mut self,
        formatter: impl Fn(&ParseError) -> String + 'a,
    ) -> &mut Self {
        self.error_formatter.replace(Box::new(formatter));
        self
    }

    /// Install the name comparator used to match option names from the input (left) against the table (right).
    ///
    /// The first matching row, in table order, wins.
    /// See [`exact_match`](./fn.exact_match.html) (the default) and [`case_insensitive_match`](./fn.case_insensitive_match.html).
    pub fn set_name_comparator(
        &mut self,
        comparator: impl Fn(&str, &str) -> bool + 'a,
    ) -> &mut Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Parse the tokens, returning the operands (ex: `std::env::args().skip(1)`).
    ///
    /// Parsing stops at the first error, which is also retained by the context (see [`last_error`](#method.last_error)).
    /// Any previously retained error is cleared first.
    ///
    /// When a `halt` option is handled, or `--` is found, every remaining token is returned verbatim.
    pub fn parse<I, S>(&mut self, tokens: I) -> Result<Vec<String>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.last_error.take();
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|token| token.as_ref().to_string())
            .collect();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing {} tokens: {:?}.", tokens.len(), tokens);
        }

        let matcher = TokenMatcher::new(&mut self.table, &*self.comparator, self.settings);

        matcher.consume(tokens).map_err(|error| {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Parse failed: {error:?}.");
            }

            self.last_error.replace(error.clone());
            error
        })
    }

    /// Parse the program's command line arguments, excluding the program name.
    pub fn parse_env(&mut self) -> Result<Vec<String>, ParseError> {
        self.parse(std::env::args().skip(1))
    }

    /// Parse the tokens, reporting any error to the user as `"{program}: {message}"`.
    ///
    /// Returns the operands on success (including a halt), or the process exit code `1` on error.
    ///
    /// ### Example
    /// ```no_run
    /// # use dropt_core as dropt;
    /// use dropt::{Bool, ConsoleInterface, OptionSpec, ParseContext};
    ///
    /// let mut help = false;
    /// let mut context = ParseContext::new(vec![
    ///     OptionSpec::new(Some('h'), Some("help"), Bool::new(&mut help)).halt(),
    /// ])
    /// .unwrap();
    ///
    /// match context.parse_or_report("demo", std::env::args().skip(1), &ConsoleInterface::default()) {
    ///     Ok(rest) => println!("operands: {rest:?}"),
    ///     Err(code) => std::process::exit(code),
    /// }
    /// ```
    pub fn parse_or_report<I, S>(
        &mut self,
        program: &str,
        tokens: I,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<Vec<String>, i32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.parse(tokens) {
            Ok(rest) => Ok(rest),
            Err(error) => {
                let message = self.format_error(&error);
                user_interface.print_error(format!("{program}: {message}"));
                Err(1)
            }
        }
    }

    /// The error retained from the latest `parse` call, if it failed.
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// The kind of the retained error.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.last_error.as_ref().map(|error| error.kind())
    }

    /// The offending option name and value of the retained error.
    pub fn error_details(&self) -> Option<(&str, Option<&str>)> {
        self.last_error
            .as_ref()
            .map(|error| (error.option_name(), error.option_argument()))
    }

    /// The formatted message of the retained error.
    pub fn error_message(&self) -> Option<String> {
        self.last_error
            .as_ref()
            .map(|error| self.format_error(error))
    }

    /// Forget the retained error.
    pub fn clear_error(&mut self) {
        self.last_error.take();
    }

    /// Format an error with the installed formatter, falling back to [`default_error_message`](./fn.default_error_message.html).
    pub fn format_error(&self, error: &ParseError) -> String {
        match &self.error_formatter {
            Some(formatter) => formatter(error),
            None => default_error_message(
                &error.kind(),
                error.option_name(),
                error.option_argument(),
            ),
        }
    }

    /// Render the help message for the option table.
    /// Hidden options are skipped.
    pub fn render_help(&self, params: &HelpParams) -> String {
        Printer::new(self.table.rows()).render(params)
    }

    /// The validated option table, in declaration order.
    pub fn options(&self) -> &[OptionSpec<'a>] {
        self.table.rows()
    }
}
