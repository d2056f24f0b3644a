use crate::api::OptionSpec;
use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The layout of the help message.
///
/// ### Example
/// ```
/// # use dropt_core as dropt;
/// use dropt::HelpParams;
///
/// let params = HelpParams::default()
///     .description_start_column(30)
///     .blank_lines_between_options(false);
/// assert_eq!(params.get_indent(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpParams {
    indent: usize,
    description_start_column: usize,
    blank_lines_between_options: bool,
}

impl Default for HelpParams {
    fn default() -> Self {
        Self {
            indent: DEFAULT_HELP_INDENT,
            description_start_column: DEFAULT_DESCRIPTION_START_COLUMN,
            blank_lines_between_options: true,
        }
    }
}

impl HelpParams {
    /// Set the number of spaces before each option's names.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the column at which descriptions start.
    /// Names which reach past this column push their description onto the next line.
    pub fn description_start_column(mut self, column: usize) -> Self {
        self.description_start_column = column;
        self
    }

    /// Set whether a blank line separates consecutive options.
    pub fn blank_lines_between_options(mut self, enable: bool) -> Self {
        self.blank_lines_between_options = enable;
        self
    }

    /// The number of spaces before each option's names.
    pub fn get_indent(&self) -> usize {
        self.indent
    }

    /// The column at which descriptions start.
    pub fn get_description_start_column(&self) -> usize {
        self.description_start_column
    }

    /// Whether a blank line separates consecutive options.
    pub fn get_blank_lines_between_options(&self) -> bool {
        self.blank_lines_between_options
    }
}

pub(crate) struct Printer<'r, 'a> {
    rows: &'r [OptionSpec<'a>],
}

impl<'r, 'a> Printer<'r, 'a> {
    pub(crate) fn new(rows: &'r [OptionSpec<'a>]) -> Self {
        Self { rows }
    }

    pub(crate) fn render(&self, params: &HelpParams) -> String {
        let mut help = String::default();

        for row in self.rows {
            if row.attributes().hidden {
                continue;
            }

            if row.is_section() {
                if params.blank_lines_between_options {
                    help.push('\n');
                }

                help.push_str(row.help().unwrap_or_default());
                help.push('\n');
                continue;
            }

            let names = render_names(row);
            help.push_str(&" ".repeat(params.indent));
            help.push_str(&names);

            if let Some(description) = row.help() {
                let mut width = params.indent + names.chars().count();

                if width >= params.description_start_column {
                    help.push('\n');
                    width = 0;
                }

                for (i, line) in description.split('\n').enumerate() {
                    if i > 0 {
                        help.push('\n');
                        width = 0;
                    }

                    if !line.is_empty() {
                        help.push_str(&" ".repeat(params.description_start_column - width));
                        help.push_str(line);
                    }
                }
            }

            help.push('\n');

            if params.blank_lines_between_options {
                help.push('\n');
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Rendered help for {} rows.", self.rows.len());
        }

        help
    }
}

// Ex: "-c, --count=value" or "--count[=value]".
fn render_names(row: &OptionSpec) -> String {
    let mut names = match (row.short_name(), row.long_name()) {
        (Some(short), Some(long)) => format!("{SHORT_PREFIX}{short}, {LONG_PREFIX}{long}"),
        (Some(short), None) => format!("{SHORT_PREFIX}{short}"),
        (None, Some(long)) => format!("{LONG_PREFIX}{long}"),
        (None, None) => unreachable!("internal error - an option row must have a name"),
    };

    if let Some(argument) = row.argument_description() {
        if row.attributes().optional_value {
            names.push_str(&format!("[{VALUE_DELIMITER}{argument}]"));
        } else {
            names.push_str(&format!("{VALUE_DELIMITER}{argument}"));
        }
    }

    names
}
