use std::collections::HashMap;

use crate::api::OptionSpec;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Compares an option name from the input (left) against a name declared in the table (right).
pub type NameComparator<'a> = Box<dyn Fn(&str, &str) -> bool + 'a>;

/// The default comparator: case-sensitive equality over the full name.
pub fn exact_match(candidate: &str, declared: &str) -> bool {
    candidate == declared
}

/// A comparator which ignores ASCII case (ex: `--HELP` matches `--help`).
pub fn case_insensitive_match(candidate: &str, declared: &str) -> bool {
    candidate.eq_ignore_ascii_case(declared)
}

/// The validated option table.
/// Rows are referenced by their index.
pub(crate) struct OptionTable<'a> {
    rows: Vec<OptionSpec<'a>>,
}

impl<'a> OptionTable<'a> {
    pub(crate) fn new(rows: Vec<OptionSpec<'a>>) -> Result<Self, ConfigError> {
        let mut short_names: HashMap<char, usize> = HashMap::default();
        let mut long_names: HashMap<&str, usize> = HashMap::default();

        for (index, row) in rows.iter().enumerate() {
            if row.is_section() {
                continue;
            }

            let display_name = match (row.short_name(), row.long_name()) {
                (_, Some(long)) => format!("--{long}"),
                (Some(short), None) => format!("-{short}"),
                (None, None) => return Err(ConfigError::NamelessOption(index)),
            };

            if !row.has_handler() {
                return Err(ConfigError::MissingHandler(display_name));
            }

            if let Some(short) = row.short_name() {
                if short == '=' {
                    return Err(ConfigError::InvalidShortName(short));
                }

                if short_names.insert(short, index).is_some() {
                    return Err(ConfigError::DuplicateShortName(short));
                }
            }

            if let Some(long) = row.long_name() {
                if long.contains('=') {
                    return Err(ConfigError::InvalidLongName(long.to_string()));
                }

                if long_names.insert(long, index).is_some() {
                    return Err(ConfigError::DuplicateLongName(long.to_string()));
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Validated option table: {} rows, {} short names, {} long names.",
                rows.len(),
                short_names.len(),
                long_names.len()
            );
        }

        Ok(Self { rows })
    }

    /// Find the first row whose long name matches, in table order.
    pub(crate) fn find_long(
        &self,
        name: &str,
        comparator: &(dyn Fn(&str, &str) -> bool + '_),
    ) -> Option<usize> {
        self.rows.iter().position(|row| match row.long_name() {
            Some(long) => comparator(name, long),
            None => false,
        })
    }

    /// Find the first row whose short name matches, in table order.
    pub(crate) fn find_short(
        &self,
        short: char,
        comparator: &(dyn Fn(&str, &str) -> bool + '_),
    ) -> Option<usize> {
        let mut candidate_buffer = [0; 4];
        let candidate: &str = short.encode_utf8(&mut candidate_buffer);
        let mut declared_buffer = [0; 4];

        self.rows.iter().position(|row| match row.short_name() {
            Some(declared) => comparator(candidate, declared.encode_utf8(&mut declared_buffer)),
            None => false,
        })
    }

    pub(crate) fn row(&self, index: usize) -> &OptionSpec<'a> {
        &self.rows[index]
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut OptionSpec<'a> {
        &mut self.rows[index]
    }

    pub(crate) fn rows(&self) -> &[OptionSpec<'a>] {
        &self.rows
    }
}

impl<'a> std::fmt::Debug for OptionTable<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows.iter()).finish()
    }
}
