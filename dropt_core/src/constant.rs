pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const END_OF_OPTIONS: &str = "--";
pub(crate) const VALUE_DELIMITER: char = '=';

pub(crate) const DEFAULT_HELP_INDENT: usize = 2;
pub(crate) const DEFAULT_DESCRIPTION_START_COLUMN: usize = 6;
