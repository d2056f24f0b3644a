//! `dropt` is a table driven command line option parser for Rust.
//!
//! The options of a program are declared as rows of a table.
//! Each row names the option (`-c` and/or `--count`), documents it for the help message, and binds it to a *value handler* which converts the option's value and stores it in a variable owned by the caller.
//! `dropt` prioritizes the following design concerns:
//! * *Small, predictable grammar*:
//! Short options (`-c`), clusters of short options (`-abc`), long options (`--count`), values inline (`--count=3`, `-c=3`) or in the following token (`--count 3`), and the `--` end of options marker.
//! * *Typed values*:
//! The stock handlers convert into `bool`, any primitive integer, `f64` and `String`.
//! Anything else is a [`Custom`] closure away.
//! * *Precise errors*:
//! A failed parse reports the kind of failure, the offending option and its value.
//! The message may be customized, and is retained by the [`ParseContext`] for later inspection.
//! * *No surprises*:
//! The parser never prints nor exits on its own.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/dropt_example.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ dropt_example --help
//! Usage: dropt_example [options] [--] [operands]
//!
//! Options:
//!   -h, --help
//!       Shows help.
//!
//!   --version
//!       Shows version information.
//!
//!   -i, --int=value
//!       Sample integer option.
//!
//!   -f, --face={heads, tails}
//!       Sample custom option.
//!
//! $ dropt_example -i 7 -f tails a b
//! int value: 7
//! face value: Tails
//! Operands: a b
//!
//! $ dropt_example --face=edge
//! dropt_example: Invalid value for option --face: edge
//! ```
//!
//! # Option table
//! Each row of the table is an [`OptionSpec`].
//! A row is either an option, which has a short and/or long name and a handler, or a section header ([`OptionSpec::section`]) which only affects the help message.
//! The table is validated once, by [`ParseContext::new`]; names must be unique and every named row needs a handler.
//!
//! Rows may be given the following attributes:
//! * [`OptionSpec::hidden`]: the option is matched, but not shown in the help message.
//! * [`OptionSpec::halt`]: parsing stops once the option is handled, and the remaining tokens are returned as is (ex: `--help`).
//! * [`OptionSpec::optional_value`]: the option may be given without a value, in which case the following token is never consumed.
//!
//! # Value handlers
//! Handlers implement [`ValueHandler`](./prelude/trait.ValueHandler.html).
//! An option takes a value when its handler does ([`ValueHandler::takes_value`](./prelude/trait.ValueHandler.html#method.takes_value)), or when its row says so ([`OptionSpec::requires_value`]).
//! * [`Bool`] & [`VerboseBool`]: flags, which may also be written `--flag=0`/`--flag=1` (and `true`/`false` for the latter).
//! * [`Integer`]: any primitive integer type.
//! * [`Double`]: `f64`.
//! * [`Text`]: `Option<String>`.
//! * [`Custom`]: any closure `FnMut(Option<&str>) -> Result<(), ErrorKind>`.
//!
//! # Operands
//! Tokens which aren't options are *operands*, and are returned by [`ParseContext::parse`].
//! By default options and operands may be interleaved.
//! Use [`ParseContext::stop_at_first_operand`] to stop recognizing options at the first operand instead.
//!
//! # Errors
//! [`ParseContext::parse`] stops at the first failure, returning a [`ParseError`].
//! Its `Display` is the default message; use [`ParseContext::set_error_handler`] and [`ParseContext::error_message`] for custom messages.
//!
//! # Debugging
//! Enable the `tracing_debug` feature to log the matching decisions via [tracing](https://docs.rs/tracing/latest/tracing/).
pub use dropt_core::*;
