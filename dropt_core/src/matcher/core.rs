use crate::constant::*;
use crate::matcher::cursor::ArgumentCursor;
use crate::matcher::table::OptionTable;
use crate::matcher::token::Token;
use crate::model::ErrorKind;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The switches that adjust how tokens are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MatchSettings {
    pub allow_concatenated: bool,
    pub stop_at_first_operand: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Halt,
}

/// Matches the input tokens against the option table, dispatching values to the handlers.
pub(crate) struct TokenMatcher<'m, 'a> {
    table: &'m mut OptionTable<'a>,
    comparator: &'m (dyn Fn(&str, &str) -> bool + 'm),
    settings: MatchSettings,
}

impl<'m, 'a> TokenMatcher<'m, 'a> {
    pub(crate) fn new(
        table: &'m mut OptionTable<'a>,
        comparator: &'m (dyn Fn(&str, &str) -> bool + 'm),
        settings: MatchSettings,
    ) -> Self {
        Self {
            table,
            comparator,
            settings,
        }
    }

    /// Consume all the tokens, returning the operands.
    ///
    /// Stops at the first failing option (`Err`), at a successfully handled halt option, or at `--`.
    /// In the latter two cases, every remaining token is appended to the operands verbatim.
    pub(crate) fn consume(mut self, tokens: Vec<String>) -> Result<Vec<String>, ParseError> {
        let mut cursor = ArgumentCursor::new(tokens);
        let mut rest = Vec::default();

        while let Some(token) = cursor.next() {
            let step = match Token::classify(&token) {
                Token::EndOfOptions => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("End of options at token {}.", cursor.consumed());
                    }

                    rest.extend(cursor.remaining());
                    break;
                }
                Token::Operand(operand) => {
                    rest.push(operand.to_string());

                    if self.settings.stop_at_first_operand {
                        rest.extend(cursor.remaining());
                        break;
                    }

                    Step::Continue
                }
                Token::Long { name, value } => self.match_long(name, value, &mut cursor)?,
                Token::ShortCluster(cluster) => self.match_short_cluster(cluster, &mut cursor)?,
            };

            if step == Step::Halt {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Halted at token {}.", cursor.consumed());
                }

                rest.extend(cursor.remaining());
                break;
            }
        }

        Ok(rest)
    }

    fn match_long(
        &mut self,
        name: &str,
        inline_value: Option<&str>,
        cursor: &mut ArgumentCursor,
    ) -> Result<Step, ParseError> {
        let option_name = format!("{LONG_PREFIX}{name}");
        let index = match self.table.find_long(name, self.comparator) {
            Some(index) => index,
            None => {
                return Err(ParseError::new(
                    ErrorKind::InvalidOption,
                    option_name,
                    inline_value,
                ));
            }
        };

        let value = match inline_value {
            Some(value) => Some(value.to_string()),
            None => {
                let row = self.table.row(index);

                if row.takes_value() && !row.attributes().optional_value {
                    // Greedy: the next token is the value, whatever it looks like.
                    match cursor.next() {
                        Some(next) => Some(next),
                        None => {
                            return Err(ParseError::new(
                                ErrorKind::InsufficientArguments,
                                option_name,
                                None,
                            ));
                        }
                    }
                } else {
                    None
                }
            }
        };

        self.dispatch(index, &option_name, value.as_deref())
    }

    fn match_short_cluster(
        &mut self,
        cluster: &str,
        cursor: &mut ArgumentCursor,
    ) -> Result<Step, ParseError> {
        for (position, short) in cluster.char_indices() {
            let option_name = format!("{SHORT_PREFIX}{short}");
            let remainder = &cluster[position + short.len_utf8()..];
            let index = match self.table.find_short(short, self.comparator) {
                Some(index) => index,
                None => {
                    return Err(ParseError::new(
                        ErrorKind::InvalidOption,
                        option_name,
                        None,
                    ));
                }
            };
            let row = self.table.row(index);

            // The '=' delimiter always ends the cluster, even for options which take no value.
            let (value, ends_cluster) = if let Some(value) = remainder.strip_prefix(VALUE_DELIMITER)
            {
                (Some(value.to_string()), true)
            } else if !row.takes_value() {
                (None, false)
            } else if self.settings.allow_concatenated && !remainder.is_empty() {
                (Some(remainder.to_string()), true)
            } else if row.attributes().optional_value {
                (None, true)
            } else if !remainder.is_empty() {
                // The value may only come from the next token when this option ends the cluster.
                return Err(ParseError::new(
                    ErrorKind::InsufficientArguments,
                    option_name,
                    None,
                ));
            } else {
                match cursor.next() {
                    Some(next) => (Some(next), true),
                    None => {
                        return Err(ParseError::new(
                            ErrorKind::InsufficientArguments,
                            option_name,
                            None,
                        ));
                    }
                }
            };

            let step = self.dispatch(index, &option_name, value.as_deref())?;

            if step == Step::Halt || ends_cluster {
                return Ok(step);
            }
        }

        Ok(Step::Continue)
    }

    fn dispatch(
        &mut self,
        index: usize,
        option_name: &str,
        value: Option<&str>,
    ) -> Result<Step, ParseError> {
        let row = self.table.row_mut(index);
        let halt = row.attributes().halt;
        let handler = match row.handler_mut() {
            Some(handler) => handler,
            None => unreachable!("internal error - a matched option must have a handler"),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{option_name}' with value {value:?}.");
        }

        handler
            .handle(value)
            .map_err(|kind| ParseError::new(kind, option_name, value))?;

        if halt {
            Ok(Step::Halt)
        } else {
            Ok(Step::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{OptionSpec, ValueHandler};
    use crate::matcher::table::{case_insensitive_match, exact_match};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(char, Option<String>)>>>;

    struct Recorder {
        name: char,
        takes_value: bool,
        outcome: Result<(), ErrorKind>,
        log: Log,
    }

    impl ValueHandler for Recorder {
        fn handle(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
            self.log
                .borrow_mut()
                .push((self.name, value.map(|v| v.to_string())));
            self.outcome
        }

        fn takes_value(&self) -> bool {
            self.takes_value
        }
    }

    fn recorder(log: &Log, name: char, takes_value: bool) -> Recorder {
        Recorder {
            name,
            takes_value,
            outcome: Ok(()),
            log: log.clone(),
        }
    }

    // h: halt flag
    // n: flag
    // s: value
    // o: optional value
    // m: value, always mismatches
    // x: halt flag, always mismatches
    fn table(log: &Log) -> OptionTable<'static> {
        OptionTable::new(vec![
            OptionSpec::section("Main options:"),
            OptionSpec::new(Some('h'), Some("help"), recorder(log, 'h', false)).halt(),
            OptionSpec::new(Some('n'), Some("normal"), recorder(log, 'n', false)),
            OptionSpec::new(Some('s'), Some("string"), recorder(log, 's', true)),
            OptionSpec::new(Some('o'), Some("optional"), recorder(log, 'o', true)).optional_value(),
            OptionSpec::new(
                Some('m'),
                Some("mismatch"),
                Recorder {
                    name: 'm',
                    takes_value: true,
                    outcome: Err(ErrorKind::Mismatch),
                    log: log.clone(),
                },
            ),
            OptionSpec::new(
                Some('x'),
                Some("exit"),
                Recorder {
                    name: 'x',
                    takes_value: false,
                    outcome: Err(ErrorKind::Mismatch),
                    log: log.clone(),
                },
            )
            .halt(),
        ])
        .unwrap()
    }

    fn run(
        settings: MatchSettings,
        tokens: &[&str],
    ) -> (Result<Vec<String>, ParseError>, Vec<(char, Option<String>)>) {
        let log: Log = Rc::default();
        let mut table = table(&log);
        let comparator = exact_match;
        let matcher = TokenMatcher::new(&mut table, &comparator, settings);
        let result = matcher.consume(tokens.iter().map(|t| t.to_string()).collect());
        let calls = log.borrow().clone();
        (result, calls)
    }

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn consume_empty() {
        let (result, calls) = run(MatchSettings::default(), empty::slice());
        assert_eq!(result.unwrap(), Vec::<String>::default());
        assert_eq!(calls, vec![]);
    }

    #[rstest]
    #[case(vec!["-n"], vec![('n', None)], vec![])]
    #[case(vec!["--normal"], vec![('n', None)], vec![])]
    #[case(vec!["-n", "1"], vec![('n', None)], vec!["1"])]
    #[case(vec!["--normal", "1"], vec![('n', None)], vec!["1"])]
    #[case(vec!["-n=1"], vec![('n', Some("1"))], vec![])]
    #[case(vec!["--normal=0"], vec![('n', Some("0"))], vec![])]
    #[case(vec!["-nn"], vec![('n', None), ('n', None)], vec![])]
    #[case(vec!["-nn=0"], vec![('n', None), ('n', Some("0"))], vec![])]
    #[case(vec!["-s", "foo"], vec![('s', Some("foo"))], vec![])]
    #[case(vec!["--string", "foo"], vec![('s', Some("foo"))], vec![])]
    #[case(vec!["-s="], vec![('s', Some(""))], vec![])]
    #[case(vec!["-s", ""], vec![('s', Some(""))], vec![])]
    #[case(vec!["-s=foo=bar"], vec![('s', Some("foo=bar"))], vec![])]
    #[case(vec!["--string==bar"], vec![('s', Some("=bar"))], vec![])]
    #[case(vec!["-s", "-n"], vec![('s', Some("-n"))], vec![])]
    #[case(vec!["--string", "--normal"], vec![('s', Some("--normal"))], vec![])]
    #[case(vec!["-ns", "foo"], vec![('n', None), ('s', Some("foo"))], vec![])]
    #[case(vec!["-ns=foo"], vec![('n', None), ('s', Some("foo"))], vec![])]
    #[case(vec!["-o", "-n"], vec![('o', None), ('n', None)], vec![])]
    #[case(vec!["-o", "42"], vec![('o', None)], vec!["42"])]
    #[case(vec!["--optional", "42"], vec![('o', None)], vec!["42"])]
    #[case(vec!["--optional=42"], vec![('o', Some("42"))], vec![])]
    #[case(vec!["-o=42"], vec![('o', Some("42"))], vec![])]
    #[case(vec!["-on"], vec![('o', None)], vec![])]
    #[case(vec!["-no", "42"], vec![('n', None), ('o', None)], vec!["42"])]
    #[case(vec!["a", "-n", "b"], vec![('n', None)], vec!["a", "b"])]
    #[case(vec!["-", "-n"], vec![('n', None)], vec!["-"])]
    #[case(vec!["-n", "--", "-h"], vec![('n', None)], vec!["-h"])]
    #[case(vec!["--", "--"], vec![], vec!["--"])]
    #[case(vec!["-h", "-n", "-h=invalid"], vec![('h', None)], vec!["-n", "-h=invalid"])]
    #[case(vec!["a", "-hn", "b"], vec![('h', None)], vec!["a", "b"])]
    fn consume(
        #[case] tokens: Vec<&str>,
        #[case] expected_calls: Vec<(char, Option<&str>)>,
        #[case] expected_rest: Vec<&str>,
    ) {
        // Execute
        let (result, calls) = run(MatchSettings::default(), &tokens);

        // Verify
        assert_eq!(result.unwrap(), owned(&expected_rest));
        assert_eq!(
            calls,
            expected_calls
                .into_iter()
                .map(|(n, v)| (n, v.map(|v| v.to_string())))
                .collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case(vec!["-X"], ErrorKind::InvalidOption, "-X", None, vec![])]
    #[case(vec!["-nX"], ErrorKind::InvalidOption, "-X", None, vec![('n', None)])]
    #[case(vec!["-Xn"], ErrorKind::InvalidOption, "-X", None, vec![])]
    #[case(vec!["--bogus"], ErrorKind::InvalidOption, "--bogus", None, vec![])]
    #[case(vec!["--bogus=1"], ErrorKind::InvalidOption, "--bogus", Some("1"), vec![])]
    #[case(vec!["--n"], ErrorKind::InvalidOption, "--n", None, vec![])]
    #[case(vec!["--normalX"], ErrorKind::InvalidOption, "--normalX", None, vec![])]
    #[case(vec!["-N"], ErrorKind::InvalidOption, "-N", None, vec![])]
    #[case(vec!["-="], ErrorKind::InvalidOption, "-=", None, vec![])]
    #[case(vec!["--="], ErrorKind::InvalidOption, "--", Some(""), vec![])]
    #[case(vec!["-s"], ErrorKind::InsufficientArguments, "-s", None, vec![])]
    #[case(vec!["--string"], ErrorKind::InsufficientArguments, "--string", None, vec![])]
    #[case(vec!["-sn"], ErrorKind::InsufficientArguments, "-s", None, vec![])]
    #[case(vec!["-sn", "foo"], ErrorKind::InsufficientArguments, "-s", None, vec![])]
    #[case(vec!["-ns"], ErrorKind::InsufficientArguments, "-s", None, vec![('n', None)])]
    #[case(vec!["-m", "x"], ErrorKind::Mismatch, "-m", Some("x"), vec![('m', Some("x"))])]
    #[case(vec!["--mismatch=y", "-n"], ErrorKind::Mismatch, "--mismatch", Some("y"), vec![('m', Some("y"))])]
    #[case(vec!["-x=2", "-n"], ErrorKind::Mismatch, "-x", Some("2"), vec![('x', Some("2"))])]
    #[case(vec!["--exit", "-n"], ErrorKind::Mismatch, "--exit", None, vec![('x', None)])]
    fn consume_error(
        #[case] tokens: Vec<&str>,
        #[case] kind: ErrorKind,
        #[case] option_name: &str,
        #[case] option_argument: Option<&str>,
        #[case] expected_calls: Vec<(char, Option<&str>)>,
    ) {
        // Execute
        let (result, calls) = run(MatchSettings::default(), &tokens);

        // Verify
        let error = result.unwrap_err();
        assert_eq!(error.kind(), kind);
        assert_eq!(error.option_name(), option_name);
        assert_eq!(error.option_argument(), option_argument);
        assert_eq!(
            calls,
            expected_calls
                .into_iter()
                .map(|(n, v)| (n, v.map(|v| v.to_string())))
                .collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case(vec!["-sfoo"], vec![('s', Some("foo"))], vec![])]
    #[case(vec!["-nsfoo"], vec![('n', None), ('s', Some("foo"))], vec![])]
    #[case(vec!["-s=foo"], vec![('s', Some("foo"))], vec![])]
    #[case(vec!["-s", "foo"], vec![('s', Some("foo"))], vec![])]
    #[case(vec!["-sn"], vec![('s', Some("n"))], vec![])]
    #[case(vec!["-on"], vec![('o', Some("n"))], vec![])]
    #[case(vec!["-o", "n"], vec![('o', None)], vec!["n"])]
    #[case(vec!["-nn"], vec![('n', None), ('n', None)], vec![])]
    fn consume_concatenated(
        #[case] tokens: Vec<&str>,
        #[case] expected_calls: Vec<(char, Option<&str>)>,
        #[case] expected_rest: Vec<&str>,
    ) {
        // Setup
        let settings = MatchSettings {
            allow_concatenated: true,
            ..MatchSettings::default()
        };

        // Execute
        let (result, calls) = run(settings, &tokens);

        // Verify
        assert_eq!(result.unwrap(), owned(&expected_rest));
        assert_eq!(
            calls,
            expected_calls
                .into_iter()
                .map(|(n, v)| (n, v.map(|v| v.to_string())))
                .collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case(vec!["a", "-n", "b"], vec![], vec!["a", "-n", "b"])]
    #[case(vec!["-n", "a", "-n"], vec![('n', None)], vec!["a", "-n"])]
    #[case(vec!["-n", "-", "-h"], vec![('n', None)], vec!["-", "-h"])]
    #[case(vec!["-s", "a", "b"], vec![('s', Some("a"))], vec!["b"])]
    fn consume_stop_at_first_operand(
        #[case] tokens: Vec<&str>,
        #[case] expected_calls: Vec<(char, Option<&str>)>,
        #[case] expected_rest: Vec<&str>,
    ) {
        // Setup
        let settings = MatchSettings {
            stop_at_first_operand: true,
            ..MatchSettings::default()
        };

        // Execute
        let (result, calls) = run(settings, &tokens);

        // Verify
        assert_eq!(result.unwrap(), owned(&expected_rest));
        assert_eq!(
            calls,
            expected_calls
                .into_iter()
                .map(|(n, v)| (n, v.map(|v| v.to_string())))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn consume_case_insensitive() {
        // Setup
        let log: Log = Rc::default();
        let mut table = table(&log);
        let comparator = case_insensitive_match;
        let matcher = TokenMatcher::new(&mut table, &comparator, MatchSettings::default());

        // Execute
        let result = matcher.consume(owned(&["-N", "--NORMAL", "--String=x"]));

        // Verify
        assert_eq!(result.unwrap(), Vec::<String>::default());
        assert_eq!(
            *log.borrow(),
            vec![('n', None), ('n', None), ('s', Some("x".to_string()))]
        );
    }
}
