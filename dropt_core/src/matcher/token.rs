use crate::constant::*;

/// The shape of a single input token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--` standing alone.
    EndOfOptions,
    /// `--name` or `--name=value`.
    Long {
        name: &'t str,
        value: Option<&'t str>,
    },
    /// `-abc`, `-a=value`, etc (everything after the leading `-`).
    ShortCluster(&'t str),
    /// Anything else, including `-` standing alone.
    Operand(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        // 1. Find the end of options marker:
        //  --
        // 2. Find a 'long' flag, such as:
        //  --initial
        //  --initial=..
        // 3. Find 'short' flag(s), such as (both -i and -v are example short flags):
        //  -i
        //  -i=..
        //  -iv
        //  -iv=..
        // 4. Everything else (including '-') is an operand.
        if token == END_OF_OPTIONS {
            Token::EndOfOptions
        } else if let Some(long) = token.strip_prefix(LONG_PREFIX) {
            let (name, value) = split_equals_delimiter(long);
            Token::Long { name, value }
        } else if let Some(cluster) = token.strip_prefix(SHORT_PREFIX) {
            if cluster.is_empty() {
                Token::Operand(token)
            } else {
                Token::ShortCluster(cluster)
            }
        } else {
            Token::Operand(token)
        }
    }
}

/// Split on the first `=`, if any.
pub(crate) fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once(VALUE_DELIMITER) {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("--", Token::EndOfOptions)]
    #[case("-", Token::Operand("-"))]
    #[case("abc", Token::Operand("abc"))]
    #[case("", Token::Operand(""))]
    #[case("a-b", Token::Operand("a-b"))]
    #[case("--abc", Token::Long { name: "abc", value: None })]
    #[case("--abc=", Token::Long { name: "abc", value: Some("") })]
    #[case("--abc=1=2", Token::Long { name: "abc", value: Some("1=2") })]
    #[case("--=", Token::Long { name: "", value: Some("") })]
    #[case("---", Token::Long { name: "-", value: None })]
    #[case("-a", Token::ShortCluster("a"))]
    #[case("-abc", Token::ShortCluster("abc"))]
    #[case("-a=1", Token::ShortCluster("a=1"))]
    #[case("-=", Token::ShortCluster("="))]
    fn classify(#[case] token: &str, #[case] expected: Token) {
        assert_eq!(Token::classify(token), expected);
    }

    #[rstest]
    #[case("abc", ("abc", None))]
    #[case("abc=", ("abc", Some("")))]
    #[case("abc=foo", ("abc", Some("foo")))]
    #[case("abc==foo", ("abc", Some("=foo")))]
    #[case("abc=foo=bar", ("abc", Some("foo=bar")))]
    #[case("=foo", ("", Some("foo")))]
    fn split_equals(#[case] token: &str, #[case] expected: (&str, Option<&str>)) {
        assert_eq!(split_equals_delimiter(token), expected);
    }
}
