/// The position of a single `parse` call within its input tokens.
#[derive(Debug)]
pub(crate) struct ArgumentCursor {
    tokens: std::vec::IntoIter<String>,
    consumed: usize,
}

impl ArgumentCursor {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            consumed: 0,
        }
    }

    /// Take the next whole token.
    pub(crate) fn next(&mut self) -> Option<String> {
        let token = self.tokens.next()?;
        self.consumed += 1;
        Some(token)
    }

    /// How many tokens have been taken so far.
    #[cfg_attr(not(feature = "tracing_debug"), allow(dead_code))]
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    /// Take all the remaining tokens, verbatim.
    pub(crate) fn remaining(self) -> Vec<String> {
        self.tokens.collect()
    }
}
