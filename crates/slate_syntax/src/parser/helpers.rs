/// Combinator layer shared by every production.
///
/// - `consume` / `peek` - token-level primitives over the lexer
/// - `attempt` - scoped speculative parse (mark / discard / restore)
/// - `any_of` - ordered alternation with expected-set aggregation

/// How many bytes of upcoming raw text to quote in diagnostics.
const CONTEXT_LEN: usize = 16;

/// A grammar production: one method of [`Parser`] yielding a subtree.
type Production<'a> = fn(&mut Parser<'a>) -> Result<Cst, SyntaxError>;

impl<'a> Parser<'a> {
    /// Demand the next token to be one of `kinds`.
    ///
    /// A synthesized end-of-input token satisfies this only when
    /// [`TokenKind::Eof`] was requested.
    fn consume(&mut self, kinds: &[TokenKind]) -> Result<Token, SyntaxError> {
        match self.lexer.next_of(kinds) {
            Some(token) if kinds.contains(&token.kind) => Ok(token),
            _ => Err(self.unexpected(kinds)),
        }
    }

    /// Non-destructive lookahead; see [`Lexer::peek_of`].
    fn peek(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        self.lexer.peek_of(kinds)
    }

    fn unexpected(&self, kinds: &[TokenKind]) -> SyntaxError {
        let context = self.lexer.slice(CONTEXT_LEN);
        let context = if context.is_empty() {
            "<end of input>".to_string()
        } else {
            context
        };
        SyntaxError::new(
            ExpectedSet::new(kinds),
            context,
            self.lexer.line(),
            self.lexer.column(),
            self.lexer.offset(),
        )
    }

    /// Scoped speculative parse: mark, run `f`, discard the mark on success,
    /// restore on failure. Every speculative fragment goes through here, so
    /// each mark is balanced by construction.
    fn attempt<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        self.lexer.mark();
        match f(self) {
            Ok(value) => {
                self.lexer.discard();
                Ok(value)
            }
            Err(err) => {
                self.lexer.restore();
                Err(err)
            }
        }
    }

    /// Try each rule in order; the first success wins. When every rule fails,
    /// the failure carries the union of all expected sets and the context and
    /// position of the final failure.
    fn any_of(&mut self, rules: &[Production<'a>]) -> Result<Cst, SyntaxError> {
        let mut expected = ExpectedSet::default();
        let mut failure: Option<SyntaxError> = None;
        for rule in rules {
            match self.attempt(|p| rule(p)) {
                Ok(node) => return Ok(node),
                Err(err) => {
                    expected.merge(&err.expected);
                    failure = Some(err);
                }
            }
        }
        let mut err = failure.unwrap_or_else(|| self.unexpected(&[]));
        err.expected = expected;
        Err(err)
    }
}
