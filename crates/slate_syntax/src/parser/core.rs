/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` method.
/// The grammar productions live in the other parser chunks.

/// Parser state: a backtracking lexer and nothing else; all structure lives
/// in the mutually recursive production methods.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser { lexer }
    }

    /// Parse the whole input: one `Construct` after another until the input
    /// is exhausted, attached as siblings under a synthetic token-less root.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered; there is no recovery.
    pub fn parse(mut self) -> Result<Cst, SyntaxError> {
        let mut root = Cst::empty();
        while self.lexer.has_more() {
            let construct = self.construct()?;
            root.attach_child(construct);
        }
        debug_assert_eq!(self.lexer.mark_depth(), 0, "unbalanced mark stack after parse");
        Ok(root)
    }
}
