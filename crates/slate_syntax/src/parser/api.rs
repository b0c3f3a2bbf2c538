/// Parse a complete source buffer into a concrete syntax tree.
///
/// This is the main public entrypoint for parsing: it builds a [`Lexer`] over
/// `source` with the shared catalog and drives a [`Parser`] to completion.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered; the whole parse aborts.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &[u8]) -> Result<Cst, SyntaxError> {
    Parser::new(Lexer::new(source)).parse()
}
