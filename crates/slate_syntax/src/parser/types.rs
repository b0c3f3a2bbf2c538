/// Type-expression parsing.
///
/// Types are reached through plain identifiers - the reserved primitive type
/// spellings (`i32`, `f64`, ...) lex as identifiers when the parser asks for
/// one, so no special-casing is needed here.
impl<'a> Parser<'a> {
    /// Type ::= Identifier ('<' GenericTypes? '>')? '*'*
    ///
    /// The type-name token becomes the node; generic arguments are attached
    /// first, then one `'*'` token child per pointer level.
    fn type_expr(&mut self) -> Result<Cst, SyntaxError> {
        let name = self.consume(&[TokenKind::Identifier])?;
        let mut node = Cst::node(name);
        if let Ok(args) = self.attempt(Self::generic_suffix) {
            for arg in args {
                node.attach_child(arg);
            }
        }
        while let Ok(star) = self.attempt(|p| p.consume(&[TokenKind::Star])) {
            node.attach_token(star);
        }
        Ok(node)
    }

    /// '<' GenericTypes? '>'
    ///
    /// Only `Less`/`Greater` are requested here, so the closing `>` of a
    /// nested generic never lexes as a shift operator.
    fn generic_suffix(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        self.consume(&[TokenKind::Less])?;
        let args = self.attempt(Self::generic_types).unwrap_or_default();
        self.consume(&[TokenKind::Greater])?;
        Ok(args)
    }

    /// GenericTypes ::= Type (',' GenericTypes)?
    fn generic_types(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let mut items = vec![self.type_expr()?];
        while let Ok(item) = self.attempt(|p| {
            p.consume(&[TokenKind::Comma])?;
            p.type_expr()
        }) {
            items.push(item);
        }
        Ok(items)
    }

    /// InheritedType ::= Type (':' GenericTypes)?
    ///
    /// Extends the base type node in place: the `':'` token child marks where
    /// the inherited types begin.
    fn inherited_type(&mut self) -> Result<Cst, SyntaxError> {
        let mut node = self.type_expr()?;
        if let Ok((colon, parents)) = self.attempt(|p| {
            let colon = p.consume(&[TokenKind::Colon])?;
            let parents = p.generic_types()?;
            Ok((colon, parents))
        }) {
            node.attach_token(colon);
            for parent in parents {
                node.attach_child(parent);
            }
        }
        Ok(node)
    }
}
