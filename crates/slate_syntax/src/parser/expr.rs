/// Expression parsing.
///
/// The grammar is flat right recursion: every binary operator has the same
/// priority and whatever associativity falls out of the recursion. That is
/// the language's contract, not an oversight - see the module notes.

/// Kinds accepted as binary operators, longest-match disambiguated in one
/// `consume` call (`>>=`-style overlaps resolve to the longest spelling).
const BINARY_OPS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Percent,
    TokenKind::Ampersand,
    TokenKind::Pipe,
    TokenKind::Caret,
    TokenKind::Tilde,
    TokenKind::LeftShift,
    TokenKind::RightShift,
    TokenKind::UnsignedRightShift,
    TokenKind::EqualEqual,
    TokenKind::NotEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
    TokenKind::Greater,
    TokenKind::GreaterEqual,
];

const UNARY_OPS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Exclamation,
    TokenKind::Tilde,
];

impl<'a> Parser<'a> {
    /// Expression ::= (VarAssign | UnaryOp Expression | Term) (BinaryOp Expression)?
    fn expression(&mut self) -> Result<Cst, SyntaxError> {
        let head = self.any_of(&[Self::var_assign, Self::unary_expr, Self::term])?;
        if let Ok((op, rhs)) = self.attempt(|p| {
            let op = p.consume(BINARY_OPS)?;
            let rhs = p.expression()?;
            Ok((op, rhs))
        }) {
            let mut node = Cst::node(op);
            node.attach_child(head);
            node.attach_child(rhs);
            return Ok(node);
        }
        Ok(head)
    }

    /// UnaryOp Expression
    fn unary_expr(&mut self) -> Result<Cst, SyntaxError> {
        let op = self.consume(UNARY_OPS)?;
        let mut node = Cst::node(op);
        let operand = self.expression()?;
        node.attach_child(operand);
        Ok(node)
    }

    /// Term ::= Integer | Float | '(' Expression ')' | FuncCall | Path | Identifier
    fn term(&mut self) -> Result<Cst, SyntaxError> {
        self.any_of(&[
            Self::literal_term,
            Self::paren_expr,
            Self::func_call,
            Self::path,
            Self::identifier_term,
        ])
    }

    /// Integer | Float, in one `consume` so `1.5` resolves to the longer
    /// float match instead of stopping at the integer `1`.
    fn literal_term(&mut self) -> Result<Cst, SyntaxError> {
        let literal = self.consume(&[TokenKind::Integer, TokenKind::Float])?;
        Ok(Cst::node(literal))
    }

    /// '(' Expression ')' - parentheses group only; the inner node is the
    /// result.
    fn paren_expr(&mut self) -> Result<Cst, SyntaxError> {
        self.consume(&[TokenKind::LeftParen])?;
        let inner = self.expression()?;
        self.consume(&[TokenKind::RightParen])?;
        Ok(inner)
    }

    fn identifier_term(&mut self) -> Result<Cst, SyntaxError> {
        let name = self.consume(&[TokenKind::Identifier])?;
        Ok(Cst::node(name))
    }

    /// Path ::= Identifier | '.' Identifier | Identifier '.' Path
    ///
    /// Flattened: however deep the recursion, the result is one token-less
    /// node whose children alternate `[Identifier, Dot, Identifier, ...]`
    /// (with an optional leading dot).
    fn path(&mut self) -> Result<Cst, SyntaxError> {
        let mut node = Cst::empty();
        if self
            .peek(&[TokenKind::Dot])
            .is_some_and(|token| token.kind == TokenKind::Dot)
        {
            let dot = self.consume(&[TokenKind::Dot])?;
            node.attach_token(dot);
        }
        let first = self.consume(&[TokenKind::Identifier])?;
        node.attach_token(first);
        while let Ok((dot, segment)) = self.attempt(|p| {
            let dot = p.consume(&[TokenKind::Dot])?;
            let segment = p.consume(&[TokenKind::Identifier])?;
            Ok((dot, segment))
        }) {
            node.attach_token(dot);
            node.attach_token(segment);
        }
        Ok(node)
    }

    /// FuncCall ::= Path '(' Arguments? ')'
    fn func_call(&mut self) -> Result<Cst, SyntaxError> {
        let callee = self.path()?;
        self.consume(&[TokenKind::LeftParen])?;
        let mut node = Cst::empty();
        node.attach_child(callee);
        if let Ok(args) = self.attempt(Self::arguments) {
            for arg in args {
                node.attach_child(arg);
            }
        }
        self.consume(&[TokenKind::RightParen])?;
        Ok(node)
    }

    /// Arguments ::= Expression (',' Arguments)?
    fn arguments(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let mut items = vec![self.expression()?];
        while let Ok(item) = self.attempt(|p| {
            p.consume(&[TokenKind::Comma])?;
            p.expression()
        }) {
            items.push(item);
        }
        Ok(items)
    }
}
