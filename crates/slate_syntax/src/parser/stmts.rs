/// Statement parsing.
impl<'a> Parser<'a> {
    /// Block ::= '{' Statements? '}'
    ///
    /// The opening brace token becomes the node.
    fn block(&mut self) -> Result<Cst, SyntaxError> {
        let brace = self.consume(&[TokenKind::LeftBrace])?;
        let mut node = Cst::node(brace);
        if let Ok(stmts) = self.attempt(Self::statements) {
            for stmt in stmts {
                node.attach_child(stmt);
            }
        }
        self.consume(&[TokenKind::RightBrace])?;
        Ok(node)
    }

    /// Statement ::= Block | If | While | For | Do
    ///              | 'break' ';' | 'continue' ';' | Return | Defer
    ///              | Expression ';'
    fn statement(&mut self) -> Result<Cst, SyntaxError> {
        self.any_of(&[
            Self::block,
            Self::if_stmt,
            Self::while_stmt,
            Self::for_stmt,
            Self::do_stmt,
            Self::break_stmt,
            Self::continue_stmt,
            Self::return_stmt,
            Self::defer_stmt,
            Self::expr_stmt,
        ])
    }

    /// Statements ::= Statement Statements*
    fn statements(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let mut items = vec![self.statement()?];
        while let Ok(item) = self.attempt(Self::statement) {
            items.push(item);
        }
        Ok(items)
    }

    /// If ::= 'if' '(' Expression ')' Statement ('else' Statement)?
    fn if_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::If])?;
        let mut node = Cst::node(keyword);
        self.consume(&[TokenKind::LeftParen])?;
        let condition = self.expression()?;
        node.attach_child(condition);
        self.consume(&[TokenKind::RightParen])?;
        let then = self.statement()?;
        node.attach_child(then);
        if let Ok(alternative) = self.attempt(|p| {
            p.consume(&[TokenKind::Else])?;
            p.statement()
        }) {
            node.attach_child(alternative);
        }
        Ok(node)
    }

    /// While ::= 'while' '(' Expression ')' Statement
    fn while_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::While])?;
        let mut node = Cst::node(keyword);
        self.consume(&[TokenKind::LeftParen])?;
        let condition = self.expression()?;
        node.attach_child(condition);
        self.consume(&[TokenKind::RightParen])?;
        let body = self.statement()?;
        node.attach_child(body);
        Ok(node)
    }

    /// For ::= 'for' '(' VarDecl ';' Expression ';' Statement ')' Statement
    ///
    /// The step slot is a full `Statement`, so it carries its own terminating
    /// semicolon before the closing parenthesis.
    fn for_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::For])?;
        let mut node = Cst::node(keyword);
        self.consume(&[TokenKind::LeftParen])?;
        let init = self.var_decl()?;
        node.attach_child(init);
        self.consume(&[TokenKind::Semicolon])?;
        let condition = self.expression()?;
        node.attach_child(condition);
        self.consume(&[TokenKind::Semicolon])?;
        let step = self.statement()?;
        node.attach_child(step);
        self.consume(&[TokenKind::RightParen])?;
        let body = self.statement()?;
        node.attach_child(body);
        Ok(node)
    }

    /// Do ::= 'do' Statement 'while' '(' Expression ')' ';'
    fn do_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Do])?;
        let mut node = Cst::node(keyword);
        let body = self.statement()?;
        node.attach_child(body);
        self.consume(&[TokenKind::While])?;
        self.consume(&[TokenKind::LeftParen])?;
        let condition = self.expression()?;
        node.attach_child(condition);
        self.consume(&[TokenKind::RightParen])?;
        self.consume(&[TokenKind::Semicolon])?;
        Ok(node)
    }

    fn break_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Break])?;
        self.consume(&[TokenKind::Semicolon])?;
        Ok(Cst::node(keyword))
    }

    fn continue_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Continue])?;
        self.consume(&[TokenKind::Semicolon])?;
        Ok(Cst::node(keyword))
    }

    /// Return ::= 'return' Expression ';'
    fn return_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Return])?;
        let mut node = Cst::node(keyword);
        let value = self.expression()?;
        node.attach_child(value);
        self.consume(&[TokenKind::Semicolon])?;
        Ok(node)
    }

    /// Defer ::= 'defer' Statement
    fn defer_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Defer])?;
        let mut node = Cst::node(keyword);
        let deferred = self.statement()?;
        node.attach_child(deferred);
        Ok(node)
    }

    /// Expression ';'
    fn expr_stmt(&mut self) -> Result<Cst, SyntaxError> {
        let expr = self.expression()?;
        self.consume(&[TokenKind::Semicolon])?;
        Ok(expr)
    }

    /// VarDecl ::= Type (VarAssignChain | Identifier)
    ///
    /// Token-less node: the declared type first, then either the assignment
    /// chain or the bare name.
    fn var_decl(&mut self) -> Result<Cst, SyntaxError> {
        let ty = self.type_expr()?;
        let mut node = Cst::empty();
        node.attach_child(ty);
        match self.attempt(Self::var_assign_chain) {
            Ok(assigns) => {
                for assign in assigns {
                    node.attach_child(assign);
                }
            }
            Err(_) => {
                let name = self.consume(&[TokenKind::Identifier])?;
                node.attach_token(name);
            }
        }
        Ok(node)
    }

    /// VarAssign ::= Path '=' Expression
    ///
    /// The `'='` token becomes the node, with the path and the value as its
    /// two children.
    fn var_assign(&mut self) -> Result<Cst, SyntaxError> {
        let path = self.path()?;
        let equal = self.consume(&[TokenKind::Equal])?;
        let mut node = Cst::node(equal);
        node.attach_child(path);
        let value = self.expression()?;
        node.attach_child(value);
        Ok(node)
    }

    /// VarAssignChain ::= VarAssign (',' VarAssignChain)?
    fn var_assign_chain(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let mut items = vec![self.var_assign()?];
        while let Ok(item) = self.attempt(|p| {
            p.consume(&[TokenKind::Comma])?;
            p.var_assign()
        }) {
            items.push(item);
        }
        Ok(items)
    }
}
