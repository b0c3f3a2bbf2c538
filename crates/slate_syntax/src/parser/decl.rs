/// Top-level construct parsing: structs, traits, enums, and functions.
///
/// List-shaped productions (`Fields`, `FuncSigs`, `EnumValues`, `Parameters`,
/// `Functions`) are right-recursive in the grammar but attach their items as
/// flat siblings of one parent node.
impl<'a> Parser<'a> {
    /// Construct ::= Struct | Trait | Enum | Function
    fn construct(&mut self) -> Result<Cst, SyntaxError> {
        self.any_of(&[
            Self::struct_decl,
            Self::trait_decl,
            Self::enum_decl,
            Self::function,
        ])
    }

    /// Struct ::= 'struct' InheritedType '{' (Functions | Fields)? '}'
    fn struct_decl(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Struct])?;
        let mut node = Cst::node(keyword);
        let name = self.inherited_type()?;
        node.attach_child(name);
        self.consume(&[TokenKind::LeftBrace])?;
        if let Ok(members) = self
            .attempt(Self::functions)
            .or_else(|_| self.attempt(Self::fields))
        {
            for member in members {
                node.attach_child(member);
            }
        }
        self.consume(&[TokenKind::RightBrace])?;
        Ok(node)
    }

    /// Trait ::= 'trait' InheritedType '{' FuncSigs? '}'
    fn trait_decl(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Trait])?;
        let mut node = Cst::node(keyword);
        let name = self.inherited_type()?;
        node.attach_child(name);
        self.consume(&[TokenKind::LeftBrace])?;
        if let Ok(sigs) = self.attempt(Self::func_sigs) {
            for sig in sigs {
                node.attach_child(sig);
            }
        }
        self.consume(&[TokenKind::RightBrace])?;
        Ok(node)
    }

    /// Enum ::= 'enum' Identifier '{' EnumValues? '}'
    fn enum_decl(&mut self) -> Result<Cst, SyntaxError> {
        let keyword = self.consume(&[TokenKind::Enum])?;
        let mut node = Cst::node(keyword);
        let name = self.consume(&[TokenKind::Identifier])?;
        node.attach_token(name);
        self.consume(&[TokenKind::LeftBrace])?;
        if let Ok(values) = self.attempt(Self::enum_values) {
            for value in values {
                node.attach_child(value);
            }
        }
        self.consume(&[TokenKind::RightBrace])?;
        Ok(node)
    }

    /// EnumValue ::= Identifier ('=' Integer)?
    fn enum_value(&mut self) -> Result<Cst, SyntaxError> {
        let name = self.consume(&[TokenKind::Identifier])?;
        let mut node = Cst::node(name);
        if let Ok(value) = self.attempt(|p| {
            p.consume(&[TokenKind::Equal])?;
            p.consume(&[TokenKind::Integer])
        }) {
            node.attach_token(value);
        }
        Ok(node)
    }

    /// EnumValues ::= EnumValue (',' EnumValues)?
    fn enum_values(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let mut items = vec![self.enum_value()?];
        while let Ok(item) = self.attempt(|p| {
            p.consume(&[TokenKind::Comma])?;
            p.enum_value()
        }) {
            items.push(item);
        }
        Ok(items)
    }

    /// Type Identifier - the shared shape of fields and parameters. The name
    /// token becomes the node, the type its single child.
    fn typed_name(&mut self) -> Result<Cst, SyntaxError> {
        let ty = self.type_expr()?;
        let name = self.consume(&[TokenKind::Identifier])?;
        let mut node = Cst::node(name);
        node.attach_child(ty);
        Ok(node)
    }

    /// Fields ::= Field ';' Fields*
    fn fields(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let first = self.typed_name()?;
        self.consume(&[TokenKind::Semicolon])?;
        let mut items = vec![first];
        while let Ok(item) = self.attempt(|p| {
            let field = p.typed_name()?;
            p.consume(&[TokenKind::Semicolon])?;
            Ok(field)
        }) {
            items.push(item);
        }
        Ok(items)
    }

    /// FuncSig ::= Type Identifier '(' Parameters? ')'
    ///
    /// The function name token becomes the node; the return type and the
    /// parameters are its children, in that order.
    fn func_sig(&mut self) -> Result<Cst, SyntaxError> {
        let ret = self.type_expr()?;
        let name = self.consume(&[TokenKind::Identifier])?;
        let mut node = Cst::node(name);
        node.attach_child(ret);
        self.consume(&[TokenKind::LeftParen])?;
        if let Ok(params) = self.attempt(Self::parameters) {
            for param in params {
                node.attach_child(param);
            }
        }
        self.consume(&[TokenKind::RightParen])?;
        Ok(node)
    }

    /// Parameters ::= Type Identifier (',' Parameters)?
    fn parameters(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let mut items = vec![self.typed_name()?];
        while let Ok(item) = self.attempt(|p| {
            p.consume(&[TokenKind::Comma])?;
            p.typed_name()
        }) {
            items.push(item);
        }
        Ok(items)
    }

    /// FuncSigs ::= FuncSig ';' FuncSigs*
    fn func_sigs(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let first = self.func_sig()?;
        self.consume(&[TokenKind::Semicolon])?;
        let mut items = vec![first];
        while let Ok(item) = self.attempt(|p| {
            let sig = p.func_sig()?;
            p.consume(&[TokenKind::Semicolon])?;
            Ok(sig)
        }) {
            items.push(item);
        }
        Ok(items)
    }

    /// Function ::= FuncSig Block
    ///
    /// The signature node doubles as the function node, with the block
    /// appended as its last child.
    fn function(&mut self) -> Result<Cst, SyntaxError> {
        let mut node = self.func_sig()?;
        let body = self.block()?;
        node.attach_child(body);
        Ok(node)
    }

    /// Functions ::= Function Functions*
    fn functions(&mut self) -> Result<Vec<Cst>, SyntaxError> {
        let mut items = vec![self.function()?];
        while let Ok(item) = self.attempt(Self::function) {
            items.push(item);
        }
        Ok(items)
    }
}
