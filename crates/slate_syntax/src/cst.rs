//! Concrete syntax tree.
//!
//! A [`Cst`] node wraps an optional token and an ordered list of children.
//! Grammar productions keep literal tokens in the tree (this is a concrete
//! tree, not an abstract one), and list-shaped productions attach their items
//! as flat siblings rather than nesting.
//!
//! ## Notes
//! - A node exclusively owns its subtree; parse functions return ownership to
//!   their caller.
//! - The `Display` rendering is a graph-description dump for inspection and
//!   debugging, not a wire format.

use std::collections::VecDeque;
use std::fmt;

use crate::catalog::Token;

/// One node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cst {
    token: Option<Token>,
    children: Vec<Cst>,
}

impl Cst {
    /// Token-less node (the synthetic root, and grouping productions).
    pub fn empty() -> Self {
        Cst::default()
    }

    /// Node wrapping a token.
    pub fn node(token: Token) -> Self {
        Cst {
            token: Some(token),
            children: Vec::new(),
        }
    }

    /// Append a child, returning a reference to it for chaining.
    pub fn attach_child(&mut self, child: Cst) -> &mut Cst {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Append a token as a leaf child.
    pub fn attach_token(&mut self, token: Token) -> &mut Cst {
        self.attach_child(Cst::node(token))
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn children(&self) -> &[Cst] {
        &self.children
    }

    /// Child by Python-style modular index: negative counts from the end
    /// (`-1` is the last child) and any index is taken modulo the child
    /// count. `None` only when the node has no children.
    pub fn nth_child(&self, index: isize) -> Option<&Cst> {
        if self.children.is_empty() {
            return None;
        }
        let len = self.children.len() as isize;
        let mut index = index % len;
        if index < 0 {
            index += len;
        }
        Some(&self.children[index as usize])
    }
}

impl fmt::Display for Cst {
    /// Graph-description dump: one `id [label="…"]` line per node and one
    /// `parent -> child` line per edge, breadth-first, with deterministic
    /// sequential ids.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: VecDeque<(usize, &Cst)> = VecDeque::new();
        pending.push_back((0, self));
        let mut next_id = 1;

        while let Some((id, node)) = pending.pop_front() {
            match &node.token {
                Some(token) if !token.text.is_empty() => {
                    writeln!(f, "{} [label=\"{:?}: {}\"]", id, token.kind, token.text.replace('"', "\\\""))?;
                }
                Some(token) => writeln!(f, "{} [label=\"{:?}\"]", id, token.kind)?,
                None => writeln!(f, "{} [label=\"ROOT\"]", id)?,
            }
            for child in &node.children {
                writeln!(f, "{} -> {}", id, next_id)?;
                pending.push_back((next_id, child));
                next_id += 1;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::lang::tokens::TokenKind;

    fn ident(text: &str) -> Token {
        Token::new(TokenKind::Identifier, text, 0, 0)
    }

    #[test]
    fn test_attach_child_returns_the_attached_node() {
        let mut root = Cst::empty();
        let child = root.attach_token(ident("a"));
        child.attach_token(ident("b"));
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].children().len(), 1);
    }

    #[test]
    fn test_nth_child_modular_indexing() {
        let mut node = Cst::empty();
        node.attach_token(ident("a"));
        node.attach_token(ident("b"));
        node.attach_token(ident("c"));

        let text = |i: isize| node.nth_child(i).unwrap().token().unwrap().text.clone();
        assert_eq!(text(0), "a");
        assert_eq!(text(2), "c");
        assert_eq!(text(-1), "c");
        assert_eq!(text(-3), "a");
        assert_eq!(text(3), "a");
        assert_eq!(text(-4), "c");
    }

    #[test]
    fn test_nth_child_of_leaf_is_none() {
        let node = Cst::node(ident("a"));
        assert!(node.nth_child(0).is_none());
        assert!(node.nth_child(-1).is_none());
    }

    #[test]
    fn test_display_dumps_nodes_then_edges_breadth_first() {
        let mut root = Cst::empty();
        let parent = root.attach_token(ident("a"));
        parent.attach_token(ident("b"));
        root.attach_token(ident("c"));

        insta::assert_snapshot!(root.to_string().trim_end(), @r#"
        0 [label="ROOT"]
        0 -> 1
        0 -> 2
        1 [label="Identifier: a"]
        1 -> 3
        2 [label="Identifier: c"]
        3 [label="Identifier: b"]
        "#);
    }

    #[test]
    fn test_display_escapes_quotes_and_elides_empty_text() {
        let mut root = Cst::empty();
        root.attach_token(Token::new(TokenKind::Str, "\"hi\"", 0, 0));
        root.attach_token(Token::new(TokenKind::Eof, "", 0, 0));
        assert_eq!(
            root.to_string(),
            "0 [label=\"ROOT\"]\n\
             0 -> 1\n\
             0 -> 2\n\
             1 [label=\"Str: \\\"hi\\\"\"]\n\
             2 [label=\"Eof\"]\n"
        );
    }
}
