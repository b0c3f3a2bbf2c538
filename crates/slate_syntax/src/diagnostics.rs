//! Syntax error type and expected-set aggregation.
//!
//! A parse has exactly one user-visible failure mode: at some position, none
//! of the token kinds that would have allowed progress were present. Sibling
//! alternatives each contribute their own expected kinds; the sets are merged
//! into one diagnostic as the failure propagates (see
//! `parser::Parser::any_of`).

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use slate_core::lang::tokens::TokenKind;
use thiserror::Error;

/// Set of token kinds that would have allowed a parse to make progress.
///
/// Order-preserving with duplicates removed, so merged diagnostics list
/// alternatives in the order they were tried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpectedSet(Vec<TokenKind>);

impl ExpectedSet {
    pub fn new(kinds: &[TokenKind]) -> Self {
        let mut set = ExpectedSet::default();
        for &kind in kinds {
            set.insert(kind);
        }
        set
    }

    fn insert(&mut self, kind: TokenKind) {
        if !self.0.contains(&kind) {
            self.0.push(kind);
        }
    }

    /// Union with another set, keeping first-seen order.
    pub fn merge(&mut self, other: &ExpectedSet) {
        for &kind in &other.0 {
            self.insert(kind);
        }
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn kinds(&self) -> &[TokenKind] {
        &self.0
    }
}

impl fmt::Display for ExpectedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() > 1 {
            f.write_str("one of ")?;
        }
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", kind)?;
        }
        Ok(())
    }
}

/// A failed parse: the kinds that would have allowed progress, a short
/// excerpt of the offending input, and the cursor position (0-based line and
/// column, as tracked by the lexer).
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("unexpected token at {line}:{column}: expected {expected}, found \"{context}\"")]
#[diagnostic(code(slate::syntax::unexpected_token))]
pub struct SyntaxError {
    pub expected: ExpectedSet,
    pub context: String,
    pub line: u32,
    pub column: u32,
    #[label("unexpected token here")]
    pub span: SourceSpan,
}

impl SyntaxError {
    pub fn new(expected: ExpectedSet, context: String, line: u32, column: u32, offset: usize) -> Self {
        let len = if context.is_empty() { 0 } else { 1 };
        SyntaxError {
            expected,
            context,
            line,
            column,
            span: (offset, len).into(),
        }
    }

    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_set_dedups_preserving_order() {
        let set = ExpectedSet::new(&[
            TokenKind::Identifier,
            TokenKind::Struct,
            TokenKind::Identifier,
        ]);
        assert_eq!(set.kinds(), &[TokenKind::Identifier, TokenKind::Struct]);
    }

    #[test]
    fn test_merge_is_a_union() {
        let mut a = ExpectedSet::new(&[TokenKind::Struct, TokenKind::Trait]);
        let b = ExpectedSet::new(&[TokenKind::Trait, TokenKind::Enum]);
        a.merge(&b);
        assert_eq!(
            a.kinds(),
            &[TokenKind::Struct, TokenKind::Trait, TokenKind::Enum]
        );
    }

    #[test]
    fn test_display_single_and_many() {
        let one = ExpectedSet::new(&[TokenKind::Semicolon]);
        assert_eq!(one.to_string(), "';'");
        let many = ExpectedSet::new(&[TokenKind::Identifier, TokenKind::Struct]);
        assert_eq!(many.to_string(), "one of identifier, 'struct'");
    }

    #[test]
    fn test_error_message_shape() {
        let err = SyntaxError::new(
            ExpectedSet::new(&[TokenKind::Identifier]),
            "{ }".to_string(),
            0,
            7,
            7,
        );
        assert_eq!(
            err.to_string(),
            "unexpected token at 0:7: expected identifier, found \"{ }\""
        );
        assert_eq!(err.offset(), 7);
    }
}
