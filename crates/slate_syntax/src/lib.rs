//! Syntax frontend for the Slate language: token catalog, lexer, CST, parser,
//! diagnostics.
//!
//! Slate sources are parsed by a hand-written, backtracking recursive-descent
//! parser into a concrete syntax tree that retains the literal tokens.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do name
//!   resolution, type checking, or lowering.
//! - The lexer is byte-oriented: every byte is one character and one column.
//!   Slate source is expected to be ASCII; multi-byte text is passed through
//!   literally inside string and character literals and matches nothing
//!   elsewhere.
//! - Token identity (kinds, canonical spellings) comes from the
//!   `slate_core::lang` registry.
//!
//! ## Examples
//! ```rust
//! let tree = slate_syntax::parser::parse(b"enum Color { RED, GREEN }").unwrap();
//! assert_eq!(tree.children().len(), 1);
//! ```

pub mod catalog;
pub mod cst;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
