//! Recursive-descent parser for the Slate language.
//!
//! One method per grammar nonterminal, composed from a small combinator
//! layer: `consume` (demand one of a set of kinds), `peek` (non-destructive
//! lookahead), `attempt` (scoped speculative parse), and `any_of` (ordered
//! alternation with expected-set aggregation). Backtracking is
//! value-returning: a failed alternative restores the lexer and surfaces a
//! [`SyntaxError`]; nothing unwinds.
//!
//! ## Notes
//! - The expression grammar is deliberately flat right recursion with **no**
//!   operator precedence or associativity rules; `1*2+3` parses as
//!   `*(1, +(2, 3))`. Downstream consumers depend on that shape, so it must
//!   not be "fixed" here (a regression test pins it).
//! - The first failure aborts the whole parse; there is no statement- or
//!   construct-level resynchronization.
//!
//! ## Examples
//! ```rust
//! let tree = slate_syntax::parser::parse(b"struct Point { i32 x; i32 y; }").unwrap();
//! assert_eq!(tree.children().len(), 1);
//! ```

use crate::catalog::Token;
use crate::cst::Cst;
use crate::diagnostics::{ExpectedSet, SyntaxError};
use crate::lexer::Lexer;
use slate_core::lang::tokens::TokenKind;

// NOTE: This module is split across multiple files using `include!` to keep
// all parser methods in the same Rust module (preserving privacy + call
// patterns) while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
