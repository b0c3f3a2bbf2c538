//! Core vocabulary for the Slate language.
//!
//! This crate is the single source of truth for token identity: every token
//! kind the lexer can produce, its canonical spelling (where it has one), and
//! its syntactic category. It is intentionally **pure** (no I/O, no regular
//! expressions, no side effects) so the compiler, formatter, and future
//! tooling can all agree on what a token *is* without pulling in the lexer.
//!
//! ## See also
//! - `slate_syntax::catalog` for the lexical rules that recognise these kinds
//!   in source text.

pub mod lang;
