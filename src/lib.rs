//! Command-line driver for the Slate syntax frontend.
//!
//! The parsing machinery itself lives in the workspace crates:
//! - `slate_core` - token vocabulary registry
//! - `slate_syntax` - catalog, lexer, CST, parser, diagnostics
//!
//! This crate only reads a source file, runs the parser, and presents the
//! result: the rendered CST on success, a diagnostic (and a non-zero exit)
//! on failure.

pub mod cli;
