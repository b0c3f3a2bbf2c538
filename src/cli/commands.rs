//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::NamedSource;
use slate_core::lang::tokens::{TokenKind, TOKEN_KINDS};
use slate_syntax::lexer::Lexer;

use super::{CliError, CliResult, ExitCode};

/// How many bytes of upcoming text to quote when tokenization stalls.
const STALL_CONTEXT_LEN: usize = 16;

/// Read `path` fully into memory.
fn read_source(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path).map_err(|err| CliError::failure(format!("cannot read {}: {}", path.display(), err)))
}

/// Parse a source file and print the CST graph dump to stdout.
///
/// On failure, renders the syntax error as a miette report against the named
/// source so the offending position is highlighted.
pub fn parse_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    tracing::debug!(file = %path.display(), bytes = source.len(), "parsing");

    match slate_syntax::parser::parse(&source) {
        Ok(tree) => {
            println!("{}", tree);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let named = NamedSource::new(
                path.display().to_string(),
                String::from_utf8_lossy(&source).into_owned(),
            );
            let report = miette::Report::new(err).with_source_code(named);
            Err(CliError::failure(format!("{:?}", report)))
        }
    }
}

/// Dump the raw token stream, one token per line (debug aid).
///
/// Requests every registered kind at once, so the stream shows exactly what
/// longest-match tokenization produces for the full vocabulary.
pub fn dump_tokens(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let kinds: Vec<TokenKind> = TOKEN_KINDS.iter().map(|info| info.id).collect();

    let mut lexer = Lexer::new(&source);
    loop {
        match lexer.next_of(&kinds) {
            Some(token) if token.kind == TokenKind::Eof => break,
            Some(token) => println!(
                "{}:{}\t{:?}\t{:?}",
                token.line, token.column, token.kind, token.text
            ),
            None => {
                return Err(CliError::failure(format!(
                    "unrecognized input at {}:{}: {:?}",
                    lexer.line(),
                    lexer.column(),
                    lexer.slice(STALL_CONTEXT_LEN)
                )));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
