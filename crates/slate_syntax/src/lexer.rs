//! Backtracking lexer over a byte buffer.
//!
//! The lexer owns a cursor into a fully-loaded source buffer and produces
//! tokens on demand: callers name the kinds they will accept and
//! [`Lexer::next_of`] returns the longest match among them. Speculative
//! parsing is supported by a LIFO mark stack (`mark`/`restore`/`discard`)
//! and a single-slot push-back buffer for non-destructive lookahead.
//!
//! ## Notes
//! - Byte-oriented: every byte is one character and one column. Newlines
//!   reset the column and advance the line; both start at 0.
//! - Each `mark` must be balanced by exactly one `restore` (reset the cursor)
//!   or `discard` (keep the advanced cursor). The parser asserts the stack is
//!   empty when a top-level parse completes.
//! - A mark snapshots the *complete* lexer state (cursor and push-back
//!   slot), so restoring can neither lose nor resurrect a pushed-back token.
//! - One lexer drives at most one parse at a time; the shared catalog it
//!   reads from is immutable and needs no synchronization.

use slate_core::lang::tokens::TokenKind;

use crate::catalog::{Token, TokenCatalog};

/// Cursor position within the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cursor {
    offset: usize,
    line: u32,
    column: u32,
}

/// Complete lexer state saved by one `mark`.
#[derive(Debug, Clone)]
struct Mark {
    cursor: Cursor,
    pushed_back: Option<Token>,
}

/// On-demand tokenizer with backtracking.
pub struct Lexer<'a> {
    src: &'a [u8],
    catalog: &'a TokenCatalog,
    cursor: Cursor,
    marks: Vec<Mark>,
    pushed_back: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Lexer over `src` using the process-wide default catalog.
    pub fn new(src: &'a [u8]) -> Self {
        Self::with_catalog(src, TokenCatalog::shared())
    }

    pub fn with_catalog(src: &'a [u8], catalog: &'a TokenCatalog) -> Self {
        Lexer {
            src,
            catalog,
            cursor: Cursor::default(),
            marks: Vec::new(),
            pushed_back: None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.src.get(self.cursor.offset) {
            if byte == b'\n' {
                self.cursor.line += 1;
                self.cursor.column = 0;
            } else if byte.is_ascii_whitespace() {
                self.cursor.column += 1;
            } else {
                break;
            }
            self.cursor.offset += 1;
        }
    }

    /// Produce the next token, accepting any of `kinds`.
    ///
    /// A pushed-back token is replayed first, bypassing matching entirely.
    /// Otherwise whitespace is skipped and every requested kind is tried
    /// against the catalog at the cursor; the longest match wins, with ties
    /// broken in favour of the kind listed **earliest in `kinds`** (this is
    /// what lets `>>>=` beat `>` when both are requested).
    ///
    /// Returns `None` when input remains but none of the kinds match, and a
    /// synthesized [`TokenKind::Eof`] token once the input is exhausted.
    pub fn next_of(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if let Some(token) = self.pushed_back.take() {
            return Some(token);
        }

        self.skip_whitespace();
        if self.cursor.offset >= self.src.len() {
            return Some(Token::new(TokenKind::Eof, "", self.cursor.line, self.cursor.column));
        }

        let rest = &self.src[self.cursor.offset..];
        let mut selected: Option<Token> = None;
        for &kind in kinds {
            if let Some(token) = self.catalog.lookup(kind, rest, self.cursor.line, self.cursor.column) {
                if selected.as_ref().map_or(true, |best| token.len() > best.len()) {
                    selected = Some(token);
                }
            }
        }

        let token = selected?;
        self.cursor.offset += token.len();
        self.cursor.column += token.len() as u32;
        Some(token)
    }

    /// Save the current lexer state on the mark stack.
    pub fn mark(&mut self) {
        self.marks.push(Mark {
            cursor: self.cursor,
            pushed_back: self.pushed_back.clone(),
        });
    }

    /// Pop the newest mark and reset the lexer to it.
    ///
    /// ## Panics
    /// - If no mark is outstanding (unbalanced backtracking is a programming
    ///   error).
    pub fn restore(&mut self) {
        let mark = self.marks.pop().expect("restore without matching mark");
        self.cursor = mark.cursor;
        self.pushed_back = mark.pushed_back;
    }

    /// Pop the newest mark, keeping the advanced cursor.
    ///
    /// ## Panics
    /// - If no mark is outstanding.
    pub fn discard(&mut self) {
        self.marks.pop().expect("discard without matching mark");
    }

    /// Store one token to be replayed by the next `next_of` call.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(self.pushed_back.is_none(), "push-back slot already occupied");
        self.pushed_back = Some(token);
    }

    /// Non-destructive lookahead: the returned token (if any) will be
    /// replayed by the next `next_of` call.
    pub fn peek_of(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        self.mark();
        match self.next_of(kinds) {
            Some(token) => {
                self.push_back(token.clone());
                self.discard();
                Some(token)
            }
            None => {
                self.restore();
                None
            }
        }
    }

    /// Whether unconsumed input remains (skipping whitespace to find out).
    pub fn has_more(&mut self) -> bool {
        if self.pushed_back.is_some() {
            return true;
        }
        self.skip_whitespace();
        self.cursor.offset < self.src.len()
    }

    /// Up to `len` bytes of raw upcoming text, for error context.
    pub fn slice(&self, len: usize) -> String {
        let end = (self.cursor.offset + len).min(self.src.len());
        String::from_utf8_lossy(&self.src[self.cursor.offset..end]).into_owned()
    }

    pub fn line(&self) -> u32 {
        self.cursor.line
    }

    pub fn column(&self) -> u32 {
        self.cursor.column
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset
    }

    /// Number of outstanding marks; zero after a balanced parse.
    pub fn mark_depth(&self) -> usize {
        self.marks.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
