//! Define the token vocabulary for the Slate language.
//!
//! This module is the single source of truth for token kinds: a stable
//! identifier ([`TokenKind`]) plus a const metadata table ([`TOKEN_KINDS`])
//! that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and matches canonical
//!   spellings only.
//! - Value-bearing kinds (identifiers, literals) and the synthetic
//!   end-of-input kind have no canonical spelling; their entries carry
//!   `canonical: None`.
//! - This registry is vocabulary only (kinds + metadata). It does not
//!   tokenize source text; `slate_syntax::catalog` owns the lexical rules.
//!
//! ## Examples
//! ```rust
//! use slate_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::from_str("struct"), Some(TokenKind::Struct));
//! assert_eq!(tokens::canonical(TokenKind::Arrow), Some("->"));
//! assert_eq!(tokens::canonical(TokenKind::Identifier), None);
//! ```

use std::fmt;

/// Stable identifier for every token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Struct,
    Trait,
    Enum,
    Auto,
    Static,
    Const,
    If,
    Else,
    While,
    For,
    Do,
    Break,
    Continue,
    Return,
    Defer,

    // Primitive type names (reserved spellings; the grammar reaches types
    // through `Identifier`, so these are vocabulary, not grammar)
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    Usize,

    // Identifiers and literals
    Identifier,
    Integer,
    Float,
    Str,
    Char,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Question,
    Exclamation,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    LeftShift,
    RightShift,
    UnsignedRightShift,

    // Comparison
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Assignment
    Equal,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    AmpersandEqual,
    PipeEqual,
    CaretEqual,
    LeftShiftEqual,
    RightShiftEqual,
    UnsignedRightShiftEqual,

    // Misc
    Arrow,

    // End of input (synthesized by the lexer; no lexical rule)
    Eof,
}

/// Broad syntactic grouping for token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Reserved statement/declaration words.
    Keyword,
    /// Reserved primitive type names.
    TypeName,
    /// Value-bearing tokens: identifiers and literals.
    Literal,
    /// Brackets, braces, separators, and markers.
    Delimiter,
    /// Arithmetic, bitwise, and shift operators.
    Operator,
    /// Comparison operators.
    Comparison,
    /// Plain and compound assignment operators.
    Assignment,
    /// Structural markers like `->`.
    Arrow,
    /// Synthetic kinds with no surface spelling.
    Special,
}

/// Metadata for a token kind.
#[derive(Debug, Clone, Copy)]
pub struct TokenKindInfo {
    pub id: TokenKind,
    /// Canonical spelling for fixed tokens; `None` for value-bearing and
    /// synthetic kinds.
    pub canonical: Option<&'static str>,
    pub category: TokenCategory,
}

/// Registry of all token kinds.
///
/// ## Notes
/// - The ordering is grouped for readability and doubles as a sensible
///   "request everything" kind list for debug tokenization: fixed spellings
///   come before `Identifier`, so equal-length matches resolve to the
///   reserved word.
pub const TOKEN_KINDS: &[TokenKindInfo] = &[
    // Keywords
    fixed(TokenKind::Struct, "struct", TokenCategory::Keyword),
    fixed(TokenKind::Trait, "trait", TokenCategory::Keyword),
    fixed(TokenKind::Enum, "enum", TokenCategory::Keyword),
    fixed(TokenKind::Auto, "auto", TokenCategory::Keyword),
    fixed(TokenKind::Static, "static", TokenCategory::Keyword),
    fixed(TokenKind::Const, "const", TokenCategory::Keyword),
    fixed(TokenKind::If, "if", TokenCategory::Keyword),
    fixed(TokenKind::Else, "else", TokenCategory::Keyword),
    fixed(TokenKind::While, "while", TokenCategory::Keyword),
    fixed(TokenKind::For, "for", TokenCategory::Keyword),
    fixed(TokenKind::Do, "do", TokenCategory::Keyword),
    fixed(TokenKind::Break, "break", TokenCategory::Keyword),
    fixed(TokenKind::Continue, "continue", TokenCategory::Keyword),
    fixed(TokenKind::Return, "return", TokenCategory::Keyword),
    fixed(TokenKind::Defer, "defer", TokenCategory::Keyword),
    // Primitive type names
    fixed(TokenKind::I8, "i8", TokenCategory::TypeName),
    fixed(TokenKind::I16, "i16", TokenCategory::TypeName),
    fixed(TokenKind::I32, "i32", TokenCategory::TypeName),
    fixed(TokenKind::I64, "i64", TokenCategory::TypeName),
    fixed(TokenKind::I128, "i128", TokenCategory::TypeName),
    fixed(TokenKind::U8, "u8", TokenCategory::TypeName),
    fixed(TokenKind::U16, "u16", TokenCategory::TypeName),
    fixed(TokenKind::U32, "u32", TokenCategory::TypeName),
    fixed(TokenKind::U64, "u64", TokenCategory::TypeName),
    fixed(TokenKind::U128, "u128", TokenCategory::TypeName),
    fixed(TokenKind::F32, "f32", TokenCategory::TypeName),
    fixed(TokenKind::F64, "f64", TokenCategory::TypeName),
    fixed(TokenKind::Usize, "usize", TokenCategory::TypeName),
    // Identifiers and literals
    value(TokenKind::Identifier, TokenCategory::Literal),
    value(TokenKind::Integer, TokenCategory::Literal),
    value(TokenKind::Float, TokenCategory::Literal),
    value(TokenKind::Str, TokenCategory::Literal),
    value(TokenKind::Char, TokenCategory::Literal),
    // Delimiters
    fixed(TokenKind::LeftParen, "(", TokenCategory::Delimiter),
    fixed(TokenKind::RightParen, ")", TokenCategory::Delimiter),
    fixed(TokenKind::LeftBrace, "{", TokenCategory::Delimiter),
    fixed(TokenKind::RightBrace, "}", TokenCategory::Delimiter),
    fixed(TokenKind::LeftBracket, "[", TokenCategory::Delimiter),
    fixed(TokenKind::RightBracket, "]", TokenCategory::Delimiter),
    fixed(TokenKind::Comma, ",", TokenCategory::Delimiter),
    fixed(TokenKind::Semicolon, ";", TokenCategory::Delimiter),
    fixed(TokenKind::Colon, ":", TokenCategory::Delimiter),
    fixed(TokenKind::Dot, ".", TokenCategory::Delimiter),
    fixed(TokenKind::Question, "?", TokenCategory::Delimiter),
    fixed(TokenKind::Exclamation, "!", TokenCategory::Delimiter),
    // Operators
    fixed(TokenKind::Plus, "+", TokenCategory::Operator),
    fixed(TokenKind::Minus, "-", TokenCategory::Operator),
    fixed(TokenKind::Star, "*", TokenCategory::Operator),
    fixed(TokenKind::Slash, "/", TokenCategory::Operator),
    fixed(TokenKind::Percent, "%", TokenCategory::Operator),
    fixed(TokenKind::Ampersand, "&", TokenCategory::Operator),
    fixed(TokenKind::Pipe, "|", TokenCategory::Operator),
    fixed(TokenKind::Caret, "^", TokenCategory::Operator),
    fixed(TokenKind::Tilde, "~", TokenCategory::Operator),
    fixed(TokenKind::LeftShift, "<<", TokenCategory::Operator),
    fixed(TokenKind::RightShift, ">>", TokenCategory::Operator),
    fixed(TokenKind::UnsignedRightShift, ">>>", TokenCategory::Operator),
    // Comparison
    fixed(TokenKind::EqualEqual, "==", TokenCategory::Comparison),
    fixed(TokenKind::NotEqual, "!=", TokenCategory::Comparison),
    fixed(TokenKind::Less, "<", TokenCategory::Comparison),
    fixed(TokenKind::LessEqual, "<=", TokenCategory::Comparison),
    fixed(TokenKind::Greater, ">", TokenCategory::Comparison),
    fixed(TokenKind::GreaterEqual, ">=", TokenCategory::Comparison),
    // Assignment
    fixed(TokenKind::Equal, "=", TokenCategory::Assignment),
    fixed(TokenKind::PlusEqual, "+=", TokenCategory::Assignment),
    fixed(TokenKind::MinusEqual, "-=", TokenCategory::Assignment),
    fixed(TokenKind::StarEqual, "*=", TokenCategory::Assignment),
    fixed(TokenKind::SlashEqual, "/=", TokenCategory::Assignment),
    fixed(TokenKind::PercentEqual, "%=", TokenCategory::Assignment),
    fixed(TokenKind::AmpersandEqual, "&=", TokenCategory::Assignment),
    fixed(TokenKind::PipeEqual, "|=", TokenCategory::Assignment),
    fixed(TokenKind::CaretEqual, "^=", TokenCategory::Assignment),
    fixed(TokenKind::LeftShiftEqual, "<<=", TokenCategory::Assignment),
    fixed(TokenKind::RightShiftEqual, ">>=", TokenCategory::Assignment),
    fixed(TokenKind::UnsignedRightShiftEqual, ">>>=", TokenCategory::Assignment),
    // Misc
    fixed(TokenKind::Arrow, "->", TokenCategory::Arrow),
    // Synthetic
    value(TokenKind::Eof, TokenCategory::Special),
];

/// Canonical spelling, if the kind has a fixed one.
pub fn canonical(id: TokenKind) -> Option<&'static str> {
    info_for(id).canonical
}

/// Category.
pub fn category(id: TokenKind) -> TokenCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: TokenKind) -> &'static TokenKindInfo {
    TOKEN_KINDS
        .iter()
        .find(|info| info.id == id)
        .expect("token kind info missing")
}

/// Lookup by canonical spelling.
pub fn from_str(s: &str) -> Option<TokenKind> {
    TOKEN_KINDS
        .iter()
        .find(|info| info.canonical == Some(s))
        .map(|info| info.id)
}

impl fmt::Display for TokenKind {
    /// Render the kind the way diagnostics quote it: fixed tokens by their
    /// canonical spelling, value-bearing kinds by a short description.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Integer => f.write_str("integer literal"),
            TokenKind::Float => f.write_str("float literal"),
            TokenKind::Str => f.write_str("string literal"),
            TokenKind::Char => f.write_str("character literal"),
            TokenKind::Eof => f.write_str("end of input"),
            _ => match canonical(*self) {
                Some(spelling) => write!(f, "'{}'", spelling),
                None => f.write_str("token"),
            },
        }
    }
}

// --- helpers -----------------------------------------------------------------

const fn fixed(id: TokenKind, canonical: &'static str, category: TokenCategory) -> TokenKindInfo {
    TokenKindInfo {
        id,
        canonical: Some(canonical),
        category,
    }
}

const fn value(id: TokenKind, category: TokenCategory) -> TokenKindInfo {
    TokenKindInfo {
        id,
        canonical: None,
        category,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_are_unique() {
        for (i, a) in TOKEN_KINDS.iter().enumerate() {
            for b in &TOKEN_KINDS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate registry entry for {:?}", a.id);
            }
        }
    }

    #[test]
    fn test_canonical_spellings_round_trip() {
        for info in TOKEN_KINDS {
            if let Some(spelling) = info.canonical {
                assert_eq!(
                    from_str(spelling),
                    Some(info.id),
                    "canonical spelling {:?} does not resolve to {:?}",
                    spelling,
                    info.id
                );
            }
        }
    }

    #[test]
    fn test_canonical_spellings_are_unique() {
        for (i, a) in TOKEN_KINDS.iter().enumerate() {
            for b in &TOKEN_KINDS[i + 1..] {
                if a.canonical.is_some() {
                    assert_ne!(
                        a.canonical, b.canonical,
                        "{:?} and {:?} share a spelling",
                        a.id, b.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_value_kinds_have_no_spelling() {
        for kind in [
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::Str,
            TokenKind::Char,
            TokenKind::Eof,
        ] {
            assert_eq!(canonical(kind), None);
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(category(TokenKind::Struct), TokenCategory::Keyword);
        assert_eq!(category(TokenKind::I32), TokenCategory::TypeName);
        assert_eq!(category(TokenKind::Identifier), TokenCategory::Literal);
        assert_eq!(category(TokenKind::LeftBrace), TokenCategory::Delimiter);
        assert_eq!(category(TokenKind::UnsignedRightShift), TokenCategory::Operator);
        assert_eq!(category(TokenKind::NotEqual), TokenCategory::Comparison);
        assert_eq!(category(TokenKind::RightShiftEqual), TokenCategory::Assignment);
        assert_eq!(category(TokenKind::Arrow), TokenCategory::Arrow);
        assert_eq!(category(TokenKind::Eof), TokenCategory::Special);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Struct.to_string(), "'struct'");
        assert_eq!(TokenKind::UnsignedRightShiftEqual.to_string(), "'>>>='");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn test_fixed_spellings_precede_identifier() {
        let ident_pos = TOKEN_KINDS
            .iter()
            .position(|info| info.id == TokenKind::Identifier)
            .expect("identifier entry");
        for info in TOKEN_KINDS {
            if matches!(info.category, TokenCategory::Keyword | TokenCategory::TypeName) {
                let pos = TOKEN_KINDS.iter().position(|i| i.id == info.id).expect("entry");
                assert!(pos < ident_pos, "{:?} registered after Identifier", info.id);
            }
        }
    }
}
