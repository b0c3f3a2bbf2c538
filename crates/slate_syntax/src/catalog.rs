//! Token catalog: anchored lexical rules per token kind.
//!
//! The catalog maps each [`TokenKind`] to an ordered list of [`LexRule`]s.
//! A rule's pattern is anchored at the cursor; within one kind the **first**
//! registered rule that matches wins. The catalog never chooses *between*
//! kinds; that is the lexer's longest-match job (`lexer::Lexer::next_of`).
//!
//! ## Notes
//! - Patterns are byte regexes compiled with Unicode mode off: every byte is
//!   one character, matching the lexer's byte-oriented cursor.
//! - Fixed-spelling rules (keywords, punctuation, operators) are derived from
//!   the `slate_core` registry, so the vocabulary cannot drift from the
//!   lexical rules.
//! - A catalog is built once and never mutated afterwards; it is safe to
//!   share read-only across any number of lexers. [`TokenCatalog::shared`]
//!   holds the process-wide default.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::bytes::{Regex, RegexBuilder};
use slate_core::lang::tokens::{self, TokenKind};

/// A single lexeme: kind, matched text, and 0-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Matched length in bytes, used for longest-match selection.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Token constructor attached to a rule.
///
/// All stock rules build a plain [`Token`]; the indirection lets a custom
/// catalog normalize text (strip quotes, fold case) at lex time.
pub type TokenCtor = fn(TokenKind, String, u32, u32) -> Token;

/// One anchored lexical rule for a token kind.
pub struct LexRule {
    kind: TokenKind,
    pattern: Regex,
    ctor: TokenCtor,
}

impl LexRule {
    /// Rule with the stock [`Token`] constructor.
    ///
    /// ## Panics
    /// - If `pattern` is not a valid regex (lexical rules are compiled from
    ///   static tables; an invalid pattern is a programming error).
    pub fn new(kind: TokenKind, pattern: &str) -> Self {
        Self::with_ctor(kind, pattern, |kind, text, line, column| {
            Token::new(kind, text, line, column)
        })
    }

    pub fn with_ctor(kind: TokenKind, pattern: &str, ctor: TokenCtor) -> Self {
        let anchored = format!(r"\A(?:{})", pattern);
        let pattern = RegexBuilder::new(&anchored)
            .unicode(false)
            .build()
            .expect("invalid lexical pattern");
        LexRule { kind, pattern, ctor }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Try to produce a token anchored at the start of `rest`.
    pub fn produce(&self, rest: &[u8], line: u32, column: u32) -> Option<Token> {
        let matched = self.pattern.find(rest)?;
        let text = String::from_utf8_lossy(matched.as_bytes()).into_owned();
        Some((self.ctor)(self.kind, text, line, column))
    }
}

/// Immutable mapping from token kind to its ordered lexical rules.
pub struct TokenCatalog {
    rules: HashMap<TokenKind, Vec<LexRule>>,
}

impl TokenCatalog {
    pub fn builder() -> Builder {
        Builder {
            rules: HashMap::new(),
        }
    }

    /// First registered rule for `kind` that matches anchored at the start of
    /// `rest`.
    pub fn lookup(&self, kind: TokenKind, rest: &[u8], line: u32, column: u32) -> Option<Token> {
        self.rules
            .get(&kind)?
            .iter()
            .find_map(|rule| rule.produce(rest, line, column))
    }

    pub fn has_rules(&self, kind: TokenKind) -> bool {
        self.rules.contains_key(&kind)
    }

    /// The process-wide default catalog covering the full Slate vocabulary.
    pub fn shared() -> &'static TokenCatalog {
        static CATALOG: OnceLock<TokenCatalog> = OnceLock::new();
        CATALOG.get_or_init(default_catalog)
    }
}

/// Accumulates rules, then freezes them into a [`TokenCatalog`].
pub struct Builder {
    rules: HashMap<TokenKind, Vec<LexRule>>,
}

impl Builder {
    pub fn register(mut self, rule: LexRule) -> Self {
        self.rules.entry(rule.kind()).or_default().push(rule);
        self
    }

    /// Register a fixed-spelling kind with a pattern derived from its
    /// canonical spelling in the `slate_core` registry.
    ///
    /// ## Panics
    /// - If `kind` has no canonical spelling (value-bearing kinds need an
    ///   explicit pattern).
    pub fn register_spelling(self, kind: TokenKind) -> Self {
        let spelling = tokens::canonical(kind).expect("kind without canonical spelling");
        self.register(LexRule::new(kind, &regex::escape(spelling)))
    }

    pub fn build(self) -> TokenCatalog {
        TokenCatalog { rules: self.rules }
    }
}

/// Every lexical rule of the Slate language.
///
/// Within `Integer`, the plain decimal form is registered before the
/// binary/octal/hex forms; within `Float`, the plain form before the
/// exponent form. First-match-wins within a kind preserves that order.
fn default_catalog() -> TokenCatalog {
    TokenCatalog::builder()
        // Keywords
        .register_spelling(TokenKind::Struct)
        .register_spelling(TokenKind::Trait)
        .register_spelling(TokenKind::Enum)
        .register_spelling(TokenKind::Auto)
        .register_spelling(TokenKind::Static)
        .register_spelling(TokenKind::Const)
        .register_spelling(TokenKind::If)
        .register_spelling(TokenKind::Else)
        .register_spelling(TokenKind::While)
        .register_spelling(TokenKind::For)
        .register_spelling(TokenKind::Do)
        .register_spelling(TokenKind::Break)
        .register_spelling(TokenKind::Continue)
        .register_spelling(TokenKind::Return)
        .register_spelling(TokenKind::Defer)
        // Primitive type names
        .register_spelling(TokenKind::I8)
        .register_spelling(TokenKind::I16)
        .register_spelling(TokenKind::I32)
        .register_spelling(TokenKind::I64)
        .register_spelling(TokenKind::I128)
        .register_spelling(TokenKind::U8)
        .register_spelling(TokenKind::U16)
        .register_spelling(TokenKind::U32)
        .register_spelling(TokenKind::U64)
        .register_spelling(TokenKind::U128)
        .register_spelling(TokenKind::F32)
        .register_spelling(TokenKind::F64)
        .register_spelling(TokenKind::Usize)
        // Identifiers and literals
        .register(LexRule::new(TokenKind::Identifier, r"[a-zA-Z_][a-zA-Z0-9_]*"))
        .register(LexRule::new(TokenKind::Integer, r"-?[0-9]+"))
        .register(LexRule::new(TokenKind::Integer, r"-?0[bB][01]+"))
        .register(LexRule::new(TokenKind::Integer, r"-?0[oO][0-7]+"))
        .register(LexRule::new(TokenKind::Integer, r"-?0[xX][0-9a-fA-F]+"))
        .register(LexRule::new(TokenKind::Float, r"-?[0-9]+\.[0-9]+"))
        .register(LexRule::new(TokenKind::Float, r"-?[0-9]+\.[0-9]+[eE][+-]?[0-9]+"))
        .register(LexRule::new(TokenKind::Str, r#""(?:[^"\\]|\\.)*""#))
        .register(LexRule::new(TokenKind::Char, r"'(?:[^'\\]|\\.)'"))
        // Delimiters
        .register_spelling(TokenKind::LeftParen)
        .register_spelling(TokenKind::RightParen)
        .register_spelling(TokenKind::LeftBrace)
        .register_spelling(TokenKind::RightBrace)
        .register_spelling(TokenKind::LeftBracket)
        .register_spelling(TokenKind::RightBracket)
        .register_spelling(TokenKind::Comma)
        .register_spelling(TokenKind::Semicolon)
        .register_spelling(TokenKind::Colon)
        .register_spelling(TokenKind::Dot)
        .register_spelling(TokenKind::Question)
        .register_spelling(TokenKind::Exclamation)
        // Operators
        .register_spelling(TokenKind::Plus)
        .register_spelling(TokenKind::Minus)
        .register_spelling(TokenKind::Star)
        .register_spelling(TokenKind::Slash)
        .register_spelling(TokenKind::Percent)
        .register_spelling(TokenKind::Ampersand)
        .register_spelling(TokenKind::Pipe)
        .register_spelling(TokenKind::Caret)
        .register_spelling(TokenKind::Tilde)
        .register_spelling(TokenKind::LeftShift)
        .register_spelling(TokenKind::RightShift)
        .register_spelling(TokenKind::UnsignedRightShift)
        // Comparison
        .register_spelling(TokenKind::EqualEqual)
        .register_spelling(TokenKind::NotEqual)
        .register_spelling(TokenKind::Less)
        .register_spelling(TokenKind::LessEqual)
        .register_spelling(TokenKind::Greater)
        .register_spelling(TokenKind::GreaterEqual)
        // Assignment
        .register_spelling(TokenKind::Equal)
        .register_spelling(TokenKind::PlusEqual)
        .register_spelling(TokenKind::MinusEqual)
        .register_spelling(TokenKind::StarEqual)
        .register_spelling(TokenKind::SlashEqual)
        .register_spelling(TokenKind::PercentEqual)
        .register_spelling(TokenKind::AmpersandEqual)
        .register_spelling(TokenKind::PipeEqual)
        .register_spelling(TokenKind::CaretEqual)
        .register_spelling(TokenKind::LeftShiftEqual)
        .register_spelling(TokenKind::RightShiftEqual)
        .register_spelling(TokenKind::UnsignedRightShiftEqual)
        // Misc
        .register_spelling(TokenKind::Arrow)
        .build()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::lang::tokens::TOKEN_KINDS;

    #[test]
    fn test_every_fixed_spelling_matches_itself() {
        let catalog = TokenCatalog::shared();
        for info in TOKEN_KINDS {
            if let Some(spelling) = info.canonical {
                let token = catalog
                    .lookup(info.id, spelling.as_bytes(), 0, 0)
                    .unwrap_or_else(|| panic!("no match for {:?}", info.id));
                assert_eq!(token.kind, info.id);
                assert_eq!(token.text, spelling);
            }
        }
    }

    #[test]
    fn test_catalog_covers_every_lexable_kind() {
        let catalog = TokenCatalog::shared();
        for info in TOKEN_KINDS {
            if info.id == TokenKind::Eof {
                assert!(!catalog.has_rules(info.id), "Eof must stay synthetic");
            } else {
                assert!(catalog.has_rules(info.id), "no rules for {:?}", info.id);
            }
        }
    }

    #[test]
    fn test_lookup_is_anchored() {
        let catalog = TokenCatalog::shared();
        assert!(catalog.lookup(TokenKind::Struct, b" struct", 0, 0).is_none());
        assert!(catalog.lookup(TokenKind::Struct, b"struct", 0, 0).is_some());
    }

    #[test]
    fn test_first_registered_rule_wins_within_a_kind() {
        let catalog = TokenCatalog::shared();
        // The decimal rule is registered first, so it claims the leading "0"
        // even when a hex form follows.
        let token = catalog.lookup(TokenKind::Integer, b"0x1F", 0, 0).unwrap();
        assert_eq!(token.text, "0");
        let token = catalog.lookup(TokenKind::Integer, b"0", 0, 0).unwrap();
        assert_eq!(token.text, "0");
    }

    #[test]
    fn test_negative_and_prefixed_integers() {
        let catalog = TokenCatalog::shared();
        let token = catalog.lookup(TokenKind::Integer, b"-42;", 0, 0).unwrap();
        assert_eq!(token.text, "-42");
    }

    #[test]
    fn test_float_forms() {
        let catalog = TokenCatalog::shared();
        let token = catalog.lookup(TokenKind::Float, b"3.25", 0, 0).unwrap();
        assert_eq!(token.text, "3.25");
        assert!(catalog.lookup(TokenKind::Float, b"42", 0, 0).is_none());
    }

    #[test]
    fn test_string_and_char_literals() {
        let catalog = TokenCatalog::shared();
        let token = catalog
            .lookup(TokenKind::Str, br#""he said \"hi\"" rest"#, 0, 0)
            .unwrap();
        assert_eq!(token.text, r#""he said \"hi\"""#);
        let token = catalog.lookup(TokenKind::Char, br"'\n'", 0, 0).unwrap();
        assert_eq!(token.text, r"'\n'");
    }

    #[test]
    fn test_custom_ctor_is_applied() {
        fn upper(kind: TokenKind, text: String, line: u32, column: u32) -> Token {
            Token::new(kind, text.to_ascii_uppercase(), line, column)
        }
        let catalog = TokenCatalog::builder()
            .register(LexRule::with_ctor(TokenKind::Identifier, r"[a-z]+", upper))
            .build();
        let token = catalog.lookup(TokenKind::Identifier, b"abc", 0, 0).unwrap();
        assert_eq!(token.text, "ABC");
    }
}
