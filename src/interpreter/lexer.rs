use logos::{FilterResult, Logos};

use crate::{
    error::SyntaxError,
    util::{
        escape::{EscapeError, unescape},
        num::{format_number, parse_radix_digits},
    },
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the literal grammar; any other
/// character sequence is a lexical error.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Decimal number literals, such as `42`, `3.14`, `.5`, `5.` or `2.1e-10`.
    ///
    /// Integer parts never start with `0` unless they are exactly `0`. Legacy
    /// octal literals like `012`, and decimals with a leading zero like `08`,
    /// are lexical errors.
    #[regex(r"(0|[1-9][0-9]*)\.[0-9]*([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"(0|[1-9][0-9]*)([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_prefixed(lex, 16))]
    #[regex(r"0[oO][0-7]+", |lex| parse_prefixed(lex, 8))]
    #[regex(r"0[bB][01]+", |lex| parse_prefixed(lex, 2))]
    #[regex(r"0[0-9]+", reject_legacy_octal)]
    Number(f64),
    /// Double- or single-quoted string literals, with escapes resolved.
    #[regex(r#""([^"\\\r\n]|\\[^\r\n]|\\\r\n|\\[\r\n])*""#, parse_string)]
    #[regex(r"'([^'\\\r\n]|\\[^\r\n]|\\\r\n|\\[\r\n])*'", parse_string)]
    String(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// Identifier tokens, such as `x`, `$el` or `undefined`.
    #[regex(r"[\p{ID_Start}_$][\p{ID_Continue}$\u{200C}\u{200D}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r\u{2028}\u{2029}]*", skip_comment, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", skip_comment)]
    MultiLineComment,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-", check_minus)]
    Minus,

    /// Line terminators; they only advance the line counter.
    #[regex(r"\r\n|\n|\r|\u{2028}|\u{2029}", skip_newline)]
    NewLine,
    /// Spaces, tabs, feeds and other horizontal whitespace.
    #[regex(r"[ \t\u{0B}\u{0C}\u{A0}\u{FEFF}\p{Zs}]+", skip_whitespace)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Comment | Self::MultiLineComment => write!(f, "comment"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Colon => write!(f, "':'"),
            Self::Dot => write!(f, "'.'"),
            Self::Equals => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::NewLine => write!(f, "line break"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Errors the lexer can produce for a single token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token matches the input at this position.
    #[default]
    UnexpectedCharacter,
    /// A string literal contains a malformed escape sequence.
    InvalidEscape(String),
    /// A legacy octal escape, or a number with a leading zero.
    LegacyOctal,
    /// The token is only valid in relaxed mode.
    NotAllowedInJson(&'static str),
}

/// Which flavour of the literal grammar is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// JSON plus the literal extensions of the scripting language: comments,
    /// single quotes, trailing commas, unquoted keys, and so on.
    #[default]
    Relaxed,
    /// Strict JSON text as defined by RFC 8259.
    Json,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and the grammar in
/// force, which decides whether relaxed-only tokens are accepted.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:    usize,
    /// The grammar being lexed.
    pub grammar: Grammar,
}

impl LexerExtras {
    const fn json(&self) -> bool {
        matches!(self.grammar, Grammar::Json)
    }
}

/// Tokenizes the full source, pairing every token with its line number.
///
/// Comments and whitespace are dropped. In [`Grammar::Json`] mode any
/// relaxed-only token is reported as [`SyntaxError::NotAllowedInJson`].
///
/// # Errors
/// Returns the first lexical error as a [`SyntaxError`].
///
/// # Example
/// ```
/// use isolit::interpreter::lexer::{Grammar, Token, tokenize};
///
/// let tokens = tokenize("[1,\n'a']", Grammar::Relaxed).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LBracket, 1),
///                 (Token::Number(1.0), 1),
///                 (Token::Comma, 1),
///                 (Token::String("a".to_string()), 2),
///                 (Token::RBracket, 2)]);
///
/// assert!(tokenize("'a'", Grammar::Json).is_err());
/// ```
pub fn tokenize(source: &str, grammar: Grammar) -> Result<Vec<(Token, usize)>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1, grammar });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(err) => return Err(lex_error_to_syntax(err, lexer.slice(), line)),
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

fn lex_error_to_syntax(err: LexError, slice: &str, line: usize) -> SyntaxError {
    match err {
        LexError::InvalidEscape(sequence) => SyntaxError::InvalidEscape { sequence, line },
        LexError::LegacyOctal => SyntaxError::LegacyOctal { line },
        LexError::NotAllowedInJson(construct) => SyntaxError::NotAllowedInJson { construct, line },
        LexError::UnexpectedCharacter if slice.starts_with(['"', '\'']) => {
            SyntaxError::UnterminatedString { line }
        },
        LexError::UnexpectedCharacter if slice.starts_with("/*") => {
            SyntaxError::UnterminatedComment { line }
        },
        LexError::UnexpectedCharacter => SyntaxError::UnexpectedToken { token: slice.to_string(),
                                                                        line },
    }
}

fn count_line_terminators(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                count += 1;
            },
            '\n' | '\u{2028}' | '\u{2029}' => count += 1,
            _ => {},
        }
    }
    count
}

/// Parses a decimal literal from the current token slice.
///
/// Leading-dot and trailing-dot forms are relaxed-only.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let slice = lex.slice();
    if lex.extras.json() && (slice.starts_with('.') || slice.contains(".e") || slice.contains(".E")
                             || slice.ends_with('.'))
    {
        return Err(LexError::NotAllowedInJson("A number with a bare decimal point"));
    }
    slice.parse().map_err(|_| LexError::UnexpectedCharacter)
}

/// Parses a `0x`, `0o` or `0b` literal from the current token slice.
fn parse_prefixed(lex: &logos::Lexer<Token>, radix: u32) -> Result<f64, LexError> {
    if lex.extras.json() {
        return Err(LexError::NotAllowedInJson("A hexadecimal, octal or binary number"));
    }
    parse_radix_digits(&lex.slice()[2..], radix).ok_or(LexError::UnexpectedCharacter)
}

fn reject_legacy_octal(_lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::LegacyOctal)
}

/// In JSON the minus sign is part of the number, so it must be followed
/// directly by a digit.
fn check_minus(lex: &logos::Lexer<Token>) -> FilterResult<(), LexError> {
    if lex.extras.json() && !lex.remainder().starts_with(|c: char| c.is_ascii_digit()) {
        return FilterResult::Error(LexError::NotAllowedInJson("A '-' not directly followed by a digit"));
    }
    FilterResult::Emit(())
}

/// Decodes a quoted string literal from the current token slice.
fn parse_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexError> {
    let slice = lex.slice();
    let json = lex.extras.json();
    if json && slice.starts_with('\'') {
        return Err(LexError::NotAllowedInJson("A single-quoted string"));
    }

    let body = &slice[1..slice.len() - 1];
    let decoded = unescape(body, json).map_err(|e| match e {
                                          EscapeError::Invalid(seq) => LexError::InvalidEscape(seq),
                                          EscapeError::LegacyOctal => LexError::LegacyOctal,
                                          EscapeError::NotAllowedInJson(what) => {
                                              LexError::NotAllowedInJson(what)
                                          },
                                      })?;

    lex.extras.line += count_line_terminators(body);
    Ok(decoded)
}

fn skip_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexError> {
    if lex.extras.json() {
        return FilterResult::Error(LexError::NotAllowedInJson("A comment"));
    }
    lex.extras.line += count_line_terminators(lex.slice());
    FilterResult::Skip
}

fn skip_newline(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexError> {
    if lex.extras.json() && lex.slice().starts_with(['\u{2028}', '\u{2029}']) {
        return FilterResult::Error(LexError::NotAllowedInJson("A Unicode line separator"));
    }
    lex.extras.line += 1;
    FilterResult::Skip
}

fn skip_whitespace(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexError> {
    if lex.extras.json() && lex.slice().chars().any(|c| c != ' ' && c != '\t') {
        return FilterResult::Error(LexError::NotAllowedInJson("This whitespace character"));
    }
    FilterResult::Skip
}
