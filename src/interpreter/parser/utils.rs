use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, ParseState},
    },
};

/// Words that can never be used as a name in strict mode code.
///
/// `true`, `false` and `null` are lexed as literals and so are absent here.
pub const RESERVED_WORDS: &[&str] = &["await",
                                      "break",
                                      "case",
                                      "catch",
                                      "class",
                                      "const",
                                      "continue",
                                      "debugger",
                                      "default",
                                      "delete",
                                      "do",
                                      "else",
                                      "enum",
                                      "export",
                                      "extends",
                                      "finally",
                                      "for",
                                      "function",
                                      "if",
                                      "implements",
                                      "import",
                                      "in",
                                      "instanceof",
                                      "interface",
                                      "let",
                                      "new",
                                      "package",
                                      "private",
                                      "protected",
                                      "public",
                                      "return",
                                      "static",
                                      "super",
                                      "switch",
                                      "this",
                                      "throw",
                                      "try",
                                      "typeof",
                                      "var",
                                      "void",
                                      "while",
                                      "with",
                                      "yield"];

/// Names that strict mode forbids as assignment targets.
pub const STRICT_ASSIGNMENT_NAMES: &[&str] = &["eval", "arguments"];

/// Checks whether `name` is reserved and therefore not a valid reference.
///
/// # Example
/// ```
/// use isolit::interpreter::parser::utils::is_reserved_word;
///
/// assert!(is_reserved_word("function"));
/// assert!(is_reserved_word("this"));
/// assert!(!is_reserved_word("undefined"));
/// ```
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Consumes the closing delimiter `closing`, or reports what was found instead.
pub(in crate::interpreter::parser) fn expect_closing<'a, I>(tokens: &mut Peekable<I>,
                                                            closing: &Token,
                                                            delimiter: char,
                                                            state: &ParseState)
                                                            -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == closing => Ok(()),
        Some((tok, line)) => Err(SyntaxError::ExpectedClosing { delimiter,
                                                                found: tok.to_string(),
                                                                line: *line }),
        None => Err(state.end_of_input()),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list, and a
/// single trailing comma before the closing token is accepted.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)?`
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    state: &mut ParseState,
    parse_item: impl Fn(&mut Peekable<I>, &mut ParseState) -> ParseResult<T>,
    closing: &Token,
    delimiter: char)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    loop {
        if let Some((tok, _)) = tokens.peek()
           && tok == closing
        {
            tokens.next();
            return Ok(items);
        }
        items.push(parse_item(tokens, state)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => return Ok(items),
            Some((tok, line)) => {
                return Err(SyntaxError::ExpectedClosing { delimiter,
                                                          found: tok.to_string(),
                                                          line: *line });
            },
            None => return Err(state.end_of_input()),
        }
    }
}
