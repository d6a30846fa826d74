use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Property, PropertyKey},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            utils::{expect_closing, is_reserved_word},
        },
    },
    util::num::format_number,
};

/// Parses an array literal of the form `[ expr1, expr2, ..., exprN ]`.
///
/// Elements are parsed using [`parse_expression`] and collected into an
/// `Expr::ArrayLiteral` node. An empty array `[]` is accepted. In relaxed
/// mode a single trailing comma is ignored, and an elided element (a hole,
/// as in `[1,,2]`) becomes a `null` literal.
///
/// Grammar: `array := "[" (element? ",")* element? "]"`
///
/// # Errors
/// Returns a `SyntaxError` if an element fails to parse, the closing `]` is
/// missing, or (in JSON mode) a hole or trailing comma is found.
pub fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>,
                                  state: &mut ParseState)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LBracket, line)) => *line,
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                      line:  *line, });
        },
        None => return Err(state.end_of_input()),
    };

    let mut elements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBracket, _)) => {
                tokens.next();
                break;
            },
            Some((Token::Comma, hole_line)) => {
                if state.is_json() {
                    return Err(SyntaxError::NotAllowedInJson { construct: "An array hole",
                                                               line:      *hole_line, });
                }
                elements.push(Expr::Literal { value: LiteralValue::Null,
                                              line:  *hole_line, });
                tokens.next();
            },
            Some(_) => {
                elements.push(parse_expression(tokens, state)?);
                match tokens.next() {
                    Some((Token::Comma, comma_line)) => {
                        reject_trailing_comma(tokens, state, &Token::RBracket, *comma_line)?;
                    },
                    Some((Token::RBracket, _)) => break,
                    Some((tok, line)) => {
                        return Err(SyntaxError::ExpectedClosing { delimiter: ']',
                                                                  found:     tok.to_string(),
                                                                  line:      *line, });
                    },
                    None => return Err(state.end_of_input()),
                }
            },
            None => return Err(state.end_of_input()),
        }
    }

    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses an object literal of the form `{ key: value, ... }`.
///
/// Properties are parsed with [`parse_property`] and kept in source order;
/// duplicate keys are resolved during evaluation. An empty object `{}` is
/// accepted, and in relaxed mode a single trailing comma is ignored.
///
/// Grammar: `object := "{" (property ("," property)* ","?)? "}"`
///
/// # Errors
/// Returns a `SyntaxError` if a property fails to parse, the closing `}` is
/// missing, or (in JSON mode) a trailing comma is found.
pub fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>,
                                   state: &mut ParseState)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LBrace, line)) => *line,
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                      line:  *line, });
        },
        None => return Err(state.end_of_input()),
    };

    let mut properties = Vec::new();
    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }
        properties.push(parse_property(tokens, state)?);
        match tokens.next() {
            Some((Token::Comma, comma_line)) => {
                reject_trailing_comma(tokens, state, &Token::RBrace, *comma_line)?;
            },
            Some((Token::RBrace, _)) => break,
            Some((tok, line)) => {
                return Err(SyntaxError::ExpectedClosing { delimiter: '}',
                                                          found:     tok.to_string(),
                                                          line:      *line, });
            },
            None => return Err(state.end_of_input()),
        }
    }

    Ok(Expr::ObjectLiteral { properties, line })
}

/// Parses one property of an object literal.
///
/// Accepted key forms:
/// - string literals (the only form JSON allows),
/// - identifier names, including reserved words and `true`/`false`/`null`,
/// - number literals, canonicalised to their string form (`1.50` -> `"1.5"`),
/// - computed keys `[expression]`.
///
/// A bare identifier followed by `,` or `}` is a shorthand property and is
/// desugared to `name: name`.
///
/// Grammar:
/// ```text
///     property := key ":" expression
///               | identifier
///     key      := name | string | number | "[" expression "]"
/// ```
fn parse_property<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Property>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (tok, line) = tokens.next().ok_or_else(|| state.end_of_input())?;
    let line = *line;

    let key = match tok {
        Token::String(s) => PropertyKey::Static(s.clone()),
        _ if state.is_json() => {
            return Err(SyntaxError::NotAllowedInJson { construct: "A non-string property key",
                                                       line });
        },
        Token::Identifier(name) => {
            if let Some((Token::Comma | Token::RBrace, _)) = tokens.peek() {
                return shorthand_property(name, line);
            }
            PropertyKey::Static(name.clone())
        },
        Token::Number(n) => PropertyKey::Static(format_number(*n)),
        Token::Bool(b) => PropertyKey::Static(b.to_string()),
        Token::Null => PropertyKey::Static("null".to_string()),
        Token::LBracket => {
            let expr = parse_expression(tokens, state)?;
            expect_closing(tokens, &Token::RBracket, ']', state)?;
            PropertyKey::Computed(Box::new(expr))
        },
        tok => {
            return Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                      line });
        },
    };

    match tokens.next() {
        Some((Token::Colon, _)) => {},
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                      line:  *line, });
        },
        None => return Err(state.end_of_input()),
    }

    let value = parse_expression(tokens, state)?;

    Ok(Property { key,
                  value,
                  line })
}

/// Builds the `name: name` property for a shorthand `{ name }`.
fn shorthand_property(name: &str, line: usize) -> ParseResult<Property> {
    if is_reserved_word(name) {
        return Err(SyntaxError::ReservedWord { name: name.to_string(),
                                               line });
    }
    Ok(Property { key: PropertyKey::Static(name.to_string()),
                  value: Expr::Variable { name: name.to_string(),
                                          line },
                  line })
}

/// After a comma, rejects an immediately following `closing` in JSON mode.
fn reject_trailing_comma<'a, I>(tokens: &mut Peekable<I>,
                                state: &ParseState,
                                closing: &Token,
                                comma_line: usize)
                                -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if state.is_json()
       && let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        return Err(SyntaxError::NotAllowedInJson { construct: "A trailing comma",
                                                   line:      comma_line, });
    }
    Ok(())
}
