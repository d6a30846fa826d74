use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            literal::{parse_array_literal, parse_object_literal},
            utils::{expect_closing, is_reserved_word, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix signs `-` and `+`. Signs are right-associative, so
/// `-+1` is parsed as `-(+1)`. A sign must be followed by something that can
/// produce a number: a number literal, another sign, a parenthesised group or
/// a name. Strings, booleans, `null`, arrays and objects after a sign are
/// rejected here.
///
/// In JSON mode only `-` is accepted, and only directly before a number.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary postfix*
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 state: &mut ParseState)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (op, line) = match tokens.peek() {
        Some((Token::Minus, line)) => (UnaryOperator::Negate, *line),
        Some((Token::Plus, line)) => {
            if state.is_json() {
                return Err(SyntaxError::NotAllowedInJson { construct: "A leading '+'",
                                                           line:      *line, });
            }
            (UnaryOperator::Plus, *line)
        },
        _ => {
            let primary = parse_primary(tokens, state)?;
            return parse_postfix(tokens, state, primary);
        },
    };
    tokens.next();

    match tokens.peek() {
        Some((Token::Number(_), _)) => {},
        Some((Token::Minus | Token::Plus | Token::LParen | Token::Identifier(_), _))
            if !state.is_json() => {},
        Some((Token::String(_)
              | Token::Bool(_)
              | Token::Null
              | Token::LBracket
              | Token::LBrace,
              _)) => {
            return Err(SyntaxError::SignOnNonNumber { sign: op.symbol(),
                                                      line });
        },
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                      line:  *line, });
        },
        None => return Err(state.end_of_input()),
    }

    state.enter(line)?;
    let operand = parse_unary(tokens, state);
    state.leave();

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(operand?),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, string, boolean and `null` literals
/// - array literals (`[ ... ]`)
/// - object literals (`{ ... }`)
/// - parenthesised expressions
/// - names
///
/// This function does not handle signs or postfix operators. It dispatches
/// to specialized parsing functions depending on the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "[" elements "]"
///              | "{" properties "}"
///              | "(" expression ")"
///              | identifier
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   state: &mut ParseState)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (tok, line) = *tokens.peek().ok_or_else(|| state.end_of_input())?;
    let line = *line;

    match tok {
        Token::Number(_) | Token::String(_) | Token::Bool(_) | Token::Null => {
            Ok(parse_literal(tokens, state))
        },
        Token::LBracket => parse_array_literal(tokens, state),
        Token::LBrace => parse_object_literal(tokens, state),
        Token::LParen if state.is_json() => {
            Err(SyntaxError::NotAllowedInJson { construct: "A parenthesised expression",
                                                line })
        },
        Token::LParen => parse_grouping(tokens, state),
        Token::Identifier(_) if state.is_json() => {
            Err(SyntaxError::NotAllowedInJson { construct: "An identifier",
                                                line })
        },
        Token::Identifier(name) if is_reserved_word(name) => {
            Err(SyntaxError::ReservedWord { name: name.clone(),
                                            line })
        },
        Token::Identifier(name) => {
            tokens.next();
            Ok(Expr::Variable { name: name.clone(),
                                line })
        },
        tok => Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                  line }),
    }
}

/// Parses a literal token into an [`Expr::Literal`].
///
/// The caller has already peeked one of the literal tokens.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>, state: &ParseState) -> Expr
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((tok, line)) = tokens.next() else {
        return Expr::Literal { value: LiteralValue::Null,
                               line:  state.end_line, };
    };
    let value = match tok {
        Token::Number(n) => LiteralValue::Number(*n),
        Token::String(s) => LiteralValue::String(s.clone()),
        Token::Bool(b) => LiteralValue::Bool(*b),
        _ => LiteralValue::Null,
    };
    Expr::Literal { value,
                    line: *line }
}

/// Parses a parenthesised expression, `( expression )`.
///
/// The group itself leaves no trace in the tree, so `(a) = 1` is a valid
/// assignment just like `a = 1`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens, state)?;
    expect_closing(tokens, &Token::RParen, ')', state)?;
    Ok(expr)
}

/// Parses postfix operators applied to an expression.
///
/// This function is called after parsing a primary expression and handles
/// three kinds of postfix constructs, any number of times:
///
/// 1. **Member access** `expr.name`, where `name` may be any identifier name,
///    including reserved words and `true`/`false`/`null`.
/// 2. **Index access** `expr[index]`.
/// 3. **Calls** `expr(arg, ...)`.
///
/// None of these can produce a value in an empty scope, but they must parse
/// so that `a.b` fails as a reference error rather than a syntax error. JSON
/// has no postfix operators, so in JSON mode the node is returned unchanged.
///
/// Every link of the chain nests the tree one level deeper and counts against
/// the nesting limit until the chain ends.
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "." name
///              | postfix "[" expression "]"
///              | postfix "(" arguments ")"
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>,
                        state: &mut ParseState,
                        node: Expr)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if state.is_json() {
        return Ok(node);
    }

    let mut links = 0;
    let result = parse_postfix_links(tokens, state, node, &mut links);
    for _ in 0..links {
        state.leave();
    }
    result
}

fn parse_postfix_links<'a, I>(tokens: &mut Peekable<I>,
                              state: &mut ParseState,
                              mut node: Expr,
                              links: &mut usize)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        if let Some((Token::Dot | Token::LBracket | Token::LParen, line)) = tokens.peek() {
            state.enter(*line)?;
            *links += 1;
        }

        match tokens.peek() {
            Some((Token::Dot, line)) => {
                let line = *line;
                tokens.next();
                let property = match tokens.next() {
                    Some((Token::Identifier(name), _)) => name.clone(),
                    Some((Token::Bool(b), _)) => b.to_string(),
                    Some((Token::Null, _)) => "null".to_string(),
                    Some((tok, line)) => {
                        return Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                                  line:  *line, });
                    },
                    None => return Err(state.end_of_input()),
                };
                node = Expr::Member { object: Box::new(node),
                                      property,
                                      line };
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                tokens.next();
                let index = parse_expression(tokens, state)?;
                expect_closing(tokens, &Token::RBracket, ']', state)?;
                node = Expr::Index { object: Box::new(node),
                                     index: Box::new(index),
                                     line };
            },
            Some((Token::LParen, line)) => {
                let line = *line;
                tokens.next();
                let arguments =
                    parse_comma_separated(tokens, state, parse_expression, &Token::RParen, ')')?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line };
            },
            _ => return Ok(node),
        }
    }
}
