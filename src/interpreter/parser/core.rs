use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Grammar, Token},
        options::EvalOptions,
        parser::{unary::parse_unary, utils::STRICT_ASSIGNMENT_NAMES},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Mutable state threaded through the recursive descent.
///
/// Carries the grammar in force, the nesting limit and the current depth, and
/// the line of the last token so that end-of-input errors point somewhere
/// useful.
#[derive(Debug, Clone)]
pub struct ParseState {
    grammar:      Grammar,
    max_depth:    usize,
    depth:        usize,
    pub end_line: usize,
}

impl ParseState {
    /// Creates a fresh state for one parse.
    #[must_use]
    pub const fn new(options: &EvalOptions, end_line: usize) -> Self {
        Self { grammar: options.grammar,
               max_depth: options.max_depth,
               depth: 0,
               end_line }
    }

    /// Whether only strict JSON is accepted.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.grammar, Grammar::Json)
    }

    /// Enters one nesting level, failing once the limit is exceeded.
    pub(crate) const fn enter(&mut self, line: usize) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit: self.max_depth,
                                                     line });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one nesting level.
    pub(crate) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// The error to report when the token stream runs out.
    #[must_use]
    pub const fn end_of_input(&self) -> SyntaxError {
        SyntaxError::UnexpectedEndOfInput { line: self.end_line }
    }
}

/// Parses an entire token stream as exactly one expression.
///
/// This mirrors wrapping the text as `return (` + text + `)`: the stream must
/// hold one complete expression and nothing else. Empty input is an error.
///
/// # Errors
/// Returns a [`SyntaxError`] for malformed input or trailing tokens.
///
/// # Example
/// ```
/// use isolit::{
///     ast::{Expr, LiteralValue},
///     interpreter::{
///         lexer::{Grammar, tokenize},
///         options::EvalOptions,
///         parser::core::parse_source,
///     },
/// };
///
/// let tokens = tokenize("42", Grammar::Relaxed).unwrap();
/// let expr = parse_source(&tokens, &EvalOptions::default()).unwrap();
/// assert_eq!(expr,
///            Expr::Literal { value: LiteralValue::Number(42.0),
///                            line:  1, });
///
/// let tokens = tokenize("1 2", Grammar::Relaxed).unwrap();
/// assert!(parse_source(&tokens, &EvalOptions::default()).is_err());
/// ```
pub fn parse_source(tokens: &[(Token, usize)], options: &EvalOptions) -> ParseResult<Expr> {
    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut state = ParseState::new(options, end_line);
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter, &mut state)?;

    if let Some((tok, line)) = iter.next() {
        return Err(SyntaxError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                           line:  *line, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for every nested expression (array elements,
/// property values, groups, indices, arguments), so it is also where the
/// nesting depth is tracked.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               state: &mut ParseState)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(state.end_line, |(_, line)| *line);
    state.enter(line)?;
    let expr = parse_assignment(tokens, state);
    state.leave();
    expr
}

/// Parses an optional assignment.
///
/// Assignment is right-associative. The target must be a name, a member
/// expression or an index expression; `eval` and `arguments` are never valid
/// targets. JSON has no assignment, so in JSON mode a `=` is left for the
/// caller to reject as a trailing token.
///
/// Grammar: `assignment := unary ("=" assignment)?`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let target = parse_unary(tokens, state)?;

    if state.is_json() {
        return Ok(target);
    }

    let Some((Token::Equals, line)) = tokens.peek() else {
        return Ok(target);
    };
    let line = *line;
    tokens.next();

    match &target {
        Expr::Variable { name, .. } if STRICT_ASSIGNMENT_NAMES.contains(&name.as_str()) => {
            return Err(SyntaxError::StrictModeAssignment { name: name.clone(),
                                                           line });
        },
        Expr::Variable { .. } | Expr::Member { .. } | Expr::Index { .. } => {},
        _ => return Err(SyntaxError::InvalidAssignmentTarget { line }),
    }

    let value = parse_expression(tokens, state)?;

    Ok(Expr::Assignment { target: Box::new(target),
                          value: Box::new(value),
                          line })
}
