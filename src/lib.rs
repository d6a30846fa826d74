//! # isolit
//!
//! isolit evaluates literal expressions (objects, arrays, strings, numbers,
//! booleans and `null`) written in JSON or in the relaxed object-literal
//! syntax of scripting languages, without ever handing the text to a
//! general-purpose code evaluator.
//!
//! The text is treated as one isolated expression: it is parsed in full, then
//! evaluated in a scope that holds no bindings. Naming anything, even a
//! well-known global, is a reference error, and assignment never creates
//! state.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a literal expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal, array, object and name nodes.
/// - Keeps the non-literal forms (member access, calls, assignment) that must
///   be recognised to report the right error kind.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the two failure kinds an evaluation can report:
/// syntax errors, raised before evaluation for malformed text, and reference
/// errors, raised during evaluation for names.
///
/// # Responsibilities
/// - Defines error enums for each phase.
/// - Attaches line numbers and detailed messages for context.
/// - Exposes the failure kind through [`error::Error::kind`].
pub mod error;
/// Orchestrates the lexing, parsing and evaluation of a literal expression.
///
/// This module ties together the lexer, parser, evaluator, options and value
/// types that make up the evaluation pipeline.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for number handling and string escapes.
///
/// These helpers are used by the lexer when reading literals and by the
/// value module when rendering them.
pub mod util;

pub use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        lexer::Grammar,
        options::{DEFAULT_MAX_DEPTH, EvalOptions},
        value::{core::Value, object::Object},
    },
};
use crate::interpreter::{
    evaluator::core::Context, lexer::tokenize, parser::core::parse_source,
};

/// Evaluates `text` as a single literal expression in an isolated scope.
///
/// The relaxed grammar is accepted: JSON plus comments, single-quoted
/// strings, unquoted and numeric keys, trailing commas, array holes, and
/// hexadecimal, octal and binary numbers.
///
/// # Errors
/// Returns an error of kind [`ErrorKind::Syntax`] if the text is not a valid
/// literal expression, or of kind [`ErrorKind::Reference`] if it names
/// anything.
///
/// # Examples
/// ```
/// use isolit::{ErrorKind, Value, parse_expression};
///
/// let value = parse_expression(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
/// assert_eq!(value.to_string(), r#"{"a":1,"b":[1,2,3]}"#);
///
/// assert_eq!(parse_expression("42").unwrap(), Value::from(42));
/// assert_eq!(parse_expression("true").unwrap(), Value::from(true));
///
/// let err = parse_expression("not valid js").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
///
/// let err = parse_expression("{ secret: process }").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Reference);
/// ```
pub fn parse_expression(text: &str) -> Result<Value, Error> {
    parse_expression_with(text, &EvalOptions::default())
}

/// Evaluates `text` as a single literal expression with explicit options.
///
/// # Errors
/// Same as [`parse_expression`]. With [`Grammar::Json`], every relaxed-only
/// construct is a syntax error.
pub fn parse_expression_with(text: &str, options: &EvalOptions) -> Result<Value, Error> {
    tracing::debug!(len = text.len(), grammar = ?options.grammar, "evaluating literal expression");

    let result = tokenize(text, options.grammar).and_then(|tokens| parse_source(&tokens, options))
                                                .map_err(Error::from)
                                                .and_then(|expr| Context::isolated().eval(&expr));

    if let Err(e) = &result {
        tracing::debug!(kind = ?e.kind(), line = e.line(), "evaluation failed");
    }
    result
}
