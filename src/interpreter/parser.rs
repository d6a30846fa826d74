/// Core parsing entry points.
///
/// Contains the parse state (grammar, depth limit), the whole-source entry
/// point, and the top of the precedence hierarchy: expressions and
/// assignment.
pub mod core;

/// Unary, primary and postfix parsing.
///
/// Handles signs, literals, identifiers, parenthesised groups, and the member,
/// index and call postfixes.
pub mod unary;

/// Array and object literal parsing.
///
/// Implements holes and trailing commas in arrays, and the key forms of
/// object literals: identifier names, strings, numbers, computed keys and
/// shorthand properties.
pub mod literal;

/// Utility functions for the parser.
///
/// Provides reserved word checks, delimiter expectations and shared list
/// parsing.
pub mod utils;
