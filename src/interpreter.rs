/// The evaluator module turns a parsed expression into a value.
///
/// The evaluator walks the AST inside an isolated context whose scope is
/// empty. Literals, arrays and objects produce values; anything that names a
/// binding fails with a reference error.
///
/// # Responsibilities
/// - Evaluates literal nodes into the runtime `Value` tree.
/// - Resolves names against the empty scope, reporting reference errors.
/// - Rejects member access and calls on literal values.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numbers, strings, keywords, identifiers and punctuators. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Decodes string escapes and numeric literals in every supported radix.
/// - Reports lexical errors, including strict mode and JSON-only violations.
pub mod lexer;
/// Evaluation options.
///
/// Holds the grammar selection and the nesting limit shared by the lexer and
/// parser.
pub mod options;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST for exactly one expression. Every syntax error is found here, so
/// nothing is evaluated unless the whole text is well formed.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with line information.
/// - Enforces the nesting limit and the JSON-only restrictions.
pub mod parser;
/// The value module defines the data produced by evaluation.
///
/// This module declares the `Value` tree (null, booleans, numbers, strings,
/// arrays and objects), the ordered `Object` map, and conversions to and from
/// `serde_json` values.
///
/// # Responsibilities
/// - Defines the `Value` enum and its accessors.
/// - Keeps object keys in literal order.
/// - Renders values as compact JSON text.
pub mod value;
