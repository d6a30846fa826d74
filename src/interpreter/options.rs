use crate::interpreter::lexer::Grammar;

/// Default limit on how deeply arrays, objects, groups and signs may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for one evaluation.
///
/// Options only restrict what is accepted; they never widen what the
/// evaluated text can reach.
///
/// # Example
/// ```
/// use isolit::{EvalOptions, Grammar, parse_expression_with};
///
/// let options = EvalOptions { grammar: Grammar::Json,
///                             ..EvalOptions::default() };
///
/// assert!(parse_expression_with(r#"{"a": [1, 2]}"#, &options).is_ok());
/// assert!(parse_expression_with("{a: [1, 2]}", &options).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    /// The accepted grammar.
    pub grammar:   Grammar,
    /// Maximum nesting depth before a syntax error is raised.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { grammar:   Grammar::default(),
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}
