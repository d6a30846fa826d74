use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant is a failure of the SyntaxError kind: the source text is not
/// a valid literal expression, so nothing is evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Found an unexpected token while parsing.
    #[error("SyntaxError on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("SyntaxError on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was not closed before the end of the line.
    #[error("SyntaxError on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `/*` comment was never closed.
    #[error("SyntaxError on line {line}: Unterminated comment.")]
    UnterminatedComment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A backslash escape inside a string literal is malformed.
    #[error("SyntaxError on line {line}: Invalid escape sequence '{sequence}'.")]
    InvalidEscape {
        /// The offending escape sequence.
        sequence: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Legacy octal literals (`012`), numbers with a leading zero (`08`) and
    /// octal escapes are not allowed in strict mode.
    #[error("SyntaxError on line {line}: Octal literals, leading zeros and octal escapes are not allowed in strict mode.")]
    LegacyOctal {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing delimiter was expected but not found.
    #[error("SyntaxError on line {line}: Expected '{delimiter}' but found {found}.")]
    ExpectedClosing {
        /// The delimiter that was expected.
        delimiter: char,
        /// A description of what was found instead.
        found:     String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Found extra tokens after the expression.
    #[error("SyntaxError on line {line}: Unexpected token after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A reserved word was used where an expression was expected.
    #[error("SyntaxError on line {line}: Unexpected reserved word '{name}'.")]
    ReservedWord {
        /// The reserved word.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of `=` cannot be assigned to.
    #[error("SyntaxError on line {line}: Invalid left-hand side in assignment.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `eval` and `arguments` cannot be assigned in strict mode.
    #[error("SyntaxError on line {line}: Unexpected eval or arguments in strict mode: '{name}'.")]
    StrictModeAssignment {
        /// The name that was assigned.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("SyntaxError on line {line}: Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured depth limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The construct is valid in relaxed mode but not in JSON mode.
    #[error("SyntaxError on line {line}: {construct} is not allowed in JSON.")]
    NotAllowedInJson {
        /// The rejected construct.
        construct: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The construct parses but would reach outside the literal grammar.
    #[error("SyntaxError on line {line}: {construct} is not supported in a literal expression.")]
    UnsupportedConstruct {
        /// The rejected construct.
        construct: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A unary sign was applied to something other than a number.
    #[error("SyntaxError on line {line}: Unary '{sign}' can only be applied to a number.")]
    SignOnNonNumber {
        /// The sign character, `+` or `-`.
        sign: char,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl SyntaxError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnterminatedString { line }
            | Self::UnterminatedComment { line }
            | Self::InvalidEscape { line, .. }
            | Self::LegacyOctal { line }
            | Self::ExpectedClosing { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::ReservedWord { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::StrictModeAssignment { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::NotAllowedInJson { line, .. }
            | Self::UnsupportedConstruct { line, .. }
            | Self::SignOnNonNumber { line, .. } => *line,
        }
    }
}
