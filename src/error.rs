use thiserror::Error;

/// Syntax errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Syntax errors include malformed literals, unexpected tokens, strict
/// mode violations, and constructs rejected by the selected grammar. They are
/// always detected before evaluation begins.
pub mod syntax_error;
/// Reference errors.
///
/// Contains the error types raised during evaluation when the expression
/// names something. The evaluation scope is empty, so any read of, or
/// assignment to, a name fails here.
pub mod reference_error;

pub use reference_error::ReferenceError;
pub use syntax_error::SyntaxError;

/// The two failure kinds an evaluation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text is not a valid literal expression.
    Syntax,
    /// The text references a name that is not defined in the isolated scope.
    Reference,
}

/// Any failure produced by [`crate::parse_expression`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl Error {
    /// Returns which kind of failure this is.
    ///
    /// # Example
    /// ```
    /// use isolit::{error::ErrorKind, parse_expression};
    ///
    /// let err = parse_expression("not valid js").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    ///
    /// let err = parse_expression("window").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Reference);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Reference(_) => ErrorKind::Reference,
        }
    }

    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Syntax(e) => e.line(),
            Self::Reference(e) => e.line(),
        }
    }
}
