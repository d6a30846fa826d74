use thiserror::Error;

/// Represents all errors raised while evaluating names.
///
/// The evaluation scope is always empty, so every name that survives parsing
/// ends up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// Tried to read a name that is not bound in the scope.
    #[error("ReferenceError on line {line}: {name} is not defined.")]
    NotDefined {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a name that was never declared.
    #[error("ReferenceError on line {line}: Assignment to undeclared variable '{name}'.")]
    UndeclaredAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ReferenceError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::NotDefined { line, .. } | Self::UndeclaredAssignment { line, .. } => *line,
        }
    }

    /// Returns the name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NotDefined { name, .. } | Self::UndeclaredAssignment { name, .. } => name,
        }
    }
}
