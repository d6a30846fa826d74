/// Core evaluation logic and context management.
///
/// Contains the isolated evaluation context and the dispatcher over
/// expression kinds.
pub mod core;

/// Per-node evaluation routines.
///
/// Provides the evaluation of literals, arrays, objects, signs, names, and
/// the postfix and assignment forms that can never succeed in an empty
/// scope.
pub mod utils;
