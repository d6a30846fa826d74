use std::collections::HashMap;

use crate::{ast::Expr, error::Error, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Error`] describing the failure. Evaluation can fail with either kind:
/// reference errors for names, syntax-kind errors for constructs that parse
/// but fall outside the literal grammar.
pub type EvalResult<T> = Result<T, Error>;

/// Stores the evaluation context.
///
/// A context owns the scope names are resolved against. The only way to build
/// one is [`Context::isolated`], which starts with an empty scope, and no
/// method adds bindings, so evaluated text can never observe or modify
/// anything outside itself.
///
/// ## Usage
///
/// A fresh `Context` is created for each call to
/// [`crate::parse_expression`] and dropped afterwards.
#[derive(Debug, Default)]
pub struct Context {
    scope: HashMap<String, Value>,
}

impl Context {
    /// Creates a context with an empty scope.
    #[must_use]
    pub fn isolated() -> Self {
        Self { scope: HashMap::new(), }
    }

    /// Looks a name up in the scope.
    ///
    /// # Example
    /// ```
    /// use isolit::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::isolated();
    /// assert!(context.lookup("undefined").is_none());
    /// assert!(context.lookup("globalThis").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.scope.get(name)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, names, signs, arrays,
    /// objects, member and index access, calls and assignment. Children are
    /// evaluated left to right and the first failure is returned.
    ///
    /// # Example
    /// ```
    /// use isolit::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::isolated();
    /// let expr = Expr::ArrayLiteral { elements: vec![Expr::Literal { value: 1.0.into(),
    ///                                                                line:  1, }],
    ///                                 line:     1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::from(vec![Value::from(1)]));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements),
            Expr::ObjectLiteral { properties, .. } => self.eval_object_literal(properties),
            Expr::Member { object, line, .. } => self.eval_member(object, *line),
            Expr::Index { object, index, line } => self.eval_index(object, index, *line),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Expr::Assignment { target, value, line } => {
                self.eval_assignment(target, value, *line)
            },
        }
    }
}
