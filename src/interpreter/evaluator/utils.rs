use crate::{
    ast::{Expr, LiteralValue, Property, PropertyKey, UnaryOperator},
    error::{ReferenceError, SyntaxError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, object::Object},
    },
};

impl Context {
    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value`. Literals never
    /// produce errors.
    ///
    /// # Example
    /// ```
    /// use isolit::{
    ///     ast::LiteralValue,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let value = Context::eval_literal(&"hi".into());
    /// assert_eq!(value, Value::from("hi"));
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        match value {
            LiteralValue::Null => Value::Null,
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::String(s) => Value::String(s.clone()),
        }
    }

    /// Looks up a variable by name.
    ///
    /// The scope is always empty, so this reports a `NotDefined` reference
    /// error for every name, including names that would be globals in a
    /// scripting host (`undefined`, `NaN`, `window`, ...).
    ///
    /// # Example
    /// ```
    /// use isolit::{error::Error, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::isolated();
    /// let err = context.eval_variable("undefined", 3).unwrap_err();
    /// assert!(matches!(err, Error::Reference(_)));
    /// assert_eq!(err.line(), 3);
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.lookup(name).cloned().ok_or_else(|| {
                                      ReferenceError::NotDefined { name: name.to_string(),
                                                                   line }.into()
                                  })
    }

    /// Evaluates a sign applied to a subexpression.
    ///
    /// The operand must evaluate to a number; `-` negates it and `+` returns
    /// it unchanged.
    pub fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        match self.eval(expr)? {
            Value::Number(n) => Ok(Value::Number(match op {
                                                     UnaryOperator::Negate => -n,
                                                     UnaryOperator::Plus => n,
                                                 })),
            _ => Err(SyntaxError::SignOnNonNumber { sign: op.symbol(),
                                                    line }.into()),
        }
    }

    /// Evaluates an array literal expression.
    ///
    /// Each element expression is evaluated in order and the resulting values
    /// are collected into a `Value::Array`.
    pub fn eval_array_literal(&self, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;

        Ok(Value::Array(values))
    }

    /// Evaluates an object literal expression.
    ///
    /// Properties are evaluated in source order, the key of each property
    /// before its value. Computed keys are converted with
    /// [`Value::to_property_key`]. A repeated key overwrites the earlier
    /// value.
    pub fn eval_object_literal(&self, properties: &[Property]) -> EvalResult<Value> {
        let mut object = Object::new();

        for property in properties {
            let key = match &property.key {
                PropertyKey::Static(key) => key.clone(),
                PropertyKey::Computed(expr) => self.eval(expr)?.to_property_key(),
            };
            let value = self.eval(&property.value)?;
            object.insert(key, value);
        }

        Ok(Value::Object(object))
    }

    /// Evaluates member access, `object.name`.
    ///
    /// The object is evaluated first, so a name as the base reports a
    /// reference error. Property access on a literal would expose host
    /// prototypes and is rejected.
    pub fn eval_member(&self, object: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(object)?;
        Err(SyntaxError::UnsupportedConstruct { construct: "Property access",
                                                line }.into())
    }

    /// Evaluates index access, `object[index]`.
    ///
    /// The object and then the index are evaluated before the access is
    /// rejected.
    pub fn eval_index(&self, object: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(object)?;
        self.eval(index)?;
        Err(SyntaxError::UnsupportedConstruct { construct: "Index access",
                                                line }.into())
    }

    /// Evaluates a call, `callee(arguments)`.
    ///
    /// The callee and then every argument are evaluated before the call is
    /// rejected. Nothing in the literal grammar is callable.
    pub fn eval_call(&self, callee: &Expr, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        self.eval(callee)?;
        for argument in arguments {
            self.eval(argument)?;
        }
        Err(SyntaxError::UnsupportedConstruct { construct: "A function call",
                                                line }.into())
    }

    /// Evaluates an assignment, `target = value`.
    ///
    /// Assignment never creates state. For a name target the right-hand side
    /// is evaluated and then the assignment fails with an
    /// `UndeclaredAssignment` reference error, since nothing is declared in
    /// the scope. For member and index targets the base is evaluated first,
    /// exactly as for a read.
    ///
    /// # Example
    /// ```
    /// use isolit::{
    ///     error::{Error, ReferenceError},
    ///     parse_expression,
    /// };
    ///
    /// let err = parse_expression("total = 1").unwrap_err();
    /// assert!(matches!(err,
    ///                  Error::Reference(ReferenceError::UndeclaredAssignment { .. })));
    /// ```
    pub fn eval_assignment(&self, target: &Expr, value: &Expr, line: usize) -> EvalResult<Value> {
        match target {
            Expr::Variable { name, .. } => {
                self.eval(value)?;
                Err(ReferenceError::UndeclaredAssignment { name: name.clone(),
                                                           line }.into())
            },
            Expr::Member { object, .. } => {
                self.eval(object)?;
                self.eval(value)?;
                Err(SyntaxError::UnsupportedConstruct { construct: "Property assignment",
                                                        line }.into())
            },
            Expr::Index { object, index, .. } => {
                self.eval(object)?;
                self.eval(index)?;
                self.eval(value)?;
                Err(SyntaxError::UnsupportedConstruct { construct: "Property assignment",
                                                        line }.into())
            },
            _ => Err(SyntaxError::InvalidAssignmentTarget { line }.into()),
        }
    }
}
