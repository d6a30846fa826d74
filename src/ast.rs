/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: numbers, strings, booleans and `null`. Signs in front of
/// numbers are not part of the literal; they are [`Expr::UnaryOp`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal.
    Null,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A numeric literal, always a double.
    Number(f64),
    /// A string literal with escapes already resolved.
    String(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A unary sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `+`
    Plus,
}

impl UnaryOperator {
    /// The source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Negate => '-',
            Self::Plus => '+',
        }
    }
}

/// The key of an object literal property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    /// A key known at parse time: an identifier name, a string, or a
    /// canonicalised number.
    Static(String),
    /// A computed key, `[expr]`.
    Computed(Box<Expr>),
}

/// One `key: value` entry of an object literal.
///
/// Shorthand properties (`{a}`) are desugared to `a: a` by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key.
    pub key:   PropertyKey,
    /// The property value expression.
    pub value: Expr,
    /// Line number in the source code.
    pub line:  usize,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the literal grammar (literals, arrays, objects, signs) plus
/// the handful of non-literal forms that must still be recognised so that
/// they fail with the right error kind: name references, member and index
/// access, calls and assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or null).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary sign applied to an operand.
    UnaryOp {
        /// The sign.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Array literal expression. Holes are stored as `null` literals.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Object literal expression.
    ObjectLiteral {
        /// Properties in source order.
        properties: Vec<Property>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Member access, `object.name`.
    Member {
        /// The object being accessed.
        object:   Box<Self>,
        /// The property name.
        property: String,
        /// Line number in the source code.
        line:     usize,
    },
    /// Index access, `object[index]`.
    Index {
        /// The object being indexed.
        object: Box<Self>,
        /// The index expression.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Function call, `callee(arguments)`.
    Call {
        /// The callee expression.
        callee:    Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Assignment, `target = value`.
    Assignment {
        /// The assignment target: a variable, member or index expression.
        target: Box<Self>,
        /// The assigned value.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use isolit::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::ObjectLiteral { line, .. }
            | Self::Member { line, .. }
            | Self::Index { line, .. }
            | Self::Call { line, .. }
            | Self::Assignment { line, .. } => *line,
        }
    }
}
