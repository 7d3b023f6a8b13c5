use std::collections::HashMap;

use num_rational::Rational64;
use num_traits::{One, Zero};

use crate::engine::operator::Op;

/// Angular measurement selector for the trigonometric builtins.
///
/// The mode only influences the trig function wrappers and the recursive
/// evaluations performed by `sum` and `diff`; everywhere else it is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Angles are radians. The default.
    #[default]
    Radians = 0,
    /// Angles are degrees.
    Degrees = 1,
}

impl Mode {
    /// The factor that converts a trig ARGUMENT in this mode to radians.
    #[must_use]
    pub const fn radians_factor(self) -> f64 {
        match self {
            Self::Radians => 1.0,
            Self::Degrees => std::f64::consts::PI / 180.0,
        }
    }

    /// The factor that converts an arc-function RESULT in radians back to
    /// this mode.
    #[must_use]
    pub const fn inverse_factor(self) -> f64 {
        match self {
            Self::Radians => 1.0,
            Self::Degrees => 180.0 / std::f64::consts::PI,
        }
    }
}

/// A read-only variable environment: names bound to expression trees.
///
/// Bindings may be whole symbolic trees, not just numbers. User bindings
/// shadow the built-in layer (`pi`, `e`).
pub type Environment = HashMap<String, Expr>;

/// An immutable expression tree.
///
/// Produced by [`crate::parse`] and consumed (never mutated) by the
/// evaluator, which returns fresh trees. The numeric subset is
/// `Integer | Float | Ratio`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An exact 64-bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// An exact rational. Always reduced, denominator > 1, sign on the
    /// numerator; a rational with denominator 1 collapses to [`Expr::Integer`]
    /// through [`Expr::from_rational`].
    Ratio(Rational64),
    /// A free or bound variable, by name.
    Variable(String),
    /// A unary operation (`~x`, `x!`).
    Unary {
        /// The unary operator to apply.
        op:      Op,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    Op,
        /// Right operand.
        right: Box<Self>,
    },
    /// A function call such as `sin(x)` or `sum(x^2,x,1,10)`.
    Call {
        /// Name of the function being called.
        name: String,
        /// Arguments to the function, in source order.
        args: Vec<Self>,
    },
}

impl Expr {
    /// Builds the canonical expression for an exact rational: a reduced
    /// [`Expr::Ratio`], or an [`Expr::Integer`] when the denominator reduces
    /// to 1 (which includes every zero).
    ///
    /// # Example
    /// ```
    /// use num_rational::Rational64;
    /// use symba::Expr;
    ///
    /// assert_eq!(Expr::from_rational(Rational64::new(2, 4)),
    ///            Expr::Ratio(Rational64::new(1, 2)));
    /// assert_eq!(Expr::from_rational(Rational64::new(4, 2)), Expr::Integer(2));
    /// assert_eq!(Expr::from_rational(Rational64::new(0, 7)), Expr::Integer(0));
    /// ```
    #[must_use]
    pub fn from_rational(value: Rational64) -> Self {
        if *value.denom() == 1 {
            Self::Integer(*value.numer())
        } else {
            Self::Ratio(value)
        }
    }

    /// Whether this node carries a concrete number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_) | Self::Ratio(_))
    }

    /// Whether this node is an exact or floating-point zero.
    /// Non-numeric nodes are never zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(v) => *v == 0,
            Self::Float(v) => *v == 0.0,
            Self::Ratio(r) => r.is_zero(),
            _ => false,
        }
    }

    /// Whether this node is an exact or floating-point one.
    /// Non-numeric nodes are never one.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(v) => *v == 1,
            Self::Float(v) => *v == 1.0,
            Self::Ratio(r) => r.is_one(),
            _ => false,
        }
    }

    /// The numeric value of this node as an `f64`, or `None` for symbolic
    /// nodes.
    ///
    /// # Example
    /// ```
    /// use num_rational::Rational64;
    /// use symba::Expr;
    ///
    /// assert_eq!(Expr::Ratio(Rational64::new(1, 2)).as_float(), Some(0.5));
    /// assert_eq!(Expr::Variable("x".to_string()).as_float(), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Ratio(r) => Some(*r.numer() as f64 / *r.denom() as f64),
            _ => None,
        }
    }
}

impl std::fmt::Display for Expr {
    /// Renders the stable textual form: binary nodes always parenthesized,
    /// unary operators prefixed, ratios as `num/den`.
    ///
    /// # Example
    /// ```
    /// use symba::parse;
    ///
    /// let expr = parse("1+2*x").unwrap();
    /// assert_eq!(expr.to_string(), "(1+(2*x))");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Ratio(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Unary { op, operand } => write!(f, "{}{operand}", op.symbol()),
            Self::Binary { left, op, right } => write!(f, "({left}{}{right})", op.symbol()),
            Self::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}
