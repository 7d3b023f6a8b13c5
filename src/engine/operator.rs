use crate::{
    ast::Expr,
    engine::{evaluator::EvalResult, numeric},
    error::EvalError,
};

/// Operator associativity, as consulted by the shunting loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// Groups left to right (`a-b-c` is `(a-b)-c`).
    Left,
    /// Groups right to left (`a^b^c` is `a^(b^c)`).
    Right,
}

/// An operator of the canonical table.
///
/// Each variant carries its table entry (symbol, precedence, associativity,
/// arity) through const methods, and its two evaluation strategies: a numeric
/// kernel for fully numeric operands and a symbolic rewrite for everything
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Unary negation, written `~` (synthesized from a unary `-`).
    Neg,
    /// Postfix factorial `!`.
    Fact,
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Division `/`.
    Div,
    /// Exponentiation `^`.
    Pow,
}

impl Op {
    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Neg => '~',
            Self::Fact => '!',
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Fact => 6,
            Self::Neg => 5,
            Self::Pow => 4,
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 2,
        }
    }

    /// Grouping direction for equal precedence.
    #[must_use]
    pub const fn associativity(self) -> Assoc {
        match self {
            Self::Neg | Self::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    /// How many operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Neg | Self::Fact => 1,
            _ => 2,
        }
    }

    /// Numeric kernel for the unary operators. The operand must be numeric.
    pub fn numeric_unary(self, operand: &Expr) -> EvalResult<Expr> {
        match self {
            Self::Neg => numeric::negate(operand),
            Self::Fact => numeric::factorial(operand),
            _ => unreachable!(),
        }
    }

    /// Numeric kernel for the binary operators. Both operands must be
    /// numeric; promotion and exactness rules live in [`numeric`].
    pub fn numeric_binary(self, left: &Expr, right: &Expr) -> EvalResult<Expr> {
        numeric::binary(self, left, right)
    }

    /// Symbolic pass-through for the unary operators.
    ///
    /// Negation returns its operand unchanged (the negation stays attached
    /// through subtraction elsewhere), and so does factorial.
    #[must_use]
    pub fn symbolic_unary(self, operand: Expr) -> Expr {
        match self {
            Self::Neg | Self::Fact => operand,
            _ => unreachable!(),
        }
    }

    /// Symbolic rewrite for a binary node with at least one non-numeric
    /// operand.
    ///
    /// Applies at most one algebraic identity, first match wins, and
    /// otherwise rebuilds the node verbatim:
    ///
    /// | Op | Identities |
    /// |---|---|
    /// | `+` | `0+x = x`, `x+0 = x` |
    /// | `-` | `x-0 = x` |
    /// | `*` | `1*x = x`, `x*1 = x`, `0*x = 0`, `x*0 = 0` |
    /// | `/` | `x/1 = x`, `x/0` raises division by zero, `0/x = 0` |
    /// | `^` | `x^0 = 1`, `x^1 = x`, `0^x = 0`, `1^x = 1` |
    pub fn symbolic_binary(self, left: Expr, right: Expr) -> EvalResult<Expr> {
        match self {
            Self::Add => {
                if left.is_zero() {
                    return Ok(right);
                }
                if right.is_zero() {
                    return Ok(left);
                }
                Ok(Self::rebuild(left, self, right))
            },

            Self::Sub => {
                if right.is_zero() {
                    return Ok(left);
                }
                Ok(Self::rebuild(left, self, right))
            },

            Self::Mul => {
                if left.is_one() {
                    return Ok(right);
                }
                if right.is_one() {
                    return Ok(left);
                }
                if left.is_zero() || right.is_zero() {
                    return Ok(Expr::Integer(0));
                }
                Ok(Self::rebuild(left, self, right))
            },

            Self::Div => {
                if right.is_one() {
                    return Ok(left);
                }
                if right.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                if left.is_zero() {
                    return Ok(Expr::Integer(0));
                }
                Ok(Self::rebuild(left, self, right))
            },

            Self::Pow => {
                if right.is_zero() {
                    return Ok(Expr::Integer(1));
                }
                if right.is_one() {
                    return Ok(left);
                }
                if left.is_zero() {
                    return Ok(Expr::Integer(0));
                }
                if left.is_one() {
                    return Ok(Expr::Integer(1));
                }
                Ok(Self::rebuild(left, self, right))
            },

            Self::Neg | Self::Fact => unreachable!(),
        }
    }

    fn rebuild(left: Expr, op: Self, right: Expr) -> Expr {
        Expr::Binary { left:  Box::new(left),
                       op,
                       right: Box::new(right), }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
