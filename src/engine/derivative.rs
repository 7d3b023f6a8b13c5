use crate::{
    ast::Expr,
    engine::{evaluator::EvalResult, operator::Op},
    error::EvalError,
};

/// Computes the formal derivative of an expression with respect to a
/// variable name.
///
/// Purely structural, pattern-directed rewriting; no simplification happens
/// here (the evaluator's identity rewrites take care of that afterwards).
/// Writing `D` for the derivative:
///
/// - `D(c) = 0` for any numeric leaf;
/// - `D(x) = 1` for the differentiation variable; any OTHER variable is
///   returned unchanged;
/// - `D(u+w) = D(u)+D(w)` and `D(u-w) = D(u)-D(w)`;
/// - `D(u*w) = u*D(w) + w*D(u)`;
/// - `D(u/w) = (w*D(u) - u*D(w)) / (w*w)`;
/// - `D(u^w) = w * u^(w-1)`; the exponent is treated as a constant, which
///   is exact for integer exponents and an approximation otherwise.
///
/// Unary operators and function calls have no rule and fail.
///
/// # Errors
/// [`EvalError::UnsupportedDifferentiation`] for nodes outside the rule set.
pub fn differentiate(expr: &Expr, variable: &str) -> EvalResult<Expr> {
    match expr {
        Expr::Integer(_) | Expr::Float(_) | Expr::Ratio(_) => Ok(Expr::Integer(0)),

        Expr::Variable(name) => Ok(if name == variable {
            Expr::Integer(1)
        } else {
            expr.clone()
        }),

        Expr::Binary { left, op, right } => match op {
            Op::Add | Op::Sub => Ok(binary(differentiate(left, variable)?,
                                           *op,
                                           differentiate(right, variable)?)),

            Op::Mul => {
                let du = differentiate(left, variable)?;
                let dw = differentiate(right, variable)?;
                Ok(binary(binary(left.as_ref().clone(), Op::Mul, dw),
                          Op::Add,
                          binary(right.as_ref().clone(), Op::Mul, du)))
            },

            Op::Div => {
                let du = differentiate(left, variable)?;
                let dw = differentiate(right, variable)?;
                let numerator = binary(binary(right.as_ref().clone(), Op::Mul, du),
                                       Op::Sub,
                                       binary(left.as_ref().clone(), Op::Mul, dw));
                let denominator = binary(right.as_ref().clone(), Op::Mul, right.as_ref().clone());
                Ok(binary(numerator, Op::Div, denominator))
            },

            Op::Pow => {
                let reduced = binary(right.as_ref().clone(), Op::Sub, Expr::Integer(1));
                Ok(binary(right.as_ref().clone(),
                          Op::Mul,
                          binary(left.as_ref().clone(), Op::Pow, reduced)))
            },

            Op::Neg | Op::Fact => Err(EvalError::UnsupportedDifferentiation),
        },

        Expr::Unary { .. } | Expr::Call { .. } => Err(EvalError::UnsupportedDifferentiation),
    }
}

fn binary(left: Expr, op: Op, right: Expr) -> Expr {
    Expr::Binary { left:  Box::new(left),
                   op,
                   right: Box::new(right), }
}
