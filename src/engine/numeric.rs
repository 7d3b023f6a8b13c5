use num_rational::Rational64;
use num_traits::Zero;

use crate::{
    ast::Expr,
    engine::{evaluator::EvalResult, operator::Op},
    error::EvalError,
};

/// Applies a binary operator to two numeric operands.
///
/// Promotion rules for `+ - * /`:
/// - if either operand is a [`Expr::Float`], the operation is carried out in
///   `f64` (division by zero follows IEEE-754 and yields ±∞ or NaN);
/// - otherwise both operands are treated as exact rationals (an integer `n`
///   becomes `n/1`), the operation is exact, and the result is reduced
///   through [`Expr::from_rational`]. An exact zero divisor raises
///   [`EvalError::DivisionByZero`] before any ratio is built.
///
/// Exponentiation is always computed in `f64`: no attempt is made at exact
/// rational powers.
///
/// # Example
/// ```
/// use num_rational::Rational64;
/// use symba::{Expr, engine::{numeric, operator::Op}};
///
/// let half = numeric::binary(Op::Div, &Expr::Integer(2), &Expr::Integer(4)).unwrap();
/// assert_eq!(half, Expr::Ratio(Rational64::new(1, 2)));
///
/// let float = numeric::binary(Op::Div, &Expr::Integer(2), &Expr::Float(4.0)).unwrap();
/// assert_eq!(float, Expr::Float(0.5));
/// ```
pub fn binary(op: Op, left: &Expr, right: &Expr) -> EvalResult<Expr> {
    match op {
        Op::Pow => {
            let (l, r) = floats(left, right)?;
            Ok(Expr::Float(l.powf(r)))
        },

        Op::Add | Op::Sub | Op::Mul | Op::Div => {
            if matches!(left, Expr::Float(_)) || matches!(right, Expr::Float(_)) {
                let (l, r) = floats(left, right)?;
                Ok(Expr::Float(match op {
                                   Op::Add => l + r,
                                   Op::Sub => l - r,
                                   Op::Mul => l * r,
                                   Op::Div => l / r,
                                   _ => unreachable!(),
                               }))
            } else {
                let (l, r) = rationals(left, right)?;
                if op == Op::Div && r.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(Expr::from_rational(match op {
                                           Op::Add => l + r,
                                           Op::Sub => l - r,
                                           Op::Mul => l * r,
                                           Op::Div => l / r,
                                           _ => unreachable!(),
                                       }))
            }
        },

        Op::Neg | Op::Fact => unreachable!(),
    }
}

/// Negates a numeric operand, preserving its variant.
pub fn negate(operand: &Expr) -> EvalResult<Expr> {
    match operand {
        Expr::Integer(v) => v.checked_neg()
                             .map(Expr::Integer)
                             .ok_or(EvalError::Overflow),
        Expr::Float(v) => Ok(Expr::Float(-v)),
        Expr::Ratio(r) => Ok(Expr::from_rational(-*r)),
        _ => Err(EvalError::ExpectedNumber),
    }
}

/// Computes the factorial of a non-negative integer, iteratively.
///
/// Any other numeric operand (a float, a ratio, a negative integer) is a
/// domain error.
///
/// # Example
/// ```
/// use symba::{Expr, engine::numeric};
///
/// assert_eq!(numeric::factorial(&Expr::Integer(5)).unwrap(), Expr::Integer(120));
/// assert!(numeric::factorial(&Expr::Integer(-1)).is_err());
/// assert!(numeric::factorial(&Expr::Float(2.5)).is_err());
/// ```
pub fn factorial(operand: &Expr) -> EvalResult<Expr> {
    match operand {
        Expr::Integer(n) if *n >= 0 => {
            let mut acc: i64 = 1;
            for k in 2..=*n {
                acc = acc.checked_mul(k).ok_or(EvalError::Overflow)?;
            }
            Ok(Expr::Integer(acc))
        },
        Expr::Integer(_) | Expr::Float(_) | Expr::Ratio(_) => Err(EvalError::FactorialDomain),
        _ => Err(EvalError::ExpectedNumber),
    }
}

fn floats(left: &Expr, right: &Expr) -> EvalResult<(f64, f64)> {
    match (left.as_float(), right.as_float()) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(EvalError::ExpectedNumber),
    }
}

fn rationals(left: &Expr, right: &Expr) -> EvalResult<(Rational64, Rational64)> {
    Ok((as_rational(left)?, as_rational(right)?))
}

fn as_rational(operand: &Expr) -> EvalResult<Rational64> {
    match operand {
        Expr::Integer(v) => Ok(Rational64::from_integer(*v)),
        Expr::Ratio(r) => Ok(*r),
        _ => Err(EvalError::ExpectedNumber),
    }
}
