use crate::{
    ast::{Environment, Expr, Mode},
    engine::evaluator::{EvalResult, evaluate},
};

/// Applies a single-argument `f64` function (`ln`, `sqrt`, `exp`, `abs`,
/// `floor`, `ceil`, `round`).
///
/// The argument is evaluated first. A numeric result is converted to `f64`
/// and the function's value returned as [`Expr::Float`]; a non-numeric
/// result rebuilds a symbolic call around the evaluated argument.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Expr, Mode, engine::function::wrappers::unary};
///
/// let r = unary("sqrt", f64::sqrt, &[Expr::Integer(9)], Mode::Radians, &HashMap::new()).unwrap();
/// assert_eq!(r, Expr::Float(3.0));
///
/// let s = unary("sqrt",
///               f64::sqrt,
///               &[Expr::Variable("x".to_string())],
///               Mode::Radians,
///               &HashMap::new()).unwrap();
/// assert_eq!(s.to_string(), "sqrt(x)");
/// ```
pub fn unary(name: &str,
             f: fn(f64) -> f64,
             args: &[Expr],
             mode: Mode,
             variables: &Environment)
             -> EvalResult<Expr> {
    let argument = evaluate(&args[0], mode, variables)?;

    match argument.as_float() {
        Some(x) => Ok(Expr::Float(f(x))),
        None => Ok(Expr::Call { name: name.to_string(),
                                args: vec![argument], }),
    }
}
