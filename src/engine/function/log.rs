use crate::{
    ast::{Environment, Expr, Mode},
    engine::evaluator::{EvalResult, evaluate},
};

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments, base first: `log(base, x) = ln(x) /
/// ln(base)`. Both are evaluated as `f64`; like every float division, a zero
/// `ln(base)` follows IEEE-754. Non-numeric arguments rebuild a symbolic
/// call.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Expr, Mode, engine::function::log::log};
///
/// let r = log(&[Expr::Integer(2), Expr::Integer(8)], Mode::Radians, &HashMap::new()).unwrap();
/// let Expr::Float(x) = r else { panic!() };
/// assert!((x - 3.0).abs() < 1e-12);
/// ```
pub fn log(args: &[Expr], mode: Mode, variables: &Environment) -> EvalResult<Expr> {
    let base = evaluate(&args[0], mode, variables)?;
    let value = evaluate(&args[1], mode, variables)?;

    match (base.as_float(), value.as_float()) {
        (Some(b), Some(x)) => Ok(Expr::Float(x.ln() / b.ln())),
        _ => Ok(Expr::Call { name: "log".to_string(),
                             args: vec![base, value], }),
    }
}
