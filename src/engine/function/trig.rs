use crate::{
    ast::{Environment, Expr, Mode},
    engine::evaluator::{EvalResult, evaluate},
};

/// Applies a direct trigonometric function (`sin`, `cos`, `tan`).
///
/// The argument is evaluated first, then scaled by the mode's
/// radians-conversion factor (`π/180` in degrees mode, `1` in radians mode)
/// before the `f64` function runs. A non-numeric argument rebuilds a
/// symbolic call around the evaluated argument; the factor is NOT applied
/// to it.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Expr, Mode, engine::function::trig::direct};
///
/// let r = direct("sin", f64::sin, &[Expr::Integer(90)], Mode::Degrees, &HashMap::new()).unwrap();
/// let Expr::Float(x) = r else { panic!() };
/// assert!((x - 1.0).abs() < 1e-12);
/// ```
pub fn direct(name: &str,
              f: fn(f64) -> f64,
              args: &[Expr],
              mode: Mode,
              variables: &Environment)
              -> EvalResult<Expr> {
    let argument = evaluate(&args[0], mode, variables)?;

    match argument.as_float() {
        Some(x) => Ok(Expr::Float(f(x * mode.radians_factor()))),
        None => Ok(Expr::Call { name: name.to_string(),
                                args: vec![argument], }),
    }
}

/// Applies an arc function (`asin`, `acos`, `atan`).
///
/// The argument is evaluated as `f64`, the arc function runs in radians, and
/// the RESULT is scaled by the inverse factor (`180/π` in degrees mode). A
/// non-numeric argument rebuilds a symbolic call.
pub fn inverse(name: &str,
               f: fn(f64) -> f64,
               args: &[Expr],
               mode: Mode,
               variables: &Environment)
               -> EvalResult<Expr> {
    let argument = evaluate(&args[0], mode, variables)?;

    match argument.as_float() {
        Some(x) => Ok(Expr::Float(f(x) * mode.inverse_factor())),
        None => Ok(Expr::Call { name: name.to_string(),
                                args: vec![argument], }),
    }
}

/// Two-argument arctangent: `atan2(y, x)`, result scaled like the other arc
/// functions.
pub fn atan2(args: &[Expr], mode: Mode, variables: &Environment) -> EvalResult<Expr> {
    let y = evaluate(&args[0], mode, variables)?;
    let x = evaluate(&args[1], mode, variables)?;

    match (y.as_float(), x.as_float()) {
        (Some(y), Some(x)) => Ok(Expr::Float(y.atan2(x) * mode.inverse_factor())),
        _ => Ok(Expr::Call { name: "atan2".to_string(),
                             args: vec![y, x], }),
    }
}
