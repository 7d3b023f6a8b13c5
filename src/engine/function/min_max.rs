use crate::{
    ast::{Environment, Expr, Mode},
    engine::evaluator::{EvalResult, evaluate},
};

/// Computes the minimum or maximum of two numeric values.
///
/// - If both evaluated arguments are exact integers, the result stays an
///   integer.
/// - Otherwise the comparison is performed on `f64` values.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`. If either argument stays non-numeric, a symbolic call is
/// rebuilt around the evaluated arguments.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Expr, Mode, engine::function::min_max::min_max};
///
/// let r = min_max("min",
///                 &[Expr::Integer(3), Expr::Integer(5)],
///                 Mode::Radians,
///                 &HashMap::new()).unwrap();
/// assert_eq!(r, Expr::Integer(3));
/// ```
pub fn min_max(name: &str, args: &[Expr], mode: Mode, variables: &Environment) -> EvalResult<Expr> {
    let left = evaluate(&args[0], mode, variables)?;
    let right = evaluate(&args[1], mode, variables)?;

    if let (Expr::Integer(a), Expr::Integer(b)) = (&left, &right) {
        let value = if name == "min" {
            std::cmp::min(*a, *b)
        } else {
            std::cmp::max(*a, *b)
        };
        return Ok(Expr::Integer(value));
    }

    match (left.as_float(), right.as_float()) {
        (Some(a), Some(b)) => {
            let value = if name == "min" { a.min(b) } else { a.max(b) };
            Ok(Expr::Float(value))
        },
        _ => Ok(Expr::Call { name: name.to_string(),
                             args: vec![left, right], }),
    }
}
