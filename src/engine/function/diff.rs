use crate::{
    ast::{Environment, Expr, Mode},
    engine::{
        derivative::differentiate,
        evaluator::{EvalResult, evaluate},
    },
    error::EvalError,
};

/// Evaluates `diff(expr, ident)`: the formal derivative of `expr` with
/// respect to `ident`, simplified by a pass through the evaluator.
///
/// The second argument must be a plain variable.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Mode, engine::function::diff::diff, parse};
///
/// let call = parse("diff(x^3+2*x, x)").unwrap();
/// let symba::Expr::Call { args, .. } = call else { panic!() };
///
/// let r = diff(&args, Mode::Radians, &HashMap::new()).unwrap();
/// assert_eq!(r.to_string(), "((3*(x^2))+2)");
/// ```
pub fn diff(args: &[Expr], mode: Mode, variables: &Environment) -> EvalResult<Expr> {
    let Expr::Variable(name) = &args[1] else {
        return Err(EvalError::ArgumentType { details: "diff expects a variable as its second \
                                                       argument"
                                                      .to_string() });
    };

    let derivative = differentiate(&args[0], name)?;
    evaluate(&derivative, mode, variables)
}
