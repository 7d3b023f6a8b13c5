use crate::{
    ast::{Environment, Expr, Mode},
    engine::{
        evaluator::{EvalResult, evaluate},
        operator::Op,
    },
    error::EvalError,
};

/// Evaluates `sum(expr, ident, start, end)`.
///
/// The second argument must be a plain variable; the bounds must evaluate to
/// exact integers. For each `i` from `start` to `end` inclusive, the
/// iteration variable is bound to `Integer(i)` in a child environment that
/// shadows the outer one, `expr` is evaluated there, and the accumulator is
/// grown by evaluating `accumulator + value` against the OUTER environment.
/// An inverted range (`start > end`) runs zero iterations and yields the
/// untouched `Integer(0)` accumulator.
///
/// A symbolic term simply stays in the accumulator: `sum` over an unbound
/// expression returns a symbolic tree like any other partial evaluation.
///
/// # Errors
/// [`EvalError::ArgumentType`] when the iteration argument is not a
/// variable, [`EvalError::SumBoundsNotInteger`] for non-integer bounds.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Mode, engine::function::sum::sum, parse};
///
/// let call = parse("sum(x^2,x,1,3)").unwrap();
/// let symba::Expr::Call { args, .. } = call else { panic!() };
///
/// let r = sum(&args, Mode::Radians, &HashMap::new()).unwrap();
/// assert_eq!(r.as_float(), Some(14.0));
/// ```
pub fn sum(args: &[Expr], mode: Mode, variables: &Environment) -> EvalResult<Expr> {
    let Expr::Variable(name) = &args[1] else {
        return Err(EvalError::ArgumentType { details: "sum expects a variable as its second \
                                                       argument"
                                                      .to_string() });
    };

    let start = evaluate(&args[2], mode, variables)?;
    let end = evaluate(&args[3], mode, variables)?;
    let (Expr::Integer(start), Expr::Integer(end)) = (&start, &end) else {
        return Err(EvalError::SumBoundsNotInteger);
    };

    let mut accumulator = Expr::Integer(0);

    for i in *start..=*end {
        let mut inner = variables.clone();
        inner.insert(name.clone(), Expr::Integer(i));

        let value = evaluate(&args[0], mode, &inner)?;

        accumulator = evaluate(&Expr::Binary { left:  Box::new(accumulator),
                                               op:    Op::Add,
                                               right: Box::new(value), },
                               mode,
                               variables)?;
    }

    Ok(accumulator)
}
