use std::sync::OnceLock;

use crate::{
    ast::{Environment, Expr, Mode},
    engine::function,
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

static DEFAULT_VARIABLES: OnceLock<Environment> = OnceLock::new();

/// The built-in variable layer, shadowed by caller bindings: `pi` and `e`.
/// Built once per process.
fn default_variables() -> &'static Environment {
    DEFAULT_VARIABLES.get_or_init(|| {
                         let mut defaults = Environment::new();
                         defaults.insert("pi".to_string(), Expr::Float(std::f64::consts::PI));
                         defaults.insert("e".to_string(), Expr::Float(std::f64::consts::E));
                         defaults
                     })
}

/// Evaluates an expression tree against a variable environment, bottom-up.
///
/// The input tree is never mutated; a fresh tree is returned. Behaviors by
/// node kind:
/// - numeric leaves return as-is (a caller-supplied ratio is re-normalized,
///   so every returned ratio is reduced);
/// - a variable bound in `variables`, or failing that in the built-in layer
///   (`pi`, `e`), evaluates to its binding, recursively; an unbound variable
///   stays symbolic and is NOT an error;
/// - unary and binary nodes evaluate their children, then apply the
///   operator's numeric kernel when every child is numeric, and its symbolic
///   rewrite otherwise;
/// - calls dispatch to the named builtin with the original (un-evaluated)
///   argument list, the mode and the variable snapshot: each handler decides
///   whether and when to evaluate its arguments.
///
/// # Parameters
/// - `expr`: Expression tree to evaluate.
/// - `mode`: Angular mode, consulted by the trig builtins.
/// - `variables`: Caller bindings; must outlive the call, no deep copy is
///   taken beyond the shallow layering over the built-ins.
///
/// # Returns
/// A fully reduced numeric leaf, or a partially simplified symbolic tree.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Expr, Mode, engine::evaluator::evaluate};
///
/// let expr = symba::parse("x*2").unwrap();
///
/// let mut vars = HashMap::new();
/// vars.insert("x".to_string(), Expr::Integer(3));
///
/// assert_eq!(evaluate(&expr, Mode::Radians, &vars).unwrap(), Expr::Integer(6));
/// assert_eq!(evaluate(&expr, Mode::Radians, &HashMap::new()).unwrap().to_string(),
///            "(x*2)");
/// ```
pub fn evaluate(expr: &Expr, mode: Mode, variables: &Environment) -> EvalResult<Expr> {
    match expr {
        Expr::Integer(_) | Expr::Float(_) => Ok(expr.clone()),
        Expr::Ratio(r) => Ok(Expr::from_rational(*r)),

        Expr::Variable(name) => {
            if let Some(bound) = variables.get(name) {
                evaluate(bound, mode, variables)
            } else if let Some(bound) = default_variables().get(name) {
                evaluate(bound, mode, variables)
            } else {
                Ok(expr.clone())
            }
        },

        Expr::Unary { op, operand } => {
            let operand = evaluate(operand, mode, variables)?;
            if operand.is_numeric() {
                op.numeric_unary(&operand)
            } else {
                Ok(op.symbolic_unary(operand))
            }
        },

        Expr::Binary { left, op, right } => {
            let left = evaluate(left, mode, variables)?;
            let right = evaluate(right, mode, variables)?;
            if left.is_numeric() && right.is_numeric() {
                op.numeric_binary(&left, &right)
            } else {
                op.symbolic_binary(left, right)
            }
        },

        Expr::Call { name, args } => function::core::dispatch(name, args, mode, variables),
    }
}
