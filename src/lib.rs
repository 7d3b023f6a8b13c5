//! # symba
//!
//! symba is a symbolic expression engine written in Rust.
//! It parses infix arithmetic into an expression tree and evaluates that
//! tree against a variable environment, producing either a fully reduced
//! number (exact where possible, floating-point where not) or a partially
//! simplified symbolic expression. On top of plain arithmetic it offers
//! trigonometry with a selectable angular mode, bounded summation, and
//! structural symbolic differentiation.
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state, no
//! suspension. Front-ends (REPLs, plotters) live elsewhere and talk to it
//! through [`parse`] and [`evaluate`] alone.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

pub use num_rational::Rational64;

/// Defines the structure of parsed formulas.
///
/// This module declares the [`Expr`] enum that represents expressions as
/// immutable value trees, together with the [`Mode`] selector and the
/// [`Environment`] variable map consumed by evaluation.
///
/// # Responsibilities
/// - Defines the expression variants, numeric and symbolic.
/// - Maintains the rational canonical form (reduced, denominator positive).
/// - Renders the stable textual form via `Display`.
pub mod ast;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, shunting,
/// folding or evaluating expressions. Parse errors carry byte offsets into
/// the source; evaluation errors describe the failed operation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Supports integration with standard error handling traits.
/// - Wraps both kinds behind a single [`Error`] for the combined entry
///   point.
pub mod error;

/// Orchestrates the pipeline from text to result.
///
/// This module ties together the lexer, the shunting-yard converter, the RPN
/// folder, the operator table, the numeric kernel, the evaluator, the
/// builtin function library and the differentiator.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Exposes each stage for callers that want to observe intermediate forms.
/// - Manages the flow of data and errors between phases.
pub mod engine;

pub use ast::{Environment, Expr, Mode};
pub use engine::evaluator::evaluate as evaluate_expr;
pub use error::{Error, EvalError, ParseError};

/// Parses source text into an expression tree.
///
/// Runs the lexer, the shunting-yard conversion and the RPN fold. Nothing is
/// evaluated: `"1+2"` parses to a binary node, not to `3`.
///
/// # Errors
/// Returns a [`ParseError`] when the text does not lex or does not form a
/// single well-shaped expression.
///
/// # Examples
/// ```
/// use symba::parse;
///
/// let expr = parse("-3+4").unwrap();
/// assert_eq!(expr.to_string(), "(~3+4)");
///
/// assert!(parse("3+*4").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = engine::lexer::tokenize(source)?;
    let rpn = engine::shunter::shunt(&tokens)?;
    engine::builder::build(&rpn)
}

/// Parses and evaluates source text in one step.
///
/// Undefined variables are not errors: they stay in the result as symbolic
/// leaves, so `evaluate("x*2", ...)` with no binding for `x` succeeds and
/// returns a symbolic tree.
///
/// # Parameters
/// - `source`: The expression text.
/// - `mode`: Angular mode for the trig builtins ([`Mode::Radians`] is the
///   conventional default).
/// - `variables`: Name bindings; user bindings shadow the built-in `pi` and
///   `e`.
///
/// # Errors
/// Returns an [`Error`] wrapping whichever phase failed.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use symba::{Expr, Mode, evaluate};
///
/// let none = HashMap::new();
///
/// assert_eq!(evaluate("3+4*5", Mode::Radians, &none).unwrap(), Expr::Integer(23));
/// assert_eq!(evaluate("2/4", Mode::Radians, &none).unwrap().to_string(), "1/2");
/// assert_eq!(evaluate("5!", Mode::Radians, &none).unwrap(), Expr::Integer(120));
///
/// let mut vars = HashMap::new();
/// vars.insert("x".to_string(), Expr::Integer(3));
/// assert_eq!(evaluate("x*2", Mode::Radians, &vars).unwrap(), Expr::Integer(6));
/// ```
pub fn evaluate(source: &str, mode: Mode, variables: &Environment) -> Result<Expr, Error> {
    let expression = parse(source)?;
    Ok(engine::evaluator::evaluate(&expression, mode, variables)?)
}
