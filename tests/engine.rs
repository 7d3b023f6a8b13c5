use std::collections::HashMap;

use num_rational::Rational64;
use symba::{Environment, Error, EvalError, Expr, Mode, ParseError, evaluate, parse};

fn eval(source: &str) -> Expr {
    evaluate(source, Mode::Radians, &HashMap::new()).unwrap_or_else(|e| {
                                                        panic!("`{source}` failed: {e}")
                                                    })
}

fn eval_with(source: &str, mode: Mode, variables: &Environment) -> Expr {
    evaluate(source, mode, variables).unwrap_or_else(|e| panic!("`{source}` failed: {e}"))
}

fn eval_err(source: &str) -> Error {
    match evaluate(source, Mode::Radians, &HashMap::new()) {
        Ok(v) => panic!("`{source}` succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_close(source: &str, expected: f64, tolerance: f64) {
    let result = eval(source);
    let Some(found) = result.as_float() else {
        panic!("`{source}` produced non-numeric {result}");
    };
    assert!((found - expected).abs() < tolerance,
            "`{source}`: expected {expected}, found {found}");
}

#[test]
fn integer_arithmetic_stays_exact() {
    assert_eq!(eval("3+4*5"), Expr::Integer(23));
    assert_eq!(eval("(3+4)*(2+3)"), Expr::Integer(35));
    assert_eq!(eval("10-2-3"), Expr::Integer(5));
    assert_eq!(eval("1+2*3-4"), Expr::Integer(3));
}

#[test]
fn unary_minus_parses_and_negates() {
    let expected = Expr::Binary { left:  Box::new(Expr::Unary { op:      symba::engine::operator::Op::Neg,
                                                                operand: Box::new(Expr::Integer(3)), }),
                                  op:    symba::engine::operator::Op::Add,
                                  right: Box::new(Expr::Integer(4)), };
    assert_eq!(parse("-3+4").unwrap(), expected);

    assert_eq!(eval("-3+4"), Expr::Integer(1));
    assert_eq!(eval("2--3"), Expr::Integer(5));
    assert_eq!(eval("2*-3"), Expr::Integer(-6));
    assert_eq!(eval("-(2+3)"), Expr::Integer(-5));
}

#[test]
fn rational_division_reduces() {
    assert_eq!(eval("2/4"), Expr::Ratio(Rational64::new(1, 2)));
    assert_eq!(eval("2/4").to_string(), "1/2");
    assert_eq!(eval("4/6"), Expr::Ratio(Rational64::new(2, 3)));
    assert_eq!(eval("4/2"), Expr::Integer(2));
    assert_eq!(eval("0/5"), Expr::Integer(0));
    assert_eq!(eval("1/3+1/6"), Expr::Ratio(Rational64::new(1, 2)));
}

#[test]
fn float_anywhere_makes_the_result_float() {
    assert_eq!(eval("2/4."), Expr::Float(0.5));
    assert_eq!(eval("2/4.").to_string(), "0.5");
    assert!(matches!(eval("1+2.0*3"), Expr::Float(_)));
    assert!(matches!(eval("1.5+1/2"), Expr::Float(_)));
}

#[test]
fn exponentiation_is_float_and_right_associative() {
    assert_eq!(eval("2^3"), Expr::Float(8.0));
    assert_eq!(eval("2^3^2"), Expr::Float(512.0));
    assert_eq!(eval("2+3*4^2"), Expr::Float(50.0));
}

#[test]
fn literal_forms() {
    assert_eq!(parse("123").unwrap(), Expr::Integer(123));
    assert_eq!(parse("123.456").unwrap(), Expr::Float(123.456));
    assert_eq!(parse("123.").unwrap(), Expr::Float(123.0));
    assert_eq!(parse(".5").unwrap(), Expr::Float(0.5));
    assert_eq!(parse("1e3").unwrap(), Expr::Float(1000.0));
    assert_eq!(parse("2.5e-1").unwrap(), Expr::Float(0.25));
    assert_eq!(parse("1E2").unwrap(), Expr::Float(100.0));
}

#[test]
fn factorial() {
    assert_eq!(eval("5!"), Expr::Integer(120));
    assert_eq!(eval("0!"), Expr::Integer(1));
    assert_eq!(eval("3!!"), Expr::Integer(720));
    assert_eq!(eval("5!-3"), Expr::Integer(117));
}

#[test]
fn factorial_domain_and_overflow() {
    assert!(matches!(eval_err("(-3)!"), Error::Eval(EvalError::FactorialDomain)));
    assert!(matches!(eval_err("2.5!"), Error::Eval(EvalError::FactorialDomain)));
    assert!(matches!(eval_err("(1/2)!"), Error::Eval(EvalError::FactorialDomain)));
    assert!(matches!(eval_err("21!"), Error::Eval(EvalError::Overflow)));
}

#[test]
fn division_by_zero() {
    assert!(matches!(eval_err("1/0"), Error::Eval(EvalError::DivisionByZero)));
    assert!(matches!(eval_err("x/0"), Error::Eval(EvalError::DivisionByZero)));

    // The float path follows IEEE-754 instead.
    assert_eq!(eval("1/0."), Expr::Float(f64::INFINITY));
}

#[test]
fn default_constants() {
    assert_close("pi*2", 2.0 * std::f64::consts::PI, 1e-12);
    assert_close("e", std::f64::consts::E, 1e-12);
}

#[test]
fn variables_substitute_recursively() {
    let mut vars = HashMap::new();
    vars.insert("x".to_string(), Expr::Integer(3));
    assert_eq!(eval_with("x*2", Mode::Radians, &vars), Expr::Integer(6));

    // A binding may be a whole tree mentioning other variables.
    vars.insert("y".to_string(), parse("x+1").unwrap());
    assert_eq!(eval_with("y*2", Mode::Radians, &vars), Expr::Integer(8));

    // User bindings shadow the built-in layer.
    vars.insert("pi".to_string(), Expr::Integer(3));
    assert_eq!(eval_with("pi*2", Mode::Radians, &vars), Expr::Integer(6));
}

#[test]
fn unbound_variables_stay_symbolic() {
    assert_eq!(eval("x*2").to_string(), "(x*2)");
    assert_eq!(eval("sin(x)").to_string(), "sin(x)");
    assert_eq!(eval("x+y-0").to_string(), "(x+y)");
}

#[test]
fn symbolic_identities() {
    assert_eq!(eval("0+x").to_string(), "x");
    assert_eq!(eval("x+0").to_string(), "x");
    assert_eq!(eval("x-0").to_string(), "x");
    assert_eq!(eval("1*x").to_string(), "x");
    assert_eq!(eval("x*1").to_string(), "x");
    assert_eq!(eval("0*x"), Expr::Integer(0));
    assert_eq!(eval("x*0"), Expr::Integer(0));
    assert_eq!(eval("x/1").to_string(), "x");
    assert_eq!(eval("0/x"), Expr::Integer(0));
    assert_eq!(eval("x^0"), Expr::Integer(1));
    assert_eq!(eval("x^1").to_string(), "x");
    assert_eq!(eval("0^x"), Expr::Integer(0));
    assert_eq!(eval("1^x"), Expr::Integer(1));

    // No identity applies: the node is rebuilt verbatim.
    assert_eq!(eval("x^2").to_string(), "(x^2)");
}

#[test]
fn symbolic_negation_passes_through() {
    // The symbolic rule for `~` returns its operand unchanged.
    assert_eq!(eval("~x").to_string(), "x");
    assert_eq!(eval("-x").to_string(), "x");
}

#[test]
fn trig_respects_the_angular_mode() {
    let none = HashMap::new();

    let Expr::Float(s) = eval_with("sin(90)", Mode::Degrees, &none) else {
        panic!("sin(90) was not a float");
    };
    assert!((s - 1.0).abs() < 1e-4);

    let Expr::Float(s) = eval_with("sin(pi/2)", Mode::Radians, &none) else {
        panic!("sin(pi/2) was not a float");
    };
    assert!((s - 1.0).abs() < 1e-12);

    let Expr::Float(c) = eval_with("cos(180)", Mode::Degrees, &none) else {
        panic!("cos(180) was not a float");
    };
    assert!((c + 1.0).abs() < 1e-12);
}

#[test]
fn arc_functions_scale_their_result() {
    let none = HashMap::new();

    let Expr::Float(a) = eval_with("asin(1)", Mode::Degrees, &none) else {
        panic!("asin(1) was not a float");
    };
    assert!((a - 90.0).abs() < 1e-12);

    let Expr::Float(a) = eval_with("asin(1)", Mode::Radians, &none) else {
        panic!("asin(1) was not a float");
    };
    assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    let Expr::Float(a) = eval_with("atan2(1, 1)", Mode::Degrees, &none) else {
        panic!("atan2(1, 1) was not a float");
    };
    assert!((a - 45.0).abs() < 1e-12);
}

#[test]
fn logarithms() {
    assert_close("ln(e)", 1.0, 1e-12);
    assert_close("log(2, 8)", 3.0, 1e-12);
    assert_close("log(10, 1000)", 3.0, 1e-12);
}

#[test]
fn min_max_and_wrappers() {
    assert_eq!(eval("min(3, 5)").as_float(), Some(3.0));
    assert_eq!(eval("max(3, 5)").as_float(), Some(5.0));
    assert_eq!(eval("min(1+2, 2*2)").as_float(), Some(3.0));
    assert_eq!(eval("max(min(3, 5), 4)").as_float(), Some(4.0));

    assert_eq!(eval("sqrt(9)"), Expr::Float(3.0));
    assert_eq!(eval("abs(0-7)"), Expr::Float(7.0));
    assert_eq!(eval("floor(3.7)"), Expr::Float(3.0));
    assert_eq!(eval("ceil(3.2)"), Expr::Float(4.0));
    assert_eq!(eval("round(3.5)"), Expr::Float(4.0));
    assert_close("exp(1)", std::f64::consts::E, 1e-12);

    // Non-numeric arguments rebuild symbolic calls.
    assert_eq!(eval("sqrt(x)").to_string(), "sqrt(x)");
    assert_eq!(eval("min(x, 3)").to_string(), "min(x,3)");
}

#[test]
fn summation() {
    assert_eq!(eval("sum(x^2,x,1,3)").as_float(), Some(14.0));
    assert_eq!(eval("sum(x,x,1,10)"), Expr::Integer(55));
    assert_eq!(eval("sum(2,x,1,4)"), Expr::Integer(8));

    // Inverted bounds run zero iterations.
    assert_eq!(eval("sum(x,x,5,1)"), Expr::Integer(0));

    // The iteration variable shadows an outer binding, and the shadow is
    // dropped again for the accumulator additions.
    let mut vars = HashMap::new();
    vars.insert("x".to_string(), Expr::Integer(100));
    assert_eq!(eval_with("sum(x,x,1,3)", Mode::Radians, &vars), Expr::Integer(6));
}

#[test]
fn summation_errors() {
    assert!(matches!(eval_err("sum(x,x,1.5,3)"),
                     Error::Eval(EvalError::SumBoundsNotInteger)));
    assert!(matches!(eval_err("sum(x,x,1,3.)"),
                     Error::Eval(EvalError::SumBoundsNotInteger)));
    assert!(matches!(eval_err("sum(x,3,1,3)"), Error::Eval(EvalError::ArgumentType { .. })));
}

#[test]
fn differentiation() {
    assert_eq!(eval("diff(x^3+2*x, x)").to_string(), "((3*(x^2))+2)");
    assert_eq!(eval("diff(x^2, x)").to_string(), "(2*x)");
    assert_eq!(eval("diff(7, x)"), Expr::Integer(0));
    assert_eq!(eval("diff(3.5, x)"), Expr::Integer(0));
    assert_eq!(eval("diff(x, x)"), Expr::Integer(1));

    // With the variable bound, the derivative evaluates all the way down
    // (through the float-only `^` kernel).
    let mut vars = HashMap::new();
    vars.insert("x".to_string(), Expr::Integer(5));
    assert_eq!(eval_with("diff(x^2, x)", Mode::Radians, &vars), Expr::Float(10.0));
}

#[test]
fn differentiation_errors() {
    assert!(matches!(eval_err("diff(x!, x)"),
                     Error::Eval(EvalError::UnsupportedDifferentiation)));
    assert!(matches!(eval_err("diff(sin(x), x)"),
                     Error::Eval(EvalError::UnsupportedDifferentiation)));
    assert!(matches!(eval_err("diff(x, 3)"), Error::Eval(EvalError::ArgumentType { .. })));
}

#[test]
fn lex_errors() {
    assert!(matches!(parse("3 @ 4").unwrap_err(),
                     ParseError::UnexpectedCharacter { found: '@', .. }));
    assert!(matches!(parse("1.2.3").unwrap_err(), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse("1..2").unwrap_err(), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse(".").unwrap_err(), ParseError::MalformedNumber { .. }));
}

#[test]
fn parse_errors() {
    assert!(matches!(parse("(3+4").unwrap_err(), ParseError::MismatchedParentheses { .. }));
    assert!(matches!(parse("3+4)").unwrap_err(), ParseError::MismatchedParentheses { .. }));
    assert!(matches!(parse("1, 2").unwrap_err(), ParseError::MismatchedParentheses { .. }));
    assert!(matches!(parse("3+*4").unwrap_err(), ParseError::StackUnderflow { .. }));
    assert!(matches!(parse("3 4").unwrap_err(), ParseError::UnbalancedStack));
    assert!(matches!(parse("").unwrap_err(), ParseError::UnbalancedStack));
    assert!(matches!(parse("foo(3)").unwrap_err(), ParseError::UnknownFunction { .. }));
    assert!(matches!(parse("sin(1, 2)").unwrap_err(),
                     ParseError::ArityMismatch { found: 2, .. }));
    assert!(matches!(parse("min()").unwrap_err(), ParseError::ArityMismatch { found: 0, .. }));
}

#[test]
fn numeric_results_round_trip_through_display() {
    for source in ["2/4", "3+4*5", "2^10", "1.5*4", "7/3", "-3+4", "5!"] {
        let first = eval(source);
        let second = eval(&first.to_string());
        assert_eq!(first.as_float(),
                   second.as_float(),
                   "`{source}` did not round-trip through `{first}`");
    }
}

#[test]
fn evaluation_leaves_the_input_tree_alone() {
    let tree = parse("x+0*y").unwrap();
    let before = tree.clone();
    let _simplified = symba::evaluate_expr(&tree, Mode::default(), &HashMap::new()).unwrap();
    assert_eq!(tree, before);
}
