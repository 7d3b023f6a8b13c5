/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// expression tree. This covers lexing (unexpected characters, malformed
/// numbers), shunting (mismatched parentheses) and RPN folding (underflows,
/// unknown functions, arity mismatches).
pub mod parse_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression tree: exact division by zero, factorial domain violations,
/// summation bound checks, and differentiation of unsupported nodes.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Either kind of engine failure, as returned by [`crate::evaluate`].
///
/// Parsing and evaluation each have their own error enum; this wrapper is the
/// single failure channel for the combined parse-then-evaluate entry point.
pub enum Error {
    /// The source text did not parse.
    Parse(ParseError),
    /// The parsed tree did not evaluate.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
