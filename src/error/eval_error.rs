#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression tree.
///
/// Note that an undefined variable is NOT an error: it stays in the result as
/// a symbolic leaf.
pub enum EvalError {
    /// Attempted exact rational division by zero.
    DivisionByZero,
    /// Factorial applied to something other than a non-negative integer.
    FactorialDomain,
    /// A summation bound did not evaluate to an exact integer.
    SumBoundsNotInteger,
    /// An argument had the wrong kind (for example `diff` without a variable).
    ArgumentType {
        /// Details about the expected and found kinds.
        details: String,
    },
    /// The differentiator met a node it has no rule for.
    UnsupportedDifferentiation,
    /// Exact integer arithmetic overflowed the machine word.
    Overflow,
    /// A hand-built tree called a function the engine does not know.
    UnknownFunction {
        /// The unknown name.
        name: String,
    },
    /// A numeric kernel received a non-numeric operand.
    ExpectedNumber,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::FactorialDomain => {
                write!(f, "Factorial is only defined for non-negative integers.")
            },

            Self::SumBoundsNotInteger => write!(f, "Summation bounds must be exact integers."),

            Self::ArgumentType { details } => write!(f, "Argument type error: {details}."),

            Self::UnsupportedDifferentiation => {
                write!(f, "Expression cannot be differentiated.")
            },

            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),

            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),

            Self::ExpectedNumber => write!(f, "Expected number."),
        }
    }
}

impl std::error::Error for EvalError {}
