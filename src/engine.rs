/// Splits source text into tokens.
///
/// Defines the logos-derived `Token` enum and the `tokenize` entry point,
/// which also resolves unary minus and rejects malformed number residue.
pub mod lexer;

/// Converts infix token sequences to reverse-Polish order.
///
/// Classic shunting yard, extended with function markers and an
/// argument-count stack so calls of any arity (including zero) survive the
/// reordering.
pub mod shunter;

/// Folds reverse-Polish sequences into expression trees.
///
/// Validates function names and arities against the builtin table while
/// folding, so bad calls fail at parse time.
pub mod builder;

/// The canonical operator table.
///
/// One enum carrying symbol, precedence, associativity and arity, plus the
/// two evaluation strategies of each operator: the numeric kernel and the
/// symbolic rewrite.
pub mod operator;

/// Exact and floating-point arithmetic with promotion rules.
///
/// Integer and rational operands combine exactly; a float anywhere forces
/// `f64`. Also home to factorial and variant-preserving negation.
pub mod numeric;

/// Recursive tree evaluation with variable substitution.
///
/// The heart of the engine: numeric leaves pass through, variables resolve
/// against the environment (with `pi` and `e` as the base layer), operators
/// dispatch to their numeric or symbolic strategy, calls dispatch to the
/// builtin table.
pub mod evaluator;

/// Built-in functions.
///
/// The builtin table with arities, the call dispatcher, and one module per
/// handler family: trig (mode-aware), logarithms, min/max, float wrappers,
/// summation and differentiation.
pub mod function;

/// Structural symbolic differentiation.
pub mod derivative;
