use crate::{
    ast::{Environment, Expr, Mode},
    engine::{
        evaluator::EvalResult,
        function::{diff, log, min_max, sum, trig, wrappers},
    },
    error::EvalError,
};

/// Type alias for builtin function handlers.
///
/// A handler receives the ORIGINAL (un-evaluated) argument expressions, the
/// angular mode and the variable snapshot, and decides for itself whether and
/// when to evaluate the arguments.
pub type BuiltinFn = fn(&[Expr], Mode, &Environment) -> EvalResult<Expr>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of the listed argument counts.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    #[must_use]
    pub fn accepts(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(options) => options.contains(&n),
        }
    }
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (per-entry metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Metadata for one builtin function.
        pub struct BuiltinDef {
            /// The name callers use.
            pub name:  &'static str,
            /// The allowed argument counts.
            pub arity: Arity,
            /// The handler.
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "sin"   => { arity: Arity::Exact(1), func: |args, mode, vars| trig::direct("sin", f64::sin, args, mode, vars) },
    "cos"   => { arity: Arity::Exact(1), func: |args, mode, vars| trig::direct("cos", f64::cos, args, mode, vars) },
    "tan"   => { arity: Arity::Exact(1), func: |args, mode, vars| trig::direct("tan", f64::tan, args, mode, vars) },
    "asin"  => { arity: Arity::Exact(1), func: |args, mode, vars| trig::inverse("asin", f64::asin, args, mode, vars) },
    "acos"  => { arity: Arity::Exact(1), func: |args, mode, vars| trig::inverse("acos", f64::acos, args, mode, vars) },
    "atan"  => { arity: Arity::Exact(1), func: |args, mode, vars| trig::inverse("atan", f64::atan, args, mode, vars) },
    "atan2" => { arity: Arity::Exact(2), func: trig::atan2 },
    "ln"    => { arity: Arity::Exact(1), func: |args, mode, vars| wrappers::unary("ln", f64::ln, args, mode, vars) },
    "log"   => { arity: Arity::Exact(2), func: log::log },
    "min"   => { arity: Arity::Exact(2), func: |args, mode, vars| min_max::min_max("min", args, mode, vars) },
    "max"   => { arity: Arity::Exact(2), func: |args, mode, vars| min_max::min_max("max", args, mode, vars) },
    "sum"   => { arity: Arity::Exact(4), func: sum::sum },
    "diff"  => { arity: Arity::Exact(2), func: diff::diff },
    "sqrt"  => { arity: Arity::Exact(1), func: |args, mode, vars| wrappers::unary("sqrt", f64::sqrt, args, mode, vars) },
    "exp"   => { arity: Arity::Exact(1), func: |args, mode, vars| wrappers::unary("exp", f64::exp, args, mode, vars) },
    "abs"   => { arity: Arity::Exact(1), func: |args, mode, vars| wrappers::unary("abs", f64::abs, args, mode, vars) },
    "floor" => { arity: Arity::Exact(1), func: |args, mode, vars| wrappers::unary("floor", f64::floor, args, mode, vars) },
    "ceil"  => { arity: Arity::Exact(1), func: |args, mode, vars| wrappers::unary("ceil", f64::ceil, args, mode, vars) },
    "round" => { arity: Arity::Exact(1), func: |args, mode, vars| wrappers::unary("round", f64::round, args, mode, vars) },
}

/// Looks a builtin up by name.
///
/// The RPN folder uses this to validate call names and arities at parse
/// time.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Dispatches an evaluated call to its builtin handler.
///
/// Both failure modes here (an unknown name, an argument count outside the
/// declared arity) are already ruled out for trees produced by
/// [`crate::parse`]; they remain reachable for hand-built trees.
pub fn dispatch(name: &str,
                args: &[Expr],
                mode: Mode,
                variables: &Environment)
                -> EvalResult<Expr> {
    let Some(def) = lookup(name) else {
        return Err(EvalError::UnknownFunction { name: name.to_string() });
    };

    if !def.arity.accepts(args.len()) {
        return Err(EvalError::ArgumentType { details: format!("function '{name}' cannot take \
                                                               {} arguments",
                                                              args.len()) });
    }

    (def.func)(args, mode, variables)
}
