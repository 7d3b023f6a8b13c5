use crate::{
    ast::Expr,
    engine::{function, shunter::RpnToken},
    error::ParseError,
};

/// Folds a reverse-Polish token sequence into an expression tree.
///
/// Operands push onto a value stack; operators pop their arity and push the
/// combined node; call tokens pop their captured argument count. Call names
/// and argument counts are validated here, against the builtin table, so an
/// unknown function or a bad arity never reaches evaluation.
///
/// # Errors
/// [`ParseError::StackUnderflow`] when an operator or call lacks operands,
/// [`ParseError::UnknownFunction`] / [`ParseError::ArityMismatch`] for bad
/// calls, and [`ParseError::UnbalancedStack`] when the fold does not end on
/// exactly one value.
///
/// # Example
/// ```
/// use symba::engine::{builder::build, lexer::tokenize, shunter::shunt};
///
/// let expr = build(&shunt(&tokenize("2*x").unwrap()).unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "(2*x)");
/// ```
pub fn build(rpn: &[(RpnToken, usize)]) -> Result<Expr, ParseError> {
    let mut stack: Vec<Expr> = Vec::new();

    for (token, position) in rpn {
        match token {
            RpnToken::Integer(value) => stack.push(Expr::Integer(*value)),
            RpnToken::Float(value) => stack.push(Expr::Float(*value)),
            RpnToken::Identifier(name) => stack.push(Expr::Variable(name.clone())),

            RpnToken::Operator(op) => {
                if op.arity() == 2 {
                    let right = stack.pop()
                                     .ok_or(ParseError::StackUnderflow { position: *position })?;
                    let left = stack.pop()
                                    .ok_or(ParseError::StackUnderflow { position: *position })?;
                    stack.push(Expr::Binary { left:  Box::new(left),
                                              op:    *op,
                                              right: Box::new(right), });
                } else {
                    let operand = stack.pop()
                                       .ok_or(ParseError::StackUnderflow { position: *position })?;
                    stack.push(Expr::Unary { op:      *op,
                                             operand: Box::new(operand), });
                }
            },

            RpnToken::Call { name, argc } => {
                let def = function::core::lookup(name).ok_or_else(|| {
                              ParseError::UnknownFunction { name:     name.clone(),
                                                            position: *position, }
                          })?;

                if !def.arity.accepts(*argc) {
                    return Err(ParseError::ArityMismatch { name:     name.clone(),
                                                           found:    *argc,
                                                           position: *position, });
                }

                if stack.len() < *argc {
                    return Err(ParseError::StackUnderflow { position: *position });
                }
                let args = stack.split_off(stack.len() - argc);

                stack.push(Expr::Call { name: name.clone(),
                                        args });
            },
        }
    }

    if stack.len() == 1 {
        stack.pop().ok_or(ParseError::UnbalancedStack)
    } else {
        Err(ParseError::UnbalancedStack)
    }
}
