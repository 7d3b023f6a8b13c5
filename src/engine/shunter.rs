use crate::{
    engine::{
        lexer::Token,
        operator::{Assoc, Op},
    },
    error::ParseError,
};

/// A token of the reverse-Polish sequence produced by [`shunt`].
///
/// Operands and operators come straight from the lexer tokens; the
/// [`RpnToken::Call`] variant is synthesized by the shunter once a call's
/// closing parenthesis fixes its argument count.
#[derive(Debug, PartialEq, Clone)]
pub enum RpnToken {
    /// An integer literal.
    Integer(i64),
    /// A floating-point literal.
    Float(f64),
    /// A variable name.
    Identifier(String),
    /// An operator, ready to pop its operands.
    Operator(Op),
    /// A function call with its captured argument count.
    Call {
        /// The function name.
        name: String,
        /// How many arguments the call supplied (possibly zero).
        argc: usize,
    },
}

/// What lives on the shunting stack between input and output.
enum StackItem {
    Operator(Op, usize),
    LParen(usize),
    Function {
        name:     String,
        /// Index of the marker's `(` in the token stream; used to recognize
        /// zero-argument calls by source adjacency.
        open:     usize,
        position: usize,
    },
}

/// Converts an infix token sequence to reverse-Polish order.
///
/// Classic shunting yard with two extensions: an identifier directly before
/// `(` becomes a function marker on the stack, and a parallel counter stack
/// captures each call's argument count (commas bump it; the closing
/// parenthesis adds one for the final argument, unless the call was
/// literally `name()` in the source).
///
/// # Errors
/// [`ParseError::MismatchedParentheses`] when parentheses or commas do not
/// pair up.
///
/// # Example
/// ```
/// use symba::engine::{lexer::tokenize, shunter::{RpnToken, shunt}};
///
/// let rpn = shunt(&tokenize("3+4*5").unwrap()).unwrap();
/// let kinds: Vec<RpnToken> = rpn.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds[0], RpnToken::Integer(3));
/// assert_eq!(kinds[4], RpnToken::Operator(symba::engine::operator::Op::Add));
/// ```
pub fn shunt(tokens: &[(Token, usize)]) -> Result<Vec<(RpnToken, usize)>, ParseError> {
    let mut output: Vec<(RpnToken, usize)> = Vec::new();
    let mut stack: Vec<StackItem> = Vec::new();
    let mut arg_counts: Vec<usize> = Vec::new();

    for (index, (token, position)) in tokens.iter().enumerate() {
        match token {
            Token::Integer(value) => output.push((RpnToken::Integer(*value), *position)),
            Token::Float(value) => output.push((RpnToken::Float(*value), *position)),
            Token::Identifier(name) => {
                output.push((RpnToken::Identifier(name.clone()), *position));
            },

            Token::Plus
            | Token::Minus
            | Token::Star
            | Token::Slash
            | Token::Caret
            | Token::Bang
            | Token::Tilde => {
                let op = match token {
                    Token::Plus => Op::Add,
                    Token::Minus => Op::Sub,
                    Token::Star => Op::Mul,
                    Token::Slash => Op::Div,
                    Token::Caret => Op::Pow,
                    Token::Bang => Op::Fact,
                    Token::Tilde => Op::Neg,
                    _ => unreachable!(),
                };

                while let Some(StackItem::Operator(top, _)) = stack.last() {
                    let pop = match op.associativity() {
                        Assoc::Left => op.precedence() <= top.precedence(),
                        Assoc::Right => op.precedence() < top.precedence(),
                    };
                    if !pop {
                        break;
                    }
                    if let Some(StackItem::Operator(top, top_position)) = stack.pop() {
                        output.push((RpnToken::Operator(top), top_position));
                    }
                }

                stack.push(StackItem::Operator(op, *position));
            },

            Token::LParen => {
                let after_identifier =
                    index > 0 && matches!(tokens[index - 1].0, Token::Identifier(_));

                if after_identifier {
                    match output.pop() {
                        Some((RpnToken::Identifier(name), _)) => {
                            stack.push(StackItem::Function { name,
                                                             open: index,
                                                             position: *position });
                            arg_counts.push(0);
                        },
                        _ => unreachable!(),
                    }
                } else {
                    stack.push(StackItem::LParen(*position));
                }
            },

            Token::Comma => {
                loop {
                    match stack.last() {
                        Some(StackItem::Function { .. }) => break,
                        Some(StackItem::Operator(..)) => {
                            if let Some(StackItem::Operator(top, top_position)) = stack.pop() {
                                output.push((RpnToken::Operator(top), top_position));
                            }
                        },
                        Some(StackItem::LParen(open_position)) => {
                            return Err(ParseError::MismatchedParentheses { position:
                                                                               *open_position });
                        },
                        None => {
                            return Err(ParseError::MismatchedParentheses { position: *position });
                        },
                    }
                }

                if let Some(count) = arg_counts.last_mut() {
                    *count += 1;
                }
            },

            Token::RParen => loop {
                match stack.pop() {
                    Some(StackItem::Operator(top, top_position)) => {
                        output.push((RpnToken::Operator(top), top_position));
                    },
                    Some(StackItem::LParen(_)) => break,
                    Some(StackItem::Function { name, open, .. }) => {
                        let counted = arg_counts.pop().unwrap_or(0);
                        let argc = if index == open + 1 { 0 } else { counted + 1 };
                        output.push((RpnToken::Call { name, argc }, *position));
                        break;
                    },
                    None => {
                        return Err(ParseError::MismatchedParentheses { position: *position });
                    },
                }
            },

            Token::Ignored => return Err(ParseError::UnknownOperator { position: *position }),
        }
    }

    while let Some(item) = stack.pop() {
        match item {
            StackItem::Operator(top, top_position) => {
                output.push((RpnToken::Operator(top), top_position));
            },
            StackItem::LParen(position) | StackItem::Function { position, .. } => {
                return Err(ParseError::MismatchedParentheses { position });
            },
        }
    }

    Ok(output)
}
