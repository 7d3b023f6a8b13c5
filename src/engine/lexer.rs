use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Floating-point literals, such as `3.14`, `.5`, `123.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),
    /// Integer literals, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifiers; variable or function names such as `x` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-` (rewritten to [`Token::Tilde`] where it is unary, see
    /// [`tokenize`])
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

/// Tokenizes source text into a sequence of tokens paired with their byte
/// offsets. Empty input yields an empty sequence.
///
/// Beyond the plain token split, this performs the two stateful jobs the
/// token definitions cannot:
/// - a `-` that cannot be infix (nothing operand-like precedes it) is
///   rewritten to the unary negation operator `~`;
/// - two numeric literals touching with no gap (the residue of malformed
///   numbers like `1.2.3`) are rejected. `3 4` is NOT rejected here; the
///   RPN fold refuses it later.
///
/// # Errors
/// [`ParseError::UnexpectedCharacter`] for a character no token starts with,
/// [`ParseError::MalformedNumber`] for number residue.
///
/// # Example
/// ```
/// use symba::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-3+4").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds,
///            vec![Token::Tilde, Token::Integer(3), Token::Plus, Token::Integer(4)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut previous_number_end: Option<usize> = None;

    while let Some(item) = lexer.next() {
        let span = lexer.span();
        match item {
            Ok(token) => {
                let is_number = matches!(token, Token::Integer(_) | Token::Float(_));
                if is_number && previous_number_end == Some(span.start) {
                    return Err(ParseError::MalformedNumber { position: span.start });
                }
                previous_number_end = is_number.then_some(span.end);
                tokens.push((token, span.start));
            },
            Err(()) => {
                let position = span.start;
                let found = lexer.slice().chars().next().unwrap_or('\0');
                return Err(if found.is_ascii_digit() || found == '.' {
                    ParseError::MalformedNumber { position }
                } else {
                    ParseError::UnexpectedCharacter { found, position }
                });
            },
        }
    }

    mark_unary_minus(&mut tokens);

    Ok(tokens)
}

/// Rewrites each `-` that is in unary position to `~`.
///
/// A minus is unary at the start of input and after any infix operator, `(`
/// or `,`; it is infix after an operand token (number, identifier, `)`).
/// The prefix `~` and postfix `!` leave the state untouched.
fn mark_unary_minus(tokens: &mut [(Token, usize)]) {
    let mut minus_is_unary = true;

    for (token, _) in tokens.iter_mut() {
        match token {
            Token::Minus => {
                if minus_is_unary {
                    *token = Token::Tilde;
                } else {
                    minus_is_unary = true;
                }
            },

            Token::Integer(_) | Token::Float(_) | Token::Identifier(_) | Token::RParen => {
                minus_is_unary = false;
            },

            Token::Plus
            | Token::Star
            | Token::Slash
            | Token::Caret
            | Token::LParen
            | Token::Comma => minus_is_unary = true,

            Token::Tilde | Token::Bang | Token::Ignored => {},
        }
    }
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
