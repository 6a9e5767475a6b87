//! Tokenizer for the postulate expression grammar
//!
//! Recognized lexemes:
//! - identifiers: `[A-Za-z][A-Za-z0-9_]*`
//! - number literals: integers and decimals, read as exact rationals
//! - operators: `+ - * / **`
//! - parentheses
//!
//! Whitespace separates tokens but carries no meaning of its own; implicit
//! multiplication between adjacent atoms is handled by the parser.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::errors::{AlgebraError, AlgebraResult};

/// A single lexeme of the expression grammar
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Variable or constant name
    Ident(String),
    /// Exact rational number literal
    Number(BigRational),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `**`
    DoubleStar,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Short description used in parse error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(name) => name.clone(),
            Token::Number(n) => n.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::DoubleStar => "**".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }

    /// Whether this token can begin an atom (drives implicit multiplication)
    pub fn starts_atom(&self) -> bool {
        matches!(self, Token::Ident(_) | Token::Number(_) | Token::LParen)
    }
}

/// Tokenize an expression string
pub fn tokenize(input: &str) -> AlgebraResult<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::DoubleStar);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            c if c.is_ascii_digit() => {
                let (number, consumed) = read_number(&chars[i..])?;
                tokens.push(Token::Number(number));
                i += consumed;
            }
            other => {
                return Err(AlgebraError::UnexpectedChar { ch: other, pos: i });
            }
        }
    }

    Ok(tokens)
}

/// Read an integer or decimal literal as an exact rational
fn read_number(chars: &[char]) -> AlgebraResult<(BigRational, usize)> {
    let mut i = 0;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    let int_part: String = chars[..i].iter().collect();
    let mut numer: BigInt = int_part
        .parse()
        .map_err(|_| AlgebraError::MalformedNumber(int_part.clone()))?;
    let mut denom = BigInt::one();

    if chars.get(i) == Some(&'.') {
        i += 1;
        let frac_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            let literal: String = chars[..i].iter().collect();
            return Err(AlgebraError::MalformedNumber(literal));
        }
        for digit in &chars[frac_start..i] {
            // to_digit cannot fail: the loop above admitted ASCII digits only
            let d = digit.to_digit(10).unwrap_or(0);
            numer = numer * 10 + BigInt::from(d);
            denom *= 10;
        }
    }

    Ok((BigRational::new(numer, denom), i))
}
