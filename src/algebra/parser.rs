//! Recursive-descent parser for postulate expressions
//!
//! Grammar (loosest to tightest binding):
//! ```text
//! sum     := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary | power)*   -- bare `power` is implicit multiplication
//! unary   := '-' unary | power
//! power   := atom ('**' unary)?                   -- right associative
//! atom    := NUMBER | IDENT | '(' sum ')'
//! ```
//! Implicit multiplication binds like `*`: `M1 M2` is `M1*M2`, `2 r` is
//! `2*r`, and `M(r + 1)` is `M*(r + 1)`. Unknown identifiers parse as plain
//! symbols; whether they mean anything is decided during normalization.

use super::errors::{AlgebraError, AlgebraResult};
use super::expr::Expr;
use super::token::{tokenize, Token};

/// Parse an expression string into a tree
pub fn parse_expr(input: &str) -> AlgebraResult<Expr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_sum()?;
    match parser.peek() {
        None => Ok(expr),
        Some(tok) => Err(AlgebraError::UnexpectedToken(tok.describe())),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn parse_sum(&mut self) -> AlgebraResult<Expr> {
        let mut expr = self.parse_term()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Plus => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    expr = Expr::add(expr, rhs);
                }
                Token::Minus => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    expr = Expr::add(expr, Expr::neg(rhs));
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_term(&mut self) -> AlgebraResult<Expr> {
        let mut expr = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    expr = Expr::mul(expr, rhs);
                }
                Some(Token::Slash) => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    expr = Expr::div(expr, rhs);
                }
                // Adjacency: `M1 M2`, `2 r`, `M (r + 1)`
                Some(tok) if tok.starts_atom() => {
                    let rhs = self.parse_power()?;
                    expr = Expr::mul(expr, rhs);
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> AlgebraResult<Expr> {
        if let Some(Token::Minus) = self.peek() {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(Expr::neg(inner));
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> AlgebraResult<Expr> {
        let base = self.parse_atom()?;
        if let Some(Token::DoubleStar) = self.peek() {
            self.advance();
            // Right associative, and the exponent may carry a unary minus
            let exponent = self.parse_unary()?;
            return Ok(Expr::pow(base, exponent));
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> AlgebraResult<Expr> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Ident(name)) => Ok(Expr::Symbol(name)),
            Some(Token::LParen) => {
                let inner = self.parse_sum()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(tok) => Err(AlgebraError::UnexpectedToken(tok.describe())),
                    None => Err(AlgebraError::UnexpectedEnd),
                }
            }
            Some(tok) => Err(AlgebraError::UnexpectedToken(tok.describe())),
            None => Err(AlgebraError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_multiplication() {
        let explicit = parse_expr("M1*M2").unwrap();
        let implicit = parse_expr("M1 M2").unwrap();
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_implicit_multiplication_with_parens() {
        let explicit = parse_expr("M*(r + 1)").unwrap();
        let implicit = parse_expr("M (r + 1)").unwrap();
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_power_binds_tighter_than_product() {
        let a = parse_expr("M1*M2/r**2").unwrap();
        let b = parse_expr("M1*M2/(r**2)").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_power_is_right_associative() {
        let a = parse_expr("x**2**3").unwrap();
        let b = parse_expr("x**(2**3)").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unary_minus_in_exponent() {
        let a = parse_expr("r**-2").unwrap();
        let b = parse_expr("r**(-2)").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dangling_operator_fails() {
        assert!(matches!(parse_expr("m *"), Err(AlgebraError::UnexpectedEnd)));
    }

    #[test]
    fn test_unbalanced_paren_fails() {
        assert!(parse_expr("(m").is_err());
        assert!(parse_expr("m)").is_err());
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(parse_expr(""), Err(AlgebraError::UnexpectedEnd)));
        assert!(matches!(parse_expr("  "), Err(AlgebraError::UnexpectedEnd)));
    }
}
