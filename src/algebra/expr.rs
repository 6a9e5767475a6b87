//! Symbolic expression tree
//!
//! The tree mirrors the postulate grammar directly: exact rational numbers,
//! named symbols, n-ary sums and products, and powers. Subtraction and
//! division are represented as a `-1` coefficient and a `-1` power
//! respectively, so every later stage only has to understand four node
//! kinds. Canonicalization into product form lives in `monomial`.

use std::collections::BTreeSet;
use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// A symbolic expression over named positive-real symbols
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Exact rational constant
    Number(BigRational),
    /// Named symbol (variable or fundamental constant)
    Symbol(String),
    /// Sum of two or more terms
    Add(Vec<Expr>),
    /// Product of two or more factors
    Mul(Vec<Expr>),
    /// Base raised to an exponent
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// A symbol by name
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    /// An integer constant
    pub fn int(value: i64) -> Self {
        Expr::Number(BigRational::from(BigInt::from(value)))
    }

    /// `base ** exponent`
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Expr::Pow(Box::new(base), Box::new(exponent))
    }

    /// `lhs * rhs`, flattening nested products
    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        let mut factors = Vec::new();
        for e in [lhs, rhs] {
            match e {
                Expr::Mul(inner) => factors.extend(inner),
                other => factors.push(other),
            }
        }
        Expr::Mul(factors)
    }

    /// `lhs / rhs`, kept as `lhs * rhs**(-1)`
    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Expr::mul(lhs, Expr::pow(rhs, Expr::int(-1)))
    }

    /// `lhs + rhs`, flattening nested sums
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        let mut terms = Vec::new();
        for e in [lhs, rhs] {
            match e {
                Expr::Add(inner) => terms.extend(inner),
                other => terms.push(other),
            }
        }
        Expr::Add(terms)
    }

    /// `-expr`, kept as `(-1) * expr`
    pub fn neg(expr: Expr) -> Self {
        Expr::mul(Expr::int(-1), expr)
    }

    /// Every symbol name appearing anywhere in the tree, in sorted order
    pub fn free_symbols(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Number(_) => {}
            Expr::Symbol(name) => {
                out.insert(name.clone());
            }
            Expr::Add(terms) => {
                for t in terms {
                    t.collect_symbols(out);
                }
            }
            Expr::Mul(factors) => {
                for f in factors {
                    f.collect_symbols(out);
                }
            }
            Expr::Pow(base, exp) => {
                base.collect_symbols(out);
                exp.collect_symbols(out);
            }
        }
    }
}

// Display reconstructs conventional notation: `a - b` instead of
// `a + (-1)*b`, `a/b` instead of `a*b**(-1)`. Used when echoing the parsed
// postulate back to the user.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", fmt_sum(self))
    }
}

fn fmt_number(n: &BigRational) -> String {
    if n.is_integer() {
        n.to_integer().to_string()
    } else {
        format!("{}/{}", n.numer(), n.denom())
    }
}

fn fmt_sum(expr: &Expr) -> String {
    let terms = match expr {
        Expr::Add(terms) => terms.clone(),
        other => vec![other.clone()],
    };

    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        let (negative, body) = fmt_signed_product(term);
        if i == 0 {
            if negative {
                out.push('-');
            }
        } else if negative {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&body);
    }
    out
}

/// Render a product term, pulling out a leading minus sign
fn fmt_signed_product(expr: &Expr) -> (bool, String) {
    let factors = match expr {
        Expr::Mul(factors) => factors.clone(),
        other => vec![other.clone()],
    };

    let mut coeff = BigRational::one();
    let mut numer: Vec<String> = Vec::new();
    let mut denom: Vec<String> = Vec::new();

    for factor in &factors {
        match factor {
            Expr::Number(n) => coeff *= n,
            Expr::Pow(base, exp) => {
                if let Expr::Number(n) = exp.as_ref() {
                    if n.is_negative() {
                        let inverted = -n.clone();
                        if inverted.is_one() {
                            denom.push(fmt_atom(base));
                        } else {
                            denom.push(format!("{}**{}", fmt_atom(base), fmt_exponent(&inverted)));
                        }
                        continue;
                    }
                }
                numer.push(fmt_power(factor));
            }
            other => numer.push(fmt_atom(other)),
        }
    }

    let negative = coeff.is_negative();
    let coeff = coeff.abs();

    if !coeff.numer().is_one() || numer.is_empty() {
        numer.insert(0, coeff.numer().to_string());
    }
    if !coeff.denom().is_one() {
        denom.insert(0, coeff.denom().to_string());
    }

    let mut body = numer.join("*");
    if !denom.is_empty() {
        if denom.len() == 1 {
            body.push_str(&format!("/{}", denom[0]));
        } else {
            body.push_str(&format!("/({})", denom.join("*")));
        }
    }
    (negative, body)
}

fn fmt_power(expr: &Expr) -> String {
    match expr {
        Expr::Pow(base, exp) => {
            let exp_str = match exp.as_ref() {
                Expr::Number(n) => fmt_exponent(n),
                other => format!("({})", fmt_sum(other)),
            };
            format!("{}**{}", fmt_atom(base), exp_str)
        }
        other => fmt_atom(other),
    }
}

fn fmt_exponent(n: &BigRational) -> String {
    if n.is_integer() && !n.is_negative() {
        n.to_integer().to_string()
    } else {
        format!("({})", fmt_number(n))
    }
}

/// Render with parentheses unless the node binds at least as tightly as a
/// power base must
fn fmt_atom(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => {
            if n.is_integer() && !n.is_negative() {
                n.to_integer().to_string()
            } else {
                format!("({})", fmt_number(n))
            }
        }
        Expr::Symbol(name) => name.clone(),
        Expr::Pow(_, _) => fmt_power(expr),
        other => format!("({})", fmt_sum(other)),
    }
}
