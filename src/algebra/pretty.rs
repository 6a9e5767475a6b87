//! Deterministic rendering of canonical forms
//!
//! Two output shapes:
//! - one-line notation (`k*G*M1*M2/r**2`) used for final laws and sums, and
//! - a two-dimensional fraction layout used for the dimensionless equation,
//!   with the numerator stacked over a rule above the denominator.
//!
//! Factors are ordered case-insensitively (then by exact name) so identical
//! inputs always render identically. Half-integer exponents are grouped
//! under a single `sqrt(...)`; other fractional exponents render as
//! `name**(p/q)`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

use super::monomial::{Monomial, Polynomial};

/// Numerator and optional denominator of a rendered monomial
struct FracParts {
    negative: bool,
    numer: String,
    denom: Option<String>,
}

/// Factors sorted case-insensitively, ties broken by exact name
fn sorted_factors(m: &Monomial) -> Vec<(&String, &BigRational)> {
    let mut factors: Vec<(&String, &BigRational)> = m.factors.iter().collect();
    factors.sort_by_key(|(name, _)| (name.to_lowercase(), (*name).clone()));
    factors
}

/// `name**exp` with `exp` already positive
fn fmt_factor(name: &str, exp: &BigRational) -> String {
    if exp.is_one() {
        name.to_string()
    } else if exp.is_integer() {
        format!("{}**{}", name, exp.to_integer())
    } else {
        format!("{}**({}/{})", name, exp.numer(), exp.denom())
    }
}

/// Join product parts, parenthesizing a multi-factor denominator
fn join_quotient(numer: &[String], denom: &[String]) -> (String, Option<String>) {
    let top = if numer.is_empty() {
        "1".to_string()
    } else {
        numer.join("*")
    };
    let bottom = match denom.len() {
        0 => None,
        1 => Some(denom[0].clone()),
        _ => Some(format!("({})", denom.join("*"))),
    };
    (top, bottom)
}

fn split_monomial(m: &Monomial) -> FracParts {
    let mut numer: Vec<String> = Vec::new();
    let mut denom: Vec<String> = Vec::new();
    let mut sqrt_numer: Vec<String> = Vec::new();
    let mut sqrt_denom: Vec<String> = Vec::new();

    let coeff = m.coeff.abs();
    if !coeff.numer().is_one() {
        numer.push(coeff.numer().to_string());
    }
    if !coeff.denom().is_one() {
        denom.push(coeff.denom().to_string());
    }

    for (name, exp) in sorted_factors(m) {
        let positive = !exp.is_negative();
        let magnitude = exp.abs();
        if *magnitude.denom() == BigInt::from(2) {
            // Half-integer exponent: name**(p/2) joins the sqrt group as
            // name**p
            let doubled = &magnitude * BigRational::from(BigInt::from(2));
            let rendered = fmt_factor(name, &doubled);
            if positive {
                sqrt_numer.push(rendered);
            } else {
                sqrt_denom.push(rendered);
            }
        } else {
            let rendered = fmt_factor(name, &magnitude);
            if positive {
                numer.push(rendered);
            } else {
                denom.push(rendered);
            }
        }
    }

    // The sqrt group sits on the side carrying more of its content
    if !sqrt_numer.is_empty() || !sqrt_denom.is_empty() {
        if sqrt_denom.len() > sqrt_numer.len() {
            let (top, bottom) = join_quotient(&sqrt_denom, &sqrt_numer);
            let content = match bottom {
                Some(b) => format!("{}/{}", top, b),
                None => top,
            };
            denom.push(format!("sqrt({})", content));
        } else {
            let (top, bottom) = join_quotient(&sqrt_numer, &sqrt_denom);
            let content = match bottom {
                Some(b) => format!("{}/{}", top, b),
                None => top,
            };
            numer.push(format!("sqrt({})", content));
        }
    }

    let (top, bottom) = join_quotient(&numer, &denom);
    FracParts {
        negative: m.coeff.is_negative(),
        numer: top,
        denom: bottom,
    }
}

/// One-line rendering of a monomial
pub fn oneline_monomial(m: &Monomial) -> String {
    let parts = split_monomial(m);
    let mut out = String::new();
    if parts.negative {
        out.push('-');
    }
    out.push_str(&parts.numer);
    if let Some(denom) = parts.denom {
        out.push('/');
        out.push_str(&denom);
    }
    out
}

/// One-line rendering of a polynomial as ` + ` / ` - ` separated terms
pub fn oneline_polynomial(p: &Polynomial) -> String {
    if p.terms.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, term) in p.terms.iter().enumerate() {
        let rendered = oneline_monomial(term);
        if i == 0 {
            out.push_str(&rendered);
        } else if let Some(stripped) = rendered.strip_prefix('-') {
            out.push_str(" - ");
            out.push_str(stripped);
        } else {
            out.push_str(" + ");
            out.push_str(&rendered);
        }
    }
    out
}

/// The final law line: `target = k*<law>`
///
/// The undetermined prefactor always leads; a multi-term law is grouped so
/// `k` scales the whole sum.
pub fn law_line(target: &str, law: &Polynomial) -> String {
    let body = match law.terms.as_slice() {
        [] => "0".to_string(),
        [term] => {
            let rendered = oneline_monomial(term);
            if rendered == "1" {
                "k".to_string()
            } else if let Some(stripped) = rendered.strip_prefix('-') {
                format!("-k*{}", stripped)
            } else {
                format!("k*{}", rendered)
            }
        }
        _ => format!("k*({})", oneline_polynomial(law)),
    };
    format!("{} = {}", target, body)
}

/// Rendered lines for one side of an equation, with the index of the line
/// the `=` sign aligns to
struct SideLayout {
    lines: Vec<String>,
    baseline: usize,
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

fn monomial_layout(m: &Monomial) -> SideLayout {
    let parts = split_monomial(m);
    let sign = if parts.negative { "-" } else { "" };
    match parts.denom {
        None => SideLayout {
            lines: vec![format!("{}{}", sign, parts.numer)],
            baseline: 0,
        },
        Some(denom) => {
            let width = parts.numer.len().max(denom.len()) + 2;
            SideLayout {
                lines: vec![
                    center(&parts.numer, width),
                    format!("{}{}", sign, "-".repeat(width)),
                    center(&denom, width),
                ],
                baseline: 1,
            }
        }
    }
}

fn polynomial_layout(p: &Polynomial) -> SideLayout {
    match p.terms.as_slice() {
        [term] => monomial_layout(term),
        _ => SideLayout {
            lines: vec![oneline_polynomial(p)],
            baseline: 0,
        },
    }
}

/// Two-dimensional layout of `lhs = rhs`
///
/// Fractions are stacked; the `=` sign sits on the fraction rule.
pub fn pretty_equation(lhs: &Monomial, rhs: &Polynomial) -> String {
    let left = monomial_layout(lhs);
    let right = polynomial_layout(rhs);

    let above = left.baseline.max(right.baseline);
    let below = (left.lines.len() - left.baseline).max(right.lines.len() - right.baseline);

    let left_width = left.lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut out_lines = Vec::new();
    for row in 0..(above + below) {
        let left_text = side_row(&left, row, above);
        let right_text = side_row(&right, row, above);
        let joiner = if row == above { " = " } else { "   " };
        let line = format!("{:<width$}{}{}", left_text, joiner, right_text, width = left_width);
        out_lines.push(line.trim_end().to_string());
    }
    out_lines.join("\n")
}

fn side_row(side: &SideLayout, row: usize, above: usize) -> &str {
    let offset = above - side.baseline;
    if row < offset {
        return "";
    }
    match side.lines.get(row - offset) {
        Some(line) => line,
        None => "",
    }
}
