//! Derivation trace and error report formatting
//!
//! Both branches of a derivation render to plain text: a multi-section
//! trace on success, an `ERROR:` report on failure. The shapes are stable;
//! callers that only pass strings through can tell the branches apart by
//! the leading token.

use crate::algebra::{law_line, pretty_equation};

use super::errors::DeriveError;
use super::normalize::Normalized;
use super::postulate::Postulate;

const RULE: &str = "------------------------------------";

const FOOTER: &str = "Note: 'k' represents a dimensionless constant (e.g., 1/2, 8*pi) from \
geometry or integration, which is not derived by this calculus.";

/// Format the full derivation trace
pub fn format_trace(postulate: &Postulate, eq: &Normalized, law: &str) -> String {
    let equation = indent(&pretty_equation(&eq.lhs, &eq.rhs), "   ");

    format!(
        "Deriving physical law from postulate: {input}\n\
         \n\
         1. Conceptual Postulate:\n   {target} ~ {expression}\n\
         \n\
         2. Formulating Dimensionless Equation (Normalizing by Planck Units):\n\
         {equation}\n\
         \n\
         3. Solving for {target} to project into chosen coordinate system...\n\
         \n\
         {rule}\n   RESULTING PHYSICAL LAW\n{rule}\n   {law}\n\
         \n\
         {footer}",
        input = postulate.input.trim(),
        target = postulate.target,
        expression = postulate.expression,
        equation = equation,
        rule = RULE,
        law = law,
        footer = FOOTER,
    )
}

/// Format the law line for a solved derivation
pub fn format_law(target: &str, law: &crate::algebra::Polynomial) -> String {
    law_line(target, law)
}

/// Format a failure as an error report
///
/// Always begins with `ERROR:` followed by a diagnostic trace block naming
/// the failing stage and error code.
pub fn format_error(input: &str, err: &DeriveError) -> String {
    format!(
        "ERROR: {message}\n\
         \n\
         Trace:\n\
         \x20\x20input: {input}\n\
         \x20\x20stage: {stage}\n\
         \x20\x20code: {code}\n\
         \n\
         Please check your postulate format (e.g., 'E ~ m').",
        message = err,
        input = input.trim(),
        stage = err.stage(),
        code = err.code(),
    )
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report_shape() {
        let report = format_error("E = m", &DeriveError::MissingSeparator);
        assert!(report.starts_with("ERROR:"));
        assert!(report.contains("'~'"));
        assert!(report.contains("stage: parse"));
        assert!(report.contains("code: FORMAT_ERROR"));
        assert!(report.contains("E ~ m"));
    }

    #[test]
    fn test_unknown_target_report_names_variable() {
        let report = format_error("Q ~ m", &DeriveError::UnknownTarget("Q".to_string()));
        assert!(report.starts_with("ERROR:"));
        assert!(report.contains("Q"));
        assert!(report.contains("code: UNKNOWN_TARGET"));
    }
}
