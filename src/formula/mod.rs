// Formula Module - Mathematical Formula Parsing and Serialization
//
// This module turns LaTeX math source into a typed expression tree and
// serializes that tree into OMML (Office Math Markup Language):
//
// - **LaTeX**: lenient recursive-descent parser, never fails on content
// - **OMML**: XML-based format used in modern Office files
//
// # Example
//
// ```ignore
// use mathword::formula::{Formula, parse_latex, to_omml};
//
// let root = parse_latex(r"\frac{a}{b}");
// let formula = Formula::from_root(root, false);
// let xml = mathword::formula::formula_to_omml(&formula)?;
// ```

/// Abstract Syntax Tree for Mathematical Formulas
///
/// Typed math nodes, bracket and large-operator kinds, and the group
/// flattening pass applied after parsing.
pub mod ast;
/// LaTeX Parser
///
/// Cursor-based recursive-descent parser with a static command table and a
/// matrix builder for `matrix`-family environments.
pub mod latex;
/// OMML (Office Math Markup Language) Writer
#[cfg(feature = "omml")]
pub mod omml;

// Re-export public API
pub use ast::{BracketKind, Formula, LargeOperator, MathNode};
pub use latex::{LatexParser, parse as parse_latex};
#[cfg(feature = "omml")]
pub use omml::{formula_to_omml, to_omml};

/// Parse a math span into a formula
///
/// `display_style` marks block math, which is laid out on its own line.
pub fn parse_formula(source: &str, display_style: bool) -> Formula<'_> {
    Formula::from_root(latex::parse(source), display_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formula() {
        let formula = parse_formula(r"x^2", true);
        assert_eq!(formula.root().len(), 1);
        assert!(formula.display_style());
        assert_eq!(formula.plain_text(), "x2");
    }

    #[test]
    fn test_empty_formula() {
        assert!(parse_formula("  ", false).is_empty());
    }
}
