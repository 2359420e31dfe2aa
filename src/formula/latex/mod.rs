// LaTeX math parsing
//
// Turns the LaTeX source of an inline or display math span into a
// normalized `MathNode` tree. Parsing is total: any input yields a tree.

pub mod commands;
mod cursor;
mod matrix;
mod parser;

pub use matrix::MatrixEnvironment;
pub use parser::LatexParser;

use super::ast::MathNode;

/// Parse LaTeX math into a normalized tree whose root is a `Group`
///
/// # Example
/// ```ignore
/// use mathword::formula::parse_latex;
///
/// let root = parse_latex(r"x^2 + \alpha");
/// assert_eq!(root.plain_text(), "x2+α");
/// ```
pub fn parse(source: &str) -> MathNode<'_> {
    LatexParser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_always_a_group() {
        for source in ["", "x", r"\frac{a}{b}", "}}}", r"\left(", r"\begin{pmatrix"] {
            assert!(
                matches!(parse(source), MathNode::Group(_)),
                "root of {:?} should be a group",
                source
            );
        }
    }

    #[test]
    fn test_plain_text_of_mixed_input() {
        assert_eq!(parse(r"x^2 + \alpha").plain_text(), "x2+α");
    }
}
