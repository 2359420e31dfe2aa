// Matrix environment handling
//
// Builds a rectangular `Matrix` node from the body of a `\begin{..}`
// environment. Rows are separated by `\\` and cells by `&`; every cell is
// parsed as an independent math expression.

use super::parser::LatexParser;
use crate::formula::ast::{BracketKind, MathNode};
use smallvec::SmallVec;

/// Supported matrix environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixEnvironment {
    /// `matrix`: no surrounding brackets
    Plain,
    /// `pmatrix`: parentheses
    Paren,
    /// `bmatrix`: square brackets
    Bracket,
    /// `Bmatrix`: curly braces
    Brace,
}

impl MatrixEnvironment {
    /// Look up an environment by its LaTeX name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "matrix" => Some(Self::Plain),
            "pmatrix" => Some(Self::Paren),
            "bmatrix" => Some(Self::Bracket),
            "Bmatrix" => Some(Self::Brace),
            _ => None,
        }
    }

    /// Bracket drawn around the matrix, if any
    #[inline]
    pub fn bracket_kind(self) -> Option<BracketKind> {
        match self {
            Self::Plain => None,
            Self::Paren => Some(BracketKind::Round),
            Self::Bracket => Some(BracketKind::Square),
            Self::Brace => Some(BracketKind::Curly),
        }
    }

    /// Wrap environment content in this environment's brackets
    pub fn wrap(self, children: Vec<MathNode<'_>>) -> MathNode<'_> {
        match self.bracket_kind() {
            Some(kind) => MathNode::Brackets { kind, children },
            None => MathNode::from_sequence(children),
        }
    }
}

/// Build a matrix from an environment body
///
/// Blank rows are dropped and short rows are padded with empty runs, so the
/// result always has exactly `rows` rows of `cols` cells.
pub fn build(body: &str) -> MathNode<'_> {
    let rows: SmallVec<[&str; 8]> = body
        .split("\\\\")
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();

    let mut cells: Vec<Vec<Vec<MathNode<'_>>>> = rows
        .iter()
        .map(|row| row.split('&').map(parse_cell).collect())
        .collect();

    let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut cells {
        row.resize_with(cols, || vec![MathNode::run("")]);
    }

    tracing::trace!(rows = cells.len(), cols, "built matrix");
    MathNode::Matrix {
        rows: cells.len(),
        cols,
        cells,
    }
}

fn parse_cell(source: &str) -> Vec<MathNode<'_>> {
    let children = match LatexParser::new(source).parse() {
        MathNode::Group(children) => children,
        other => vec![other],
    };
    if children.is_empty() {
        vec![MathNode::run("")]
    } else {
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimensions(node: &MathNode<'_>) -> (usize, usize) {
        match node {
            MathNode::Matrix { rows, cols, cells } => {
                assert_eq!(cells.len(), *rows);
                assert!(cells.iter().all(|row| row.len() == *cols));
                (*rows, *cols)
            },
            other => panic!("Expected matrix, got {:?}", other),
        }
    }

    #[test]
    fn test_environment_names() {
        assert_eq!(MatrixEnvironment::from_name("pmatrix"), Some(MatrixEnvironment::Paren));
        assert_eq!(MatrixEnvironment::from_name("vmatrix"), None);
        assert_eq!(MatrixEnvironment::Plain.bracket_kind(), None);
        assert_eq!(
            MatrixEnvironment::Brace.bracket_kind(),
            Some(BracketKind::Curly)
        );
    }

    #[test]
    fn test_square_matrix() {
        let node = build(r"1 & 2 \\ 3 & 4");
        assert_eq!(dimensions(&node), (2, 2));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let node = build(r"a & b & c \\ d");
        assert_eq!(dimensions(&node), (2, 3));
        if let MathNode::Matrix { cells, .. } = &node {
            assert_eq!(cells[1][2], vec![MathNode::run("")]);
            assert_eq!(cells[1][0], vec![MathNode::run("d")]);
        }
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let node = build(r"x \\ \\ y \\");
        assert_eq!(dimensions(&node), (2, 1));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(dimensions(&build("  ")), (0, 0));
    }

    #[test]
    fn test_cells_hold_structure() {
        let node = build(r"\frac{1}{2} & x^2");
        if let MathNode::Matrix { cells, .. } = &node {
            assert!(matches!(cells[0][0][0], MathNode::Fraction { .. }));
            assert!(matches!(cells[0][1][0], MathNode::SuperScript { .. }));
        }
    }

    #[test]
    fn test_plain_environment_is_unwrapped() {
        let node = MatrixEnvironment::Plain.wrap(vec![build("a")]);
        assert_eq!(dimensions(&node), (1, 1));
    }
}
