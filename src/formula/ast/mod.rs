// Abstract Syntax Tree for Mathematical Formulas
//
// This module defines the typed expression tree produced by the LaTeX parser
// and consumed by the OMML serializer. Trees are built bottom-up, owned by
// their parent, and never mutated after normalization.

mod types;
mod node;
mod normalize;

pub use types::*;
pub use node::MathNode;
pub use normalize::{flatten_sequence, normalize_slot};

/// A parsed math span
///
/// Holds the normalized root sequence of one inline or display formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula<'a> {
    root: Vec<MathNode<'a>>,
    display_style: bool,
}

impl<'a> Formula<'a> {
    /// Create an empty inline formula
    pub fn new() -> Self {
        Self {
            root: Vec::new(),
            display_style: false,
        }
    }

    /// Create a formula from a root node with the given display style
    ///
    /// A `Group` root is unwrapped into the formula's root sequence.
    pub fn from_root(root: MathNode<'a>, display_style: bool) -> Self {
        let root = match root {
            MathNode::Group(children) => flatten_sequence(children),
            other => flatten_sequence(vec![other]),
        };
        Self {
            root,
            display_style,
        }
    }

    /// Get the root nodes
    #[inline]
    pub fn root(&self) -> &[MathNode<'a>] {
        &self.root
    }

    /// Whether the formula is displayed on its own line
    #[inline]
    pub fn display_style(&self) -> bool {
        self.display_style
    }

    /// Whether the formula has no content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Concatenated leaf text of the whole formula
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.root {
            node.write_plain_text(&mut out);
        }
        out
    }

    /// Detach the formula from the source it borrows from
    pub fn into_owned(self) -> Formula<'static> {
        Formula {
            root: self.root.into_iter().map(MathNode::into_owned).collect(),
            display_style: self.display_style,
        }
    }
}

impl Default for Formula<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_creation() {
        let formula = Formula::new();
        assert!(formula.root().is_empty());
        assert!(!formula.display_style());
    }

    #[test]
    fn test_from_root_unwraps_group() {
        let formula = Formula::from_root(
            MathNode::Group(vec![MathNode::run("a"), MathNode::Group(vec![MathNode::run("b")])]),
            true,
        );
        assert_eq!(formula.root().len(), 2);
        assert!(formula.display_style());
        assert_eq!(formula.plain_text(), "ab");
    }
}
