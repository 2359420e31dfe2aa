// Math node definitions

use super::types::{BracketKind, LargeOperator};
use std::borrow::Cow;

/// Math node representing a single element in the formula AST
///
/// Text leaves borrow from the LaTeX source (or from the static command
/// table) wherever possible; nodes own their children and never point back
/// at their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum MathNode<'a> {
    /// Literal run (identifiers, numbers, operators, mapped symbols)
    Run(Cow<'a, str>),

    /// Text that renders upright inside math (function names, `\text{}`)
    UprightText(Cow<'a, str>),

    /// Fraction: numerator / denominator
    Fraction {
        numerator: Vec<MathNode<'a>>,
        denominator: Vec<MathNode<'a>>,
    },

    /// Superscript (power)
    SuperScript {
        base: Box<MathNode<'a>>,
        superscript: Box<MathNode<'a>>,
    },

    /// Subscript
    SubScript {
        base: Box<MathNode<'a>>,
        subscript: Box<MathNode<'a>>,
    },

    /// Both subscript and superscript
    SubSuperScript {
        base: Box<MathNode<'a>>,
        subscript: Box<MathNode<'a>>,
        superscript: Box<MathNode<'a>>,
    },

    /// Square root or nth root
    Radical {
        content: Vec<MathNode<'a>>,
        degree: Option<Vec<MathNode<'a>>>,
    },

    /// Summation with optional limits
    Sum {
        children: Vec<MathNode<'a>>,
        subscript: Option<Vec<MathNode<'a>>>,
        superscript: Option<Vec<MathNode<'a>>>,
    },

    /// Integral with optional limits
    Integral {
        children: Vec<MathNode<'a>>,
        subscript: Option<Vec<MathNode<'a>>>,
        superscript: Option<Vec<MathNode<'a>>>,
    },

    /// Stretchy bracket pair around content
    Brackets {
        kind: BracketKind,
        children: Vec<MathNode<'a>>,
    },

    /// Matrix: `rows` x `cols` grid of cell sequences
    Matrix {
        rows: usize,
        cols: usize,
        cells: Vec<Vec<Vec<MathNode<'a>>>>,
    },

    /// Transparent wrapper, spliced into the enclosing sequence
    Group(Vec<MathNode<'a>>),
}

impl<'a> MathNode<'a> {
    /// Create a literal run
    #[inline]
    pub fn run(text: impl Into<Cow<'a, str>>) -> Self {
        MathNode::Run(text.into())
    }

    /// Create an upright text leaf
    #[inline]
    pub fn upright(text: impl Into<Cow<'a, str>>) -> Self {
        MathNode::UprightText(text.into())
    }

    /// Collapse a sequence into one node: a singleton is returned as-is,
    /// anything else is wrapped in a `Group`.
    pub fn from_sequence(mut nodes: Vec<MathNode<'a>>) -> Self {
        if nodes.len() == 1
            && let Some(only) = nodes.pop()
        {
            return only;
        }
        MathNode::Group(nodes)
    }

    /// The large operator this node represents, if any
    pub fn large_operator(&self) -> Option<LargeOperator> {
        match self {
            MathNode::Sum { .. } => Some(LargeOperator::Sum),
            MathNode::Integral { .. } => Some(LargeOperator::Integral),
            _ => None,
        }
    }

    /// Whether this node is a text leaf
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, MathNode::Run(_) | MathNode::UprightText(_))
    }

    /// Children of a transparent group, or an empty slice
    pub fn group_children(&self) -> &[MathNode<'a>] {
        match self {
            MathNode::Group(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of all leaves, depth-first in reading order
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    /// Append the leaf text of this node to `out`
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            MathNode::Run(text) | MathNode::UprightText(text) => out.push_str(text),
            MathNode::Fraction {
                numerator,
                denominator,
            } => {
                write_sequence(numerator, out);
                write_sequence(denominator, out);
            },
            MathNode::SuperScript { base, superscript } => {
                base.write_plain_text(out);
                superscript.write_plain_text(out);
            },
            MathNode::SubScript { base, subscript } => {
                base.write_plain_text(out);
                subscript.write_plain_text(out);
            },
            MathNode::SubSuperScript {
                base,
                subscript,
                superscript,
            } => {
                base.write_plain_text(out);
                subscript.write_plain_text(out);
                superscript.write_plain_text(out);
            },
            MathNode::Radical { content, degree } => {
                if let Some(degree) = degree {
                    write_sequence(degree, out);
                }
                write_sequence(content, out);
            },
            MathNode::Sum {
                children,
                subscript,
                superscript,
            }
            | MathNode::Integral {
                children,
                subscript,
                superscript,
            } => {
                if let Some(sub) = subscript {
                    write_sequence(sub, out);
                }
                if let Some(sup) = superscript {
                    write_sequence(sup, out);
                }
                write_sequence(children, out);
            },
            MathNode::Brackets { children, .. } | MathNode::Group(children) => {
                write_sequence(children, out)
            },
            MathNode::Matrix { cells, .. } => {
                for cell in cells.iter().flatten() {
                    write_sequence(cell, out);
                }
            },
        }
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + match self {
            MathNode::Run(_) | MathNode::UprightText(_) => 0,
            MathNode::Fraction {
                numerator,
                denominator,
            } => count_sequence(numerator) + count_sequence(denominator),
            MathNode::SuperScript { base, superscript } => {
                base.node_count() + superscript.node_count()
            },
            MathNode::SubScript { base, subscript } => base.node_count() + subscript.node_count(),
            MathNode::SubSuperScript {
                base,
                subscript,
                superscript,
            } => base.node_count() + subscript.node_count() + superscript.node_count(),
            MathNode::Radical { content, degree } => {
                count_sequence(content) + degree.as_deref().map_or(0, count_sequence)
            },
            MathNode::Sum {
                children,
                subscript,
                superscript,
            }
            | MathNode::Integral {
                children,
                subscript,
                superscript,
            } => {
                count_sequence(children)
                    + subscript.as_deref().map_or(0, count_sequence)
                    + superscript.as_deref().map_or(0, count_sequence)
            },
            MathNode::Brackets { children, .. } | MathNode::Group(children) => {
                count_sequence(children)
            },
            MathNode::Matrix { cells, .. } => cells.iter().flatten().map(|c| count_sequence(c)).sum(),
        }
    }

    /// Detach the tree from the source string it borrows from
    pub fn into_owned(self) -> MathNode<'static> {
        match self {
            MathNode::Run(text) => MathNode::Run(Cow::Owned(text.into_owned())),
            MathNode::UprightText(text) => MathNode::UprightText(Cow::Owned(text.into_owned())),
            MathNode::Fraction {
                numerator,
                denominator,
            } => MathNode::Fraction {
                numerator: owned_sequence(numerator),
                denominator: owned_sequence(denominator),
            },
            MathNode::SuperScript { base, superscript } => MathNode::SuperScript {
                base: Box::new(base.into_owned()),
                superscript: Box::new(superscript.into_owned()),
            },
            MathNode::SubScript { base, subscript } => MathNode::SubScript {
                base: Box::new(base.into_owned()),
                subscript: Box::new(subscript.into_owned()),
            },
            MathNode::SubSuperScript {
                base,
                subscript,
                superscript,
            } => MathNode::SubSuperScript {
                base: Box::new(base.into_owned()),
                subscript: Box::new(subscript.into_owned()),
                superscript: Box::new(superscript.into_owned()),
            },
            MathNode::Radical { content, degree } => MathNode::Radical {
                content: owned_sequence(content),
                degree: degree.map(owned_sequence),
            },
            MathNode::Sum {
                children,
                subscript,
                superscript,
            } => MathNode::Sum {
                children: owned_sequence(children),
                subscript: subscript.map(owned_sequence),
                superscript: superscript.map(owned_sequence),
            },
            MathNode::Integral {
                children,
                subscript,
                superscript,
            } => MathNode::Integral {
                children: owned_sequence(children),
                subscript: subscript.map(owned_sequence),
                superscript: superscript.map(owned_sequence),
            },
            MathNode::Brackets { kind, children } => MathNode::Brackets {
                kind,
                children: owned_sequence(children),
            },
            MathNode::Matrix { rows, cols, cells } => MathNode::Matrix {
                rows,
                cols,
                cells: cells
                    .into_iter()
                    .map(|row| row.into_iter().map(owned_sequence).collect())
                    .collect(),
            },
            MathNode::Group(children) => MathNode::Group(owned_sequence(children)),
        }
    }
}

fn write_sequence(nodes: &[MathNode<'_>], out: &mut String) {
    for node in nodes {
        node.write_plain_text(out);
    }
}

fn count_sequence(nodes: &[MathNode<'_>]) -> usize {
    nodes.iter().map(MathNode::node_count).sum()
}

fn owned_sequence(nodes: Vec<MathNode<'_>>) -> Vec<MathNode<'static>> {
    nodes.into_iter().map(MathNode::into_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sequence_unwraps_singleton() {
        let node = MathNode::from_sequence(vec![MathNode::run("x")]);
        assert_eq!(node, MathNode::run("x"));

        let node = MathNode::from_sequence(vec![MathNode::run("x"), MathNode::run("y")]);
        assert_eq!(node.group_children().len(), 2);

        let node = MathNode::from_sequence(Vec::new());
        assert_eq!(node, MathNode::Group(Vec::new()));
    }

    #[test]
    fn test_plain_text_reads_leaves_in_order() {
        let node = MathNode::Fraction {
            numerator: vec![MathNode::run("a")],
            denominator: vec![MathNode::SuperScript {
                base: Box::new(MathNode::run("b")),
                superscript: Box::new(MathNode::upright("2")),
            }],
        };
        assert_eq!(node.plain_text(), "ab2");
        assert_eq!(node.node_count(), 5);
    }

    #[test]
    fn test_into_owned_preserves_structure() {
        let owned: MathNode<'static> = {
            let source = String::from("abc");
            let node = MathNode::Brackets {
                kind: BracketKind::Round,
                children: vec![MathNode::run(&source[..2])],
            };
            node.into_owned()
        };
        assert_eq!(owned.plain_text(), "ab");
        assert_eq!(owned.large_operator(), None);
    }
}
