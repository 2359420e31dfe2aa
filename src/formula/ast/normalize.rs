// Post-construction normalization
//
// The parser is free to leave transparent `Group` wrappers anywhere in the
// tree. This pass rewrites the tree so that groups never appear inside a
// child sequence: their children are spliced into the parent sequence, and
// groups occupying a single-node slot (a script base or script) collapse to
// their only child when they have exactly one.

use super::node::MathNode;

/// Splice every `Group` in `nodes` into the sequence, recursively
pub fn flatten_sequence(nodes: Vec<MathNode<'_>>) -> Vec<MathNode<'_>> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        splice_into(&mut out, node);
    }
    out
}

/// Normalize a node that occupies a single-node slot
pub fn normalize_slot(node: MathNode<'_>) -> MathNode<'_> {
    match node {
        MathNode::Group(children) => MathNode::from_sequence(flatten_sequence(children)),
        other => normalize_children(other),
    }
}

fn splice_into<'a>(out: &mut Vec<MathNode<'a>>, node: MathNode<'a>) {
    match node {
        MathNode::Group(children) => {
            for child in children {
                splice_into(out, child);
            }
        },
        other => out.push(normalize_children(other)),
    }
}

fn normalize_optional(nodes: Option<Vec<MathNode<'_>>>) -> Option<Vec<MathNode<'_>>> {
    nodes.map(flatten_sequence)
}

fn normalize_box<'a>(node: Box<MathNode<'a>>) -> Box<MathNode<'a>> {
    Box::new(normalize_slot(*node))
}

fn normalize_children(node: MathNode<'_>) -> MathNode<'_> {
    match node {
        MathNode::Run(_) | MathNode::UprightText(_) => node,
        MathNode::Fraction {
            numerator,
            denominator,
        } => MathNode::Fraction {
            numerator: flatten_sequence(numerator),
            denominator: flatten_sequence(denominator),
        },
        MathNode::SuperScript { base, superscript } => MathNode::SuperScript {
            base: normalize_box(base),
            superscript: normalize_box(superscript),
        },
        MathNode::SubScript { base, subscript } => MathNode::SubScript {
            base: normalize_box(base),
            subscript: normalize_box(subscript),
        },
        MathNode::SubSuperScript {
            base,
            subscript,
            superscript,
        } => MathNode::SubSuperScript {
            base: normalize_box(base),
            subscript: normalize_box(subscript),
            superscript: normalize_box(superscript),
        },
        MathNode::Radical { content, degree } => MathNode::Radical {
            content: flatten_sequence(content),
            degree: normalize_optional(degree),
        },
        MathNode::Sum {
            children,
            subscript,
            superscript,
        } => MathNode::Sum {
            children: flatten_sequence(children),
            subscript: normalize_optional(subscript),
            superscript: normalize_optional(superscript),
        },
        MathNode::Integral {
            children,
            subscript,
            superscript,
        } => MathNode::Integral {
            children: flatten_sequence(children),
            subscript: normalize_optional(subscript),
            superscript: normalize_optional(superscript),
        },
        MathNode::Brackets { kind, children } => MathNode::Brackets {
            kind,
            children: flatten_sequence(children),
        },
        MathNode::Matrix { rows, cols, cells } => MathNode::Matrix {
            rows,
            cols,
            cells: cells
                .into_iter()
                .map(|row| row.into_iter().map(flatten_sequence).collect())
                .collect(),
        },
        // Only reachable through `normalize_slot`, which handles groups itself
        MathNode::Group(children) => MathNode::Group(flatten_sequence(children)),
    }
}
