//! Input syntax tree.
//!
//! The walker consumes an already-parsed Markdown tree in the mdast shape:
//! every node carries a `type` tag, and depending on the kind a heading
//! `depth`, a literal `value` and/or `children`.
use crate::common::Result;
use serde::Deserialize;

/// A node of the rich-text syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    /// Document root
    Root { children: Vec<Node> },
    Heading { depth: u8, children: Vec<Node> },
    Paragraph { children: Vec<Node> },
    Strong { children: Vec<Node> },
    Emphasis { children: Vec<Node> },
    Text { value: String },
    /// `$...$` math inside a paragraph
    InlineMath { value: String },
    /// `$$...$$` math on its own line
    Math { value: String },
    /// Raw HTML
    Html { value: String },
    /// Any node kind the walker has no dedicated handling for
    Other {
        kind: String,
        value: Option<String>,
        children: Vec<Node>,
    },
}

/// Wire representation of a node before its kind is resolved.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    depth: Option<u8>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    children: Vec<Node>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let RawNode {
            kind,
            depth,
            value,
            children,
        } = raw;
        match kind.as_str() {
            "root" => Node::Root { children },
            "heading" => Node::Heading {
                depth: depth.unwrap_or(1),
                children,
            },
            "paragraph" => Node::Paragraph { children },
            "strong" => Node::Strong { children },
            "emphasis" => Node::Emphasis { children },
            "text" => Node::Text {
                value: value.unwrap_or_default(),
            },
            "inlineMath" => Node::InlineMath {
                value: value.unwrap_or_default(),
            },
            "math" => Node::Math {
                value: value.unwrap_or_default(),
            },
            "html" => Node::Html {
                value: value.unwrap_or_default(),
            },
            _ => Node::Other {
                kind,
                value,
                children,
            },
        }
    }
}

impl Node {
    /// Decode a tree from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    /// Build a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// The mdast type tag of this node.
    pub fn kind(&self) -> &str {
        match self {
            Node::Root { .. } => "root",
            Node::Heading { .. } => "heading",
            Node::Paragraph { .. } => "paragraph",
            Node::Strong { .. } => "strong",
            Node::Emphasis { .. } => "emphasis",
            Node::Text { .. } => "text",
            Node::InlineMath { .. } => "inlineMath",
            Node::Math { .. } => "math",
            Node::Html { .. } => "html",
            Node::Other { kind, .. } => kind,
        }
    }

    /// Literal value carried by leaf kinds.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text { value }
            | Node::InlineMath { value }
            | Node::Math { value }
            | Node::Html { value } => Some(value),
            Node::Other { value, .. } => value.as_deref(),
            _ => None,
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::Strong { children }
            | Node::Emphasis { children }
            | Node::Other { children, .. } => children,
            _ => &[],
        }
    }

    /// Best-effort plain text: the node's own value if it has one,
    /// otherwise its descendants' text concatenated depth-first.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text_content(&mut out);
        out
    }

    fn write_text_content(&self, out: &mut String) {
        match self.value() {
            Some(value) => out.push_str(value),
            None => {
                for child in self.children() {
                    child.write_text_content(out);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_kinds() {
        let json = r#"{
            "type": "root",
            "children": [
                {"type": "heading", "depth": 2, "children": [{"type": "text", "value": "Title"}]},
                {"type": "paragraph", "children": [
                    {"type": "strong", "children": [{"type": "text", "value": "bold"}]},
                    {"type": "inlineMath", "value": "a+b"}
                ]},
                {"type": "math", "value": "x^2", "position": {"start": {"line": 3}}}
            ]
        }"#;
        let tree = Node::from_json(json).unwrap();
        let children = tree.children();
        assert_eq!(children.len(), 3);
        assert!(matches!(children[0], Node::Heading { depth: 2, .. }));
        assert_eq!(children[1].children()[1], Node::InlineMath { value: "a+b".to_string() });
        assert_eq!(children[2].value(), Some("x^2"));
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let tree = Node::from_json(
            r#"{"type": "list", "children": [{"type": "listItem", "children": [{"type": "text", "value": "item"}]}]}"#,
        )
        .unwrap();
        assert_eq!(tree.kind(), "list");
        assert_eq!(tree.text_content(), "item");
        assert!(matches!(tree, Node::Other { .. }));
    }

    #[test]
    fn test_text_content_prefers_own_value() {
        let node = Node::Other {
            kind: "code".to_string(),
            value: Some("let x = 1;".to_string()),
            children: vec![Node::text("ignored")],
        };
        assert_eq!(node.text_content(), "let x = 1;");
    }

    #[test]
    fn test_invalid_json() {
        assert!(Node::from_json("{").is_err());
        assert!(Node::from_json(r#"{"children": []}"#).is_err());
    }
}
